// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluation and the ordered hand value encoding.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use showdown_cards::Card;

use super::tables::*;

/// Errors returned by hand evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A card count outside the supported range.
    #[error("cannot evaluate {0} cards, the supported range is 1 to 7")]
    CardCount(usize),
}

/// The nine hand categories in increasing strength order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// Only a high card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// Base value of this category; any combination of card slots fits in
    /// the headroom below the next category.
    fn base(self) -> u32 {
        (self as u32) << HAND_RANK_SHIFT
    }

    fn from_bits(bits: u32) -> HandRank {
        match bits {
            0 => HandRank::HighCard,
            1 => HandRank::OnePair,
            2 => HandRank::TwoPair,
            3 => HandRank::ThreeOfAKind,
            4 => HandRank::Straight,
            5 => HandRank::Flush,
            6 => HandRank::FullHouse,
            7 => HandRank::FourOfAKind,
            8 => HandRank::StraightFlush,
            _ => unreachable!("invalid hand rank {bits}"),
        }
    }
}

/// An ordered poker hand value.
///
/// Higher values win and equal values are exact ties: the encoding packs
/// the hand category above five 4-bit card slots, so any hand of a stronger
/// category outranks any hand of a weaker one, and hands of the same
/// category compare by top card down to fifth card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue(u32);

impl HandValue {
    /// Evaluates a card set given as a 52-bit mask and its card count.
    ///
    /// The mask must be the OR of `count` distinct card masks; a mask with
    /// duplicate cards collapsed into it produces a value with no defined
    /// meaning, see [Hand::is_valid](showdown_cards::Hand::is_valid).
    pub fn eval(mask: u64, count: usize) -> Result<HandValue, EvalError> {
        if !(1..=7).contains(&count) {
            return Err(EvalError::CardCount(count));
        }

        Ok(HandValue(eval_mask(mask, count as u32)))
    }

    /// Evaluates a slice of distinct cards.
    pub fn eval_cards(cards: &[Card]) -> Result<HandValue, EvalError> {
        let mask = cards.iter().fold(0u64, |mask, c| mask | c.mask());
        HandValue::eval(mask, cards.len())
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        HandRank::from_bits(self.0 >> HAND_RANK_SHIFT)
    }

    /// The raw encoded value.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Rank held in the card slot at the given shift.
    pub(crate) fn card(&self, shift: u32) -> u32 {
        (self.0 >> shift) & CARD_MASK
    }
}

/// Classifies a card mask into a hand value in constant time.
fn eval_mask(mask: u64, count: u32) -> u32 {
    let tables = &*TABLES;

    let clubs = ((mask >> CLUBS_OFFSET) & SUIT_MASK) as u32;
    let diamonds = ((mask >> DIAMONDS_OFFSET) & SUIT_MASK) as u32;
    let hearts = ((mask >> HEARTS_OFFSET) & SUIT_MASK) as u32;
    let spades = ((mask >> SPADES_OFFSET) & SUIT_MASK) as u32;

    // The distinct ranks regardless of suit.
    let ranks = clubs | diamonds | hearts | spades;
    let number_of_ranks = tables.n_bits(ranks);

    // Cards beyond one per rank; wrapping keeps a count that lies about the
    // mask from panicking, such input gets a meaningless value.
    let number_of_duplicates = count.wrapping_sub(number_of_ranks);

    let mut hand_value = 0;

    // A straight or flush needs five distinct ranks. At most one suit can
    // hold five of seven cards, probed in a fixed priority order.
    if number_of_ranks >= 5 {
        let suited = [spades, clubs, diamonds, hearts]
            .into_iter()
            .find(|&s| tables.n_bits(s) >= 5);

        if let Some(suited) = suited {
            let top = tables.straight(suited);
            if top != 0 {
                // Nothing outranks a straight flush.
                return HandRank::StraightFlush.base() + (top << TOP_CARD_SHIFT);
            }

            hand_value = HandRank::Flush.base() + tables.top_five(suited);
        } else {
            let top = tables.straight(ranks);
            if top != 0 {
                hand_value = HandRank::Straight.base() + (top << TOP_CARD_SHIFT);
            }
        }

        // With fewer than three duplicates neither quads nor a full house
        // can form, a made straight or flush stands.
        if hand_value != 0 && number_of_duplicates < 3 {
            return hand_value;
        }
    }

    match number_of_duplicates {
        0 => HandRank::HighCard.base() + tables.top_five(ranks),
        1 => {
            // The one paired rank is the one held in exactly two suits: it
            // survives the four way XOR an even number of times.
            let two_mask = ranks ^ (clubs ^ diamonds ^ hearts ^ spades);
            let pair = tables.top_card(two_mask);

            // The top three of the unpaired ranks, shifted down one slot
            // below the pair with the leftover fourth rank masked off.
            let kickers = (tables.top_five(ranks ^ two_mask) >> CARD_WIDTH) & !FIFTH_CARD_MASK;

            HandRank::OnePair.base() + (pair << TOP_CARD_SHIFT) + kickers
        }
        2 => {
            // Two ranks in two suits each, or one rank in three suits.
            let two_mask = ranks ^ (clubs ^ diamonds ^ hearts ^ spades);

            if two_mask != 0 {
                // The two pair ranks land in the top slots, the best of the
                // unpaired ranks is the kicker.
                let kicker = tables.top_card(ranks ^ two_mask);

                HandRank::TwoPair.base()
                    + (tables.top_five(two_mask) & (TOP_CARD_MASK | SECOND_CARD_MASK))
                    + (kicker << THIRD_CARD_SHIFT)
            } else {
                // Ranks held in at least three suits.
                let three_mask =
                    ((clubs & diamonds) | (hearts & spades)) & ((clubs & hearts) | (diamonds & spades));
                let trips = tables.top_card(three_mask);

                let mut singles = ranks ^ three_mask;
                let second = tables.top_card(singles);
                singles ^= 1 << second;
                let third = tables.top_card(singles);

                HandRank::ThreeOfAKind.base()
                    + (trips << TOP_CARD_SHIFT)
                    + (second << SECOND_CARD_SHIFT)
                    + (third << THIRD_CARD_SHIFT)
            }
        }
        _ => {
            // Ranks held in all four suits.
            let four_mask = clubs & diamonds & hearts & spades;
            if four_mask != 0 {
                let quads = tables.top_card(four_mask);
                let kicker = tables.top_card(ranks ^ (1 << quads));

                return HandRank::FourOfAKind.base()
                    + (quads << TOP_CARD_SHIFT)
                    + (kicker << SECOND_CARD_SHIFT);
            }

            // With quads excluded the XOR formula isolates the pair ranks;
            // fewer pair ranks than duplicate cards means some rank is held
            // in three suits, a full house.
            let two_mask = ranks ^ (clubs ^ diamonds ^ hearts ^ spades);
            if tables.n_bits(two_mask) != number_of_duplicates {
                let three_mask =
                    ((clubs & diamonds) | (hearts & spades)) & ((clubs & hearts) | (diamonds & spades));
                let trips = tables.top_card(three_mask);
                let pair = tables.top_card((two_mask | three_mask) ^ (1 << trips));

                return HandRank::FullHouse.base()
                    + (trips << TOP_CARD_SHIFT)
                    + (pair << SECOND_CARD_SHIFT);
            }

            // A made straight or flush recorded above still stands.
            if hand_value != 0 {
                return hand_value;
            }

            // Three pairs: the top two pair ranks play, the best rank
            // outside them is the kicker.
            let top = tables.top_card(two_mask);
            let second = tables.top_card(two_mask ^ (1 << top));
            let kicker = tables.top_card(ranks ^ (1 << top) ^ (1 << second));

            HandRank::TwoPair.base()
                + (top << TOP_CARD_SHIFT)
                + (second << SECOND_CARD_SHIFT)
                + (kicker << THIRD_CARD_SHIFT)
        }
    }
}
