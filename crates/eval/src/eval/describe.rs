// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand descriptions.
use super::eval::{EvalError, HandRank, HandValue};
use super::tables::*;

/// English names of the card ranks.
const RANK_NAMES: [&str; 13] = [
    "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack", "Queen",
    "King", "Ace",
];

/// Describes the hand held in a 52-bit card mask.
///
/// The card count is the mask population, a mask with fewer than one or
/// more than seven cards fails like [HandValue::eval]:
///
/// ```
/// # use showdown_eval::*;
/// let cards = ["KS", "KD", "7C", "7H", "2S"].map(|s| s.parse::<Card>().unwrap());
/// let mask = cards.iter().fold(0, |m, c| m | c.mask());
///
/// let text = describe(mask).unwrap();
/// assert_eq!(text, "Two pair, King's and Seven's with a Two for a kicker");
/// ```
pub fn describe(mask: u64) -> Result<String, EvalError> {
    let value = HandValue::eval(mask, mask.count_ones() as usize)?;
    let name = |shift| RANK_NAMES[value.card(shift) as usize];

    let text = match value.rank() {
        HandRank::HighCard => format!("High card: {}", name(TOP_CARD_SHIFT)),
        HandRank::OnePair => format!("One pair, {}", name(TOP_CARD_SHIFT)),
        HandRank::TwoPair => format!(
            "Two pair, {}'s and {}'s with a {} for a kicker",
            name(TOP_CARD_SHIFT),
            name(SECOND_CARD_SHIFT),
            name(THIRD_CARD_SHIFT),
        ),
        HandRank::ThreeOfAKind => format!("Three of a kind, {}'s", name(TOP_CARD_SHIFT)),
        HandRank::Straight => format!("A straight, {} high", name(TOP_CARD_SHIFT)),
        HandRank::Flush => format!(
            "Flush ({}) with {} high",
            flush_suit(mask),
            name(TOP_CARD_SHIFT)
        ),
        HandRank::FullHouse => format!(
            "A fullhouse, {}'s and {}'s",
            name(TOP_CARD_SHIFT),
            name(SECOND_CARD_SHIFT),
        ),
        HandRank::FourOfAKind => format!("Four of a kind, {}'s", name(TOP_CARD_SHIFT)),
        HandRank::StraightFlush => format!(
            "Straight Flush ({}) with {} high",
            flush_suit(mask),
            name(TOP_CARD_SHIFT)
        ),
    };

    Ok(text)
}

/// Name of the suit holding the flush, probed in the evaluator's order.
fn flush_suit(mask: u64) -> &'static str {
    let suits = [
        (SPADES_OFFSET, "Spades"),
        (CLUBS_OFFSET, "Clubs"),
        (DIAMONDS_OFFSET, "Diamonds"),
        (HEARTS_OFFSET, "Hearts"),
    ];

    for (offset, name) in suits {
        let suited = ((mask >> offset) & SUIT_MASK) as u32;
        if TABLES.n_bits(suited) >= 5 {
            return name;
        }
    }

    unreachable!("flush hand without a five card suit");
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_cards::Card;

    fn describe_cards(cards: &[&str]) -> String {
        let mask = cards
            .iter()
            .map(|s| s.parse::<Card>().unwrap().mask())
            .fold(0, |m, c| m | c);
        describe(mask).unwrap()
    }

    #[test]
    fn all_categories() {
        let fixtures = [
            (
                vec!["AS", "KD", "QC", "9H", "7S"],
                "High card: Ace",
            ),
            (
                vec!["2S", "2D", "KC", "QH", "9S"],
                "One pair, Two",
            ),
            (
                vec!["KS", "KD", "7C", "7H", "2S"],
                "Two pair, King's and Seven's with a Two for a kicker",
            ),
            (
                vec!["KS", "KD", "KC", "9H", "7S"],
                "Three of a kind, King's",
            ),
            (
                vec!["9S", "8D", "7C", "6H", "5S"],
                "A straight, Nine high",
            ),
            (
                vec!["AS", "KS", "9S", "7S", "5S"],
                "Flush (Spades) with Ace high",
            ),
            (
                vec!["KS", "KD", "KC", "7H", "7S"],
                "A fullhouse, King's and Seven's",
            ),
            (
                vec!["KS", "KD", "KC", "KH", "7S"],
                "Four of a kind, King's",
            ),
            (
                vec!["9S", "8S", "7S", "6S", "5S"],
                "Straight Flush (Spades) with Nine high",
            ),
        ];

        for (cards, expected) in fixtures {
            assert_eq!(describe_cards(&cards), expected, "{cards:?}");
        }
    }

    #[test]
    fn wheel_descriptions() {
        assert_eq!(
            describe_cards(&["5H", "4H", "3H", "2H", "AH"]),
            "Straight Flush (Hearts) with Five high"
        );

        assert_eq!(
            describe_cards(&["5H", "4S", "3H", "2H", "AH"]),
            "A straight, Five high"
        );
    }

    #[test]
    fn seven_cards_descriptions() {
        // The pair on board does not demote the flush.
        assert_eq!(
            describe_cards(&["AD", "KD", "9D", "7D", "5D", "KC", "KH"]),
            "Flush (Diamonds) with Ace high"
        );

        assert_eq!(
            describe_cards(&["AS", "AD", "AC", "9H", "9S", "3D", "2C"]),
            "A fullhouse, Ace's and Nine's"
        );
    }

    #[test]
    fn card_count_range() {
        assert_eq!(describe(0), Err(EvalError::CardCount(0)));
        assert_eq!(describe(0xff), Err(EvalError::CardCount(8)));
    }
}
