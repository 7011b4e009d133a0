// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate defines the card model consumed by the hand evaluator: a
//! [Card] identified by its ordinal in the deck with a 52-bit singleton
//! mask, and the [Flop] and [Hand] containers that combine card masks and
//! check them for duplicates:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert_eq!(ah.mask().count_ones(), 1);
//! assert_ne!(ah.mask(), kd.mask());
//! ```
//!
//! Cards parse from and print to two character strings:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let card = "KD".parse::<Card>().unwrap();
//! assert_eq!(card, Card::new(Rank::King, Suit::Diamonds));
//! assert_eq!(card.to_string(), "KD");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, CardError, Rank, Suit};

mod board;
pub use board::{Flop, Hand};
