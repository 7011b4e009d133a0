// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Ranks hands of 1 to 7 cards with a single table driven pass over the
//! 52-bit card mask: the mask is split into four 13-bit suit slices, a few
//! precomputed rank mask tables classify the hand into one of nine
//! categories, and the result is packed into an ordered [HandValue]. No
//! sorting and no five card search.
//!
//! ```
//! # use showdown_eval::*;
//! let pair = ["AS", "AH", "7C", "8D", "2C"].map(|s| s.parse::<Card>().unwrap());
//! let trips = ["KS", "KH", "KC", "8D", "2C"].map(|s| s.parse::<Card>().unwrap());
//!
//! let v1 = HandValue::eval_cards(&pair).unwrap();
//! let v2 = HandValue::eval_cards(&trips).unwrap();
//! assert!(v2 > v1);
//! assert_eq!(v2.rank(), HandRank::ThreeOfAKind);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HandRank, HandValue, describe};

// Reexport cards types.
pub use showdown_cards::{Card, CardError, Flop, Hand, Rank, Suit};
