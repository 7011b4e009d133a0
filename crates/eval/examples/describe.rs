// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Describes a hand given as card strings:
//
// ```bash
// $ cargo r --example describe -- KS KD 7C 7H 2S
// cards: KS KD 7C 7H 2S
// value: 0x020b5000 TwoPair
// Two pair, King's and Seven's with a Two for a kicker
// ```
use anyhow::{Result, bail};
use clap::Parser;

use showdown_eval::{Card, HandValue, describe};

#[derive(Debug, Parser)]
struct Cli {
    /// The hand cards, one to seven strings like KS, td, 9h.
    #[clap(required = true, num_args = 1..=7)]
    cards: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut mask = 0u64;
    for card in &cli.cards {
        mask |= card.parse::<Card>()?.mask();
    }

    if mask.count_ones() as usize != cli.cards.len() {
        bail!("hand has duplicate cards");
    }

    let value = HandValue::eval(mask, cli.cards.len())?;
    println!("cards: {}", cli.cards.join(" ").to_uppercase());
    println!("value: {:#010x} {:?}", value.value(), value.rank());
    println!("{}", describe(mask)?);

    Ok(())
}
