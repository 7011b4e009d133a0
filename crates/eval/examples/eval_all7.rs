// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all7
// ...
// Total hands      133784560
// Elapsed:         2.871s
// Hands/sec:       46598593
//
// High Card:       23294460
// One  Pair:       58627800
// Two Pairs:       31433400
// Three of a Kind: 6461620
// Straight:        6180020
// Flush:           4047644
// Full House:      3473184
// Four of a Kind:  224848
// Straight Flush:  41584
// ```

use std::time::Instant;

use showdown_eval::{Card, HandRank, HandValue};

#[rustfmt::skip]
fn main() {
    // Evaluate all 133M hands.
    let now = Instant::now();
    let mut counts = [0usize; 9];

    let n = Card::DECK_SIZE as u64;
    for c1 in 0..n {
        let m1 = 1u64 << c1;
        for c2 in (c1 + 1)..n {
            let m2 = m1 | 1 << c2;
            for c3 in (c2 + 1)..n {
                let m3 = m2 | 1 << c3;
                for c4 in (c3 + 1)..n {
                    let m4 = m3 | 1 << c4;
                    for c5 in (c4 + 1)..n {
                        let m5 = m4 | 1 << c5;
                        for c6 in (c5 + 1)..n {
                            let m6 = m5 | 1 << c6;
                            for c7 in (c6 + 1)..n {
                                let rank = HandValue::eval(m6 | 1 << c7, 7).unwrap().rank();
                                counts[rank as usize] += 1;
                            }
                        }
                    }
                }
            }
        }
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("High Card:       {}", counts[HandRank::HighCard as usize]);
    println!("One  Pair:       {}", counts[HandRank::OnePair as usize]);
    println!("Two Pairs:       {}", counts[HandRank::TwoPair as usize]);
    println!("Three of a Kind: {}", counts[HandRank::ThreeOfAKind as usize]);
    println!("Straight:        {}", counts[HandRank::Straight as usize]);
    println!("Flush:           {}", counts[HandRank::Flush as usize]);
    println!("Full House:      {}", counts[HandRank::FullHouse as usize]);
    println!("Four of a Kind:  {}", counts[HandRank::FourOfAKind as usize]);
    println!("Straight Flush:  {}", counts[HandRank::StraightFlush as usize]);
}
