//! CLI blackjack demo.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use ventuno::{ActionError, Card, MemoryStore, Phase, RoundView, Table, TableConfig};

fn main() {
    println!("Blackjack CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let config = TableConfig::default();
    let mut table = Table::new(config, MemoryStore::default(), seed);

    loop {
        let balance = table.balance();
        if balance == 0 {
            println!("You are out of money.");
            if prompt_line("Reset balance? (y/n): ") == "y" {
                table.reset_balance();
                continue;
            }
            break;
        }

        let Some(bet) = prompt_u64(&format!("Bet amount (1-{balance}, 0 to quit): ")) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = table.deal(bet) {
            println!("Deal error: {err}");
            continue;
        }

        while table.phase() == Phase::PlayerActing {
            if let Some(view) = table.view() {
                print_table(&view);
            }

            println!("{}", format_actions(&table));
            let result = match prompt_line("Action: ").as_str() {
                "h" | "hit" => table.hit().map(|_| ()),
                "s" | "stand" => table.stand(),
                "d" | "double" => table.double().map(|_| ()),
                "p" | "split" => table.split(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
                if matches!(err, ActionError::Source(_)) {
                    // Fatal: the round is dead, stakes are refunded.
                    println!("Round aborted.");
                    break;
                }
            }
        }

        if let Some(view) = table.view() {
            print_table(&view);
        }

        if let Some(result) = table.last_result() {
            for hand in &result.hands {
                println!(
                    "Hand {}: {} ({} vs dealer {}), payout {}",
                    hand.hand_index + 1,
                    hand.outcome.label(),
                    hand.player_value,
                    hand.dealer_value,
                    hand.payout
                );
            }
            if result.total_payout > 0 {
                println!("You collect {}.", result.total_payout);
            } else {
                println!("House takes it.");
            }
        }

        println!("Balance: {}", table.balance());
        table.next_round();
    }
}

fn print_table(view: &RoundView) {
    print!("Dealer: ");
    if view.dealer_value.is_some() {
        print_cards(&view.dealer_cards);
        println!("  ({})", view.dealer_value.unwrap_or(0));
    } else {
        if let Some(up) = view.dealer_cards.get(1) {
            print!("?? {}", format_card(*up));
        }
        println!("  (?)");
    }

    for (index, hand) in view.hands.iter().enumerate() {
        let marker = if index == view.active_hand && !view.is_over {
            ">"
        } else {
            " "
        };
        print!("{marker} Hand {}: ", index + 1);
        print_cards(&hand.cards);
        print!("  ({}, bet {})", hand.value, hand.bet);
        if hand.is_bust {
            print!("  BUST");
        }
        if let Some(outcome) = hand.outcome {
            print!("  [{outcome}]");
        }
        println!();
    }
}

fn print_cards(cards: &[Card]) {
    for card in cards {
        print!("{} ", format_card(*card));
    }
}

fn format_card(card: Card) -> String {
    format!("{}{}", card.rank.label(), card.suit.symbol())
}

fn format_actions<S: ventuno::BalanceStore>(table: &Table<S>) -> String {
    let mut actions = String::from("Actions: (h)it (s)tand");
    if let Some(round) = table.round() {
        if round.can_double() {
            actions.push_str(" (d)ouble");
        }
        if round.can_split() {
            actions.push_str(" s(p)lit");
        }
    }
    actions.push_str(" (q)uit");
    actions
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_lowercase()
}

fn prompt_u64(prompt: &str) -> Option<u64> {
    loop {
        let line = prompt_line(prompt);
        if line == "q" || line == "quit" {
            return None;
        }
        match line.parse::<u64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Enter a number."),
        }
    }
}
