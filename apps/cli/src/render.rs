//! Text rendering of the wallet view.

use chrono::DateTime;
use suifolio_core::{CoinHolding, ProtocolCard, Section, WalletView};

const RULE_WIDTH: usize = 60;

/// Print the full wallet summary to stdout.
pub fn print_wallet_view(view: &WalletView, network: &str) {
    println!("Holdings for address {} on {network}:", view.address);
    println!("{}", "-".repeat(RULE_WIDTH));

    match &view.balances {
        Section::Unavailable { reason } => {
            println!("Balances unavailable: {reason}");
        }
        Section::Loaded(holdings) if holdings.is_empty() => {
            println!("No balances found for this address.");
        }
        Section::Loaded(holdings) => {
            for holding in holdings {
                print_holding(holding);
            }
        }
    }

    print_positions(&view.positions);

    println!("{}", "-".repeat(RULE_WIDTH));
    if let Section::Loaded(holdings) = &view.balances {
        println!("Total coins: {}", holdings.len());
    }
}

fn print_holding(holding: &CoinHolding) {
    let balance = &holding.balance;
    println!(
        "{:<20} {:>24}  ({})",
        balance.metadata.symbol, balance.display_amount, balance.coin_type
    );

    match &holding.activity {
        Section::Unavailable { reason } => {
            println!("    Recent activity unavailable: {reason}");
        }
        Section::Loaded(group) if group.entries.is_empty() => {
            println!("    No recent balance changes tracked.");
        }
        Section::Loaded(group) => {
            for entry in &group.entries {
                let direction = if entry.event.delta > 0 {
                    "received"
                } else {
                    "sent"
                };
                println!(
                    "    {} · {} {} {} · tx {}",
                    format_timestamp(entry.event.timestamp_ms),
                    entry.display_delta,
                    balance.metadata.symbol,
                    direction,
                    entry.event.digest,
                );
            }
        }
    }
}

fn print_positions(positions: &Section<Vec<ProtocolCard>>) {
    match positions {
        Section::Unavailable { reason } => {
            println!();
            println!("Protocol positions unavailable: {reason}");
        }
        Section::Loaded(cards) if cards.is_empty() => {}
        Section::Loaded(cards) => {
            println!();
            println!("Protocol positions:");
            for card in cards {
                println!(
                    "{} ({} position{})",
                    card.protocol_name,
                    card.positions.len(),
                    if card.positions.len() == 1 { "" } else { "s" },
                );
                for position in &card.positions {
                    let fields: Vec<String> = position
                        .fields
                        .iter()
                        .map(|f| format!("{}: {}", f.label, f.value))
                        .collect();
                    println!("    {} · {}", position.object_id, fields.join(" · "));
                }
            }
        }
    }
}

/// Render a millisecond timestamp as UTC, or "unknown time" when absent or
/// out of range.
fn format_timestamp(timestamp_ms: Option<i64>) -> String {
    timestamp_ms
        .and_then(DateTime::from_timestamp_millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "unknown time".to_string())
}
