pub mod console;
pub mod draw;
pub mod pool;

pub use console::run_console;
pub use draw::draw_names;
pub use pool::show_pool;

use crate::feedback::display_name;
use comfy_table::{presets::UTF8_FULL, Table};
use luckydraw_core::{PoolSnapshot, Winner};

pub(crate) fn pool_table(snapshot: &PoolSnapshot) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Amount", "Remaining", "Configured"]);

    for tier in &snapshot.tiers {
        table.add_row(vec![
            tier.amount.to_string(),
            tier.remaining.to_string(),
            tier.initial_count.to_string(),
        ]);
    }

    table
}

pub(crate) fn history_table(winners: &[Winner]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Guest", "Amount", "Time"]);

    // Numbered in draw order even though the list is newest first
    for (i, winner) in winners.iter().enumerate() {
        table.add_row(vec![
            (winners.len() - i).to_string(),
            display_name(&winner.name).to_string(),
            winner.amount.to_string(),
            winner
                .timestamp
                .with_timezone(&chrono::Local)
                .format("%H:%M:%S")
                .to_string(),
        ]);
    }

    table
}

pub(crate) fn print_summary(snapshot: &PoolSnapshot) {
    println!(
        "Envelopes left: {}/{} (value {})",
        snapshot.remaining, snapshot.total, snapshot.remaining_value
    );
}

pub(crate) fn print_winner(winner: &Winner) {
    println!();
    println!("═══════════════════════════════════");
    println!("  Congratulations, {}!", display_name(&winner.name));
    println!("  Red envelope: {}", winner.amount);
    println!("═══════════════════════════════════");
    println!();
}
