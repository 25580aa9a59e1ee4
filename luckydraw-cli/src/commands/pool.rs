use super::{pool_table, print_summary};
use anyhow::Result;
use luckydraw_core::DrawSession;

pub fn show_pool(session: &DrawSession, json: bool) -> Result<()> {
    let snapshot = session.snapshot();

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("{}", pool_table(&snapshot));
    print_summary(&snapshot);
    println!("Reveal delay: {} ms", session.reveal_delay().as_millis());

    Ok(())
}
