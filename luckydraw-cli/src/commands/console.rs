use super::{history_table, pool_table, print_summary, print_winner};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use luckydraw_core::{DrawError, DrawPhase, DrawSession, PrizeTier};

const MENU: &[&str] = &[
    "Draw a red envelope",
    "Pool status",
    "Winner history",
    "Edit prize tiers",
    "Reset pool and history",
    "Quit",
];

pub async fn run_console(session: &DrawSession) -> Result<()> {
    let theme = ColorfulTheme::default();

    println!("Lucky draw ready.");
    print_summary(&session.snapshot());

    loop {
        println!();
        let choice = Select::with_theme(&theme)
            .with_prompt("What next?")
            .items(MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => draw_once(session, &theme).await?,
            1 => {
                let snapshot = session.snapshot();
                println!("{}", pool_table(&snapshot));
                print_summary(&snapshot);
            }
            2 => {
                let winners = session.history();
                if winners.is_empty() {
                    println!("No winners yet.");
                } else {
                    println!("{}", history_table(&winners));
                    println!("Total awarded: {}", session.total_awarded());
                }
            }
            3 => edit_tiers(session, &theme)?,
            4 => {
                let confirmed = Confirm::with_theme(&theme)
                    .with_prompt(
                        "Clear every winner and rebuild the pool from the current tiers?",
                    )
                    .default(false)
                    .interact()?;
                if confirmed {
                    session.reset()?;
                } else {
                    println!("Reset cancelled.");
                }
            }
            _ => break,
        }
    }

    Ok(())
}

async fn draw_once(session: &DrawSession, theme: &ColorfulTheme) -> Result<()> {
    if session.snapshot().phase == DrawPhase::Exhausted {
        exhausted_notice(theme)?;
        return Ok(());
    }

    let name: String = Input::with_theme(theme)
        .with_prompt("Guest name")
        .allow_empty(true)
        .interact_text()?;

    match session.draw(name.trim()).await {
        Ok(winner) => {
            print_winner(&winner);
            print_summary(&session.snapshot());
            session.dismiss_winner();
        }
        Err(DrawError::PoolExhausted) => exhausted_notice(theme)?,
        Err(e) if e.is_notice() || matches!(e, DrawError::DrawSuperseded) => {
            println!("{}", e);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn exhausted_notice(theme: &ColorfulTheme) -> Result<()> {
    println!("Every red envelope has been drawn. See you next year!");
    Confirm::with_theme(theme)
        .with_prompt("Acknowledge")
        .default(true)
        .show_default(false)
        .interact()?;
    Ok(())
}

fn edit_tiers(session: &DrawSession, theme: &ColorfulTheme) -> Result<()> {
    let current = session
        .tiers()
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let input: String = Input::with_theme(theme)
        .with_prompt("Tiers (AMOUNT:COUNT, comma separated)")
        .with_initial_text(current)
        .interact_text()?;

    let tiers = match parse_tier_list(&input) {
        Ok(tiers) => tiers,
        Err(e) => {
            println!("{}", e);
            println!("Keeping the previous tiers.");
            return Ok(());
        }
    };

    // Applying tiers wipes the history, so ask first once draws have happened
    if !session.history().is_empty() {
        let confirmed = Confirm::with_theme(theme)
            .with_prompt("Applying new tiers clears the winner history. Continue?")
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    session.update_tiers(tiers)?;
    Ok(())
}

pub(crate) fn parse_tier_list(input: &str) -> luckydraw_core::Result<Vec<PrizeTier>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<PrizeTier>())
        .collect()
}
