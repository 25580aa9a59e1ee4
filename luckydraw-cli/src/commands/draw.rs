use super::{history_table, print_summary};
use anyhow::Result;
use luckydraw_core::{DrawError, DrawSession, Winner};

/// Result of drawing a list of guests in order.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// In draw order, oldest first.
    pub winners: Vec<Winner>,
    /// Guests left over once the pool ran out.
    pub not_drawn: Vec<String>,
}

/// Draws for each guest in turn, stopping at the first exhausted pool.
pub async fn run_batch(session: &DrawSession, names: &[String]) -> Result<BatchOutcome> {
    let mut outcome = BatchOutcome {
        winners: Vec::with_capacity(names.len()),
        not_drawn: Vec::new(),
    };

    for (i, name) in names.iter().enumerate() {
        match session.draw(name.as_str()).await {
            Ok(winner) => outcome.winners.push(winner),
            Err(DrawError::PoolExhausted) => {
                outcome.not_drawn = names[i..].to_vec();
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(outcome)
}

pub async fn draw_names(session: &DrawSession, names: &[String], json: bool) -> Result<()> {
    let outcome = run_batch(session, names).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.winners)?);
    } else if !outcome.winners.is_empty() {
        // history_table expects newest first
        let newest_first: Vec<Winner> = outcome.winners.iter().rev().cloned().collect();
        println!("{}", history_table(&newest_first));
        print_summary(&session.snapshot());
    }

    if !outcome.not_drawn.is_empty() {
        return Err(anyhow::Error::new(DrawError::PoolExhausted).context(format!(
            "Pool exhausted after {} draws; not drawn: {}",
            outcome.winners.len(),
            outcome.not_drawn.join(", ")
        )));
    }

    Ok(())
}
