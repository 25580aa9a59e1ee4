use luckydraw_core::{DrawObserver, PoolSnapshot, Winner};
use std::io::Write;

/// Stream the feedback goes to. Machine-readable runs keep stdout clean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Stdout,
    Stderr,
}

/// Terminal stand-in for the drum roll and fanfare.
pub struct ConsoleFeedback {
    bell: bool,
    target: Target,
}

impl ConsoleFeedback {
    pub fn new(bell: bool, target: Target) -> Self {
        Self { bell, target }
    }

    fn emit(&self, text: &str) {
        let _ = match self.target {
            Target::Stdout => write_flush(&mut std::io::stdout().lock(), text),
            Target::Stderr => write_flush(&mut std::io::stderr().lock(), text),
        };
    }

    fn ring(&self) {
        if self.bell {
            self.emit("\x07");
        }
    }
}

fn write_flush(out: &mut impl Write, text: &str) -> std::io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}

impl DrawObserver for ConsoleFeedback {
    fn on_draw_started(&self, name: &str) {
        self.emit(&format!(
            "Drawing a red envelope for {}...\n",
            display_name(name)
        ));
        self.ring();
    }

    fn on_winner_revealed(&self, winner: &Winner) {
        self.ring();
        tracing::debug!("Revealed {} for {}", winner.amount, winner.id);
    }

    fn on_pool_exhausted(&self) {
        self.ring();
    }

    fn on_reset(&self, snapshot: &PoolSnapshot) {
        self.emit(&format!(
            "Pool rebuilt: {} envelopes worth {} in total\n",
            snapshot.remaining, snapshot.remaining_value
        ));
    }
}

/// Guests may be drawn without a name.
pub fn display_name(name: &str) -> &str {
    if name.trim().is_empty() {
        "(anonymous)"
    } else {
        name
    }
}
