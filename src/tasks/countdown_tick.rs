//! Countdown tick background task

use std::{sync::Arc, time::Duration};

use tokio::sync::watch;
use tracing::debug;

use crate::{display::DigitFrame, engine::CountdownEngine};

/// Drives one countdown run at a one-second cadence
///
/// Each tick renders the current remaining time before decrementing it, so
/// subscribers observe the full `d, d-1, ..., 0` sequence, `00:00` included.
/// A negative remaining value is never rendered; it triggers the terminal
/// transition instead. The cancel channel comes from the owning
/// [`CountdownHandle`](crate::engine::CountdownHandle).
pub async fn countdown_tick_task(engine: Arc<CountdownEngine>, mut cancel_rx: watch::Receiver<bool>) {
    let mut interval = tokio::time::interval(Duration::from_secs(1));

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let remaining = engine.remaining_seconds();
                if remaining < 0 {
                    debug!("Remaining time exhausted, entering terminal state");
                    engine.finish();
                    break;
                }

                engine.publish_frame(DigitFrame::from_seconds(remaining as u64));
                engine.decrement();
            }

            // Fires on an explicit stop and when the handle is dropped.
            _ = cancel_rx.changed() => {
                debug!("Cancel requested, stopping countdown");
                engine.mark_stopped();
                break;
            }
        }
    }
}
