//! Countdown Clock - a four-digit MM:SS countdown timer for the terminal
//!
//! This is the main entry point for the countdown-clock application.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use countdown_clock::{
    config::Config,
    engine::CountdownEngine,
    state::DisplayState,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown_clock={}", config.log_level()))
        .init();

    info!("Starting countdown-clock v1.0.0");

    let engine = Arc::new(CountdownEngine::new());

    // Seconds take precedence as the canonical unit; default is one minute.
    let result = match (config.minutes, config.seconds) {
        (_, Some(seconds)) => engine.set_duration_secs(seconds),
        (Some(minutes), None) => engine.set_duration_mins(minutes),
        (None, None) => engine.set_duration_mins(1),
    };
    if let Err(e) = result {
        anyhow::bail!("invalid duration: {}", e);
    }

    let mut display_rx = engine.subscribe();

    let handle = match engine.start() {
        Some(handle) => handle,
        None => anyhow::bail!("countdown could not be started"),
    };

    tokio::select! {
        _ = render_loop(&mut display_rx) => {}
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    handle.stop().await;
    Ok(())
}

/// Print each published frame; returns once the display goes inactive
async fn render_loop(display_rx: &mut watch::Receiver<DisplayState>) {
    loop {
        if display_rx.changed().await.is_err() {
            break;
        }
        let display = display_rx.borrow_and_update().clone();

        if display.active {
            if let Some(frame) = display.digits {
                println!("{}", frame);
            }
        } else {
            if display.finished {
                println!("Time's up!");
            }
            break;
        }
    }
}
