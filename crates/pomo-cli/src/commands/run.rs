//! The `run` command: drive consecutive intervals in the foreground.
//!
//! Intervals live in an in-memory repository for the life of the
//! process. Ctrl-C cancels the in-flight interval and exits.

use std::error::Error;
use std::io::Write;
use std::sync::Arc;

use clap::Args;
use pomo_core::{
    Callbacks, InMemoryRepository, Interval, IntervalConfig, Repository, State,
};
use tokio::sync::broadcast;

use crate::config::{minutes, Settings};

#[derive(Args)]
pub struct RunArgs {
    /// Work interval length in minutes (overrides the settings file)
    #[arg(long)]
    work: Option<u64>,
    /// Short break length in minutes
    #[arg(long)]
    short_break: Option<u64>,
    /// Long break length in minutes
    #[arg(long)]
    long_break: Option<u64>,
    /// Stop after this many completed intervals (0 = run until Ctrl-C)
    #[arg(long, default_value = "0")]
    intervals: u64,
    /// Emit JSON lines instead of text
    #[arg(long)]
    json: bool,
}

pub async fn run(args: RunArgs) -> Result<(), Box<dyn Error>> {
    let settings = Settings::load()?;
    let config = IntervalConfig::new(
        Arc::new(InMemoryRepository::new()),
        minutes(args.work.unwrap_or(settings.work)),
        minutes(args.short_break.unwrap_or(settings.short_break)),
        minutes(args.long_break.unwrap_or(settings.long_break)),
    );

    let (cancel_tx, _) = broadcast::channel(1);
    {
        let cancel_tx = cancel_tx.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = cancel_tx.send(());
            }
        });
    }

    let mut completed = 0u64;
    loop {
        let interval = Interval::current(&config)?;
        interval
            .start(cancel_tx.subscribe(), &config, callbacks(args.json))
            .await?;

        let stored = config.repository().by_id(interval.id)?;
        if stored.state != State::Done {
            // Cancelled by Ctrl-C.
            if !args.json {
                println!("\ncancelled");
            }
            break;
        }

        completed += 1;
        if args.intervals != 0 && completed >= args.intervals {
            break;
        }
    }

    Ok(())
}

fn callbacks(json: bool) -> Callbacks {
    if json {
        return Callbacks::new(
            |i| print_event("start", i),
            |i| print_event("tick", i),
            |i| print_event("end", i),
        );
    }

    Callbacks::new(
        |i: &Interval| {
            println!(
                "{} for {}",
                i.category,
                format_duration(i.remaining())
            );
        },
        |i: &Interval| {
            print!("\r  {} remaining ", format_duration(i.remaining()));
            let _ = std::io::stdout().flush();
        },
        |i: &Interval| {
            println!("\r  {} finished      ", i.category);
        },
    )
}

fn print_event(event: &str, interval: &Interval) {
    let line = serde_json::json!({ "event": event, "interval": interval });
    println!("{line}");
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
