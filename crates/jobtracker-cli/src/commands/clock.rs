//! Live clock driven by a tokio interval.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use colored::Colorize;
use jobtracker_core::ticker::Ticker;

use crate::app::App;
use crate::render;

/// Runs until Ctrl-C, or for `ticks` ticks when given.
pub async fn run(app: &App, ticks: Option<u64>) -> Result<()> {
    let display = &app.config.display;
    let mut ticker = Ticker::new(
        app.dashboard.preferences().language(),
        display.quote_interval(),
    );
    let mut out = std::io::stdout();

    tokio::select! {
        result = drive(&mut ticker, display.clock_tick(), ticks, &mut out) => result,
        _ = tokio::signal::ctrl_c() => {
            println!();
            Ok(())
        }
    }
}

/// Prints the current quote, then one clock line per tick.
pub async fn drive<W: Write>(
    ticker: &mut Ticker,
    period: Duration,
    ticks: Option<u64>,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{}\n", render::quote(&ticker.quote()))?;

    let mut interval = tokio::time::interval(period);
    let mut count = 0;
    while ticks.is_none_or(|limit| count < limit) {
        interval.tick().await;
        let tick = ticker.tick(&Local::now());
        if let Some(quote) = tick.rotated {
            writeln!(out, "\n{}\n", render::quote(&quote))?;
        }
        writeln!(out, "{}  {}", tick.clock.date.bright_black(), tick.clock.time.bold())?;
        out.flush()?;
        count += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobtracker_core::preferences::Language;

    #[tokio::test]
    async fn test_drive_stops_after_requested_ticks() {
        colored::control::set_override(false);
        let mut ticker = Ticker::new(Language::En, Duration::from_secs(30));
        let mut out = Vec::new();

        drive(&mut ticker, Duration::from_millis(1), Some(3), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let clock_lines = text
            .lines()
            .filter(|line| line.ends_with(" AM") || line.ends_with(" PM"))
            .count();
        assert_eq!(clock_lines, 3);
        assert!(text.starts_with(&format!("\"{}\"", ticker.quote().text)));
    }

    #[tokio::test]
    async fn test_zero_ticks_only_prints_quote() {
        colored::control::set_override(false);
        let mut ticker = Ticker::new(Language::Id, Duration::from_secs(30));
        let mut out = Vec::new();

        drive(&mut ticker, Duration::from_millis(1), Some(0), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().filter(|l| !l.is_empty()).count(), 2);
    }
}
