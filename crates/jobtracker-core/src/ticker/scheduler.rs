use std::fmt::Display;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::clock::{ClockFace, format_clock};
use super::quotes::{Quote, QuoteBook};
use crate::preferences::Language;

/// Output of one [`Ticker::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub clock: ClockFace,
    /// The new quotation, present only when this tick rotated it.
    pub rotated: Option<Quote>,
}

/// Cooperative clock and quotation scheduler.
///
/// The caller owns the timer and calls [`tick`](Self::tick) with the current
/// time. Every tick re-renders the clock; the quotation rotates to a different
/// random entry once `quote_interval` has elapsed since the last rotation.
pub struct Ticker {
    language: Language,
    quote_interval: Duration,
    quote_index: usize,
    last_rotation: Option<DateTime<Utc>>,
    rng: StdRng,
}

impl Ticker {
    pub fn new(language: Language, quote_interval: Duration) -> Self {
        Self::with_rng(language, quote_interval, StdRng::from_entropy())
    }

    /// Builds a ticker with an explicit random source.
    pub fn with_rng(language: Language, quote_interval: Duration, mut rng: StdRng) -> Self {
        let quote_index = rng.gen_range(0..QuoteBook::quotes(language).len());
        Self {
            language,
            quote_interval,
            quote_index,
            last_rotation: None,
            rng,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switches language and picks a fresh quotation from its book.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.quote_index = self.rng.gen_range(0..QuoteBook::quotes(language).len());
    }

    pub fn quote(&self) -> Quote {
        QuoteBook::quotes(self.language)[self.quote_index]
    }

    pub fn tick<Tz>(&mut self, now: &DateTime<Tz>) -> Tick
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let now_utc = now.with_timezone(&Utc);
        let rotated = match self.last_rotation {
            None => {
                self.last_rotation = Some(now_utc);
                None
            }
            Some(last) => {
                let elapsed = (now_utc - last).to_std().unwrap_or_default();
                if elapsed >= self.quote_interval {
                    self.last_rotation = Some(now_utc);
                    Some(self.rotate())
                } else {
                    None
                }
            }
        };

        Tick {
            clock: format_clock(now, self.language),
            rotated,
        }
    }

    fn rotate(&mut self) -> Quote {
        let len = QuoteBook::quotes(self.language).len();
        if len > 1 {
            let next = self.rng.gen_range(0..len - 1);
            self.quote_index = if next >= self.quote_index { next + 1 } else { next };
        }
        tracing::trace!(index = self.quote_index, "Rotated quote");
        self.quote()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker() -> Ticker {
        Ticker::with_rng(Language::En, Duration::from_secs(30), StdRng::seed_from_u64(7))
    }

    fn at(secs: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap() + chrono::Duration::seconds(secs.into())
    }

    #[test]
    fn test_first_tick_renders_clock_without_rotation() {
        let mut ticker = ticker();
        let tick = ticker.tick(&at(0));
        assert_eq!(tick.clock.time, "09:00:00 AM");
        assert!(tick.rotated.is_none());
    }

    #[test]
    fn test_rotation_waits_for_interval() {
        let mut ticker = ticker();
        ticker.tick(&at(0));
        for secs in 1..30 {
            assert!(ticker.tick(&at(secs)).rotated.is_none());
        }

        let before = ticker.quote();
        let rotated = ticker.tick(&at(30)).rotated.unwrap();
        assert_ne!(rotated, before);
        assert_eq!(rotated, ticker.quote());

        assert!(ticker.tick(&at(31)).rotated.is_none());
    }

    #[test]
    fn test_language_switch_changes_quote_book() {
        let mut ticker = ticker();
        ticker.set_language(Language::Id);
        assert!(QuoteBook::quotes(Language::Id).contains(&ticker.quote()));
        assert_eq!(ticker.tick(&at(0)).clock.time, "09.00.00");
    }
}
