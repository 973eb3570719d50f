use std::fmt::Display;

use chrono::{DateTime, Locale, TimeZone};

use crate::preferences::Language;

/// A rendered clock: a long date line and a time line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFace {
    pub date: String,
    pub time: String,
}

/// Formats `now` for `language`.
///
/// English renders `Monday, January 1, 2024` and `09:05:03 AM`; Indonesian
/// renders `Senin, 1 Januari 2024` and `09.05.03`.
pub fn format_clock<Tz>(now: &DateTime<Tz>, language: Language) -> ClockFace
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let (locale, date_fmt, time_fmt) = match language {
        Language::En => (Locale::en_US, "%A, %B %-d, %Y", "%I:%M:%S %p"),
        Language::Id => (Locale::id_ID, "%A, %-d %B %Y", "%H.%M.%S"),
    };

    ClockFace {
        date: now.format_localized(date_fmt, locale).to_string(),
        time: now.format_localized(time_fmt, locale).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn morning() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 5, 3).unwrap()
    }

    #[test]
    fn test_english_clock() {
        let face = format_clock(&morning(), Language::En);
        assert_eq!(face.date, "Monday, January 1, 2024");
        assert_eq!(face.time, "09:05:03 AM");
    }

    #[test]
    fn test_indonesian_clock() {
        let face = format_clock(&morning(), Language::Id);
        assert_eq!(face.date, "Senin, 1 Januari 2024");
        assert_eq!(face.time, "09.05.03");
    }

    #[test]
    fn test_afternoon_uses_twelve_hour_clock_in_english() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 21, 0, 0).unwrap();
        assert_eq!(format_clock(&now, Language::En).time, "09:00:00 PM");
        assert_eq!(format_clock(&now, Language::Id).time, "21.00.00");
    }
}
