//! Helper surface exposed to later scripts
//!
//! Pure time helpers plus the placeholder drag-and-drop hook.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use serde::Serialize;

use crate::error::{CoreError, CoreResult};

/// Wall-clock time, weekday counted from Monday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClockReading {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    /// 0 = Monday … 6 = Sunday
    pub weekday: u32,
}

impl ClockReading {
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            hours: dt.hour(),
            minutes: dt.minute(),
            seconds: dt.second(),
            weekday: CoachManager::rebase_weekday(dt.weekday().num_days_from_sunday()),
        }
    }
}

/// Namespaced helper functions
pub struct CoachManager;

impl CoachManager {
    /// `"HH:MM[:SS]"` → `"HH:MM"`, zero-padded
    pub fn format_time(time: &str) -> CoreResult<String> {
        let invalid = || CoreError::InvalidTimeFormat(time.to_string());

        let mut parts = time.trim().split(':');
        let (Some(hours), Some(minutes)) = (parts.next(), parts.next()) else {
            return Err(invalid());
        };
        let seconds = parts.next();
        if parts.next().is_some() {
            return Err(invalid());
        }

        let hours = parse_component(hours, 23).ok_or_else(invalid)?;
        let minutes = parse_component(minutes, 59).ok_or_else(invalid)?;
        if let Some(seconds) = seconds {
            parse_component(seconds, 59).ok_or_else(invalid)?;
        }
        Ok(format!("{hours:02}:{minutes:02}"))
    }

    /// Current local time
    pub fn current_time() -> ClockReading {
        ClockReading::from_datetime(&Local::now())
    }

    /// Sunday-based weekday (0 = Sunday) → Monday-based (0 = Monday)
    ///
    /// The domain is 0..=6; larger inputs wrap modulo 7 (7 is Sunday again).
    pub fn rebase_weekday(sunday_based: u32) -> u32 {
        (sunday_based % 7 + 6) % 7
    }

    /// Placeholder for drag-and-drop reordering of activities
    pub fn init_drag_and_drop() {
        log::info!("Drag & drop initialised (not implemented)");
    }
}

fn parse_component(part: &str, max: u32) -> Option<u32> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse::<u32>().ok().filter(|v| *v <= max)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_format_time_drops_seconds() {
        assert_eq!(CoachManager::format_time("08:05:30").unwrap(), "08:05");
    }

    #[test]
    fn test_format_time_keeps_hh_mm() {
        assert_eq!(CoachManager::format_time("23:59").unwrap(), "23:59");
    }

    #[test]
    fn test_format_time_pads() {
        assert_eq!(CoachManager::format_time("8:5").unwrap(), "08:05");
    }

    #[test]
    fn test_format_time_rejects_garbage() {
        for input in ["", "0800", "24:00", "12:60", "ab:cd", "12:00:61", "1:2:3:4", "123:00"] {
            let err = CoachManager::format_time(input).unwrap_err();
            assert!(matches!(err, CoreError::InvalidTimeFormat(_)), "{input}");
            assert!(err.is_expected());
        }
    }

    #[test]
    fn test_rebase_weekday() {
        assert_eq!(CoachManager::rebase_weekday(0), 6);
        for (sunday_based, monday_based) in (1..=6).zip(0..=5) {
            assert_eq!(CoachManager::rebase_weekday(sunday_based), monday_based);
        }
    }

    #[test]
    fn test_rebase_weekday_wraps_out_of_range() {
        assert_eq!(CoachManager::rebase_weekday(7), 6);
        assert_eq!(CoachManager::rebase_weekday(8), 0);
        assert_eq!(CoachManager::rebase_weekday(13), 5);
        assert_eq!(CoachManager::rebase_weekday(u32::MAX), CoachManager::rebase_weekday(u32::MAX % 7));
    }

    #[test]
    fn test_clock_reading_from_datetime() {
        // 2024-06-09 is a Sunday
        let dt = NaiveDate::from_ymd_opt(2024, 6, 9)
            .unwrap()
            .and_hms_opt(14, 7, 42)
            .unwrap()
            .and_utc();
        let reading = ClockReading::from_datetime(&dt);
        assert_eq!(
            reading,
            ClockReading {
                hours: 14,
                minutes: 7,
                seconds: 42,
                weekday: 6
            }
        );
        let monday = ClockReading::from_datetime(&(dt + chrono::Duration::days(1)));
        assert_eq!(monday.weekday, 0);
    }

    #[test]
    fn test_clock_reading_matches_chrono_monday_index() {
        let now = Utc::now();
        let reading = ClockReading::from_datetime(&now);
        assert_eq!(reading.weekday, now.weekday().num_days_from_monday());
    }

    #[test]
    fn test_clock_reading_serializes() {
        let json = serde_json::to_value(CoachManager::current_time()).unwrap();
        assert!(json.get("weekday").is_some());
        assert!(json["hours"].as_u64().unwrap() < 24);
    }
}
