use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::Level;

use crate::timeline::ScheduleSegment;

pub const EVENT_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2026, 2, 7) {
    Some(date) => date,
    None => panic!("invalid event date"),
};

pub const EVENT_START_TIME: NaiveTime = match NaiveTime::from_hms_opt(13, 0, 0) {
    Some(time) => time,
    None => panic!("invalid event start time"),
};

/// Wall-clock start of the event in the visitor's local time.
pub fn event_start() -> NaiveDateTime {
    NaiveDateTime::new(EVENT_DATE, EVENT_START_TIME)
}

pub const SCHEDULE: [ScheduleSegment; 4] = [
    ScheduleSegment { start: 13 * 60, end: 13 * 60 + 10, title: "Kickoff" },
    ScheduleSegment { start: 13 * 60 + 10, end: 16 * 60 + 30, title: "Build!" },
    ScheduleSegment { start: 16 * 60 + 30, end: 17 * 60, title: "Ship & submit" },
    ScheduleSegment { start: 17 * 60, end: 18 * 60, title: "Event wrap-up" },
];

pub const REDEMPTION_CODE: &str = "V0PROMPTTOPRODUCTION2026";

pub const SUBMIT_URL: &str = "https://v0-v0prompttoproduction2026.vercel.app/submit";
pub const TRACKS_URL: &str = "https://v0-v0prompttoproduction2026.vercel.app/inspiration";
pub const BROWSE_URL: &str = "https://v0-v0prompttoproduction2026.vercel.app/browse";

pub const CLOCK_TICK_MS: u32 = 1_000;
pub const COPY_RESET_MS: u32 = 2_000;

pub const DEFAULT_DEBUG_MINUTES: f64 = 2.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
