//! Maps a sampled wall-clock time onto the event timeline.
//!
//! Nothing here reads the clock or the URL. The page shell samples `now`
//! once per tick and passes it to [`Timeline::evaluate`] together with the
//! overrides resolved from the query string.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};

use crate::countdown::{format_countdown, seconds_until};
use crate::params::{ClockOverride, DemoTime};

/// A named window of the event day, in minutes from midnight. `end` is exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleSegment {
    pub start: u32,
    pub end: u32,
    pub title: &'static str,
}

impl ScheduleSegment {
    pub fn contains(&self, minute_of_day: u32) -> bool {
        self.start <= minute_of_day && minute_of_day < self.end
    }

    /// Start time in 12-hour form, e.g. `1:10 PM`.
    pub fn start_label(&self) -> String {
        let hour24 = self.start / 60;
        let hour12 = match hour24 {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        };
        let suffix = if self.start < 12 * 60 { "AM" } else { "PM" };
        format!("{}:{:02} {}", hour12, self.start % 60, suffix)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentStatus {
    Active,
    Past,
    Upcoming,
    OffDay,
}

/// Derived snapshot, rebuilt from scratch on every tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineState {
    pub has_started: bool,
    pub is_event_day: bool,
    pub active_segment: Option<usize>,
    /// Minute of day the schedule was evaluated at, after any demo override.
    pub minute_of_day: u32,
    /// Remaining time before the start, empty once started.
    pub time_left: String,
}

impl TimelineState {
    pub fn segment_status(&self, index: usize, segment: &ScheduleSegment) -> SegmentStatus {
        if self.active_segment == Some(index) {
            SegmentStatus::Active
        } else if !self.is_event_day {
            SegmentStatus::OffDay
        } else if self.minute_of_day > segment.end {
            SegmentStatus::Past
        } else {
            SegmentStatus::Upcoming
        }
    }
}

/// First segment containing `minute_of_day`. Segments are ascending and
/// non-overlapping, so the first match is the only one.
pub fn active_segment(schedule: &[ScheduleSegment], minute_of_day: u32) -> Option<usize> {
    schedule.iter().position(|segment| segment.contains(minute_of_day))
}

#[derive(Clone, Debug, PartialEq)]
pub struct Timeline<'a> {
    event_date: NaiveDate,
    event_start: NaiveDateTime,
    schedule: &'a [ScheduleSegment],
    demo: Option<DemoTime>,
}

impl<'a> Timeline<'a> {
    pub fn new(event_date: NaiveDate, event_start: NaiveDateTime, schedule: &'a [ScheduleSegment]) -> Self {
        Timeline {
            event_date,
            event_start,
            schedule,
            demo: None,
        }
    }

    /// Applies a query-string override. `mounted_at` is the instant the page
    /// was opened; a debug override moves the start to that instant plus
    /// the requested minutes.
    pub fn with_override(mut self, clock_override: Option<ClockOverride>, mounted_at: NaiveDateTime) -> Self {
        match clock_override {
            Some(ClockOverride::Debug { minutes }) => {
                let shifted = TimeDelta::try_milliseconds((minutes * 60_000.0) as i64)
                    .and_then(|offset| mounted_at.checked_add_signed(offset));
                match shifted {
                    Some(start) => self.event_start = start,
                    None => log::debug!("Debug offset of {} minutes is out of range", minutes),
                }
            }
            Some(ClockOverride::Demo(demo)) => self.demo = Some(demo),
            None => {}
        }
        self
    }

    pub fn event_start(&self) -> NaiveDateTime {
        self.event_start
    }

    pub fn schedule(&self) -> &'a [ScheduleSegment] {
        self.schedule
    }

    pub fn evaluate(&self, now: NaiveDateTime) -> TimelineState {
        let has_started = now >= self.event_start;

        let (is_event_day, minute_of_day) = match self.demo {
            Some(demo) => (true, demo.minute_of_day()),
            None => (
                now.year() == self.event_date.year()
                    && now.month() == self.event_date.month()
                    && now.day() == self.event_date.day(),
                now.hour() * 60 + now.minute(),
            ),
        };

        let active_segment = if is_event_day {
            active_segment(self.schedule, minute_of_day)
        } else {
            None
        };

        let time_left = if has_started {
            String::new()
        } else {
            format_countdown(seconds_until(now, self.event_start))
        };

        TimelineState {
            has_started,
            is_event_day,
            active_segment,
            minute_of_day,
            time_left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{event_start, EVENT_DATE, SCHEDULE};
    use chrono::Duration;

    fn timeline() -> Timeline<'static> {
        Timeline::new(EVENT_DATE, event_start(), &SCHEDULE)
    }

    fn on(date: NaiveDate, h: u32, m: u32, s: u32) -> NaiveDateTime {
        date.and_hms_opt(h, m, s).unwrap()
    }

    fn event_day(h: u32, m: u32) -> NaiveDateTime {
        on(EVENT_DATE, h, m, 0)
    }

    fn day_before() -> NaiveDate {
        EVENT_DATE.pred_opt().unwrap()
    }

    #[test]
    fn segment_lookup_uses_exclusive_end() {
        assert_eq!(active_segment(&SCHEDULE, 840), Some(1));
        assert_eq!(active_segment(&SCHEDULE, 779), None);
        assert_eq!(active_segment(&SCHEDULE, 780), Some(0));
        assert_eq!(active_segment(&SCHEDULE, 790), Some(1));
        assert_eq!(active_segment(&SCHEDULE, 1079), Some(3));
        assert_eq!(active_segment(&SCHEDULE, 1080), None);
    }

    #[test]
    fn event_day_segments_follow_the_clock() {
        let tl = timeline();
        assert_eq!(tl.evaluate(event_day(14, 0)).active_segment, Some(1));
        assert_eq!(tl.evaluate(event_day(12, 59)).active_segment, None);
        assert_eq!(tl.evaluate(event_day(18, 0)).active_segment, None);
        assert_eq!(tl.evaluate(event_day(16, 45)).active_segment, Some(2));
    }

    #[test]
    fn other_days_never_have_an_active_segment() {
        let tl = timeline();
        let state = tl.evaluate(on(day_before(), 14, 0, 0));
        assert!(!state.is_event_day);
        assert_eq!(state.active_segment, None);

        let later = on(EVENT_DATE.succ_opt().unwrap(), 14, 0, 0);
        let state = tl.evaluate(later);
        assert!(state.has_started);
        assert!(!state.is_event_day);
        assert_eq!(state.active_segment, None);
    }

    #[test]
    fn same_month_and_day_in_another_year_is_not_event_day() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 7).unwrap();
        assert!(!timeline().evaluate(on(date, 14, 0, 0)).is_event_day);
    }

    #[test]
    fn countdown_before_start() {
        let state = timeline().evaluate(on(day_before(), 12, 0, 0));
        assert!(!state.has_started);
        assert_eq!(state.time_left, "1d 01h 00m 00s");
    }

    #[test]
    fn starts_exactly_at_event_start() {
        let tl = timeline();
        let before = tl.evaluate(event_start() - Duration::seconds(1));
        assert!(!before.has_started);
        assert_eq!(before.time_left, "00h 00m 01s");

        let at = tl.evaluate(event_start());
        assert!(at.has_started);
        assert_eq!(at.time_left, "");
    }

    #[test]
    fn remaining_seconds_never_increase_as_time_advances() {
        let tl = timeline();
        let mut now = event_start() - Duration::minutes(3);
        let mut previous = u64::MAX;
        while now < event_start() {
            let remaining = seconds_until(now, tl.event_start());
            assert!(remaining <= previous);
            assert!(!tl.evaluate(now).time_left.is_empty());
            previous = remaining;
            now += Duration::milliseconds(700);
        }
    }

    #[test]
    fn demo_forces_event_day_and_time() {
        let tl = timeline().with_override(
            Some(ClockOverride::Demo(DemoTime { hour: 17, minute: 30 })),
            on(day_before(), 9, 0, 0),
        );
        let state = tl.evaluate(on(day_before(), 9, 0, 0));
        assert!(state.is_event_day);
        assert_eq!(state.minute_of_day, 17 * 60 + 30);
        assert_eq!(state.active_segment, Some(3));
        // the countdown still follows the real clock
        assert!(!state.has_started);
    }

    #[test]
    fn debug_moves_the_start_relative_to_mount() {
        let mounted = on(day_before(), 9, 0, 0);
        let tl = timeline().with_override(Some(ClockOverride::Debug { minutes: 2.0 }), mounted);
        assert_eq!(tl.event_start(), mounted + Duration::minutes(2));

        let state = tl.evaluate(mounted + Duration::seconds(30));
        assert_eq!(state.time_left, "00h 01m 30s");
        assert!(tl.evaluate(mounted + Duration::minutes(2)).has_started);
    }

    #[test]
    fn fractional_debug_minutes() {
        let mounted = on(day_before(), 9, 0, 0);
        let tl = timeline().with_override(Some(ClockOverride::Debug { minutes: 0.5 }), mounted);
        assert_eq!(tl.event_start(), mounted + Duration::seconds(30));
    }

    #[test]
    fn out_of_range_debug_offset_keeps_configured_start() {
        let mounted = on(day_before(), 9, 0, 0);
        let tl = timeline().with_override(Some(ClockOverride::Debug { minutes: 1e300 }), mounted);
        assert_eq!(tl.event_start(), event_start());
    }

    #[test]
    fn segment_status_on_event_day() {
        let state = timeline().evaluate(event_day(16, 45));
        let status: Vec<_> = SCHEDULE
            .iter()
            .enumerate()
            .map(|(i, s)| state.segment_status(i, s))
            .collect();
        assert_eq!(
            status,
            vec![
                SegmentStatus::Past,
                SegmentStatus::Past,
                SegmentStatus::Active,
                SegmentStatus::Upcoming,
            ]
        );
    }

    #[test]
    fn segment_is_only_past_strictly_after_its_end() {
        let state = timeline().evaluate(event_day(13, 10));
        assert_eq!(state.segment_status(0, &SCHEDULE[0]), SegmentStatus::Upcoming);
        assert_eq!(state.segment_status(1, &SCHEDULE[1]), SegmentStatus::Active);
    }

    #[test]
    fn segment_status_off_day() {
        let state = timeline().evaluate(on(day_before(), 14, 0, 0));
        assert!(SCHEDULE
            .iter()
            .enumerate()
            .all(|(i, s)| state.segment_status(i, s) == SegmentStatus::OffDay));
    }

    #[test]
    fn start_labels_use_twelve_hour_clock() {
        let labels: Vec<_> = SCHEDULE.iter().map(|s| s.start_label()).collect();
        assert_eq!(labels, vec!["1:00 PM", "1:10 PM", "4:30 PM", "5:00 PM"]);

        let midnight = ScheduleSegment { start: 0, end: 30, title: "" };
        let morning = ScheduleSegment { start: 9 * 60 + 5, end: 600, title: "" };
        let noon = ScheduleSegment { start: 12 * 60, end: 780, title: "" };
        assert_eq!(midnight.start_label(), "12:00 AM");
        assert_eq!(morning.start_label(), "9:05 AM");
        assert_eq!(noon.start_label(), "12:00 PM");
    }
}
