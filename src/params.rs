use std::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::config;

#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("demo time `{0}` is not a valid H:MM or HH:MM wall-clock time")]
    InvalidDemoTime(String),
    #[error("debug minutes `{0}` must be a positive finite number")]
    InvalidDebugMinutes(String),
    #[error("unknown highlight token `{0}`")]
    UnknownHighlight(String),
    #[error("unknown event state `{0}`")]
    UnknownEventState(String),
}

/// Manual replacement for the time-based button emphasis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HighlightOverride {
    Tracks,
    Ship,
    Off,
}

impl FromStr for HighlightOverride {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tracks" => Ok(HighlightOverride::Tracks),
            "ship" => Ok(HighlightOverride::Ship),
            "off" => Ok(HighlightOverride::Off),
            other => Err(ParamError::UnknownHighlight(other.to_string())),
        }
    }
}

/// A simulated wall-clock time on the event day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoTime {
    pub hour: u32,
    pub minute: u32,
}

impl DemoTime {
    pub fn minute_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl FromStr for DemoTime {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParamError::InvalidDemoTime(s.to_string());

        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !(1..=2).contains(&hour.len()) || minute.len() != 2 || !all_digits(hour) || !all_digits(minute) {
            return Err(invalid());
        }

        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;
        if hour > 23 || minute > 59 {
            return Err(invalid());
        }

        Ok(DemoTime { hour, minute })
    }
}

pub fn parse_debug_minutes(raw: &str) -> Result<f64, ParamError> {
    match raw.trim().parse::<f64>() {
        Ok(minutes) if minutes.is_finite() && minutes > 0.0 => Ok(minutes),
        _ => Err(ParamError::InvalidDebugMinutes(raw.to_string())),
    }
}

fn parse_event_completed(raw: &str) -> Result<bool, ParamError> {
    match raw {
        "completed" => Ok(true),
        other => Err(ParamError::UnknownEventState(other.to_string())),
    }
}

/// Substitution applied to the clock before the timeline is evaluated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClockOverride {
    /// Pretend the event starts this many minutes after the page was opened.
    Debug { minutes: f64 },
    /// Pretend it is the event day at the given wall-clock time.
    Demo(DemoTime),
}

/// Query parameters exactly as they appear in the URL.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawParams {
    pub highlight: Option<String>,
    pub event: Option<String>,
    pub demo: Option<String>,
    pub event_debug: Option<String>,
    pub event_debug_minutes: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageParams {
    pub highlight: Option<HighlightOverride>,
    pub event_completed: bool,
    pub clock_override: Option<ClockOverride>,
}

impl PageParams {
    /// Malformed values are logged and treated as absent.
    pub fn from_raw(raw: &RawParams) -> Self {
        let highlight = raw
            .highlight
            .as_deref()
            .and_then(|s| accept(s.parse::<HighlightOverride>()));

        let event_completed = raw
            .event
            .as_deref()
            .and_then(|s| accept(parse_event_completed(s)))
            .unwrap_or(false);

        let demo = raw.demo.as_deref().and_then(|s| accept(s.parse::<DemoTime>()));

        let debug = if raw.event_debug.as_deref() == Some("1") {
            let minutes = raw
                .event_debug_minutes
                .as_deref()
                .and_then(|s| accept(parse_debug_minutes(s)))
                .unwrap_or(config::DEFAULT_DEBUG_MINUTES);
            Some(ClockOverride::Debug { minutes })
        } else {
            None
        };

        // Overrides are mutually exclusive; demo wins.
        let clock_override = demo.map(ClockOverride::Demo).or(debug);

        PageParams {
            highlight,
            event_completed,
            clock_override,
        }
    }
}

fn accept<T>(parsed: Result<T, ParamError>) -> Option<T> {
    match parsed {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("Ignoring query parameter: {}", e);
            None
        }
    }
}
