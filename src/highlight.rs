use crate::params::HighlightOverride;
use crate::timeline::TimelineState;

const TRACKS_SEGMENT: usize = 1;
const SUBMIT_SEGMENT: usize = 3;

/// Which call-to-action buttons get the glow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HighlightState {
    pub highlight_tracks: bool,
    pub highlight_submit: bool,
}

pub fn resolve(
    timeline: &TimelineState,
    highlight_override: Option<HighlightOverride>,
    event_completed: bool,
) -> HighlightState {
    if event_completed {
        return HighlightState::default();
    }

    match highlight_override {
        Some(HighlightOverride::Tracks) => HighlightState {
            highlight_tracks: true,
            highlight_submit: false,
        },
        Some(HighlightOverride::Ship) => HighlightState {
            highlight_tracks: false,
            highlight_submit: true,
        },
        Some(HighlightOverride::Off) => HighlightState::default(),
        None => HighlightState {
            highlight_tracks: timeline.active_segment == Some(TRACKS_SEGMENT),
            highlight_submit: timeline.active_segment == Some(SUBMIT_SEGMENT),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_segment(active_segment: Option<usize>) -> TimelineState {
        TimelineState {
            has_started: true,
            is_event_day: active_segment.is_some(),
            active_segment,
            minute_of_day: 0,
            time_left: String::new(),
        }
    }

    const NONE: HighlightState = HighlightState {
        highlight_tracks: false,
        highlight_submit: false,
    };
    const TRACKS: HighlightState = HighlightState {
        highlight_tracks: true,
        highlight_submit: false,
    };
    const SUBMIT: HighlightState = HighlightState {
        highlight_tracks: false,
        highlight_submit: true,
    };

    #[test]
    fn completed_suppresses_everything() {
        let overrides = [
            None,
            Some(HighlightOverride::Tracks),
            Some(HighlightOverride::Ship),
            Some(HighlightOverride::Off),
        ];
        for highlight_override in overrides {
            for segment in [None, Some(0), Some(1), Some(2), Some(3)] {
                assert_eq!(resolve(&at_segment(segment), highlight_override, true), NONE);
            }
        }
    }

    #[test]
    fn override_beats_the_schedule() {
        assert_eq!(resolve(&at_segment(Some(3)), Some(HighlightOverride::Tracks), false), TRACKS);
        assert_eq!(resolve(&at_segment(Some(1)), Some(HighlightOverride::Ship), false), SUBMIT);
        assert_eq!(resolve(&at_segment(Some(1)), Some(HighlightOverride::Off), false), NONE);
    }

    #[test]
    fn automatic_follows_the_active_segment() {
        assert_eq!(resolve(&at_segment(None), None, false), NONE);
        assert_eq!(resolve(&at_segment(Some(0)), None, false), NONE);
        assert_eq!(resolve(&at_segment(Some(1)), None, false), TRACKS);
        assert_eq!(resolve(&at_segment(Some(2)), None, false), NONE);
        assert_eq!(resolve(&at_segment(Some(3)), None, false), SUBMIT);
    }
}
