use yew::prelude::*;

use crate::config;
use crate::highlight::HighlightState;
use crate::timeline::{ScheduleSegment, SegmentStatus, TimelineState};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub timeline: TimelineState,
    pub schedule: &'static [ScheduleSegment],
    pub highlight: HighlightState,
    pub event_completed: bool,
}

/// Dot class and label for the status pill. Completion wins over the event day.
pub fn status_pill(timeline: &TimelineState, event_completed: bool) -> (&'static str, &'static str) {
    if event_completed {
        ("status-dot completed", "Event completed")
    } else if timeline.is_event_day {
        ("status-dot live", "Ongoing")
    } else {
        ("status-dot pending", "Not started")
    }
}

fn cta_class(highlighted: bool) -> Classes {
    classes!("cta-button", highlighted.then(|| "cta-highlighted"))
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    let HeroProps {
        timeline,
        schedule,
        highlight,
        event_completed,
    } = props;

    let (dot_class, status_label) = status_pill(timeline, *event_completed);

    let rows = schedule.iter().enumerate().map(|(index, segment)| {
        let status = timeline.segment_status(index, segment);
        let row_class = match status {
            SegmentStatus::Active => "schedule-row active",
            SegmentStatus::Past => "schedule-row past",
            SegmentStatus::Upcoming => "schedule-row upcoming",
            SegmentStatus::OffDay => "schedule-row off-day",
        };
        html! {
            <div key={index} class={row_class}>
                <span class="schedule-time">{segment.start_label()}</span>
                <span class="schedule-title">{segment.title}</span>
                {
                    if status == SegmentStatus::Active {
                        html! { <div class="schedule-live-dot"></div> }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }).collect::<Html>();

    html! {
        <main class="hero">
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        padding: 6rem 2rem 3rem;
                    }
                    .hero-content {
                        max-width: 36rem;
                        width: 100%;
                        margin: 0 auto;
                    }
                    .status-pill {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        border-radius: 999px;
                        background: #e5e7eb;
                        color: #1f2937;
                        padding: 0.5rem 1rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .status-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                    }
                    .status-dot.live { background: #22c55e; animation: pulse 2s infinite; }
                    .status-dot.pending { background: #ef4444; animation: pulse 2s infinite; }
                    .status-dot.completed { background: #9ca3af; }
                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.4; }
                    }
                    @keyframes fadeInBlur {
                        from { opacity: 0; filter: blur(12px); }
                        to { opacity: 1; filter: blur(0); }
                    }
                    .hero h1 {
                        font-size: 2.25rem;
                        font-weight: 500;
                        margin: 0.75rem 0 0.5rem;
                        animation: fadeInBlur 0.9s ease-out both;
                    }
                    .hero-date {
                        font-size: 0.875rem;
                        color: #fff;
                        animation: fadeInBlur 0.9s ease-out 0.1s both;
                    }
                    .schedule {
                        position: relative;
                        overflow: hidden;
                        margin-top: 1rem;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.06);
                        backdrop-filter: blur(40px);
                    }
                    .schedule h3 {
                        margin: 0 0 1rem;
                        font-size: 1.125rem;
                        font-weight: 600;
                        color: #fff;
                    }
                    .schedule-row {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 0.5rem;
                        border-radius: 0.5rem;
                        border: 1px solid transparent;
                        transition: all 0.3s;
                    }
                    .schedule-row.active {
                        background: rgba(255, 255, 255, 0.2);
                        border-color: rgba(255, 255, 255, 0.3);
                    }
                    .schedule-row.past { opacity: 0.6; }
                    .schedule-time {
                        min-width: 80px;
                        font-family: monospace;
                        font-size: 0.875rem;
                        color: #a1a1aa;
                    }
                    .schedule-title {
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #fafafa;
                    }
                    .schedule-row.active .schedule-time,
                    .schedule-row.active .schedule-title { color: #fff; }
                    .schedule-row.past .schedule-title { color: #a1a1aa; }
                    .schedule-row.off-day .schedule-time,
                    .schedule-row.off-day .schedule-title { color: rgba(161, 161, 170, 0.6); }
                    .schedule-live-dot {
                        margin-left: auto;
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: #4ade80;
                        animation: pulse 2s infinite;
                    }
                    .schedule-overlay {
                        position: absolute;
                        inset: 0;
                        z-index: 10;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        background: rgba(0, 0, 0, 0.9);
                        color: #fff;
                        text-align: center;
                        font-size: 0.875rem;
                    }
                    .cta-row {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                        margin-top: 1rem;
                    }
                    .cta-button {
                        padding: 0.5rem 1rem;
                        border-radius: 0.375rem;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(12px);
                        color: #fff;
                        text-decoration: none;
                        white-space: nowrap;
                        transition: all 0.3s;
                    }
                    .cta-button.cta-highlighted {
                        background: rgba(59, 130, 246, 0.3);
                        border-color: #60a5fa;
                        box-shadow: 0 0 30px rgba(59, 130, 246, 0.6);
                    }
                    @media (max-width: 768px) {
                        .hero { padding: 2rem 1rem; }
                        .hero h1 { font-size: 1.5rem; }
                        .cta-row { justify-content: center; }
                    }
                "#}
            </style>
            <div class="hero-content">
                <div class="status-pill">
                    <div class={dot_class}></div>
                    <span>{status_label}</span>
                </div>

                <h1>{"Prompt to Production - Claremont, CA"}</h1>
                <p class="hero-date">{"February 7, 2026"}</p>

                <div class="schedule">
                    {
                        if *event_completed {
                            html! {
                                <div class="schedule-overlay">
                                    <span>{"Thank you for attending the event!!!"}</span>
                                    <span>{"We hope to see you again soon for another v0 or Hacker Fund event ;)"}</span>
                                    <span>{"- RF"}</span>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <h3>{"Schedule"}</h3>
                    <div class="schedule-rows">
                        { rows }
                    </div>
                </div>

                <div class="cta-row">
                    <a href={config::SUBMIT_URL} target="_blank" class={cta_class(highlight.highlight_submit)}>
                        {"Submit your project"}
                    </a>
                    <a href={config::TRACKS_URL} target="_blank" class={cta_class(highlight.highlight_tracks)}>
                        {"Build Tracks"}
                    </a>
                    <a href={config::BROWSE_URL} target="_blank" class={cta_class(highlight.highlight_tracks)}>
                        {"Browse Submitted Projects"}
                    </a>
                </div>
            </div>
        </main>
    }
}
