use std::rc::Rc;

use chrono::{Local, NaiveDateTime};
use log::{debug, info};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{self, EVENT_DATE, SCHEDULE};
use crate::highlight;
use crate::pages::features::Features;
use crate::pages::hero::HeroSection;
use crate::params::{PageParams, RawParams};
use crate::redemption::{AutoOpenLatch, RedemptionAction, RedemptionModal};
use crate::timeline::Timeline;

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Landing page. Samples the clock once per tick and feeds the same
/// timeline snapshot to the hero schedule and the credit countdown.
#[function_component(Home)]
pub fn home() -> Html {
    let raw = RawParams {
        highlight: use_search_param("highlight".to_string()),
        event: use_search_param("event".to_string()),
        demo: use_search_param("demo".to_string()),
        event_debug: use_search_param("eventDebug".to_string()),
        event_debug_minutes: use_search_param("eventDebugMinutes".to_string()),
    };
    let params = use_memo(|raw| PageParams::from_raw(raw), raw);

    let timeline = use_memo(
        |clock_override| {
            let timeline = Timeline::new(EVENT_DATE, config::event_start(), &SCHEDULE)
                .with_override(*clock_override, local_now());
            debug!("Event starts at {} (override {:?})", timeline.event_start(), clock_override);
            timeline
        },
        params.clock_override,
    );

    let timeline_state = {
        let timeline = timeline.clone();
        use_state(move || timeline.evaluate(local_now()))
    };
    let auto_open = use_mut_ref(AutoOpenLatch::default);
    let modal = use_reducer(RedemptionModal::default);

    let refresh = {
        let auto_open = auto_open.clone();
        let timeline = timeline.clone();
        let timeline_state = timeline_state.clone();
        let dispatcher = modal.dispatcher();
        Rc::new(move || {
            let state = timeline.evaluate(local_now());
            if auto_open.borrow_mut().observe(state.has_started) {
                info!("Event started, opening redemption details");
                dispatcher.dispatch(RedemptionAction::AutoOpen);
            }
            timeline_state.set(state);
        })
    };

    // Evaluate right away on mount and whenever the overrides change.
    // A new event start re-arms the auto-open and closes the modal.
    {
        let refresh = refresh.clone();
        let dispatcher = modal.dispatcher();
        use_effect_with_deps(
            move |_| {
                auto_open.borrow_mut().rearm();
                dispatcher.dispatch(RedemptionAction::Close);
                refresh();
                || ()
            },
            timeline.clone(),
        );
    }

    use_interval(move || refresh(), config::CLOCK_TICK_MS);

    let highlight = highlight::resolve(&timeline_state, params.highlight, params.event_completed);

    html! {
        <div class="landing">
            <HeroSection
                timeline={(*timeline_state).clone()}
                schedule={timeline.schedule()}
                highlight={highlight}
                event_completed={params.event_completed}
            />
            <Features
                timeline={(*timeline_state).clone()}
                modal={modal.clone()}
            />
        </div>
    }
}
