use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::clipboard;
use crate::config;
use crate::redemption::{CopyResetTimer, RedemptionAction, RedemptionModal};
use crate::timeline::TimelineState;

#[derive(Properties, PartialEq)]
pub struct FeaturesProps {
    pub timeline: TimelineState,
    pub modal: UseReducerHandle<RedemptionModal>,
}

const FEATURES: [(&str, &str, &str); 3] = [
    ("$", "Free v0 Credits", "Credits to use towards building with v0."),
    ("◎", "Global Gallery", "Every project showcased in a worldwide exhibition"),
    ("☺", "Community Voting", "Builders vote for favorites, winners get prizes"),
];

pub fn unlock_label(timeline: &TimelineState) -> String {
    if timeline.has_started {
        "View v0 credit details".to_string()
    } else if timeline.time_left.is_empty() {
        "Credits unlock in soon".to_string()
    } else {
        format!("Credits unlock in {}", timeline.time_left)
    }
}

#[function_component(Features)]
pub fn features(props: &FeaturesProps) -> Html {
    let has_started = props.timeline.has_started;
    let copy_timer = use_mut_ref(CopyResetTimer::<Timeout>::default);

    // Drop any pending reset when the page goes away
    {
        let copy_timer = copy_timer.clone();
        use_effect_with_deps(
            move |_| move || copy_timer.borrow_mut().cancel(),
            (),
        );
    }

    let open = {
        let dispatcher = props.modal.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(RedemptionAction::Open { has_started });
        })
    };

    let close = {
        let dispatcher = props.modal.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(RedemptionAction::Close);
        })
    };

    let copy_code = {
        let dispatcher = props.modal.dispatcher();
        let copy_timer = copy_timer.clone();
        Callback::from(move |_: MouseEvent| {
            let dispatcher = dispatcher.clone();
            let copy_timer = copy_timer.clone();
            spawn_local(async move {
                match clipboard::write_text(config::REDEMPTION_CODE).await {
                    Ok(()) => {
                        let expire = dispatcher.clone();
                        let seq = copy_timer.borrow_mut().restart(move |seq| {
                            Timeout::new(config::COPY_RESET_MS, move || {
                                expire.dispatch(RedemptionAction::CopyExpired(seq));
                            })
                        });
                        info!("Redemption code copied");
                        dispatcher.dispatch(RedemptionAction::Copied(seq));
                    }
                    Err(e) => warn!("Failed to copy redemption code: {}", e),
                }
            });
        })
    };

    let modal = &*props.modal;

    html! {
        <section class="features">
            <style>
                {r#"
                    .features {
                        padding: 8rem 1.5rem;
                        background: transparent;
                    }
                    .features-inner {
                        max-width: 64rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .features h2 {
                        font-size: 3rem;
                        font-weight: 600;
                        margin: 0;
                    }
                    .unlock {
                        margin-top: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.75rem;
                        font-size: 0.875rem;
                        color: #a1a1aa;
                    }
                    .unlock-button, .modal-button {
                        padding: 0.625rem 1.5rem;
                        border-radius: 0.375rem;
                        border: none;
                        background: #fafafa;
                        color: #18181b;
                        font-size: 1rem;
                        cursor: pointer;
                    }
                    .unlock-button:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    .modal-button.outline {
                        background: transparent;
                        color: #fafafa;
                        border: 1px solid #3f3f46;
                    }
                    @keyframes riseIn {
                        from { opacity: 0; transform: translateY(12px); filter: blur(12px); }
                        to { opacity: 1; transform: translateY(0); filter: blur(0); }
                    }
                    .feature-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        margin-top: 4rem;
                        border: 1px solid #27272a;
                        border-radius: 0.75rem;
                        overflow: hidden;
                    }
                    .feature-card {
                        padding: 2rem 1.5rem;
                        animation: riseIn 0.6s ease-out both;
                    }
                    .feature-card + .feature-card { border-left: 1px solid #27272a; }
                    .feature-card:nth-child(2) { animation-delay: 0.05s; }
                    .feature-card:nth-child(3) { animation-delay: 0.1s; }
                    .feature-icon {
                        width: 3rem;
                        height: 3rem;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-left: 1px solid #3f3f46;
                        border-top: 1px solid #3f3f46;
                        font-size: 1.5rem;
                    }
                    .feature-card h3 {
                        margin-top: 1.5rem;
                        font-size: 1.25rem;
                        font-weight: 500;
                    }
                    .feature-card p {
                        font-size: 0.875rem;
                        color: #a1a1aa;
                    }
                    .modal-layer {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 2rem 1.5rem;
                    }
                    .modal-backdrop {
                        position: absolute;
                        inset: 0;
                        border: none;
                        background: rgba(0, 0, 0, 0.4);
                        backdrop-filter: blur(4px);
                    }
                    .modal-card {
                        position: relative;
                        width: 100%;
                        max-width: 36rem;
                        padding: 1.5rem;
                        border: 1px solid #27272a;
                        border-radius: 0.75rem;
                        background: rgba(9, 9, 11, 0.95);
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.4);
                        font-size: 0.875rem;
                        color: #a1a1aa;
                    }
                    .modal-card h3 {
                        text-align: center;
                        font-size: 1.5rem;
                        font-weight: 600;
                        color: #fafafa;
                        margin: 0 0 1rem;
                    }
                    .code-box {
                        padding: 0.75rem 1rem;
                        border: 1px dashed #3f3f46;
                        border-radius: 0.5rem;
                        text-align: center;
                        font-size: 1rem;
                        font-weight: 600;
                        color: #fafafa;
                    }
                    .code-box span { font-family: monospace; }
                    .modal-actions {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.75rem;
                    }
                    @media (max-width: 768px) {
                        .features { padding: 4rem 1rem; }
                        .features h2 { font-size: 2.25rem; }
                        .feature-grid { grid-template-columns: 1fr; max-width: 24rem; margin: 2rem auto 0; }
                        .feature-card + .feature-card { border-left: none; border-top: 1px solid #27272a; }
                    }
                "#}
            </style>
            <div class="features-inner">
                <h2>{"Join us for Claremont's first official v0 builder event"}</h2>
                <div class="unlock">
                    <button
                        type="button"
                        class="unlock-button"
                        disabled={!has_started}
                        onclick={open}
                    >
                        {unlock_label(&props.timeline)}
                    </button>
                    <span>{"Local time. Button activates at the event start."}</span>
                </div>

                <div class="feature-grid">
                    { FEATURES.iter().map(|(icon, title, description)| html! {
                        <div class="feature-card">
                            <div class="feature-icon" aria-hidden="true">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    }).collect::<Html>() }
                </div>
            </div>

            {
                if modal.is_open && has_started {
                    html! {
                        <div class="modal-layer">
                            <button
                                type="button"
                                aria-label="Close credit information"
                                class="modal-backdrop"
                                onclick={close.clone()}
                            />
                            <div class="modal-card">
                                <h3>{"v0 Credit Information"}</h3>
                                <div class="code-box">
                                    {"Code: "}<span>{config::REDEMPTION_CODE}</span>
                                </div>
                                <p>{"Credits will expire 2 weeks after redemption and can be redeemed once per individual."}</p>
                                <p>{"Credits can be redeemed at v0.app by going to Profile >> Settings >> Billing >> Redeem usage code."}</p>
                                <div class="modal-actions">
                                    <button type="button" class="modal-button" onclick={copy_code}>
                                        { if modal.has_copied_code { "Copied" } else { "Copy code" } }
                                    </button>
                                    <button type="button" class="modal-button outline" onclick={close}>
                                        {"Close"}
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(has_started: bool, time_left: &str) -> TimelineState {
        TimelineState {
            has_started,
            is_event_day: false,
            active_segment: None,
            minute_of_day: 0,
            time_left: time_left.to_string(),
        }
    }

    #[test]
    fn label_before_start_shows_countdown() {
        assert_eq!(unlock_label(&state(false, "1d 01h 00m 00s")), "Credits unlock in 1d 01h 00m 00s");
    }

    #[test]
    fn label_falls_back_to_soon() {
        assert_eq!(unlock_label(&state(false, "")), "Credits unlock in soon");
    }

    #[test]
    fn label_after_start() {
        assert_eq!(unlock_label(&state(true, "")), "View v0 credit details");
    }
}
