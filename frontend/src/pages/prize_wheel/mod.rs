mod celebration;
mod wheel_canvas;
mod wheel_utils;

use yew::prelude::*;
use web_sys::window;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use shared::config::WheelConfig;
use shared::player::{PlayerState, SpinError};
use shared::rewards::{generate_rewards, Reward};
use shared::wheel::{
    ease_out_cubic, plan_final_angle, resolve_spin, SpinPhase,
    RAPID_SPIN_DURATION_MS, RAPID_SPIN_TICK_MS, SETTLE_DURATION_MS,
};

use crate::storage::LocalSpinStore;
use crate::styles;

use wheel_canvas::WheelCanvas;
use wheel_utils::{format_time, ResultDisplay, SpinButton};

// Add custom CSS for animations
const CUSTOM_CSS: &str = r#"
@keyframes pulse-subtle {
    0% {
        transform: scale(1);
        box-shadow: 0 0 0 0 rgba(255, 215, 0, 0.4);
    }
    70% {
        transform: scale(1.02);
        box-shadow: 0 0 0 10px rgba(255, 215, 0, 0);
    }
    100% {
        transform: scale(1);
        box-shadow: 0 0 0 0 rgba(255, 215, 0, 0);
    }
}

.animate-pulse-subtle {
    animation: pulse-subtle 2s infinite;
}
"#;

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

fn remaining_secs(ms: u64) -> i64 {
    ((ms + 999) / 1000) as i64
}

#[function_component(PrizeWheel)]
pub fn prize_wheel() -> Html {
    // Apply custom CSS
    {
        use_effect_with((), move |_| {
            let style_element = if let Some(window) = window() {
                if let Some(document) = window.document() {
                    let head = document.head().expect("Document should have a head");
                    let style = document.create_element("style").expect("Should be able to create style element");
                    style.set_text_content(Some(&format!("{}\n{}", CUSTOM_CSS, celebration::CELEBRATION_CSS)));
                    let _ = head.append_child(&style);

                    Some(style)
                } else {
                    None
                }
            } else {
                None
            };

            move || {
                if let Some(style) = style_element {
                    if let Some(parent) = style.parent_node() {
                        let _ = parent.remove_child(&style);
                    }
                }
            }
        });
    }

    // One reward list per page load; its order is the wedge order.
    let rewards = use_state(|| generate_rewards(&WheelConfig::new(), &mut rand::thread_rng()));

    // Persisted counters, with the cooldown reset applied on load.
    let player = use_state(|| PlayerState::load(&LocalSpinStore::new(), &WheelConfig::new(), now_ms()));

    let phase = use_state(|| SpinPhase::Idle);
    let rotation = use_state(|| 0.0f64);
    let result = use_state(|| None::<Reward>);
    let status_message = use_state(String::new);
    let cooldown_seconds = use_state(|| remaining_secs(player.cooldown_remaining_ms(now_ms())));

    // Cooldown countdown. Recreated each tick so the closure always sees the
    // current value (the effect depends on it).
    {
        let cooldown_seconds = cooldown_seconds.clone();
        let player = player.clone();

        use_effect_with(*cooldown_seconds, move |secs| {
            if *secs <= 0 {
                return Box::new(|| ()) as Box<dyn FnOnce()>;
            }

            let interval = Interval::new(1000, move || {
                let current = *cooldown_seconds;
                if current > 1 {
                    cooldown_seconds.set(current - 1);
                } else {
                    cooldown_seconds.set(0);
                    // Cooldown over: fresh cycle, cooldown key cleared.
                    let mut state = (*player).clone();
                    state.reset(&LocalSpinStore::new(), &WheelConfig::new());
                    player.set(state);
                }
            });

            Box::new(move || drop(interval)) as Box<dyn FnOnce()>
        });
    }

    let start_spin = {
        let rewards = rewards.clone();
        let player = player.clone();
        let phase = phase.clone();
        let rotation = rotation.clone();
        let result = result.clone();
        let status_message = status_message.clone();
        let cooldown_seconds = cooldown_seconds.clone();

        Callback::from(move |_| {
            if *phase != SpinPhase::Idle {
                return;
            }

            let config = WheelConfig::new();
            let store = LocalSpinStore::new();
            let now = now_ms();

            if player.cooldown_remaining_ms(now) > 0 {
                log::warn!("prevented spin attempt during cooldown");
                return;
            }

            let mut state = (*player).clone();
            match state.record_spin(&store, &config, now) {
                Ok(()) => {}
                Err(SpinError::NoSpinsRemaining) => {
                    status_message.set(format!(
                        "No spins left! Try again after {} hour.",
                        config.cooldown_hours()
                    ));
                    return;
                }
            }

            // The last spin of the cycle starts the cooldown immediately,
            // while the wheel is still turning.
            if state.spins_left == 0 {
                cooldown_seconds.set(remaining_secs(config.cooldown_ms));
            }
            player.set(state);
            phase.set(SpinPhase::Spinning);
            result.set(None);
            status_message.set(String::new());

            let rewards = (*rewards).clone();
            let phase = phase.clone();
            let rotation = rotation.clone();
            let result = result.clone();

            spawn_local(async move {
                // Rapid stage: a full turn every tick.
                let spun = Rc::new(Cell::new(*rotation));
                let interval = {
                    let rotation = rotation.clone();
                    let spun = spun.clone();
                    Interval::new(RAPID_SPIN_TICK_MS, move || {
                        spun.set(spun.get() + 360.0);
                        rotation.set(spun.get());
                    })
                };
                TimeoutFuture::new(RAPID_SPIN_DURATION_MS).await;
                drop(interval);

                // Settle stage: ease forward into the randomly chosen
                // resting angle.
                let final_angle = plan_final_angle(spun.get(), &mut rand::thread_rng());
                let start_time = js_sys::Date::now();
                let start_rotation = spun.get();
                let rotation_change = final_angle - start_rotation;

                let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
                let g = f.clone();

                *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    let elapsed = js_sys::Date::now() - start_time;
                    let progress = (elapsed / SETTLE_DURATION_MS).min(1.0);

                    let eased_progress = ease_out_cubic(progress);
                    rotation.set(start_rotation + rotation_change * eased_progress);

                    if elapsed < SETTLE_DURATION_MS {
                        if let Some(window) = web_sys::window() {
                            let _ = window.request_animation_frame(
                                f.borrow().as_ref().unwrap().as_ref().unchecked_ref()
                            );
                        }
                    } else {
                        rotation.set(final_angle);

                        let outcome = resolve_spin(final_angle, &rewards);
                        let reward = rewards[outcome.index].clone();

                        phase.set(SpinPhase::Revealing);
                        for _ in 0..outcome.celebration_bursts {
                            celebration::spawn_celebration();
                        }
                        result.set(Some(reward));

                        // The outcome stays on screen; the control unlocks on
                        // the next tick.
                        let phase = phase.clone();
                        spawn_local(async move {
                            TimeoutFuture::new(0).await;
                            phase.set(SpinPhase::Idle);
                        });
                    }
                }) as Box<dyn FnMut()>));

                if let Some(window) = web_sys::window() {
                    let _ = window.request_animation_frame(
                        g.borrow().as_ref().unwrap().as_ref().unchecked_ref()
                    );
                }
            });
        })
    };

    let is_spinning = *phase != SpinPhase::Idle;
    let on_cooldown = *cooldown_seconds > 0;
    let config = WheelConfig::new();

    html! {
        <div class="bg-white dark:bg-gray-800 p-6 sm:p-8 rounded-2xl shadow-xl dark:shadow-[0_8px_30px_-12px_rgba(255,255,255,0.1)] max-w-2xl mx-auto border border-gray-100 dark:border-gray-700 backdrop-blur-sm">
            <div class="relative mx-auto mb-8 flex justify-center items-center">
                <div class="w-full max-w-[450px] mx-auto">
                    <WheelCanvas rotation={*rotation} is_spinning={is_spinning} rewards={(*rewards).clone()} />
                </div>
            </div>

            if !(*status_message).is_empty() {
                <div class="mb-6 text-center">
                    <p class={styles::CARD_ERROR}>{&*status_message}</p>
                </div>
            }

            <div class="flex justify-center mt-4">
                if on_cooldown {
                    <div class="w-full max-w-[300px]">
                        <div class="mb-2 flex justify-between items-center">
                            <span class="text-sm font-medium text-gray-700 dark:text-gray-300">{"Next spins available in:"}</span>
                            <span class="text-sm font-bold text-blue-600 dark:text-blue-400">{format_time(*cooldown_seconds)}</span>
                        </div>
                        <div class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-2.5 mb-4">
                            <div class="bg-gradient-to-r from-blue-500 to-purple-600 h-2.5 rounded-full transition-all duration-500"
                                style={format!("width: {}%", (1.0 - (*cooldown_seconds as f64 * 1000.0 / config.cooldown_ms as f64)) * 100.0)}>
                            </div>
                        </div>
                        <SpinButton
                            is_spinning={is_spinning}
                            is_on_cooldown={true}
                            cooldown_seconds={*cooldown_seconds}
                            spins_left={player.spins_left}
                            onclick={start_spin.clone()}
                        />
                    </div>
                } else {
                    <div class="w-full max-w-[300px]">
                        <SpinButton
                            is_spinning={is_spinning}
                            is_on_cooldown={false}
                            cooldown_seconds={0}
                            spins_left={player.spins_left}
                            onclick={start_spin.clone()}
                        />
                    </div>
                }
            </div>

            <ResultDisplay reward={(*result).clone()} />

            <div class="mt-8 text-center bg-gray-50 dark:bg-gray-700/30 p-6 rounded-xl shadow-sm">
                <h3 class="font-bold text-lg mb-3 text-gray-800 dark:text-gray-200">{"How to Play"}</h3>
                <p class={classes!(styles::TEXT_BODY, "mb-4")}>
                    {format!(
                        "You get {} spins, then the wheel locks for {} hour. Land on a real pin to win a recharge code you can copy and redeem.",
                        config.total_spins,
                        config.cooldown_hours()
                    )}
                </p>
                <div class={classes!(styles::TEXT_SMALL, "bg-gray-100", "dark:bg-gray-800", "p-2", "rounded-md", "inline-block")}>
                    {"Most wedges hold false pins. Good luck!"}
                </div>
            </div>
        </div>
    }
}
