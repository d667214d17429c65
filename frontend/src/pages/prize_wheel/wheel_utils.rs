use yew::prelude::*;
use web_sys::window;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use gloo_timers::future::TimeoutFuture;

use shared::rewards::Reward;

use crate::styles;

// Format time for cooldown display
pub fn format_time(seconds: i64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub is_on_cooldown: bool,
    pub cooldown_seconds: i64,
    pub spins_left: u32,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning {
        "Spinning...".to_string()
    } else if props.is_on_cooldown {
        format!("Cooldown: {}", format_time(props.cooldown_seconds))
    } else if props.spins_left > 0 {
        format!("Spin ({} left)", props.spins_left)
    } else {
        "No spins left".to_string()
    };

    let is_disabled = props.is_spinning || props.is_on_cooldown || props.spins_left == 0;

    let button_class = if is_disabled {
        if props.is_on_cooldown {
            "bg-gradient-to-r from-blue-400 to-gray-400 opacity-80 cursor-not-allowed text-white"
        } else {
            "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
        }
    } else {
        "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0"
    };

    let animation_class = if !is_disabled && !props.is_spinning {
        "animate-pulse-subtle"
    } else {
        ""
    };

    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <div class="relative">
            <div class={classes!(
                "relative",
                "overflow-hidden",
                "rounded-full",
                "w-full",
                button_class,
                animation_class
            )}>
                <button
                    onclick={props.onclick.clone()}
                    disabled={is_disabled}
                    class={classes!(
                        "relative",
                        "w-full",
                        "px-8",
                        "py-4",
                        "font-bold",
                        "text-lg",
                        "transition-all",
                        "duration-300",
                        "border-2",
                        "border-transparent",
                        "hover:border-white",
                        "focus:outline-none",
                        "focus:ring-4",
                        "focus:ring-yellow-300",
                        "focus:ring-opacity-50",
                        "bg-transparent",
                    )}
                >
                    <div class="flex items-center justify-center relative z-10">
                        <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <circle cx="12" cy="12" r="10" />
                            <path d="M12 6v6l4 2" />
                        </svg>
                        <span>{button_text}</span>
                    </div>
                </button>
            </div>
        </div>
    }
}

// Result display component
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub reward: Option<Reward>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let copied = use_state(|| false);

    let Some(reward) = &props.reward else {
        return html! {};
    };

    let (message, message_class) = if reward.is_real {
        (
            format!("Congratulations! You've won a {} worth N{}!", reward.name, reward.value),
            "text-green-500 dark:text-green-400",
        )
    } else {
        (
            "Oops! This is a false recharge pin. Try again!".to_string(),
            "text-red-500 dark:text-red-400",
        )
    };

    let on_copy = {
        let code = reward.code.clone();
        let copied = copied.clone();
        Callback::from(move |_| {
            let Some(window) = window() else { return };
            let promise = window.navigator().clipboard().write_text(&code);
            let copied = copied.clone();
            spawn_local(async move {
                // Copy failures are silently ignored.
                if JsFuture::from(promise).await.is_ok() {
                    copied.set(true);
                    TimeoutFuture::new(1500).await;
                    copied.set(false);
                }
            });
        })
    };

    html! {
        <div class="mt-8 mb-4 flex flex-col items-center justify-center">
            <p class={classes!("font-bold", "text-xl", "text-center", message_class)}>
                {message}
            </p>
            <div class="flex items-center gap-2 mt-4 w-full max-w-[360px]">
                <input
                    class={classes!(styles::INPUT, "font-mono", "text-center")}
                    readonly={true}
                    value={reward.code.clone()}
                />
                <button class={classes!(styles::BUTTON_SECONDARY, "mt-2", "whitespace-nowrap")} onclick={on_copy}>
                    { if *copied { "Copied!" } else { "Copy" } }
                </button>
            </div>
        </div>
    }
}
