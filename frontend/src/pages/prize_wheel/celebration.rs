use rand::Rng;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use gloo_timers::future::TimeoutFuture;
use web_sys::{window, HtmlElement};

use shared::wheel::{
    CELEBRATION_DURATION_MS, CELEBRATION_PARTICLES, PARTICLE_ANIMATION_MS, PARTICLE_MAX_DELAY_MS,
};

// Injected into <head> together with the page CSS.
pub const CELEBRATION_CSS: &str = r#"
@keyframes prize-particle {
    0% {
        transform: scale(0);
        opacity: 0;
    }
    10% {
        transform: scale(1);
        opacity: 1;
    }
    100% {
        transform: translateY(-100vh) scale(0);
        opacity: 0;
    }
}
"#;

const PARTICLE_COLORS: [&str; 8] = [
    "#ff6b6b", "#4ecdc4", "#45b7d1", "#ff9ff3",
    "#54a0ff", "#5f27cd", "#01a3a4", "#222f3e",
];

/// Fires one full-screen particle burst and tears it down after the
/// animation finishes. Purely decorative; any DOM failure just skips it.
pub fn spawn_celebration() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };

    let Ok(container) = document.create_element("div") else {
        return;
    };
    let Ok(container) = container.dyn_into::<HtmlElement>() else {
        return;
    };
    let _ = container.set_attribute(
        "style",
        "position: fixed; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; z-index: 9999;",
    );

    let mut rng = rand::thread_rng();
    for _ in 0..CELEBRATION_PARTICLES {
        let Ok(particle) = document.create_element("div") else {
            continue;
        };
        let color = PARTICLE_COLORS[rng.gen_range(0..PARTICLE_COLORS.len())];
        let top = rng.gen_range(0.0..100.0f64);
        let left = rng.gen_range(0.0..100.0f64);
        let delay = rng.gen_range(0..PARTICLE_MAX_DELAY_MS);

        let _ = particle.set_attribute(
            "style",
            &format!(
                "position: absolute; width: 10px; height: 10px; border-radius: 50%; \
                 background: {}; top: {:.2}%; left: {:.2}%; opacity: 0; \
                 animation: prize-particle {}ms cubic-bezier(0.68, -0.55, 0.265, 1.55) {}ms both;",
                color, top, left, PARTICLE_ANIMATION_MS, delay
            ),
        );
        let _ = container.append_child(&particle);
    }

    if body.append_child(&container).is_err() {
        return;
    }

    spawn_local(async move {
        TimeoutFuture::new(CELEBRATION_DURATION_MS).await;
        container.remove();
    });
}
