use yew::prelude::*;
use crate::pages::prize_wheel::PrizeWheel;
use crate::styles;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class={styles::CONTAINER}>
            <div class="container mx-auto px-4 py-8">
                <h1 class={classes!(styles::TEXT_H1, "mb-6", "text-center")}>
                    <span class="bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-orange-500">{"Recharge Pin Wheel"}</span>
                </h1>
                <p class={classes!(styles::TEXT_BODY, "text-center", "mb-8")}>
                    {"Spin the wheel for a chance at a real recharge pin. Five spins per hour."}
                </p>
                <PrizeWheel />
            </div>
        </div>
    }
}
