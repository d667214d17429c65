use yew::prelude::*;
use web_sys::{window, HtmlCanvasElement, CanvasRenderingContext2d};
use wasm_bindgen::JsCast;
use std::f64::consts::PI;

use shared::rewards::Reward;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub rotation: f64,
    pub is_spinning: bool,
    pub rewards: Vec<Reward>,
}

fn wedge_color(reward: &Reward, index: usize, is_dark_mode: bool) -> &'static str {
    if reward.is_real {
        match reward.value {
            v if v >= 200 => "#f97316", // Orange
            v if v >= 100 => "#06b6d4", // Cyan
            _ => "#8b5cf6",             // Violet
        }
    } else if is_dark_mode {
        if index % 2 == 0 { "#2d3142" } else { "#3b4057" }
    } else {
        if index % 2 == 0 { "#cbd5e1" } else { "#e2e8f0" }
    }
}

fn wedge_label(reward: &Reward) -> String {
    if reward.is_real {
        format!("N{}", reward.value)
    } else {
        "FALSE".to_string()
    }
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let rotation = props.rotation;
        let is_spinning = props.is_spinning;
        let rewards = props.rewards.clone();

        use_effect_with(
            (rotation, is_spinning, rewards),
            move |(rotation, is_spinning, rewards)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let context = canvas
                        .get_context("2d")
                        .unwrap()
                        .unwrap()
                        .dyn_into::<CanvasRenderingContext2d>()
                        .unwrap();

                    let width = canvas.width() as f64;
                    let height = canvas.height() as f64;
                    let center_x = width / 2.0;
                    let center_y = height / 2.0;
                    let radius = if width < height { width / 2.0 - 20.0 } else { height / 2.0 - 20.0 };
                    let wedge_count = rewards.len().max(1);
                    let wedge_rad = 2.0 * PI / wedge_count as f64;

                    // Clear canvas
                    context.clear_rect(0.0, 0.0, width, height);

                    // Check if dark mode is active
                    let is_dark_mode = if let Some(window) = window() {
                        if let Some(document) = window.document() {
                            document.document_element()
                                .map(|el| el.class_list().contains("dark"))
                                .unwrap_or(false)
                        } else {
                            false
                        }
                    } else {
                        false
                    };

                    // Outer glow, brighter while the wheel is moving
                    let glow_radius = radius + 15.0;
                    let glow_intensity = if *is_spinning { 0.25 } else { 0.15 };
                    context.begin_path();
                    if is_dark_mode {
                        context.set_fill_style_str(&format!("rgba(130, 100, 255, {})", glow_intensity));
                    } else {
                        context.set_fill_style_str(&format!("rgba(100, 130, 255, {})", glow_intensity));
                    }
                    let _ = context.arc(center_x, center_y, glow_radius, 0.0, 2.0 * PI);
                    context.fill();

                    // Wheel background
                    context.begin_path();
                    if is_dark_mode {
                        context.set_fill_style_str("#1a1c2e");
                    } else {
                        context.set_fill_style_str("#f0f2ff");
                    }
                    let _ = context.arc(center_x, center_y, radius, 0.0, 2.0 * PI);
                    context.fill();

                    // Save context state before rotation
                    context.save();
                    let _ = context.translate(center_x, center_y);
                    let _ = context.rotate(*rotation * PI / 180.0);
                    let _ = context.translate(-center_x, -center_y);

                    // One wedge per reward, in generation order
                    for (i, reward) in rewards.iter().enumerate() {
                        let start = i as f64 * wedge_rad;
                        let end = start + wedge_rad;

                        context.begin_path();
                        context.set_fill_style_str(wedge_color(reward, i, is_dark_mode));
                        context.move_to(center_x, center_y);
                        let _ = context.arc(center_x, center_y, radius, start, end);
                        context.fill();

                        // Divider between wedges
                        context.begin_path();
                        context.set_stroke_style_str(if is_dark_mode {
                            "rgba(255, 255, 255, 0.4)"
                        } else {
                            "rgba(255, 255, 255, 0.8)"
                        });
                        context.set_line_width(2.0);
                        context.move_to(center_x, center_y);
                        context.line_to(center_x + radius * start.cos(), center_y + radius * start.sin());
                        context.stroke();
                    }

                    // Wedge labels, rotated into the middle of each wedge
                    context.set_text_align("center");
                    context.set_text_baseline("middle");
                    context.set_shadow_color(if is_dark_mode { "rgba(0, 0, 0, 0.7)" } else { "rgba(0, 0, 0, 0.5)" });
                    context.set_shadow_blur(3.0);
                    context.set_shadow_offset_x(1.0);
                    context.set_shadow_offset_y(1.0);

                    for (i, reward) in rewards.iter().enumerate() {
                        let middle = (i as f64 + 0.5) * wedge_rad;
                        context.save();
                        let _ = context.translate(center_x, center_y);
                        let _ = context.rotate(middle);
                        let _ = context.translate(radius * 0.72, 0.0);
                        context.set_font("bold 13px 'Segoe UI', Roboto, system-ui, sans-serif");
                        if reward.is_real {
                            context.set_fill_style_str("#ffffff");
                        } else {
                            context.set_fill_style_str(if is_dark_mode { "#9ca3af" } else { "#64748b" });
                        }
                        let _ = context.fill_text(&wedge_label(reward), 0.0, 0.0);
                        context.restore();
                    }

                    context.set_shadow_color("rgba(0, 0, 0, 0)");
                    context.set_shadow_blur(0.0);
                    context.set_shadow_offset_x(0.0);
                    context.set_shadow_offset_y(0.0);

                    // Inner hub
                    let inner_radius = radius * 0.18;
                    context.begin_path();
                    if is_dark_mode {
                        context.set_fill_style_str("#2d3142");
                    } else {
                        context.set_fill_style_str("#8b5cf6");
                    }
                    let _ = context.arc(center_x, center_y, inner_radius, 0.0, 2.0 * PI);
                    context.fill();

                    context.begin_path();
                    context.set_stroke_style_str(
                        if is_dark_mode { "rgba(0, 0, 0, 0.5)" } else { "rgba(0, 0, 0, 0.2)" }
                    );
                    context.set_line_width(2.0);
                    let _ = context.arc(center_x, center_y, inner_radius, 0.0, 2.0 * PI);
                    context.stroke();

                    // Restore context to original state (no rotation)
                    context.restore();

                    // Outer ring, pulsing while spinning
                    context.begin_path();
                    if *is_spinning {
                        let pulse = (js_sys::Date::now() / 400.0).sin() * 0.2 + 0.5;
                        let stroke_color = if is_dark_mode {
                            format!("rgba(180, 130, 255, {})", pulse)
                        } else {
                            format!("rgba(130, 100, 255, {})", pulse)
                        };
                        context.set_stroke_style_str(&stroke_color);
                        context.set_line_width(5.0);
                    } else {
                        context.set_stroke_style_str(
                            if is_dark_mode {
                                "rgba(180, 130, 255, 0.5)"
                            } else {
                                "rgba(130, 100, 255, 0.5)"
                            }
                        );
                        context.set_line_width(4.0);
                    }
                    let _ = context.arc(center_x, center_y, radius - 2.0, 0.0, 2.0 * PI);
                    context.stroke();

                    // Pointer at the top
                    context.set_shadow_color(if *is_spinning {
                        "rgba(255, 215, 130, 0.8)"
                    } else {
                        "rgba(255, 215, 0, 0.6)"
                    });
                    context.set_shadow_blur(if *is_spinning { 10.0 } else { 4.0 });

                    let pointer_width = 16.0;
                    let pointer_height = 26.0;
                    context.begin_path();
                    context.move_to(center_x, center_y - radius + 8.0);
                    context.line_to(center_x - pointer_width, center_y - radius - pointer_height);
                    context.line_to(center_x + pointer_width, center_y - radius - pointer_height);
                    context.close_path();

                    if *is_spinning {
                        context.set_fill_style_str("#ffd700");
                    } else {
                        context.set_fill_style_str("#f59e0b");
                    }
                    context.fill();

                    context.set_stroke_style_str("#e69500");
                    context.set_line_width(1.5);
                    context.stroke();

                    context.set_shadow_color("rgba(0, 0, 0, 0)");
                    context.set_shadow_blur(0.0);
                }
                || ()
            }
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width="450"
                height="450"
                class="w-full max-w-[450px] h-auto rounded-full shadow-lg transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(130, 100, 255, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}
