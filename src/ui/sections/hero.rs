use leptos::prelude::*;

use crate::core::motion::{hero_fade, sequences};
use crate::core::navbar::Anchor;
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::use_entered;
use crate::ui::scroll::{scroll_to_anchor, use_scroll_offset};

const GRID_PATTERN: &str = "background-image: linear-gradient(rgba(251, 191, 36, 0.03) 1px, transparent 1px), linear-gradient(90deg, rgba(251, 191, 36, 0.03) 1px, transparent 1px); background-size: 64px 64px;";

const NOISE_TEXTURE: &str = "background-image: url(\"data:image/svg+xml,%3Csvg viewBox='0 0 256 256' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='noiseFilter'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='4' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23noiseFilter)'/%3E%3C/svg%3E\");";

/// Radial highlights that follow the pointer, in viewport percentages
fn pointer_gradient(x: f64, y: f64) -> String {
    format!(
        "background: radial-gradient(circle at {x}% {y}%, rgba(251, 191, 36, 0.15) 0%, transparent 50%), \
         radial-gradient(circle at {}% {}%, rgba(245, 158, 11, 0.1) 0%, transparent 40%);",
        100.0 - x,
        100.0 - y
    )
}

/// Pointer position as viewport percentages, tracked while mounted
fn use_pointer_position() -> ReadSignal<(f64, f64)> {
    let position = RwSignal::new((0.0, 0.0));

    #[cfg(feature = "hydrate")]
    {
        use leptos::ev::mousemove;

        let handle = window_event_listener(mousemove, move |ev| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let width = window.inner_width().ok().and_then(|v| v.as_f64());
            let height = window.inner_height().ok().and_then(|v| v.as_f64());
            match (width, height) {
                (Some(w), Some(h)) if w > 0.0 && h > 0.0 => {
                    position.try_set((
                        f64::from(ev.client_x()) / w * 100.0,
                        f64::from(ev.client_y()) / h * 100.0,
                    ));
                }
                _ => {}
            }
        });
        on_cleanup(move || handle.remove());
    }

    position.read_only()
}

#[component]
pub fn Hero() -> impl IntoView {
    let entered = use_entered();
    let scroll_y = use_scroll_offset();
    let pointer = use_pointer_position();

    let ambient_css: String = sequences::AMBIENT
        .iter()
        .map(|ambient| ambient.css_keyframes())
        .collect::<Vec<_>>()
        .join("\n");

    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden bg-neutral-950">
            <style>{ambient_css}</style>

            <div class="absolute inset-0">
                <div class="absolute inset-0 bg-gradient-to-br from-neutral-950 via-neutral-900 to-neutral-950"/>

                <div
                    class="absolute inset-0 opacity-60 transition-all duration-300 ease-out"
                    style=move || {
                        let (x, y) = pointer.get();
                        pointer_gradient(x, y)
                    }
                />

                <div
                    class="absolute top-1/4 left-1/4 w-96 h-96 bg-amber-500/10 rounded-full blur-3xl"
                    style=format!("animation: {};", sequences::ORB_DRIFT.css_animation())
                />
                <div
                    class="absolute bottom-1/4 right-1/4 w-80 h-80 bg-amber-400/10 rounded-full blur-3xl"
                    style=format!("animation: {};", sequences::ORB_COUNTER_DRIFT.css_animation())
                />
                // The wrapper centres the orb; the pulse owns the inner transform
                <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2">
                    <div
                        class="w-[600px] h-[600px] bg-amber-500/5 rounded-full blur-3xl"
                        style=format!("animation: {};", sequences::ORB_PULSE.css_animation())
                    />
                </div>
            </div>

            <div class="absolute inset-0 opacity-20" style=GRID_PATTERN/>
            <div class="absolute inset-0 opacity-20 mix-blend-soft-light pointer-events-none" style=NOISE_TEXTURE/>

            <div
                class="relative z-10 max-w-6xl mx-auto px-6 text-center"
                style=move || format!("opacity: {};", hero_fade(scroll_y.get()))
            >
                <div style=move || sequences::HERO_CONTENT.style(entered.get())>
                    <p
                        class="text-sm md:text-base font-medium text-amber-400 mb-4 tracking-wide uppercase"
                        style=move || sequences::HERO_TAGLINE.style(entered.get())
                    >
                        "Computer Engineering @ Virginia Tech"
                    </p>

                    <h1
                        class="text-5xl md:text-7xl lg:text-8xl font-bold text-white mb-6 tracking-tight"
                        style=move || sequences::HERO_NAME.style(entered.get())
                    >
                        "Jagan"
                        <br/>
                        <span class="text-amber-400">"Muralitharan"</span>
                    </h1>

                    <div
                        class="flex flex-col sm:flex-row items-center justify-center gap-4 mt-8"
                        style=move || sequences::HERO_ACTIONS.style(entered.get())
                    >
                        <button
                            class="inline-flex items-center justify-center px-6 py-3 rounded-full bg-amber-400 text-black font-medium transition-all duration-300 hover:bg-amber-300 hover:shadow-lg hover:shadow-amber-400/25 active:scale-95 min-w-[160px]"
                            on:click=move |_| scroll_to_anchor(Anchor::Projects.id())
                        >
                            "View Work"
                        </button>
                        <button
                            class="inline-flex items-center justify-center px-6 py-3 rounded-full border-2 border-neutral-600 text-neutral-300 font-medium transition-all duration-300 hover:bg-neutral-800 hover:border-amber-400 hover:text-amber-400 active:scale-95 min-w-[160px]"
                            on:click=move |_| scroll_to_anchor(Anchor::Contact.id())
                        >
                            "Contact Me"
                        </button>
                    </div>
                </div>
            </div>

            <div
                class="absolute bottom-8 left-1/2 -translate-x-1/2 z-10"
            >
                <div style=move || sequences::SCROLL_INDICATOR.style(entered.get())>
                    <button
                        class="flex flex-col items-center gap-2 text-neutral-500 hover:text-amber-400 transition-colors"
                        style=format!("animation: {};", sequences::SCROLL_BOUNCE.css_animation())
                        on:click=move |_| scroll_to_anchor(Anchor::About.id())
                    >
                        <span class="text-xs font-medium tracking-widest uppercase">"Scroll"</span>
                        <Icon name=icons::ARROW_DOWN class="w-5 h-5"/>
                    </button>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_gradient_mirrors_second_highlight() {
        let css = pointer_gradient(25.0, 40.0);
        assert!(css.contains("circle at 25% 40%"));
        assert!(css.contains("circle at 75% 60%"));
    }
}
