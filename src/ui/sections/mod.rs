//! Page sections, top to bottom

pub mod about;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod projects;
pub mod skills;

pub use about::About;
pub use contact::Contact;
pub use experience::Experience;
pub use hero::Hero;
pub use projects::Projects;
pub use skills::Skills;

use leptos::prelude::*;

use crate::core::motion::AnimationStep;

/// Eyebrow label and heading shared by every section below the hero
#[component]
pub fn SectionHeader(
    eyebrow: &'static str,
    step: AnimationStep,
    revealed: ReadSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16" style=move || step.style(revealed.get())>
            <span class="text-sm font-medium text-accent-600 dark:text-accent-400 tracking-wide uppercase">
                {eyebrow}
            </span>
            <h2 class="text-4xl md:text-5xl font-bold text-neutral-900 dark:text-white mt-4">
                {children()}
            </h2>
        </div>
    }
}
