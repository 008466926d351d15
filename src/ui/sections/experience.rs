use leptos::html;
use leptos::prelude::*;

use crate::core::content::{EXPERIENCES, Experience as Role};
use crate::core::motion::{AnimationStep, sequences};
use crate::core::navbar::Anchor;
use crate::core::reveal::DEFAULT_REVEAL_MARGIN_PX;
use crate::ui::icon::Icon;
use crate::ui::reveal::use_reveal;
use crate::ui::sections::SectionHeader;

#[component]
pub fn Experience() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let revealed = use_reveal(container, DEFAULT_REVEAL_MARGIN_PX);

    view! {
        <section id=Anchor::Experience.id() class="section-padding">
            <div class="max-w-6xl mx-auto">
                <div node_ref=container style=move || sequences::SECTION_FADE.style(revealed.get())>
                    <SectionHeader eyebrow="Experience" step=sequences::SECTION_HEADER revealed=revealed>
                        "Where I've made an " <span class="gradient-text">"impact"</span>
                    </SectionHeader>

                    <div class="grid gap-6">
                        {EXPERIENCES.iter().enumerate().map(|(index, role)| {
                            view! {
                                <ExperienceCard
                                    role=role
                                    step=sequences::EXPERIENCE_CARDS.step(index)
                                    revealed=revealed
                                />
                            }
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(
    role: &'static Role,
    step: AnimationStep,
    revealed: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="group relative" style=move || step.style(revealed.get())>
            <div class="relative p-8 glass-card hover-lift overflow-hidden">
                <div class=format!(
                    "absolute top-0 left-0 w-1 h-full bg-gradient-to-b {} opacity-50 group-hover:opacity-100 transition-opacity duration-300",
                    role.color,
                )/>

                <div class="flex flex-col lg:flex-row lg:items-start gap-6">
                    <div class=format!("flex-shrink-0 p-4 rounded-2xl bg-gradient-to-br {} shadow-lg", role.color)>
                        <Icon name=role.icon class="w-8 h-8"/>
                    </div>

                    <div class="flex-grow">
                        <div class="flex flex-col md:flex-row md:items-start md:justify-between mb-4">
                            <div>
                                <h3 class="text-xl font-bold text-neutral-900 dark:text-white mb-1">{role.title}</h3>
                                <p class="text-accent-600 dark:text-accent-400 font-medium">{role.company}</p>
                                <p class="text-sm text-neutral-500 dark:text-neutral-400">{role.location}</p>
                            </div>
                            <span class="mt-2 md:mt-0 text-sm font-medium text-neutral-500 dark:text-neutral-400 bg-neutral-100 dark:bg-neutral-800 px-3 py-1 rounded-full">
                                {role.period}
                            </span>
                        </div>

                        <p class="text-neutral-600 dark:text-neutral-400 mb-4 leading-relaxed">{role.description}</p>

                        <div class="flex flex-wrap gap-2">
                            {role.tags.iter().map(|tag| view! {
                                <span class="text-xs font-medium px-3 py-1 rounded-full bg-neutral-100 dark:bg-neutral-800 text-neutral-600 dark:text-neutral-400 hover:bg-accent-500/10 dark:hover:bg-accent-400/10 hover:text-accent-600 dark:hover:text-accent-400 transition-colors">
                                    {*tag}
                                </span>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
