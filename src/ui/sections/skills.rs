use leptos::html;
use leptos::prelude::*;

use crate::core::content::{SKILL_CATEGORIES, SkillCategory};
use crate::core::motion::sequences;
use crate::core::navbar::Anchor;
use crate::core::reveal::DEFAULT_REVEAL_MARGIN_PX;
use crate::ui::icon::Icon;
use crate::ui::reveal::use_reveal;
use crate::ui::sections::SectionHeader;

#[component]
pub fn Skills() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let revealed = use_reveal(container, DEFAULT_REVEAL_MARGIN_PX);

    view! {
        <section id=Anchor::Skills.id() class="section-padding">
            <div class="max-w-6xl mx-auto">
                <div node_ref=container style=move || sequences::SECTION_FADE.style(revealed.get())>
                    <SectionHeader eyebrow="Skills" step=sequences::SECTION_HEADER revealed=revealed>
                        "My " <span class="gradient-text">"toolkit"</span>
                    </SectionHeader>

                    <div class="grid md:grid-cols-2 gap-6">
                        {SKILL_CATEGORIES.iter().enumerate().map(|(index, category)| {
                            view! { <SkillCard category=category index=index revealed=revealed/> }
                        }).collect_view()}
                    </div>

                    <div
                        class="mt-12 text-center"
                        style=move || sequences::SECTION_FOOTNOTE.style(revealed.get())
                    >
                        <p class="text-neutral-500 dark:text-neutral-400">
                            "Always learning and exploring new technologies to stay at the cutting edge."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(
    category: &'static SkillCategory,
    /// Position in the grid, drives both the card and chip delays
    index: usize,
    revealed: ReadSignal<bool>,
) -> impl IntoView {
    let step = sequences::SKILL_CATEGORIES.step(index);

    view! {
        <div class="group" style=move || step.style(revealed.get())>
            <div class="relative p-6 glass-card hover-lift h-full">
                <div class="flex items-center gap-4 mb-6">
                    <div class=format!("p-3 rounded-xl bg-gradient-to-br {} shadow-lg", category.color)>
                        <Icon name=category.icon class="w-6 h-6"/>
                    </div>
                    <h3 class="text-lg font-bold text-neutral-900 dark:text-white">{category.title}</h3>
                </div>

                <div class="grid grid-cols-2 gap-3">
                    {category.skills.iter().enumerate().map(|(skill_index, skill)| {
                        let chip = sequences::skill_chip(index, skill_index);
                        view! {
                            <div
                                class="flex items-center gap-3 p-3 rounded-xl bg-neutral-100/50 dark:bg-neutral-800/50 hover:bg-neutral-200/50 dark:hover:bg-neutral-700/50 transition-colors cursor-default"
                                style=move || chip.style(revealed.get())
                            >
                                <Icon name=skill.icon class="w-5 h-5"/>
                                <span class="text-sm font-medium text-neutral-700 dark:text-neutral-300">{skill.name}</span>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
