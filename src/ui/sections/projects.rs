use leptos::html;
use leptos::prelude::*;

use crate::core::content::{GITHUB_PROFILE_URL, PROJECTS, Project};
use crate::core::motion::{AnimationStep, sequences};
use crate::core::navbar::Anchor;
use crate::core::reveal::DEFAULT_REVEAL_MARGIN_PX;
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::use_reveal;
use crate::ui::sections::SectionHeader;

#[component]
pub fn Projects() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let revealed = use_reveal(container, DEFAULT_REVEAL_MARGIN_PX);

    // At most one card shows its long description
    let hovered = RwSignal::new(None::<usize>);

    view! {
        <section id=Anchor::Projects.id() class="section-padding bg-neutral-50/50 dark:bg-neutral-900/50">
            <div class="max-w-6xl mx-auto">
                <div node_ref=container style=move || sequences::SECTION_FADE.style(revealed.get())>
                    <SectionHeader eyebrow="Featured Projects" step=sequences::SECTION_HEADER revealed=revealed>
                        "Things I've " <span class="gradient-text">"built"</span>
                    </SectionHeader>

                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {PROJECTS.iter().enumerate().map(|(index, project)| {
                            view! {
                                <ProjectCard
                                    project=project
                                    step=sequences::PROJECT_CARDS.step(index)
                                    revealed=revealed
                                    expanded=Signal::derive(move || hovered.get() == Some(index))
                                    on_hover=Callback::new(move |entered: bool| {
                                        hovered.set(entered.then_some(index));
                                    })
                                />
                            }
                        }).collect_view()}
                    </div>

                    <div
                        class="text-center mt-12"
                        style=move || sequences::SECTION_FOOTNOTE.style(revealed.get())
                    >
                        <a
                            href=GITHUB_PROFILE_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center gap-2 text-accent-600 dark:text-accent-400 font-medium hover:underline"
                        >
                            <Icon name=icons::CODE class="w-5 h-5"/>
                            "View more on GitHub"
                            <Icon name=icons::EXTERNAL_LINK class="w-4 h-4"/>
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    step: AnimationStep,
    revealed: ReadSignal<bool>,
    /// Long description and feature list are showing
    expanded: Signal<bool>,
    on_hover: Callback<bool>,
) -> impl IntoView {
    view! {
        <div
            class="group relative"
            style=move || step.style(revealed.get())
            on:mouseenter=move |_| on_hover.run(true)
            on:mouseleave=move |_| on_hover.run(false)
        >
            <div class="relative h-full p-6 glass-card overflow-hidden transition-all duration-500 hover:-translate-y-2 hover:shadow-2xl">
                <div class=format!(
                    "absolute -inset-px bg-gradient-to-r {} rounded-2xl opacity-0 group-hover:opacity-20 blur-xl transition-opacity duration-500",
                    project.color,
                )/>

                <div class="relative z-10 h-full flex flex-col">
                    <div class=format!(
                        "w-14 h-14 rounded-2xl bg-gradient-to-br {} flex items-center justify-center mb-6 shadow-lg group-hover:scale-110 transition-transform duration-300",
                        project.color,
                    )>
                        <Icon name=project.icon class="w-7 h-7"/>
                    </div>

                    <h3 class="text-xl font-bold text-neutral-900 dark:text-white mb-3 group-hover:text-accent-600 dark:group-hover:text-accent-400 transition-colors">
                        {project.title}
                    </h3>

                    <p class="text-neutral-600 dark:text-neutral-400 mb-6 flex-grow">
                        {move || if expanded.get() { project.long_description } else { project.description }}
                    </p>

                    <div
                        class="overflow-hidden mb-4 transition-all duration-300"
                        class:opacity-0=move || !expanded.get()
                        class:max-h-0=move || !expanded.get()
                        class:max-h-40=move || expanded.get()
                    >
                        <div class="space-y-2">
                            {project.features.iter().map(|feature| view! {
                                <div class="flex items-center gap-2 text-sm text-neutral-600 dark:text-neutral-400">
                                    <div class="w-1.5 h-1.5 rounded-full bg-accent-500 dark:bg-accent-400"/>
                                    {*feature}
                                </div>
                            }).collect_view()}
                        </div>
                    </div>

                    <div class="flex flex-wrap gap-2 mt-auto">
                        {project.tech.iter().map(|tech| view! {
                            <span class="text-xs font-medium px-3 py-1 rounded-full bg-neutral-100 dark:bg-neutral-800 text-neutral-600 dark:text-neutral-400">
                                {*tech}
                            </span>
                        }).collect_view()}
                    </div>

                    {project.github.map(|url| view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center gap-2 mt-4 text-sm font-medium text-neutral-600 dark:text-neutral-400 hover:text-accent-600 dark:hover:text-accent-400 transition-colors"
                        >
                            <Icon name=icons::GITHUB class="w-4 h-4"/>
                            "View Code"
                            <Icon name=icons::EXTERNAL_LINK class="w-3 h-3"/>
                        </a>
                    })}
                </div>

                <div class="absolute inset-0 rounded-2xl border-2 border-transparent group-hover:border-accent-500/20 dark:group-hover:border-accent-400/20 transition-colors duration-300"/>
            </div>
        </div>
    }
}
