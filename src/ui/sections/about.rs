use leptos::html;
use leptos::prelude::*;

use crate::core::content::FOCUS_AREAS;
use crate::core::motion::sequences;
use crate::core::navbar::Anchor;
use crate::core::reveal::DEFAULT_REVEAL_MARGIN_PX;
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::use_reveal;
use crate::ui::sections::SectionHeader;

#[component]
pub fn About() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let revealed = use_reveal(container, DEFAULT_REVEAL_MARGIN_PX);

    let text_step = sequences::ABOUT_ITEMS.step(1);
    let focus_step = sequences::ABOUT_ITEMS.step(2);

    view! {
        <section id=Anchor::About.id() class="section-padding bg-neutral-50/50 dark:bg-neutral-900/50">
            <div class="max-w-6xl mx-auto">
                <div node_ref=container>
                    <SectionHeader eyebrow="About Me" step=sequences::ABOUT_ITEMS.step(0) revealed=revealed>
                        "Passionate about building"
                        <br/>
                        <span class="gradient-text">"intelligent systems"</span>
                    </SectionHeader>

                    <div class="grid lg:grid-cols-2 gap-12 lg:gap-20 items-center">
                        <div class="space-y-6" style=move || text_step.style(revealed.get())>
                            <p class="text-lg text-neutral-600 dark:text-neutral-400 leading-relaxed">
                                "I'm a Computer Engineering student at Virginia Tech with a deep passion for creating technology that makes a difference. My journey spans from low-level embedded systems to high-level AI applications."
                            </p>
                            <p class="text-lg text-neutral-600 dark:text-neutral-400 leading-relaxed">
                                "Currently, I'm focused on bridging the gap between artificial intelligence and physical systems, developing solutions that combine sophisticated algorithms with real-world hardware implementations."
                            </p>

                            <div class="flex items-center gap-4 p-4 glass-card">
                                <div class="p-3 rounded-xl bg-accent-500/10 dark:bg-accent-400/10">
                                    <Icon name=icons::ACADEMIC_CAP class="w-6 h-6"/>
                                </div>
                                <div>
                                    <p class="font-semibold text-neutral-900 dark:text-white">"Virginia Tech"</p>
                                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                        "B.S. Computer Engineering • Expected May 2027"
                                    </p>
                                </div>
                            </div>
                        </div>

                        <div class="space-y-4" style=move || focus_step.style(revealed.get())>
                            {FOCUS_AREAS.iter().enumerate().map(|(index, area)| {
                                let step = sequences::ABOUT_FOCUS_AREAS.step(index);
                                view! {
                                    <div
                                        class="group p-6 glass-card hover-lift cursor-default"
                                        style=move || step.style(revealed.get())
                                    >
                                        <div class="flex items-start gap-4">
                                            <div class="p-3 rounded-xl bg-accent-500/10 dark:bg-accent-400/10 group-hover:bg-accent-500 dark:group-hover:bg-accent-400 transition-colors duration-300">
                                                <Icon name=area.icon class="w-6 h-6"/>
                                            </div>
                                            <div>
                                                <h3 class="font-semibold text-neutral-900 dark:text-white mb-1">{area.title}</h3>
                                                <p class="text-sm text-neutral-600 dark:text-neutral-400">{area.description}</p>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
