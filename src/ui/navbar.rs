use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::core::content::INITIALS;
use crate::core::motion::sequences;
use crate::core::navbar::{Anchor, CloseReason, NavbarController, Presentation};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::use_entered;
use crate::ui::scroll::{DomScroller, use_scroll_offset};

/// Site navigation: an inline top bar before the scroll threshold, a floating
/// pill after it, and an overlay menu on small screens.
#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavbarController::new());
    let offset = use_scroll_offset();

    Effect::new(move |_| {
        let y = offset.get();
        nav.maybe_update(|n| n.on_scroll(y));
    });

    let menu_open = Memo::new(move |_| nav.with(|n| n.menu().is_open()));
    let toggle_menu = move |_: MouseEvent| nav.update(|n| n.menu_mut().toggle());

    let follow = Callback::new(move |anchor: Anchor| {
        let result = nav.try_update(|n| n.follow_link(anchor, &DomScroller));
        if let Some(Err(err)) = result {
            leptos::logging::warn!("Navigation skipped: {}", err);
        }
    });

    let close_menu = Callback::new(move |reason: CloseReason| {
        nav.update(|n| {
            n.menu_mut().close(reason);
        });
    });

    view! {
        // Floating pill
        <nav
            class="fixed top-0 left-0 right-0 z-50 px-6 py-4"
            style=move || nav.with(|n| n.style(Presentation::Floating).css())
        >
            <div class="max-w-6xl mx-auto">
                <div class="bg-neutral-900/80 backdrop-blur-xl border border-neutral-800/50 rounded-full px-6 py-3 flex items-center justify-between shadow-lg shadow-black/20">
                    <a href="#" class="text-xl font-bold text-white">{INITIALS}</a>

                    <NavLinks on_follow=follow/>

                    <button
                        class="md:hidden p-2 rounded-full hover:bg-neutral-800 transition-colors"
                        aria-label="Toggle menu"
                        on:click=toggle_menu
                    >
                        {move || {
                            let name = if menu_open.get() { icons::X } else { icons::MENU };
                            view! { <Icon name=name class="w-5 h-5"/> }
                        }}
                    </button>
                </div>
            </div>
        </nav>

        // Inline bar shown before the threshold
        <div
            class="fixed top-0 left-0 right-0 z-40 px-6 py-6"
            style=move || nav.with(|n| n.style(Presentation::Inline).css())
        >
            <div class="max-w-6xl mx-auto flex items-center justify-between">
                <a href="#" class="text-xl font-bold text-white">{INITIALS}</a>

                <div class="flex items-center gap-4">
                    <button
                        class="md:hidden p-2 rounded-full hover:bg-neutral-800 transition-colors"
                        aria-label="Toggle menu"
                        on:click=toggle_menu
                    >
                        <Icon name=icons::MENU class="w-5 h-5"/>
                    </button>

                    <NavLinks on_follow=follow/>
                </div>
            </div>
        </div>

        <Show when=move || menu_open.get()>
            <MobileMenuPanel on_follow=follow on_close=close_menu/>
        </Show>
    }
}

/// Desktop link row
#[component]
fn NavLinks(on_follow: Callback<Anchor>) -> impl IntoView {
    view! {
        <div class="hidden md:flex items-center gap-8">
            {Anchor::ALL.into_iter().map(|anchor| {
                view! {
                    <a
                        href=anchor.href()
                        class="text-sm font-medium text-neutral-400 hover:text-accent-400 transition-colors"
                        on:click=move |ev| {
                            ev.prevent_default();
                            on_follow.run(anchor);
                        }
                    >
                        {anchor.label()}
                    </a>
                }
            }).collect_view()}
        </div>
    }
}

/// Overlay menu. Mounted only while open, so the entrance replays on every open.
#[component]
fn MobileMenuPanel(on_follow: Callback<Anchor>, on_close: Callback<CloseReason>) -> impl IntoView {
    let entered = use_entered();

    view! {
        <div class=move || {
            if entered.get() {
                "fixed inset-0 z-50 md:hidden transition-all duration-200 opacity-100 translate-y-0"
            } else {
                "fixed inset-0 z-50 md:hidden transition-all duration-200 opacity-0 -translate-y-5"
            }
        }>
            <div
                class="absolute inset-0 bg-black/50 backdrop-blur-sm"
                on:click=move |_| on_close.run(CloseReason::Backdrop)
            />
            <div
                class="absolute right-0 top-0 bottom-0 w-72 bg-neutral-900 shadow-2xl transition-transform duration-300"
                class:translate-x-full=move || !entered.get()
            >
                <div class="p-6">
                    <div class="flex justify-end mb-8">
                        <button
                            class="p-2 rounded-full hover:bg-neutral-800 transition-colors"
                            aria-label="Close menu"
                            on:click=move |_| on_close.run(CloseReason::Button)
                        >
                            <Icon name=icons::X class="w-6 h-6"/>
                        </button>
                    </div>

                    <div class="flex flex-col gap-4">
                        {Anchor::ALL.into_iter().enumerate().map(|(index, anchor)| {
                            let step = sequences::MOBILE_MENU_LINKS.step(index);
                            view! {
                                <a
                                    href=anchor.href()
                                    class="text-lg font-medium text-white hover:text-accent-400 transition-colors py-2"
                                    style=move || step.style(entered.get())
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        on_follow.run(anchor);
                                    }
                                >
                                    {anchor.label()}
                                </a>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
