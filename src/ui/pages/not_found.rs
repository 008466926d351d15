//! Not found page component
//!
//! Shown for any path other than the portfolio itself.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::content::SITE;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text=format!("Page Not Found | {}", SITE.author)/>
        <div class="min-h-screen bg-neutral-950 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                // Error code
                <h1 class="text-6xl font-bold text-amber-400 mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-white mb-2">
                    "Page Not Found"
                </h2>

                <p class="text-neutral-400 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="inline-flex items-center justify-center px-6 py-3 rounded-full bg-amber-400 text-black font-medium transition-colors hover:bg-amber-300"
                >
                    "Back to Portfolio"
                </A>
            </div>
        </div>
    }
}
