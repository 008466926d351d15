use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::ui::{NotFoundPage, PortfolioPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="antialiased">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=PortfolioPage/>
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                rust_sources(&path, out);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                out.push(path);
            }
        }
    }

    /// Every `accent-N` shade used in markup must come from the Tailwind theme
    #[test]
    fn test_accent_shades_are_themed() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let theme = fs::read_to_string(root.join("style/tailwind.css")).unwrap();
        assert!(theme.contains("@import \"tailwindcss\""));

        let mut sources = Vec::new();
        rust_sources(&root.join("src"), &mut sources);

        let mut shades = Vec::new();
        for source in sources {
            let text = fs::read_to_string(&source).unwrap();
            for (at, _) in text.match_indices("accent-") {
                let digits: String = text[at + "accent-".len()..]
                    .chars()
                    .take_while(char::is_ascii_digit)
                    .collect();
                if !digits.is_empty() && !shades.contains(&digits) {
                    shades.push(digits);
                }
            }
        }

        assert!(!shades.is_empty());
        for shade in shades {
            assert!(
                theme.contains(&format!("--color-accent-{}:", shade)),
                "accent-{} is not defined in the theme",
                shade
            );
        }
    }
}
