//! The portfolio page: navbar, every section, and the document head

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::content::SITE;
use crate::ui::navbar::Navbar;
use crate::ui::sections::{About, Contact, Experience, Hero, Projects, Skills};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <SeoMeta/>
        <div class="min-h-screen bg-neutral-950 text-white antialiased">
            <Navbar/>
            <main>
                <Hero/>
                <About/>
                <Experience/>
                <Projects/>
                <Skills/>
                <Contact/>
            </main>
        </div>
    }
}

/// SEO meta tags
#[component]
fn SeoMeta() -> impl IntoView {
    let keywords = SITE.keywords.join(", ");

    view! {
        <Title text=SITE.title/>

        <Meta name="description" content=SITE.description/>
        <Meta name="keywords" content=keywords/>
        <Meta name="author" content=SITE.author/>
        <Meta name="creator" content=SITE.author/>
        <Meta name="robots" content="index, follow"/>

        // Open Graph
        <Meta property="og:type" content="website"/>
        <Meta property="og:locale" content=SITE.locale/>
        <Meta property="og:url" content=SITE.url/>
        <Meta property="og:title" content=SITE.title/>
        <Meta property="og:description" content=SITE.short_description/>
        <Meta property="og:site_name" content=SITE.site_name/>

        // Twitter
        <Meta name="twitter:card" content="summary_large_image"/>
        <Meta name="twitter:title" content=SITE.title/>
        <Meta name="twitter:description" content=SITE.short_description/>

        <Link rel="canonical" href=SITE.url/>
    }
}
