use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon file name under `/icons`, without the `.svg` extension
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons used outside the content tables
pub mod icons {
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const ARROW_DOWN: &str = "arrow-down";
    pub const ACADEMIC_CAP: &str = "academic-cap";
    pub const EXTERNAL_LINK: &str = "external-link";
    pub const GITHUB: &str = "github";
    pub const CODE: &str = "code";
    pub const PAPER_AIRPLANE: &str = "paper-airplane";
    pub const ALERT_CIRCLE: &str = "alert-circle";

    pub const ALL: &[&str] = &[
        MENU,
        X,
        ARROW_DOWN,
        ACADEMIC_CAP,
        EXTERNAL_LINK,
        GITHUB,
        CODE,
        PAPER_AIRPLANE,
        ALERT_CIRCLE,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::{
        EXPERIENCES, FOCUS_AREAS, PROJECTS, SKILL_CATEGORIES, SOCIAL_LINKS,
    };
    use std::path::Path;

    #[test]
    fn test_every_icon_has_an_asset() {
        let mut names: Vec<&str> = icons::ALL.to_vec();
        names.extend(FOCUS_AREAS.iter().map(|a| a.icon));
        names.extend(EXPERIENCES.iter().map(|e| e.icon));
        names.extend(PROJECTS.iter().map(|p| p.icon));
        names.extend(SOCIAL_LINKS.iter().map(|l| l.icon));
        for category in SKILL_CATEGORIES {
            names.push(category.icon);
            names.extend(category.skills.iter().map(|s| s.icon));
        }

        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("public/icons");
        for name in names {
            let file = dir.join(format!("{}.svg", name));
            assert!(file.is_file(), "missing icon asset {}", file.display());
        }
    }
}
