use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-xl bg-white dark:bg-neutral-800 border border-neutral-200 dark:border-neutral-700 text-neutral-900 dark:text-white placeholder-neutral-400 focus:outline-none focus:ring-2 focus:ring-accent-500/50 focus:border-accent-500 transition-all disabled:opacity-70";

/// Text input with label and inline error
#[component]
pub fn FormField(
    /// Element id, also targeted by the label
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into)]
    disabled: Signal<bool>,
    /// Validation message to display under the field
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                {label}
            </label>
            <input
                type=input_type
                id=id
                name=id
                class=INPUT_CLASS
                class:border-red-500=move || error.get().is_some()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <FieldError error=error/>
        </div>
    }
}

/// Multi-line variant of [`FormField`]
#[component]
pub fn TextAreaField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 5)]
    rows: u32,
    #[prop(into)]
    disabled: Signal<bool>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                {label}
            </label>
            <textarea
                id=id
                name=id
                class=format!("{} resize-none", INPUT_CLASS)
                class:border-red-500=move || error.get().is_some()
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <FieldError error=error/>
        </div>
    }
}

#[component]
fn FieldError(error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|err| view! {
            <div class="flex items-center gap-1 mt-2 text-sm text-red-500">
                <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                <span>{err}</span>
            </div>
        })
    }
}
