use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

use crate::core::contact::{
    ContactError, ContactField, ContactFormController, FormPhase, Submission, ValidationError,
};
use crate::core::content::{RESUME_URL, SITE, SOCIAL_LINKS, SocialLink};
use crate::core::motion::{AnimationStep, sequences};
use crate::core::navbar::Anchor;
use crate::core::reveal::DEFAULT_REVEAL_MARGIN_PX;
use crate::ui::common::{FormField, TextAreaField};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::use_reveal;
use crate::ui::transport::{InFlight, failure_message};

#[component]
pub fn Contact() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let revealed = use_reveal(container, DEFAULT_REVEAL_MARGIN_PX);

    view! {
        <section id=Anchor::Contact.id() class="section-padding bg-neutral-50/50 dark:bg-neutral-900/50">
            <div class="max-w-6xl mx-auto">
                <div node_ref=container style=move || sequences::SECTION_FADE.style(revealed.get())>
                    <div class="text-center mb-16" style=move || sequences::SECTION_HEADER.style(revealed.get())>
                        <span class="text-sm font-medium text-accent-600 dark:text-accent-400 tracking-wide uppercase">
                            "Contact"
                        </span>
                        <h2 class="text-4xl md:text-5xl font-bold text-neutral-900 dark:text-white mt-4 mb-4">
                            "Let's " <span class="gradient-text">"connect"</span>
                        </h2>
                        <p class="text-lg text-neutral-600 dark:text-neutral-400 max-w-2xl mx-auto">
                            "I'm always open to discussing new opportunities, research collaborations, or interesting projects. Feel free to reach out!"
                        </p>
                    </div>

                    <div class="grid lg:grid-cols-2 gap-12">
                        <div class="space-y-6" style=move || sequences::CONTACT_INFO.style(revealed.get())>
                            <h3 class="text-2xl font-bold text-neutral-900 dark:text-white mb-8">"Get in touch"</h3>

                            {SOCIAL_LINKS.iter().enumerate().map(|(index, link)| {
                                view! {
                                    <SocialCard
                                        link=link
                                        step=sequences::CONTACT_LINKS.step(index)
                                        revealed=revealed
                                    />
                                }
                            }).collect_view()}

                            <a
                                href=RESUME_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center gap-2 mt-6 text-accent-600 dark:text-accent-400 font-medium hover:underline"
                                style=move || sequences::RESUME_LINK.style(revealed.get())
                            >
                                <Icon name=icons::EXTERNAL_LINK class="w-5 h-5"/>
                                "Download Resume"
                            </a>
                        </div>

                        <div style=move || sequences::CONTACT_FORM.style(revealed.get())>
                            <ContactForm/>
                        </div>
                    </div>
                </div>
            </div>

            <footer
                class="mt-20 pt-8 border-t border-neutral-200 dark:border-neutral-800"
                style=move || sequences::FOOTER.style(revealed.get())
            >
                <div class="max-w-6xl mx-auto text-center">
                    <p class="text-sm text-neutral-500 dark:text-neutral-400">
                        {format!("© {} {}. Built with Leptos & Tailwind CSS.", current_year(), SITE.author)}
                    </p>
                </div>
            </footer>
        </section>
    }
}

#[component]
fn SocialCard(
    link: &'static SocialLink,
    step: AnimationStep,
    revealed: ReadSignal<bool>,
) -> impl IntoView {
    let new_tab = link.opens_new_tab();

    view! {
        <a
            href=link.href
            target=new_tab.then_some("_blank")
            rel=new_tab.then_some("noopener noreferrer")
            class=format!("group flex items-center gap-4 p-4 glass-card transition-all duration-300 {}", link.hover_class)
            style=move || step.style(revealed.get())
        >
            <div class="p-3 rounded-xl bg-neutral-100 dark:bg-neutral-800 group-hover:scale-110 transition-transform duration-300">
                <Icon name=link.icon class="w-6 h-6"/>
            </div>
            <div class="flex-grow">
                <p class="text-sm text-neutral-500 dark:text-neutral-400">{link.name}</p>
                <p class="font-medium text-neutral-900 dark:text-white">{link.label}</p>
            </div>
            <Icon name=icons::EXTERNAL_LINK class="w-5 h-5 opacity-0 group-hover:opacity-100 transition-opacity"/>
        </a>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactFormController::new());
    let errors = RwSignal::new(Vec::<ValidationError>::new());
    let in_flight = StoredValue::new(InFlight::default());

    on_cleanup(move || {
        in_flight.try_update_value(InFlight::abort);
        form.try_update(|f| f.teardown());
    });

    let phase = Memo::new(move |_| form.with(|f| f.phase().clone()));
    let locked = Signal::derive(move || !phase.get().is_editable());

    let value_of = move |field: ContactField| {
        Signal::derive(move || form.with(|f| f.field(field).to_string()))
    };
    let error_of = move |field: ContactField| {
        Signal::derive(move || {
            errors.with(|errs| {
                errs.iter()
                    .find(|e| e.field() == field)
                    .map(|e| e.to_string())
            })
        })
    };
    let input_for = move |field: ContactField| {
        Callback::new(move |value: String| {
            if form.try_update(|f| f.on_field_change(field, value)).unwrap_or(false) {
                errors.update(|errs| errs.retain(|e| e.field() != field));
            }
        })
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let attempt = form.try_update(|f| {
            let failed = matches!(f.phase(), FormPhase::Failed(_));
            if failed { f.retry() } else { f.on_submit() }
        });

        match attempt {
            Some(Ok(submission)) => {
                errors.set(Vec::new());
                deliver(form, errors, in_flight, submission);
            }
            Some(Err(ContactError::Invalid(found))) => errors.set(found),
            Some(Err(ContactError::Busy)) | None => {}
        }
    };

    view! {
        <form class="space-y-6" novalidate=true on:submit=on_submit>
            <FormField
                id=ContactField::Name.id()
                label="Name"
                placeholder="Your name"
                value=value_of(ContactField::Name)
                on_input=input_for(ContactField::Name)
                disabled=locked
                error=error_of(ContactField::Name)
            />
            <FormField
                id=ContactField::Email.id()
                label="Email"
                input_type="email"
                placeholder="your@email.com"
                value=value_of(ContactField::Email)
                on_input=input_for(ContactField::Email)
                disabled=locked
                error=error_of(ContactField::Email)
            />
            <TextAreaField
                id=ContactField::Message.id()
                label="Message"
                placeholder="Your message..."
                value=value_of(ContactField::Message)
                on_input=input_for(ContactField::Message)
                disabled=locked
                error=error_of(ContactField::Message)
            />

            {move || match phase.get() {
                FormPhase::Failed(err) => Some(view! {
                    <div class="flex items-center gap-2 p-4 rounded-xl bg-red-500/10 text-sm text-red-500" role="alert">
                        <Icon name=icons::ALERT_CIRCLE class="w-5 h-5"/>
                        <span>{failure_message(&err)}</span>
                    </div>
                }),
                _ => None,
            }}

            <button
                type="submit"
                disabled=move || locked.get()
                class=move || {
                    let tone = if phase.get() == FormPhase::Submitted {
                        "bg-green-500 text-white"
                    } else {
                        "bg-accent-500 text-neutral-900 hover:bg-accent-400 hover:shadow-lg hover:shadow-accent-500/25"
                    };
                    format!(
                        "w-full flex items-center justify-center gap-2 px-6 py-4 rounded-xl font-medium transition-all duration-300 hover:scale-[1.02] active:scale-[0.98] {} disabled:opacity-70 disabled:cursor-not-allowed",
                        tone,
                    )
                }
            >
                {move || match phase.get() {
                    FormPhase::Submitting => view! {
                        <div class="w-5 h-5 border-2 border-neutral-900/30 border-t-neutral-900 rounded-full animate-spin"/>
                    }.into_any(),
                    FormPhase::Submitted => view! { <span>"Message Sent!"</span> }.into_any(),
                    FormPhase::Failed(_) => view! {
                        <Icon name=icons::PAPER_AIRPLANE class="w-5 h-5"/>
                        <span>"Try Again"</span>
                    }.into_any(),
                    FormPhase::Idle => view! {
                        <Icon name=icons::PAPER_AIRPLANE class="w-5 h-5"/>
                        <span>"Send Message"</span>
                    }.into_any(),
                }}
            </button>
        </form>
    }
}

/// Send a started submission and feed the outcome back into the form.
///
/// Both the completion and the end of the confirmation dwell are reported with
/// the submission's ticket. The task is held in `in_flight`, so teardown
/// cancels the request and the dwell timer instead of letting them run out.
fn deliver(
    form: RwSignal<ContactFormController>,
    errors: RwSignal<Vec<ValidationError>>,
    in_flight: StoredValue<InFlight>,
    submission: Submission,
) {
    #[cfg(feature = "hydrate")]
    {
        use crate::core::contact::{SUBMITTED_DWELL, SubmitError};
        use crate::ui::transport::{HttpContactTransport, send_with_timeout};
        use gloo_timers::future::TimeoutFuture;
        use leptos::logging::warn;

        let task = async move {
            let Submission { ticket, request } = submission;
            let result = send_with_timeout(&HttpContactTransport::default(), &request).await;
            if let Err(err) = &result {
                warn!("Contact submission failed: {}", err);
            }
            let accepted = result.is_ok();
            let refused = match &result {
                Err(SubmitError::Rejected(found)) => Some(found.clone()),
                _ => None,
            };

            let applied = form
                .try_update(|f| f.complete(ticket, result))
                .unwrap_or(false);
            if !applied {
                return;
            }
            if let Some(found) = refused {
                errors.try_set(found);
            }
            if accepted {
                TimeoutFuture::new(SUBMITTED_DWELL.as_millis() as u32).await;
                form.try_update(|f| f.dwell_elapsed(ticket));
            }
        };

        if let Some(task) = in_flight.try_update_value(|t| t.track(task)) {
            leptos::task::spawn_local(async move {
                let _ = task.await;
            });
        }
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (form, errors, in_flight, submission);
    }
}

#[cfg(feature = "ssr")]
fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year()
}

#[cfg(not(feature = "ssr"))]
fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}
