//! Early-access lead form
//!
//! All decisions live in [`LeadCapture`]; this component feeds it the field
//! values and the clock, runs the request in the browser and schedules the
//! auto-reset. The reset timer is owned by the component: scheduling a new
//! one drops (and so cancels) the previous one, and unmounting drops it too.

use crate::core::SiteConfig;
use crate::core::lead::{Admission, LeadCapture, ResetTicket, SubmissionAttempt, SubmissionStatus};
use crate::ui::common::{FormField, HoneypotField, StatusBanner, TextAreaField};
use crate::ui::icon::{Icon, icons};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::core::lead::{FetchTransport, dispatch};
#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

#[component]
pub fn EarlyAccessForm(
    /// Overrides the build-time webhook URL
    #[prop(optional, into)]
    webhook_url: Option<String>,
) -> impl IntoView {
    let endpoint = webhook_url.or_else(|| SiteConfig::compiled().webhook_url);
    let capture = RwSignal::new(LeadCapture::new(endpoint));

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let website = RwSignal::new(String::new());

    let status_view = Memo::new(move |_| capture.with(|c| c.view()));
    let submitting = Signal::derive(move || capture.with(|c| c.status() == SubmissionStatus::Submitting));

    #[cfg(feature = "hydrate")]
    let reset_timer: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);

    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        reset_timer.try_update_value(|timer| timer.take());
    });

    let schedule_reset = move |ticket: ResetTicket| {
        #[cfg(feature = "hydrate")]
        {
            let millis = u32::try_from(ticket.delay.as_millis()).unwrap_or(u32::MAX);
            let timeout = Timeout::new(millis, move || {
                capture.try_update(|c| c.reset(ticket));
            });
            reset_timer.set_value(Some(timeout));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ticket;
        }
    };

    let clear_fields = move || {
        name.set(String::new());
        email.set(String::new());
        message.set(String::new());
        website.set(String::new());
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let attempt = SubmissionAttempt::new(
            name.get_untracked(),
            email.get_untracked(),
            message.get_untracked(),
        )
        .with_honeypot(website.get_untracked());
        let now = chrono::Utc::now().timestamp_millis();

        let Some(admission) = capture.try_update(|c| c.begin(&attempt, now)) else {
            return;
        };

        match admission {
            Admission::InFlight => {}
            Admission::Rejected(ticket) => schedule_reset(ticket),
            Admission::Dispatch(pending) => {
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    let result = dispatch(&FetchTransport, &pending.endpoint, &pending.payload).await;
                    if let Some(completion) = capture.try_update(|c| c.complete(pending, result)).flatten() {
                        if completion.clear_fields {
                            clear_fields();
                        }
                        schedule_reset(completion.ticket);
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (pending, clear_fields);
                }
            }
        }
    };

    view! {
        <form on:submit=on_submit class="mx-auto mt-8 max-w-md space-y-4 text-left">
            <FormField
                id="lead-name"
                label="Your name"
                placeholder="Your name"
                required=true
                value=name.into()
                on_input=Callback::new(move |v| name.set(v))
                disabled=submitting
            />
            <FormField
                id="lead-email"
                label="Your email"
                input_type="email"
                placeholder="Your email"
                required=true
                value=email.into()
                on_input=Callback::new(move |v| email.set(v))
                disabled=submitting
            />
            <TextAreaField
                id="lead-message"
                label="Your use case"
                placeholder="Tell us about your use case..."
                required=true
                value=message.into()
                on_input=Callback::new(move |v| message.set(v))
                disabled=submitting
            />
            <HoneypotField
                value=website.into()
                on_input=Callback::new(move |v| website.set(v))
            />

            <StatusBanner banner=Signal::derive(move || status_view.with(|v| v.banner.clone()))/>

            <button
                type="submit"
                class="btn-primary w-full disabled:cursor-not-allowed disabled:opacity-50"
                disabled=move || status_view.with(|v| v.disabled)
            >
                {move || status_view.with(|v| v.button_label)}
                <Show when=move || status_view.with(|v| v.show_arrow)>
                    <Icon icon=icons::ARROW_RIGHT class="ml-2 h-4 w-4"/>
                </Show>
            </button>
        </form>
    }
}
