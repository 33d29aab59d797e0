//! Inline banners for form feedback

use crate::core::lead::BannerTone;
use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Status banner under the lead form
///
/// Hidden while `banner` is `None`; the tone picks the color scheme.
#[component]
pub fn StatusBanner(
    #[prop(into)]
    banner: Signal<Option<(String, BannerTone)>>,
) -> impl IntoView {
    view! {
        {move || {
            banner.get().map(|(text, tone)| view! {
                <div class=tone.class() role="alert">
                    <Icon icon=icons::ALERT_CIRCLE class="h-4 w-4 shrink-0"/>
                    <span>{text}</span>
                </div>
            })
        }}
    }
}
