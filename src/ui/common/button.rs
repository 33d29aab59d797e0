use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    Primary,
    /// Rounded outline pill used in the header
    Pill,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Pill => "btn-pill",
        }
    }
}

/// Call-to-action link to a section on the page, with a trailing arrow
///
/// Plain anchor so it keeps working before hydration.
#[component]
pub fn CtaLink(
    /// Target section id, without `#`
    target: &'static str,
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=format!("#{}", target) class=variant.class()>
            {children()}
            <Icon icon=icons::ARROW_RIGHT class="ml-2 h-4 w-4"/>
        </a>
    }
}
