use leptos::prelude::*;

/// Single-line input with a visually hidden label
#[component]
pub fn FormField(
    /// Element id, also used by the label
    id: &'static str,
    /// Label text for screen readers
    label: &'static str,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(default = false)]
    required: bool,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether the field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="sr-only">{label}</label>
            <input
                id=id
                name=id
                type=input_type
                class="input-base"
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Multi-line text area with a visually hidden label
#[component]
pub fn TextAreaField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(default = false)]
    required: bool,
    value: Signal<String>,
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 4)]
    rows: u32,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="sr-only">{label}</label>
            <textarea
                id=id
                name=id
                class="input-base resize-none"
                placeholder=placeholder
                required=required
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Bot trap: off-screen, skipped by keyboard focus and autofill
///
/// A person never sees this input. Anything typed into it marks the
/// submission as automated.
#[component]
pub fn HoneypotField(
    /// Field name bots are likely to fill
    #[prop(default = "website")]
    id: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="honeypot" aria-hidden="true">
            <label for=id>"Website (leave blank)"</label>
            <input
                id=id
                name=id
                type="text"
                tabindex="-1"
                autocomplete="off"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
