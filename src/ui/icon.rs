use leptos::prelude::*;

/// Inline stroke icon; inherits `currentColor` so it follows text color
#[component]
pub fn Icon(
    /// Path data from [`icons`]
    icon: &'static [&'static str],
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

/// Path data for the icons used on the site (24x24 grid)
pub mod icons {
    pub const ARROW_RIGHT: &[&str] = &["M5 12h14", "m12 5 7 7-7 7"];
    pub const MENU: &[&str] = &["M4 6h16", "M4 12h16", "M4 18h16"];
    pub const X: &[&str] = &["M18 6 6 18", "m6 6 12 12"];
    pub const MAIL: &[&str] = &[
        "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
        "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
    ];
    pub const ROUTE: &[&str] = &[
        "M3 19a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
        "M9 19h8.5a3.5 3.5 0 0 0 0-7h-11a3.5 3.5 0 0 1 0-7H15",
        "M15 5a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
    ];
    pub const TRUCK: &[&str] = &[
        "M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2",
        "M15 18H9",
        "M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.624l-3.48-4.35A1 1 0 0 0 17.52 8H14",
        "M15 18a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
        "M5 18a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
    ];
    pub const SUN: &[&str] = &[
        "M8 12a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
        "M12 2v2",
        "M12 20v2",
        "m4.93 4.93 1.41 1.41",
        "m17.66 17.66 1.41 1.41",
        "M2 12h2",
        "M20 12h2",
        "m6.34 17.66-1.41 1.41",
        "m19.07 4.93-1.41 1.41",
    ];
    pub const MOON: &[&str] = &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"];
    pub const ALERT_CIRCLE: &[&str] = &[
        "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
        "M12 8v4",
        "M12 16h.01",
    ];
}
