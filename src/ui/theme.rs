//! Theme context module for the dark/light site theme
//!
//! Provides:
//! - ThemeMode enum (Dark, Light), dark by default
//! - ThemeContext for reactive theme state
//! - LocalStorage persistence

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use leptos::web_sys;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "printroute-theme";

/// Theme mode options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "light" => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "Dark",
            ThemeMode::Light => "Light",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme mode
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    /// Set the theme mode and persist to localStorage
    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
        persist_theme(mode);
    }

    /// Flip between dark and light
    pub fn toggle(&self) {
        self.set_mode(self.mode.get_untracked().toggled());
    }
}

fn persist_theme(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, mode.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

/// Load theme from localStorage
#[cfg(feature = "hydrate")]
fn load_persisted_theme() -> Option<ThemeMode> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let value = storage.get_item(STORAGE_KEY).ok()??;
    Some(ThemeMode::parse(&value))
}

/// Replace the `dark`/`light` class on the document element
#[cfg(feature = "hydrate")]
fn apply_theme_class(mode: ThemeMode) {
    if let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let class_list = html.class_list();
        let _ = class_list.remove_2("dark", "light");
        let _ = class_list.add_1(mode.as_str());
    }
}

/// Provide theme context to the application
pub fn provide_theme_context() -> ThemeContext {
    // Server and first client render agree on the default; the stored
    // preference is applied after hydration
    let mode = RwSignal::new(ThemeMode::default());
    let ctx = ThemeContext { mode };

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |first_run: Option<()>| {
            if first_run.is_none() {
                if let Some(stored) = load_persisted_theme() {
                    mode.set(stored);
                }
            }
            apply_theme_class(mode.get());
        });
    }

    provide_context(ctx);
    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn test_parse_round_trip() {
        assert_eq!(ThemeMode::parse("light"), ThemeMode::Light);
        assert_eq!(ThemeMode::parse("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::parse("auto"), ThemeMode::Dark);
        assert_eq!(ThemeMode::parse(ThemeMode::Light.as_str()), ThemeMode::Light);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }
}
