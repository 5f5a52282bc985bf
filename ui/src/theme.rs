//! Page-level light/dark theme.
//!
//! Distinct from the per-profile `theme` field (which is just form data sent
//! to the backend): this is the visitor's own preference for the app chrome,
//! persisted in localStorage and applied as a `dark` class on the document
//! root.

use dioxus::prelude::*;

const STORAGE_KEY: &str = "linkfolio-theme";

/// App-wide theme signal, provided at the root. Holds `"light"` or `"dark"`.
pub type ThemeSignal = Signal<String>;

/// Read the stored preference, defaulting to light.
pub fn load_theme_from_storage() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if let Ok(Some(stored)) = storage.get_item(STORAGE_KEY) {
                if stored == "dark" {
                    return stored;
                }
            }
        }
    }
    "light".to_string()
}

/// Apply a theme to the document root and persist it.
pub fn apply_theme(theme: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(root) = window.document().and_then(|d| d.document_element()) {
            let _ = if theme == "dark" {
                root.class_list().add_1("dark")
            } else {
                root.class_list().remove_1("dark")
            };
        }
        if let Some(storage) = window.local_storage().ok().flatten() {
            let _ = storage.set_item(STORAGE_KEY, theme);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}

/// Floating button toggling between light and dark.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<ThemeSignal>();
    let is_dark = theme() == "dark";

    let onclick = move |_| {
        let next = if theme() == "dark" { "light" } else { "dark" };
        apply_theme(next);
        theme.set(next.to_string());
    };

    rsx! {
        button {
            class: "theme-toggle",
            style: "position: fixed; top: 1rem; right: 1rem; padding: 0.5rem 0.75rem; border: 1px solid #d1d5db; border-radius: 9999px; background: transparent; cursor: pointer; font-size: 1rem;",
            title: if is_dark { "Switch to light mode" } else { "Switch to dark mode" },
            onclick: onclick,
            if is_dark { "\u{2600}" } else { "\u{1F319}" }
        }
    }
}
