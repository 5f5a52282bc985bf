use dioxus::prelude::*;
use ui::ProfileEditorView;

/// Edit-mode editor at `/edit/{slug}`.
#[component]
pub fn Edit(slug: String) -> Element {
    rsx! {
        ProfileEditorView { slug }
    }
}
