use dioxus::prelude::*;
use ui::ProfileEditorView;

/// Create-mode editor at `/`.
#[component]
pub fn Home() -> Element {
    rsx! {
        ProfileEditorView {}
    }
}
