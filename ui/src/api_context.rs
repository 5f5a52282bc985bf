//! API client context and hook for the UI.

use api::{ApiClient, ApiConfig};
use dioxus::prelude::*;

/// Get the shared API client. Views never construct their own client; the
/// one provided at application start carries the configured base URL.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component that owns the API client for the whole app. Wrap the
/// router with this, passing the config resolved at startup.
#[component]
pub fn ApiProvider(config: ApiConfig, children: Element) -> Element {
    use_context_provider(move || ApiClient::new(config.clone()));

    rsx! {
        {children}
    }
}
