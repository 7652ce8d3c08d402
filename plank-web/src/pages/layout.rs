use crate::Route;
use dioxus::prelude::*;
use plank_ui::{MarketingFooterView, MarketingLayoutView, MarketingNavbarView};
use tracing::debug;

/// Route-level shell for the marketing section. The navbar and footer sit
/// outside the layout wrapper as fixed siblings; the routed page renders
/// inside the wrapper's content region.
#[component]
pub fn MarketingLayout() -> Element {
    rsx! {
        MarketingNavbarView {
            on_login_click: |_| debug!("login requested, auth is served by the backend"),
            on_signup_click: |_| debug!("signup requested, auth is served by the backend"),
        }
        MarketingLayoutView {
            Outlet::<Route> {}
        }
        MarketingFooterView {
            on_privacy_click: |_| debug!("privacy policy requested"),
            on_terms_click: |_| debug!("terms of service requested"),
        }
    }
}
