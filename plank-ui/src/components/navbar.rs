//! Marketing navbar view component
//!
//! Pure, props-based top bar for the signed-out marketing pages. Fixed to
//! the top of the viewport; the marketing layout reserves clearance for it.

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::logo::Logo;
use dioxus::prelude::*;

/// Marketing navbar view (pure, props-based)
/// Renders the brand mark and auth entry points, with callbacks for both.
#[component]
pub fn MarketingNavbarView(
    on_login_click: EventHandler<()>,
    on_signup_click: EventHandler<()>,
) -> Element {
    rsx! {
        nav { class: "fixed top-0 w-full h-14 px-4 border-b shadow-sm bg-white flex items-center",
            div { class: "md:max-w-screen-2xl mx-auto flex items-center w-full justify-between",
                Logo {}
                div { class: "space-x-4 md:block md:w-auto flex items-center justify-between w-full",
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        onclick: move |_| on_login_click.call(()),
                        "Log in"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Small,
                        onclick: move |_| on_signup_click.call(()),
                        "Get plank for free"
                    }
                }
            }
        }
    }
}
