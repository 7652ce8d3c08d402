//! Marketing footer view component
//!
//! Pure, props-based bottom bar for the signed-out marketing pages. Fixed to
//! the bottom of the viewport; the marketing layout reserves clearance for it.

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::logo::Logo;
use dioxus::prelude::*;

/// Marketing footer view (pure, props-based)
#[component]
pub fn MarketingFooterView(
    on_privacy_click: EventHandler<()>,
    on_terms_click: EventHandler<()>,
) -> Element {
    rsx! {
        footer { class: "fixed bottom-0 w-full p-4 border-t bg-white",
            div { class: "md:max-w-screen-2xl mx-auto flex items-center w-full justify-between",
                Logo {}
                div { class: "space-x-4 md:block md:w-auto flex items-center justify-between w-full",
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        onclick: move |_| on_privacy_click.call(()),
                        "Privacy policy"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        onclick: move |_| on_terms_click.call(()),
                        "Terms of service"
                    }
                }
            }
        }
    }
}
