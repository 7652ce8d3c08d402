//! Brand mark component
//!
//! Board glyph from the Lucide icon set (https://lucide.dev), stroke
//! currentColor so it inherits text color from Tailwind classes.

use dioxus::prelude::*;

/// Logo with wordmark. The wordmark is hidden on small screens.
#[component]
pub fn Logo(#[props(default = "w-6 h-6")] class: &'static str) -> Element {
    rsx! {
        div { class: "hover:opacity-75 transition items-center gap-x-2 hidden md:flex",
            svg {
                class: "{class}",
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                rect {
                    x: "3",
                    y: "3",
                    width: "18",
                    height: "18",
                    rx: "2",
                }
                path { d: "M8 7v7" }
                path { d: "M12 7v4" }
                path { d: "M16 7v9" }
            }
            p { class: "text-lg text-neutral-700 pb-1", "plank" }
        }
    }
}
