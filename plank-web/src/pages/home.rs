use dioxus::prelude::*;
use plank_ui::{Button, ButtonSize, ButtonVariant};
use tracing::debug;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "flex items-center justify-center flex-col",
            div { class: "flex items-center justify-center flex-col",
                div { class: "mb-4 flex items-center border shadow-sm p-4 bg-amber-100 text-amber-700 rounded-full uppercase",
                    "Task management, minus the clutter"
                }
                h1 { class: "text-3xl md:text-6xl text-center text-neutral-800 mb-6",
                    "plank keeps your team's work"
                }
                div { class: "text-3xl md:text-6xl bg-gradient-to-r from-sky-600 to-blue-600 text-white px-4 p-2 rounded-md pb-4 w-fit",
                    "moving forward."
                }
            }
            div { class: "text-sm md:text-xl text-neutral-400 mt-4 max-w-xs md:max-w-2xl text-center mx-auto",
                "Boards, lists, and cards that stay out of the way. Plan projects, \
                 track progress, and ship together - wherever your team works."
            }
            div { class: "mt-6",
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    onclick: |_| debug!("signup requested from hero"),
                    "Get plank for free"
                }
            }
        }
    }
}
