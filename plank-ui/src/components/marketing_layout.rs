//! Marketing layout view component
//!
//! Outer chrome for the signed-out marketing pages: a full-height neutral
//! frame around a single content region. The navbar and footer are fixed
//! elements composed by the shell, so the content region reserves vertical
//! clearance for both.

use dioxus::prelude::*;

/// Frame directives: fill the available height, flat neutral backdrop.
const FRAME_CLASS: &str = "h-full bg-slate-100";

/// Content region directives: top padding clears the fixed navbar, bottom
/// padding clears the fixed footer.
const CONTENT_CLASS: &str = "pt-40 pb-20 bg-slate-100";

/// Marketing layout view (pure, props-based)
/// Wraps whatever page the router mounts; never inspects or transforms it.
#[component]
pub fn MarketingLayoutView(children: Element) -> Element {
    rsx! {
        div { class: FRAME_CLASS,
            main { class: CONTENT_CLASS, {children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_html(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn wrapper_prefix() -> String {
        format!("<div class=\"{FRAME_CLASS}\"><main class=\"{CONTENT_CLASS}\">")
    }

    #[test]
    fn wraps_single_child_in_frame_and_content_region() {
        fn app() -> Element {
            rsx! {
                MarketingLayoutView {
                    span { "hello" }
                }
            }
        }

        let html = render_to_html(app);
        assert_eq!(
            html,
            format!("{}<span>hello</span></main></div>", wrapper_prefix())
        );
    }

    #[test]
    fn empty_payload_still_renders_both_wrappers() {
        fn app() -> Element {
            let empty: Element = rsx! {};
            rsx! {
                MarketingLayoutView { {empty} }
            }
        }

        let html = render_to_html(app);
        assert_eq!(html, format!("{}</main></div>", wrapper_prefix()));
    }

    #[test]
    fn preserves_child_order() {
        fn app() -> Element {
            rsx! {
                MarketingLayoutView {
                    span { "first" }
                    p { "second" }
                    span { "third" }
                }
            }
        }

        let html = render_to_html(app);
        let first = html.find("<span>first</span>").unwrap();
        let second = html.find("<p>second</p>").unwrap();
        let third = html.find("<span>third</span>").unwrap();
        assert!(first < second);
        assert!(second < third);
        assert!(html.ends_with("</main></div>"));
    }

    #[test]
    fn child_content_is_placed_unchanged() {
        fn app() -> Element {
            rsx! {
                MarketingLayoutView {
                    div { class: "hero",
                        h1 { "Ship it" }
                    }
                }
            }
        }

        let html = render_to_html(app);
        assert!(html.contains("<div class=\"hero\"><h1>Ship it</h1></div>"));
    }

    #[test]
    fn directives_do_not_vary_with_payload() {
        fn text_app() -> Element {
            rsx! {
                MarketingLayoutView { "plain text" }
            }
        }
        fn nested_app() -> Element {
            rsx! {
                MarketingLayoutView {
                    section {
                        p { "nested" }
                    }
                }
            }
        }

        let prefix = wrapper_prefix();
        assert!(render_to_html(text_app).starts_with(&prefix));
        assert!(render_to_html(nested_app).starts_with(&prefix));
    }

    #[test]
    fn repeated_renders_are_identical() {
        fn app() -> Element {
            rsx! {
                MarketingLayoutView {
                    p { "stable" }
                }
            }
        }

        assert_eq!(render_to_html(app), render_to_html(app));
    }
}
