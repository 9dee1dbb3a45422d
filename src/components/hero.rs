use crate::components::{Button, CodeExamples, Icon};
use dioxus::prelude::*;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    pub primary: bool,
}

/// The buttons under the slogan, in display order.
pub const CALLS_TO_ACTION: [CallToAction; 2] = [
    CallToAction {
        label: "Get started",
        href: "#",
        icon: Icon::FastForward,
        primary: true,
    },
    CallToAction {
        label: "10K+ stars",
        href: "#",
        icon: Icon::GitHub,
        primary: false,
    },
];

/// Landing banner: product slogan and calls to action on the left, code samples on the right.
#[component]
pub fn Hero() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section { class: "hero",
            div { class: "hero-background" }
            div { class: "hero-main container",
                div { class: "hero-left",
                    div { class: "hero-slogan",
                        span { class: "hero-product-name", "Eclipse Vert.x |" }
                        " Reactive applications on the JVM"
                    }
                    div { class: "hero-buttons",
                        for action in CALLS_TO_ACTION {
                            {call_to_action(action)}
                        }
                    }
                }
                div { class: "hero-right",
                    CodeExamples {}
                }
            }
        }
    }
}

fn call_to_action(action: CallToAction) -> Element {
    let CallToAction {
        label,
        href,
        icon,
        primary,
    } = action;

    rsx! {
        Button { key: "{label}", href: href.to_string(), primary,
            {icon.render()}
            " {label}"
        }
    }
}
