use dioxus::prelude::*;

const BUTTON_CSS: Asset = asset!("/assets/styling/button.css");

/// A link styled as a button. Primary buttons get the filled brand style, everything else the outline one.
#[component]
pub fn Button(href: String, #[props(default)] primary: bool, children: Element) -> Element {
    let class = if primary {
        "button button-primary"
    } else {
        "button"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: BUTTON_CSS }

        a { class, href, {children} }
    }
}
