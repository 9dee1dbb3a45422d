use dioxus::logger::tracing::{debug, error};
use dioxus::prelude::*;
use serde::Deserialize;

const CODE_EXAMPLES_CSS: Asset = asset!("/assets/styling/code_examples.css");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CodeExample {
    pub title: String,
    pub language: String,
    pub code: String,
}

#[derive(Debug, Deserialize)]
struct CodeExamplesData {
    examples: Vec<CodeExample>,
}

/// Tabbed panel of short Vert.x snippets. The first snippet is shown until another tab is picked.
#[component]
pub fn CodeExamples() -> Element {
    let examples = use_hook(|| {
        load_code_examples().map_err(|e| {
            error!("failed to load code examples: {e}");
            e.to_string()
        })
    });

    rsx! {
        document::Link { rel: "stylesheet", href: CODE_EXAMPLES_CSS }

        CodeExamplesPanel { examples, initial: 0 }
    }
}

/// Renders already loaded examples, or the load error in their place. `initial` is the tab shown
/// on first render.
#[component]
fn CodeExamplesPanel(examples: Result<Vec<CodeExample>, String>, initial: usize) -> Element {
    let mut selected = use_signal(|| initial);

    let examples = match examples {
        Ok(examples) => examples,
        Err(message) => {
            return rsx! {
                div { class: "code-examples code-examples-error", "Could not load code examples: {message}" }
            };
        }
    };

    let code_block = examples.get(selected()).map(|example| {
        let language = &example.language;
        let code = &example.code;
        rsx! {
            pre { class: "code-examples-code",
                code { class: "language-{language}", "{code}" }
            }
        }
    });

    rsx! {
        div { class: "code-examples",
            div { class: "code-examples-tabs",
                for (index, CodeExample { title, .. }) in examples.iter().enumerate() {
                    button {
                        key: "{index}",
                        r#type: "button",
                        class: tab_class(index == selected()),
                        onclick: move |_| {
                            debug!("selected code example {index}");
                            selected.set(index);
                        },
                        "{title}"
                    }
                }
            }
            {code_block}
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "code-examples-tab active"
    } else {
        "code-examples-tab"
    }
}

fn load_code_examples() -> std::result::Result<Vec<CodeExample>, Box<dyn std::error::Error>> {
    parse_code_examples(include_str!("../../assets/code_examples.json"))
}

fn parse_code_examples(json: &str) -> std::result::Result<Vec<CodeExample>, Box<dyn std::error::Error>> {
    let data: CodeExamplesData = serde_json::from_str(json)?;
    Ok(data.examples)
}
