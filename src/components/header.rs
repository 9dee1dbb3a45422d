use dioxus::prelude::*;

/// Title used when a page does not provide its own.
pub const DEFAULT_TITLE: &str = "Vert.x";

const META_TAGS: &[MetaTag] = &[
    MetaTag {
        key: MetaKey::HttpEquiv("X-UA-Compatible"),
        content: "IE=edge",
    },
    MetaTag {
        key: MetaKey::Name("viewport"),
        content: "width=device-width, initial-scale=1, shrink-to-fit=no",
    },
    MetaTag {
        key: MetaKey::Name("description"),
        content: "Vert.x | Reactive applications on the JVM",
    },
    MetaTag {
        key: MetaKey::Name("robots"),
        content: "index,follow",
    },
];

const FONT_STYLESHEETS: &[&str] = &[
    "https://fonts.googleapis.com/css?family=Roboto:300,400,500",
    "https://fonts.googleapis.com/css?family=Roboto+Condensed:300,400",
];

/// The attribute a `<meta>` tag is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey {
    HttpEquiv(&'static str),
    Name(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetaTag {
    pub key: MetaKey,
    pub content: &'static str,
}

/// Everything the header pushes into the document head. Only the title varies between pages.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub meta: &'static [MetaTag],
    pub stylesheets: &'static [&'static str],
}

impl PageMetadata {
    pub fn new(title: Option<&str>) -> Self {
        Self {
            title: title.unwrap_or(DEFAULT_TITLE).to_string(),
            meta: META_TAGS,
            stylesheets: FONT_STYLESHEETS,
        }
    }
}

/// Page header. Renders an empty `header` element and fills the document head with the site's
/// meta tags, web fonts and the page title.
#[component]
pub fn Header(title: Option<String>) -> Element {
    let metadata = PageMetadata::new(title.as_deref());
    let page_title = metadata.title;

    rsx! {
        header {
            for tag in metadata.meta.iter() {
                {meta_tag(tag)}
            }
            for href in metadata.stylesheets.iter() {
                document::Link { href: "{href}", rel: "stylesheet" }
            }
            document::Title { "{page_title}" }
        }
    }
}

fn meta_tag(tag: &MetaTag) -> Element {
    let content = tag.content;
    match tag.key {
        MetaKey::HttpEquiv(http_equiv) => rsx! {
            document::Meta { http_equiv: "{http_equiv}", content: "{content}" }
        },
        MetaKey::Name(name) => rsx! {
            document::Meta { name: "{name}", content: "{content}" }
        },
    }
}
