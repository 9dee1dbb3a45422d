use dioxus::prelude::*;

/// Inline glyphs from the Feather icon set. They draw with `currentColor` so they pick up the
/// text colour of whatever they sit in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    FastForward,
    GitHub,
}

impl Icon {
    pub fn render(self) -> Element {
        let glyph = match self {
            Icon::FastForward => rsx! {
                polygon { points: "13 19 22 12 13 5 13 19" }
                polygon { points: "2 19 11 12 2 5 2 19" }
            },
            Icon::GitHub => rsx! {
                path { d: "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.75c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22" }
            },
        };

        rsx! {
            svg {
                class: "feather",
                width: "24",
                height: "24",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                {glyph}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(icon: Icon) -> String {
        dioxus_ssr::render_element(icon.render())
    }

    #[test]
    fn icons_carry_feather_class() {
        for icon in [Icon::FastForward, Icon::GitHub] {
            let html = render(icon);
            assert!(html.starts_with("<svg"));
            assert!(html.contains("class=\"feather\""));
        }
    }

    #[test]
    fn fast_forward_is_two_triangles() {
        assert_eq!(render(Icon::FastForward).matches("<polygon").count(), 2);
    }
}
