//! Shared building blocks for the site. Views compose these; nothing in here knows about routing.

mod button;
pub use button::Button;

mod code_examples;
pub use code_examples::CodeExamples;

mod header;
pub use header::Header;

mod hero;
pub use hero::Hero;

mod icons;
pub use icons::Icon;
