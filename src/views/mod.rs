//! Routed pages. Each view composes components from [`crate::components`].

mod home;
pub use home::Home;
