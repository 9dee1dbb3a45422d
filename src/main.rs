use dioxus::logger::tracing::Level;
use dioxus::prelude::*;
use views::Home;

/// Define a components module that contains all shared components for our app.
mod components;
/// Define a views module that contains the UI for all Layouts and Routes for our app.
mod views;

/// The Route enum is used to define the structure of internal routes in our app. All route enums need to derive
/// the [`Routable`] trait, which provides the necessary methods for the router to work.
///
/// The landing page is the only route for now; every section of the page is composed inside [`Home`].
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

// Global styles shared by every section. Section specific sheets are linked by the section itself.
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

/// App is the root component of the site. It takes no props, links the global stylesheet and hands the
/// rest of the page over to the router.
#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
