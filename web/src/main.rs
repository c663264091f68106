use dioxus::prelude::*;
use ui::services::client::EmployeeFilterClient;
use ui::services::config::FilterConfig;
use ui::EmployeeFilter;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
}

#[component]
fn Home() -> Element {
    // Built once; the origin comes from the page the app is served from
    let client = use_hook(|| EmployeeFilterClient::new(FilterConfig::for_page()));

    rsx! {
        div {
            EmployeeFilter { client: client }
        }
    }
}
