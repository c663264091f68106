use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    pub message: String,
    /// Number of requests still waiting for an answer
    #[props(default = 1)]
    pub pending: usize,
}

#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    if props.pending > 1 {
        rsx! {
            div {
                class: "loading-indicator",
                "⏳ {props.message} ({props.pending})"
            }
        }
    } else {
        rsx! {
            div {
                class: "loading-indicator",
                "⏳ {props.message}"
            }
        }
    }
}
