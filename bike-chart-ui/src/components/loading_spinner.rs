use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner(#[props(default = "Loading rental data...".to_string())] label: String) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "{label}"
        }
    }
}
