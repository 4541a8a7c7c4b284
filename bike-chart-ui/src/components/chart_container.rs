//! Chart container component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id D3 renders into
    pub id: String,
    #[props(default = 340)]
    pub min_height: u32,
}

/// A sized wrapper around an empty div owned by D3.js. The inner div has no
/// RSX children, so D3 can replace its contents freely.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; width: 100%; margin-bottom: 16px;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
