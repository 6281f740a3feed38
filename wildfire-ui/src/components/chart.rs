//! Chart Component
//!
//! Canvas bound to a `ChartHandle`. The canvas is redrawn whenever the
//! handle's data is replaced.

use leptos::*;

use crate::charts::{canvas, ChartHandle};

#[component]
pub fn ChartCanvas(
    chart: ChartHandle,
    id: &'static str,
    #[prop(default = 600)]
    width: u32,
    #[prop(default = 300)]
    height: u32,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let data = chart.data.get();

        if let Some(canvas) = canvas_ref.get() {
            canvas::draw(&canvas, chart.kind, &data);
        }
    });

    view! {
        <canvas
            id=id
            node_ref=canvas_ref
            width=width
            height=height
            class="w-100"
        />
    }
}
