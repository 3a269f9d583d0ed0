use leptos::prelude::*;
use superswap::App;
use tracing_subscriber_wasm::MakeConsoleWriter;

fn main() {
    console_error_panic_hook::set_once();

    tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter::default().map_trace_level_to(tracing::Level::DEBUG))
        .with_max_level(tracing::Level::DEBUG)
        // wasm has no system clock for the default timer
        .without_time()
        .with_ansi(false)
        .init();

    mount_to_body(|| view! { <App /> })
}
