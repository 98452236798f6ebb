pub mod app;
pub mod components;
pub mod forms;
pub mod pages;
pub mod reveal;
pub mod routes;
pub mod scroll;
pub mod sections;
pub mod theme;

#[cfg(feature = "ssr")]
pub mod config;

// Re-export for convenience
pub use app::App;
pub use theme::Theme;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    console_error_panic_hook::set_once();

    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new());
    tracing_subscriber::registry()
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .with(console)
        .init();

    leptos::mount::hydrate_body(App);
}
