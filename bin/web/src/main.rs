use ecocycle_web::app::App;
use ecocycle_web::config::AppConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracing_web::MakeWebConsoleWriter;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .without_time()
                .with_writer(MakeWebConsoleWriter::new()),
        )
        .init();

    tracing::info!(api_base = %config.api_base, "starting EcoCycle web client");

    leptos::mount::mount_to_body(App);
}
