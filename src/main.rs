//! Endless night-flight terrain demo.
//!
//! Entry point that delegates to the app module.

mod app;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = app::run_flyover() {
        tracing::error!("Flyover failed: {}", err);
        std::process::exit(1);
    }
}
