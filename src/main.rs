//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; login decisions are delegated to AuthService.

use dotenv::dotenv;
use grade_gate::adapters::identity::DemoIdentityGate;
use grade_gate::adapters::ui::render::ViewOptions;
use grade_gate::adapters::ui::tui::TuiInputPort;
use grade_gate::ports::{IdentityPort, InputPort};
use grade_gate::shared::config::AppConfig;
use grade_gate::usecases::AuthService;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    let cfg_loaded = AppConfig::load();
    let cfg = cfg_loaded.as_ref().cloned().unwrap_or_default();

    // Prompts are drawn on stderr too; keep the default filter quiet.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cfg.log_filter_or_default())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }
    if let Err(e) = &cfg_loaded {
        warn!(error = %e, "config could not be loaded, using defaults");
    }

    grade_gate::adapters::ui::init_ui(cfg.show_banner_or_default())?;

    // --- Identity: no backend, every shape-valid credential is accepted ---
    let identity: Arc<dyn IdentityPort> = Arc::new(DemoIdentityGate::new());
    let auth_service = Arc::new(AuthService::new(identity));

    let view = ViewOptions {
        show_demo_hint: cfg.show_demo_hint_or_default(),
        average_decimals: cfg.average_decimals_or_default(),
    };
    info!(
        show_demo_hint = view.show_demo_hint,
        average_decimals = view.average_decimals,
        "view options"
    );

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(auth_service, view));

    // --- Run (login -> welcome -> grades/result until quit) ---
    input_port.run().await?;

    Ok(())
}
