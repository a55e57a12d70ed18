use std::sync::Arc;

use clap::Parser;

use vidremote::display::{DisplayBridge, LogSurface, ScriptSurface, StdoutSurface, SurfaceKind};
use vidremote::remote::Remote;
use vidremote::{cli, config, http, ready, server};

/// Attach the configured surface. A real window host would fire the ready
/// signal from its own "runtime ready" event; the built-in surfaces are usable
/// as soon as they exist.
fn attach_surface(kind: SurfaceKind, signal: &ready::ReadySignal) -> Arc<dyn ScriptSurface> {
    let surface: Arc<dyn ScriptSurface> = match kind {
        SurfaceKind::Log => Arc::new(LogSurface),
        SurfaceKind::Stdout => Arc::new(StdoutSurface::new()),
    };
    signal.fire();
    surface
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so the stdout surface carries nothing but scripts.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        )
        .init();

    let args = cli::Args::parse();

    let file_config = config::find_config_file(args.config.as_deref())
        .and_then(|path| {
            match config::load_config(&path) {
                Ok(cfg) => {
                    tracing::debug!("Loaded config from {}", path.display());
                    Some(cfg)
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config file: {}", e);
                    None
                }
            }
        });

    let config = config::Config::resolve(file_config, &args);
    let addr = server::bind_addr(config.port, config.localhost);

    tracing::info!(
        "vidremote on port {} (embed base: {}, surface: {:?})",
        config.port,
        config.embed_base,
        config.surface
    );

    let (signal, gate) = ready::ready_pair();
    let surface = attach_surface(config.surface, &signal);

    let remote = Remote::new(DisplayBridge::new(surface), config.embed_base);
    let state = http::state::AppState {
        remote: Arc::new(remote),
    };
    let app = http::build_router(state);

    // No graceful shutdown: Ctrl+C simply ends the process.
    tokio::select! {
        result = server::run(addr, app, gate) => {
            if let Err(e) = result {
                tracing::error!("{}", e);
                std::process::exit(1);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupted, exiting.");
        }
    }
}
