mod app_state;
mod cli;
mod texture_source;

use std::path::{Path, PathBuf};

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use vrhome_config::toml_loader::{default_config_path, ensure_default_config, load_from_path};
use vrhome_config::ReloadManager;

use app_state::LaunchOptions;

const DEFAULT_LOG_DIRECTIVE: &str = "vrhome=info";

/// `[logging] level` from the config file, as a filter directive.
fn config_log_directive(path: &Path) -> Option<String> {
    let config = load_from_path(path).ok()?;
    Some(format!("vrhome={}", config.logging.level.as_directive()))
}

fn init_logging(directive: &str) {
    let directive = directive
        .parse::<Directive>()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse::<Directive>());
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Create the documented default config on first run.
fn ensure_config(path: &Path) {
    if path.as_os_str().is_empty() {
        return;
    }
    if let Err(e) = ensure_default_config(path) {
        tracing::warn!("Could not create default config: {e}");
    }
}

fn main() {
    let args = cli::parse();

    let config_path = match args.config.as_deref() {
        Some(path) => PathBuf::from(path),
        None => default_config_path().unwrap_or_default(),
    };

    let log_directive = args
        .log_level
        .clone()
        .or_else(|| config_log_directive(&config_path))
        .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string());
    init_logging(&log_directive);

    tracing::info!("VR Home v{} starting...", env!("CARGO_PKG_VERSION"));
    if args.config.is_some() {
        tracing::info!("Using config override: {}", config_path.display());
    }
    ensure_config(&config_path);

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start async runtime: {e}");
            return;
        }
    };

    let (settings, settings_rx) = {
        let _guard = runtime.enter();
        ReloadManager::start(config_path.clone())
    };
    tracing::info!(
        "Config loaded (theme: {}, {} panels)",
        settings.theme.name,
        settings.config.panels.len()
    );

    let options = LaunchOptions {
        config_path,
        theme_override: args.theme,
        force_mono: args.vrmono,
    };

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return;
        }
    };
    let mut app = app_state::VrHomeApp::new(options, settings, settings_rx, runtime.handle().clone());

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    drop(app);
    runtime.shutdown_background();
    tracing::info!("Shutdown complete");
}
