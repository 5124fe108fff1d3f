//! Vehicle catalog server binary.

use std::process::ExitCode;

use configs::AppConfig;
use tracing::{error, info, warn};
use uuid::Uuid;

const SERVICE: &str = "vehicle-catalog";

/// Identity stamped on this process's lifecycle events.
#[derive(Clone, Copy)]
struct Instance {
    id: Uuid,
    pid: u32,
}

impl Instance {
    fn new() -> Self {
        Self { id: Uuid::new_v4(), pid: std::process::id() }
    }

    fn install_panic_hook(self) {
        std::panic::set_hook(Box::new(move |info| {
            error!(service = SERVICE, event = "panic", instance = %self.id, pid = self.pid, message = %info, "unhandled panic");
        }));
    }
}

fn build_runtime(cfg: &AppConfig) -> std::io::Result<tokio::runtime::Runtime> {
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all().thread_name("vehicle-catalog-worker");
    if let Some(n) = cfg.server.worker_threads.filter(|n| *n > 0) {
        builder.worker_threads(n);
    }
    builder.build()
}

async fn shutdown_signal(instance: Instance) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(service = SERVICE, event = "signal_unavailable", error = %e, "cannot listen for Ctrl+C; serving until killed");
        std::future::pending::<()>().await;
    }
    info!(service = SERVICE, event = "shutdown_signal", instance = %instance.id, "Ctrl+C received, draining connections");
}

fn main() -> ExitCode {
    // .env first so RUST_LOG and LOG_FORMAT from it apply
    dotenvy::dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let instance = Instance::new();
    instance.install_panic_hook();

    let cfg = match AppConfig::load_or_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = SERVICE, event = "config_invalid", error = %format!("{e:#}"), "refusing to start");
            return ExitCode::FAILURE;
        }
    };

    let rt = match build_runtime(&cfg) {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = SERVICE, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = SERVICE,
        event = "start",
        instance = %instance.id,
        pid = instance.pid,
        version = env!("CARGO_PKG_VERSION"),
        threads = ?cfg.server.worker_threads,
        "vehicle catalog starting"
    );

    match rt.block_on(server::run(cfg, shutdown_signal(instance))) {
        Ok(()) => {
            info!(service = SERVICE, event = "stop", instance = %instance.id, "vehicle catalog stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = SERVICE, event = "run_failed", instance = %instance.id, error = %format!("{e:#}"), "vehicle catalog failed");
            ExitCode::FAILURE
        }
    }
}
