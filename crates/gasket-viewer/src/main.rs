mod app;
mod config;

use anyhow::{Context, Result};

use gasket_engine::device::GpuInit;
use gasket_engine::logging::{init_logging, LoggingConfig};
use gasket_engine::window::{Runtime, RuntimeConfig};

use crate::app::WgpuGasketApp;
use crate::config::GasketConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = GasketConfig::from_env().context("failed to load configuration")?;

    println!();
    println!("  ┌──────────────────────────────────────┐");
    println!("  │   SIERPINSKI GASKET  ·  wgpu         │");
    println!("  └──────────────────────────────────────┘");
    println!("  depth {}  ·  close the window to exit", config.depth);
    println!();

    if config.seed.is_degenerate() {
        log::warn!("seed triangle {:?} has zero area; the gasket will be invisible", config.seed);
    }

    let vertices = config.seed.gasket(config.depth);
    log::info!(
        "generated {} vertices ({} triangles) at depth {}",
        vertices.len(),
        vertices.len() / 3,
        config.depth
    );

    let runtime = RuntimeConfig {
        title: format!("Sierpinski gasket (depth {})", config.depth),
        ..Default::default()
    };

    let app = Runtime::run(runtime, GpuInit::default(), WgpuGasketApp::new(vertices))?;

    // The render was abandoned. Returning the error is its only report: it is
    // printed with the diagnostic and the process exits non-zero.
    if let Some(err) = app.into_failure() {
        return Err(err.into());
    }

    Ok(())
}
