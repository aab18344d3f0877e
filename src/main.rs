mod capability;
mod collectors;
mod emit;
mod platform;
mod snapshot;

use clap::Parser;
use emit::{Emitter, JsonLineEmitter};
use platform::HostPlatform;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hostsnap")]
#[command(version)]
struct Cli {}

fn main() {
    init_tracing();
    let _cli = Cli::parse();

    let caps = capability::detect();
    info!(
        connectivity = ?caps.connectivity,
        peripherals = ?caps.peripherals,
        "определены возможности хоста"
    );

    let mut platform = HostPlatform::new(caps);
    let snapshot = match snapshot::assemble(&mut platform) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            error!(error = %err, "сборка снимка прервана");
            std::process::exit(1);
        }
    };

    let mut emitter = JsonLineEmitter::new(std::io::stdout().lock());
    if let Err(err) = emitter.emit(&snapshot) {
        error!(error = %err, "не удалось вывести снимок");
        std::process::exit(1);
    }
}

// Diagnostics go to stderr; stdout carries only the JSON record.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
