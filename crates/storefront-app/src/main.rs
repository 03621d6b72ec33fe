#![forbid(unsafe_code)]

//! Storefront binary entry point.

use std::fs::File;
use std::sync::Mutex;

use storefront_app::catalog_data::default_catalog;
use storefront_app::cli::Opts;
use storefront_app::StorefrontApp;
use storefront_runtime::{Program, ProgramConfig};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install a file logger when one is configured.
///
/// Without a log file nothing is installed; writing to stderr would tear
/// the alternate screen.
fn init_logging(opts: &Opts) -> std::io::Result<()> {
    let Some(path) = &opts.log_file else {
        return Ok(());
    };
    let filter = EnvFilter::try_new(&opts.log_filter).map_err(std::io::Error::other)?;
    let file = File::create(path)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn main() {
    let opts = Opts::parse();

    if let Err(e) = init_logging(&opts) {
        eprintln!("Failed to start logging: {e}");
        std::process::exit(1);
    }

    let catalog = match default_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Failed to initialize: {e}");
            std::process::exit(1);
        }
    };
    let model = StorefrontApp::new(catalog)
        .with_swipe_threshold(opts.swipe_threshold)
        .starting_at(opts.start_index());

    let config = ProgramConfig::default().with_mouse(opts.mouse);
    let mut program = match Program::with_config(model, config) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Failed to initialize: {e}");
            std::process::exit(1);
        }
    };
    let result = program.run();
    // Restore the terminal before reporting.
    drop(program);
    if let Err(e) = result {
        eprintln!("Runtime error: {e}");
        std::process::exit(1);
    }
}
