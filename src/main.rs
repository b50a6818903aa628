use console_gen::cli::Cli;
use console_gen::errors::GenError;
use console_gen::generate::{self, GenerateConfig};
use console_gen::output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Main entry point for the generator
fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_json)?;

    output::print_banner(&cli.out_dir, cli.check);

    let config = GenerateConfig::new(cli.out_dir.clone()).with_check(cli.check);
    match generate::run(&config) {
        Ok(report) => {
            output::print_model(&config.address, &report);
            output::print_files(&report.files);
            Ok(())
        }
        Err(GenError::Stale(paths)) => {
            output::print_stale_hint(&paths);
            Err(GenError::Stale(paths).into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Initialize tracing, honoring `RUST_LOG` and defaulting to `info`.
fn init_tracing(json: bool) -> eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);
    let init = if json { builder.json().try_init() } else { builder.try_init() };
    init.map_err(|e| eyre::eyre!("failed to initialize tracing: {e}"))
}
