use tracing_subscriber::EnvFilter;

use ce_cli::cli::{self, Args, USAGE};
use ce_domain::config::LoggingConfig;

fn main() -> anyhow::Result<()> {
    let cli = match cli::parse_args(std::env::args_os()) {
        Args::Run(cli) => cli,
        Args::Display(e) => e.exit(),
        Args::Usage => {
            println!("{USAGE}");
            std::process::exit(1);
        }
    };

    let loaded = cli::load_config(&cli)?;
    init_cli_tracing(&loaded.config.logging);
    cli::check_config(&loaded)?;

    let outcome = cli::execute(&cli, &loaded.config)?;
    print!("{}", outcome.stdout);
    if outcome.code != 0 {
        std::process::exit(outcome.code);
    }
    Ok(())
}

/// Initialize compact stderr-only tracing.
///
/// `RUST_LOG` wins over the configured level so stdout stays clean
/// unless diagnostics are explicitly requested.
fn init_cli_tracing(logging: &LoggingConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&logging.level)),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
