use std::ffi::OsString;
use std::path::Path;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::warn;

use ce_domain::config::{Config, ConfigSeverity, OutputFormat};
use ce_domain::trace::TraceEvent;

/// Printed to stdout whenever the arguments are unusable.
pub const USAGE: &str = "Usage: cronexpand \"*/15 0 1,15 * 1-5 /usr/bin/find\"";

/// Show the minutes, hours, days and months a cron line fires on.
#[derive(Debug, Parser)]
#[command(name = "cronexpand", version, about)]
pub struct Cli {
    /// The whole cron line as one quoted argument: five fields, then the command.
    #[arg(allow_hyphen_values = true)]
    pub expression: String,
    /// Print the schedule as JSON instead of aligned text.
    #[arg(long)]
    pub json: bool,
    /// TOML config file; overrides `CRONEXPAND_CONFIG`. Without either,
    /// built-in defaults are used.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,
}

/// What the command line asked for.
#[derive(Debug)]
pub enum Args {
    Run(Cli),
    /// `--help` or `--version`; clap prints these itself.
    Display(clap::Error),
    /// Missing, extra, or unknown arguments.
    Usage,
}

pub fn parse_args<I, T>(args: I) -> Args
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Args::Run(cli),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Args::Display(e)
        }
        Err(_) => Args::Usage,
    }
}

// ── Config loading helper ─────────────────────────────────────────────

/// Label used in place of a path when no config file was requested.
pub const DEFAULTS_LABEL: &str = "<defaults>";

/// A resolved configuration and where it came from.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: String,
    pub from_file: bool,
}

/// Pick the config file the user asked for: `--config` first, then a
/// non-empty `CRONEXPAND_CONFIG`. Nothing is read implicitly.
pub fn config_path(flag: Option<&str>, env: Option<String>) -> Option<String> {
    flag.map(str::to_owned)
        .or_else(|| env.filter(|p| !p.trim().is_empty()))
}

/// Load the configuration named by `--config` or `CRONEXPAND_CONFIG`,
/// falling back to the built-in defaults when neither is given.
pub fn load_config(cli: &Cli) -> anyhow::Result<LoadedConfig> {
    let env = std::env::var("CRONEXPAND_CONFIG").ok();
    load_config_from(config_path(cli.config.as_deref(), env).as_deref())
}

/// A requested file that is missing or malformed is an error.
pub fn load_config_from(config_path: Option<&str>) -> anyhow::Result<LoadedConfig> {
    let Some(config_path) = config_path else {
        return Ok(LoadedConfig {
            config: Config::default(),
            path: DEFAULTS_LABEL.into(),
            from_file: false,
        });
    };

    let config = Config::load(Path::new(config_path))
        .with_context(|| format!("loading {config_path}"))?;

    Ok(LoadedConfig {
        config,
        path: config_path.to_owned(),
        from_file: true,
    })
}

/// Log warnings and fail on error-level issues.
///
/// Runs after tracing is initialised so warnings reach stderr.
pub fn check_config(loaded: &LoadedConfig) -> ce_domain::Result<()> {
    let issues = loaded.config.validate();

    TraceEvent::ConfigLoaded {
        path: loaded.path.clone(),
        from_file: loaded.from_file,
        issues: issues.len(),
    }
    .emit();

    let mut errors = Vec::new();
    for issue in &issues {
        match issue.severity {
            ConfigSeverity::Warning => warn!(path = %loaded.path, "{issue}"),
            ConfigSeverity::Error => errors.push(issue.to_string()),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ce_domain::Error::Config(format!(
            "{} in {}",
            errors.join("; "),
            loaded.path
        )))
    }
}

// ── Execution ─────────────────────────────────────────────────────────

/// Text destined for stdout and the process exit code.
#[derive(Debug, PartialEq, Eq)]
pub struct Outcome {
    pub stdout: String,
    pub code: i32,
}

/// Parse and render one expression.
///
/// A rejected expression is an ordinary outcome (`Error: ...`, exit 1);
/// only rendering failures surface as `Err`.
pub fn execute(cli: &Cli, config: &Config) -> anyhow::Result<Outcome> {
    let schedule = match ce_schedule::parse(&cli.expression) {
        Ok(schedule) => schedule,
        Err(e) => {
            return Ok(Outcome {
                stdout: format!("Error: {e}\n"),
                code: 1,
            })
        }
    };

    let mut output = config.output.clone();
    if cli.json {
        output.format = OutputFormat::Json;
    }

    let stdout = ce_schedule::render(&schedule, &output).context("rendering schedule")?;
    Ok(Outcome { stdout, code: 0 })
}
