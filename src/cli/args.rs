//! CLI argument parsing and configuration.

use std::path::PathBuf;

use crate::error::ConfigError;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments. `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliConfig {
    pub sounds_dir: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub volume: Option<f32>,
    pub log_file: Option<PathBuf>,
    pub list_only: bool,
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Run(CliConfig),
    Help,
    Version,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("Soundboard TUI - play character clips from the terminal");
    eprintln!();
    eprintln!("Usage: soundboard-tui [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -s, --sounds <DIR>     Directory containing the clips (default: ./sounds)");
    eprintln!("  -c, --config <FILE>    Settings file (default: <config dir>/soundboard-tui/config.json)");
    eprintln!("      --volume <0-1>     Output volume (default: 1.0)");
    eprintln!("      --log-file <FILE>  Write logs here instead of the data directory");
    eprintln!("  -l, --list             Print the catalog and exit");
    eprintln!("  -h, --help             Show this help message");
    eprintln!("  -V, --version          Show version");
    eprintln!();
    eprintln!("Keys:");
    eprintln!("  Up/Down, j/k           Move focus");
    eprintln!("  Enter/Space, click     Play the row");
    eprintln!("  s                      Stop");
    eprintln!("  q, Esc                 Quit");
}

/// Take the value following a flag
fn flag_value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String, ConfigError> {
    args.next()
        .ok_or_else(|| ConfigError::InvalidArgument(format!("Missing value for {}", flag)))
}

/// Parse arguments (without the program name)
pub fn parse_from<I>(args: I) -> Result<CliCommand, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = CliConfig::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(CliCommand::Help),
            "-V" | "--version" => return Ok(CliCommand::Version),
            "-l" | "--list" => config.list_only = true,
            "-s" | "--sounds" => {
                config.sounds_dir = Some(PathBuf::from(flag_value(&mut args, &arg)?));
            }
            "-c" | "--config" => {
                config.config_path = Some(PathBuf::from(flag_value(&mut args, &arg)?));
            }
            "--log-file" => {
                config.log_file = Some(PathBuf::from(flag_value(&mut args, &arg)?));
            }
            "--volume" => {
                let value = flag_value(&mut args, &arg)?;
                let volume: f32 = value.parse().map_err(|_| {
                    ConfigError::InvalidArgument(format!("Invalid volume value: {}", value))
                })?;
                if !(0.0..=1.0).contains(&volume) {
                    return Err(ConfigError::InvalidArgument(format!(
                        "Volume must be between 0 and 1, got {}",
                        value
                    )));
                }
                config.volume = Some(volume);
            }
            _ => {
                return Err(ConfigError::InvalidArgument(format!(
                    "Unknown argument: {}",
                    arg
                )));
            }
        }
    }

    Ok(CliCommand::Run(config))
}

/// Parse process arguments, handling --help and --version directly
pub fn parse_args() -> Result<CliConfig, ConfigError> {
    match parse_from(std::env::args().skip(1)) {
        Ok(CliCommand::Run(config)) => Ok(config),
        Ok(CliCommand::Help) => {
            print_usage();
            std::process::exit(0);
        }
        Ok(CliCommand::Version) => {
            println!("soundboard-tui {}", VERSION);
            std::process::exit(0);
        }
        Err(e) => {
            print_usage();
            Err(e)
        }
    }
}
