use std::fmt::Write;
use std::path::PathBuf;

use clap::{
    ColorChoice, Parser, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use loomcss::{app_dirs, default_config_files};

/// Produce the full version banner including the configuration locations.
fn long_version() -> &'static str {
    let config_dir = match app_dirs::get_config_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };

    let mut details = format!("loomcss {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(details);
    let _ = writeln!(details, "config directory: {config_dir}");
    let _ = writeln!(details, "default config files:");
    for path in default_config_files() {
        let _ = writeln!(details, "  {}", path.display());
    }

    Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
    name = "loomcss",
    version,
    long_version = long_version(),
    about = "Check and query the configuration of the loomcss stylesheet build",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
/// Command-line arguments accepted by the `loomcss` binary.
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "LOOMCSS_CONFIG",
        help = "Configuration document to load (default: discover loomcss.config.toml)"
    )]
    pub(crate) config: Option<PathBuf>,
    #[arg(
        short = 'g',
        long = "get",
        value_name = "PATH",
        help = "Print the value at a dotted configuration path and exit"
    )]
    pub(crate) get: Option<String>,
    #[arg(long = "list-plugins", help = "List the plugins this build ships with")]
    pub(crate) list_plugins: bool,
    #[arg(
        long = "list-themes",
        help = "List theme names contributed by registered plugins"
    )]
    pub(crate) list_themes: bool,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print a summary of the loaded configuration"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'o',
        long,
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Output format for --get (default: plain)"
    )]
    pub(crate) output: OutputFormat,
}

/// Output format for queried values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}
