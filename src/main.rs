mod cli;

use std::path::PathBuf;

use anyhow::{Context, Result};
use cli::{CliArgs, OutputFormat, parse_cli, print_json, print_plain};
use loomcss::{PluginRegistry, builtin_registry, discover_config_file, load_path};

fn main() -> Result<()> {
	loomcss::logging::init();
	let cli = parse_cli();
	let registry = builtin_registry()?;

	if cli.list_themes {
		for name in registry.theme_names() {
			println!("{name}");
		}
		return Ok(());
	}

	if cli.list_plugins {
		for descriptor in registry.descriptors() {
			println!("{}\t{}", descriptor.id, descriptor.summary);
		}
		return Ok(());
	}

	run_query(&cli, &registry)
}

/// Load the requested document and answer the query or checking run.
fn run_query(cli: &CliArgs, registry: &PluginRegistry) -> Result<()> {
	let path = resolve_config_path(cli)?;
	let document = load_path(&path, registry)
		.with_context(|| format!("configuration {} is not usable", path.display()))?;

	if let Some(query) = &cli.get {
		let value = document.get(query)?;
		return match cli.output {
			OutputFormat::Plain => {
				print_plain(value);
				Ok(())
			}
			OutputFormat::Json => print_json(value),
		};
	}

	if cli.print_config {
		document.print_summary();
	} else {
		println!("{}: OK", path.display());
	}

	Ok(())
}

fn resolve_config_path(cli: &CliArgs) -> Result<PathBuf> {
	match &cli.config {
		Some(path) => Ok(path.clone()),
		None => discover_config_file().context(
			"no configuration document found (looked for loomcss.config.toml and .loomcss.toml)",
		),
	}
}
