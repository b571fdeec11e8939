use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{FoldArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `faqz` binary.
#[derive(Parser, Debug)]
#[command(
	name = "faqz",
	version,
	long_version = long_version(),
	about = "Search a list of frequently asked questions from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "FAQZ_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "PATH",
		help = "JSON file of questions to search (default: bundled questions)"
	)]
	pub(crate) questions: Option<PathBuf>,
	#[arg(
		long,
		value_name = "PATH",
		help = "JSON file of popular questions (default: bundled list)"
	)]
	pub(crate) popular: Option<PathBuf>,
	#[arg(
		short = 'f',
		long,
		value_enum,
		help = "How queries and questions are folded before matching (default: unicode)"
	)]
	pub(crate) fold: Option<FoldArg>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Placeholder shown in the empty search box"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Minimum level captured by the log pane (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
