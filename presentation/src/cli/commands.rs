//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for cat-facts
#[derive(Parser, Debug)]
#[command(name = "cat-facts")]
#[command(author, version, about = "Fetch a random cat fact and expose it as a CI step output")]
#[command(long_about = r#"
cat-facts fetches one random fact, prints it, and appends `fact=<text>` to the
file named by $GITHUB_OUTPUT so later workflow steps can read it as
`steps.<id>.outputs.fact`.

Configuration files are loaded from (in priority order):
1. CAT_FACTS_* environment variables (e.g. CAT_FACTS_API__TIMEOUT_SECONDS=5)
2. --config <path>                         Explicit config file
3. ./cat-facts.toml                        Project-level config
4. ~/.config/cat-facts/config.toml         Global config
Command-line flags override all of them.

Example:
  cat-facts
  cat-facts --max-length 80 --output-key short_fact
  cat-facts --output-file ./outputs.txt -v
"#)]
pub struct Cli {
    /// Fact API endpoint
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Ask the API for facts no longer than this many characters
    #[arg(long, value_name = "CHARS")]
    pub max_length: Option<u32>,

    /// Append the step output to this file instead of the one named by the environment
    #[arg(long, value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Key of the `key=value` output line
    #[arg(long, value_name = "KEY")]
    pub output_key: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files and CAT_FACTS_* variables
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
