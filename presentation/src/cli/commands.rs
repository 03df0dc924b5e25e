//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use quadrant_domain::Quadrant;
use std::path::PathBuf;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Quadrant, confidence, reasoning and score breakdown
    Full,
    /// One line per result
    Plain,
    /// JSON output
    Json,
}

impl From<quadrant_domain::OutputFormat> for OutputFormat {
    fn from(format: quadrant_domain::OutputFormat) -> Self {
        match format {
            quadrant_domain::OutputFormat::Full => OutputFormat::Full,
            quadrant_domain::OutputFormat::Plain => OutputFormat::Plain,
            quadrant_domain::OutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for quadrant-triage
#[derive(Parser, Debug)]
#[command(name = "quadrant-triage")]
#[command(author, version, about = "Sort tasks into Eisenhower quadrants by keyword rules")]
#[command(long_about = r#"
quadrant-triage suggests an Eisenhower quadrant for a task title:

  A: Ship Now             urgent + important
  B: Validate / Grow      important
  C: Delegate / Automate  urgent
  D: Drop                 neither

Classification is a deterministic keyword rule engine. Titles that match
no keyword land in D with 30% confidence.

Configuration files are loaded from (in priority order):
1. QUADRANT_* environment variables
2. --config <path>     Explicit config file
3. ./quadrant.toml     Project-level config
4. ~/.config/quadrant-triage/config.toml   Global config

Example:
  quadrant-triage classify "決済バグ修正"
  quadrant-triage -o json classify "A/Bテスト" "README 整理"
  quadrant-triage resolve --urgent on --important off
  quadrant-triage board tasks.json
  quadrant-triage move tasks.json 42 B
  quadrant-triage update tasks.json 42 --toggle-urgent
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Classify one or more task titles
    Classify {
        /// Task titles
        #[arg(required = true)]
        titles: Vec<String>,

        /// Rule file replacing the built-in keyword table
        #[arg(long, value_name = "PATH")]
        rules: Option<PathBuf>,
    },

    /// Show the urgent/important flags of a quadrant
    Flags {
        /// Quadrant letter (A-D)
        #[arg(value_parser = parse_quadrant)]
        quadrant: Quadrant,
    },

    /// Resolve the quadrant of a stored task
    Resolve {
        /// Stored quadrant, if any (always wins over the flags)
        #[arg(long, value_parser = parse_quadrant)]
        quadrant: Option<Quadrant>,

        /// Urgent flag ("true", "on" or "1" mean true)
        #[arg(long, value_name = "VALUE")]
        urgent: Option<String>,

        /// Important flag ("true", "on" or "1" mean true)
        #[arg(long, value_name = "VALUE")]
        important: Option<String>,
    },

    /// Arrange exported tasks (JSON array) into the matrix
    Board {
        /// Path to the exported tasks
        file: PathBuf,
    },

    /// Move an exported task to a quadrant (both flags follow) and show the board
    Move {
        /// Path to the exported tasks
        file: PathBuf,

        /// Task id
        id: String,

        /// Target quadrant letter (A-D)
        #[arg(value_parser = parse_quadrant)]
        quadrant: Quadrant,

        /// Show the result without writing the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Edit the title or flags of an exported task and show the board
    Update {
        /// Path to the exported tasks
        file: PathBuf,

        /// Task id
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// Urgent flag ("true", "on" or "1" mean true)
        #[arg(long, value_name = "VALUE", conflicts_with = "toggle_urgent")]
        urgent: Option<String>,

        /// Important flag ("true", "on" or "1" mean true)
        #[arg(long, value_name = "VALUE", conflicts_with = "toggle_important")]
        important: Option<String>,

        /// Flip the urgent flag
        #[arg(long)]
        toggle_urgent: bool,

        /// Flip the important flag
        #[arg(long)]
        toggle_important: bool,

        /// Show the result without writing the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the active keyword rules
    Rules {
        /// Rule file replacing the built-in keyword table
        #[arg(long, value_name = "PATH")]
        rules: Option<PathBuf>,
    },
}

fn parse_quadrant(s: &str) -> Result<Quadrant, String> {
    s.parse::<Quadrant>().map_err(|e| e.to_string())
}
