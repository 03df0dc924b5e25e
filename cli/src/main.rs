//! CLI entrypoint for quadrant-triage
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use quadrant_application::{
    BuildBoardUseCase, ClassificationLogger, ClassificationProgress, ClassifyParams,
    ClassifyTaskInput, ClassifyTaskUseCase, EditTaskUseCase, NoProgress, TaskEdit,
};
use quadrant_domain::{
    Quadrant, QuadrantClassifier, QuadrantFlags, RuleSet, Task, TaskUpdate, parse_flag,
};
use quadrant_infrastructure::{
    ConfigLoader, FileConfig, JsonTaskExporter, JsonTaskImporter, JsonlClassificationLogger,
    RuleFileLoader,
};
use quadrant_presentation::{
    Cli, Command, ConsoleFormatter, OutputFormat, ProgressReporter, SimpleProgress,
};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    let mut has_errors = false;
    for issue in config.validate() {
        if issue.is_error() {
            has_errors = true;
            eprintln!("config error: {}", issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }
    if has_errors {
        bail!("Invalid configuration");
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    let format = cli
        .output
        .unwrap_or_else(|| config.output.format.unwrap_or_default().into());

    let Some(command) = cli.command else {
        bail!("No command given. Run with --help for usage.");
    };

    info!("Starting quadrant-triage");

    match command {
        Command::Classify { titles, rules } => {
            let show_progress =
                !cli.quiet && config.output.show_progress && format != OutputFormat::Json;
            classify(titles, rules, &config, format, show_progress).await
        }
        Command::Flags { quadrant } => {
            print_flags(quadrant, format);
            Ok(())
        }
        Command::Resolve {
            quadrant,
            urgent,
            important,
        } => {
            let flags = QuadrantFlags::new(
                parse_flag(urgent.as_deref(), false),
                parse_flag(important.as_deref(), false),
            );
            print_flags(Quadrant::resolve(quadrant, flags), format);
            Ok(())
        }
        Command::Board { file } => board(&file, format),
        Command::Move {
            file,
            id,
            quadrant,
            dry_run,
        } => edit(&file, &id, vec![TaskEdit::Move(quadrant)], dry_run, format),
        Command::Update {
            file,
            id,
            title,
            urgent,
            important,
            toggle_urgent,
            toggle_important,
            dry_run,
        } => {
            let mut edits = Vec::new();
            let update =
                TaskUpdate::from_form(title.as_deref(), urgent.as_deref(), important.as_deref());
            if !update.is_empty() || !(toggle_urgent || toggle_important) {
                edits.push(TaskEdit::Update(update));
            }
            if toggle_urgent {
                edits.push(TaskEdit::ToggleUrgent);
            }
            if toggle_important {
                edits.push(TaskEdit::ToggleImportant);
            }
            edit(&file, &id, edits, dry_run, format)
        }
        Command::Rules { rules } => {
            let rules = load_rules(rules, &config)?;
            let output = match format {
                OutputFormat::Json => ConsoleFormatter::format_rules_json(&rules),
                _ => ConsoleFormatter::format_rules(&rules),
            };
            println!("{}", output);
            Ok(())
        }
    }
}

/// Built-in rules unless a rule file is given on the command line or in config
fn load_rules(cli_path: Option<PathBuf>, config: &FileConfig) -> Result<RuleSet> {
    match cli_path.or_else(|| config.classifier.rules_path.clone()) {
        Some(path) => RuleFileLoader::load(&path)
            .with_context(|| format!("Failed to load rules from {}", path.display())),
        None => Ok(RuleSet::standard()),
    }
}

async fn classify(
    titles: Vec<String>,
    rules: Option<PathBuf>,
    config: &FileConfig,
    format: OutputFormat,
    show_progress: bool,
) -> Result<()> {
    let rules = load_rules(rules, config)?;
    let classifier = Arc::new(QuadrantClassifier::new(Arc::new(rules)));

    // === Dependency Injection ===
    let mut use_case = ClassifyTaskUseCase::new(classifier);
    if let Some(path) = &config.logging.classification_log {
        match JsonlClassificationLogger::open(path) {
            Ok(logger) => {
                info!("Logging classifications to {}", logger.path().display());
                let logger: Arc<dyn ClassificationLogger> = Arc::new(logger);
                use_case = use_case.with_logger(logger);
            }
            Err(e) => warn!(
                "Classification log disabled, could not open {}: {}",
                path.display(),
                e
            ),
        }
    }

    let progress: Box<dyn ClassificationProgress> = match show_progress {
        false => Box::new(NoProgress),
        true if std::io::stderr().is_terminal() => Box::new(ProgressReporter::new()),
        true => Box::new(SimpleProgress),
    };
    let params: ClassifyParams = config.classifier.to_classify_params();

    let mut outputs = Vec::with_capacity(titles.len());
    for title in titles {
        let input = ClassifyTaskInput::new(title).with_params(params.clone());
        outputs.push(use_case.execute_with_progress(input, progress.as_ref()).await?);
    }

    match format {
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&outputs)),
        OutputFormat::Plain => {
            for output in &outputs {
                println!("{}", ConsoleFormatter::format_plain(output));
            }
        }
        OutputFormat::Full => {
            let rendered: Vec<String> = outputs.iter().map(ConsoleFormatter::format).collect();
            println!("{}", rendered.join("\n"));
        }
    }

    Ok(())
}

fn print_flags(quadrant: Quadrant, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_flags_json(quadrant)),
        _ => println!("{}", ConsoleFormatter::format_flags(quadrant)),
    }
}

fn board(path: &Path, format: OutputFormat) -> Result<()> {
    let tasks = JsonTaskImporter::from_path(path)?;
    print_board(tasks, format);
    Ok(())
}

/// Apply edits to one task, write the file back and show the board
fn edit(
    path: &Path,
    id: &str,
    edits: Vec<TaskEdit>,
    dry_run: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut tasks = JsonTaskImporter::from_path(path)?;
    let use_case = EditTaskUseCase::new();
    for edit in edits {
        use_case.execute(&mut tasks, id, edit)?;
    }

    if dry_run {
        info!("Dry run, {} not written", path.display());
    } else {
        JsonTaskExporter::to_path(path, &tasks)?;
    }
    print_board(tasks, format);
    Ok(())
}

fn print_board(tasks: Vec<Task>, format: OutputFormat) {
    let board = BuildBoardUseCase::new().execute(tasks);

    let output = match format {
        OutputFormat::Json => ConsoleFormatter::format_board_json(&board),
        _ => ConsoleFormatter::format_board(&board),
    };
    println!("{}", output);
}
