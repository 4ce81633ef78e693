//! notekit CLI: copy note templates into a vault
//!
//! Commands: copy, analyze, list, config, completions

mod config;
mod prompt;
mod report;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{CommandFactory, Parser};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use notekit_core::{NotekitError, StatKind};
use notekit_vault::{
    format_listing, list_directory, validate_source, validate_target, ConflictChecker,
    CopyExecutor, CopyPlanner, FormatAnalyzer, OutputFormat, TemplateSource,
};

use config::{is_bare_name, resolve_template, Configuration, PATHS, TEMPLATES};
use report::{AnalysisReport, CopyReport};

/// Exit code for malformed requests, matching clap's own usage errors.
const USAGE_EXIT: u8 = 2;

#[derive(Parser)]
#[command(name = "notekit")]
#[command(version)]
#[command(about = "Copy note templates into a vault, following its naming convention")]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, env = "NOTEKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Copy a template into a directory
    #[command(alias = "cp")]
    Copy(CopyArgs),
    /// Detect the naming convention of a directory
    Analyze {
        directory: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List files with their statistics
    #[command(alias = "ls")]
    List(ListArgs),
    /// Inspect or change the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions { shell: clap_complete::Shell },
}

#[derive(clap::Args)]
struct CopyArgs {
    /// Template file, or a file name in the configured template directory
    template: PathBuf,
    /// Directory to copy into
    destination: PathBuf,
    /// Number of copies
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    number_copies: i64,
    /// Use default copy names even when the directory has a convention
    #[arg(long)]
    no_formatting: bool,
    /// Date used for ISO-dated names (default: today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<NaiveDate>,
    /// Continue past conflicts without asking
    #[arg(short, long)]
    yes: bool,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args)]
struct ListArgs {
    /// Directory to list
    #[arg(short, long, conflicts_with = "use_config")]
    directory: Option<PathBuf>,
    /// Key in the PATHS section naming the directory to list
    #[arg(short, long, default_value = TEMPLATES)]
    use_config: String,
    /// Comma-separated stats: created, modified, accessed, size
    #[arg(short, long, value_delimiter = ',')]
    stats: Vec<StatKind>,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(clap::Subcommand)]
enum ConfigAction {
    /// Print the configuration file location
    Path,
    /// Print the configuration
    Show,
    /// Print one value
    Get { section: String, key: String },
    /// Set one value
    Set {
        section: String,
        key: String,
        value: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_status(&err))
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn exit_status(err: &anyhow::Error) -> u8 {
    if err
        .downcast_ref::<NotekitError>()
        .is_some_and(NotekitError::is_usage)
    {
        USAGE_EXIT
    } else {
        1
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Copy(args) => {
            let mut config = load_config(cli.config.as_deref())?;
            cmd_copy(&args, &mut config)
        }
        Commands::Analyze { directory, json } => cmd_analyze(&directory, json),
        Commands::List(args) => {
            let config = load_config(cli.config.as_deref())?;
            cmd_list(&args, &config)
        }
        Commands::Config { action } => {
            let mut config = load_config(cli.config.as_deref())?;
            cmd_config(action, &mut config)
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "notekit", &mut io::stdout());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(explicit: Option<&Path>) -> anyhow::Result<Configuration> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => Configuration::default_path()?,
    };
    Ok(Configuration::load_or_init(&path)?)
}

fn cmd_copy(args: &CopyArgs, config: &mut Configuration) -> anyhow::Result<ExitCode> {
    let template = resolve_template(&args.template, config);
    let source = validate_source(&template).context("invalid template")?;
    if !is_bare_name(&args.template) && !args.yes && prompt::is_interactive() {
        offer_template_directory(&source, config)?;
    }
    let target = validate_target(&args.destination).context("invalid destination")?;

    let planner = args.date.map_or_else(CopyPlanner::new, CopyPlanner::on);
    let (plan, format) =
        planner.plan_with_decision(&source, &target, !args.no_formatting, args.number_copies)?;

    let conflicts = ConflictChecker::check(&plan);
    if !conflicts.is_valid() {
        for path in &conflicts.conflicting {
            eprintln!("warning: {} already exists and will be skipped", path.display());
        }
        if !continue_past_conflicts(args.yes)? {
            eprintln!("Copy aborted; no files were written.");
            return Ok(ExitCode::FAILURE);
        }
    }

    let results = CopyExecutor::copy_many(&source, &plan);
    let report = CopyReport {
        template: source.path().to_path_buf(),
        destination: target.path().to_path_buf(),
        format,
        plan,
        results,
    };

    if args.json {
        println!("{}", report.to_json());
    } else {
        print!("{}", report.to_text());
    }

    Ok(if report.succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn continue_past_conflicts(yes: bool) -> anyhow::Result<bool> {
    if yes {
        return Ok(true);
    }
    if !prompt::is_interactive() {
        warn!("conflicts found in a non-interactive session; pass --yes to continue");
        return Ok(false);
    }
    prompt::yes_no_prompt("Continue copying the available files?", false)
}

/// Ask whether the template's directory should become the configured
/// template directory.
fn offer_template_directory(
    source: &TemplateSource,
    config: &mut Configuration,
) -> anyhow::Result<()> {
    let Some(parent) = source.path().parent() else {
        return Ok(());
    };
    let current = config.get_non_empty(PATHS, TEMPLATES).map(PathBuf::from);
    let unchanged = current
        .as_deref()
        .is_some_and(|dir| dir.canonicalize().is_ok_and(|dir| dir == parent));
    if unchanged {
        return Ok(());
    }

    let question = match &current {
        Some(dir) => format!(
            "Change the default template directory from {} to {}?",
            dir.display(),
            parent.display()
        ),
        None => format!("Use {} as the default template directory?", parent.display()),
    };
    if prompt::yes_no_prompt(&question, false)? {
        config.set(PATHS, TEMPLATES, &parent.to_string_lossy())?;
        info!(directory = %parent.display(), "template directory updated");
    }
    Ok(())
}

fn cmd_analyze(directory: &Path, json: bool) -> anyhow::Result<ExitCode> {
    let directory = validate_target(directory)?;
    let format = FormatAnalyzer::analyze(directory.path())?;
    let report = AnalysisReport {
        directory: directory.path().to_path_buf(),
        format,
    };

    if json {
        println!("{}", report.to_json());
    } else {
        print!("{}", report.to_text());
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_list(args: &ListArgs, config: &Configuration) -> anyhow::Result<ExitCode> {
    let directory = match &args.directory {
        Some(dir) => dir.clone(),
        None => match config.get_non_empty(PATHS, &args.use_config) {
            Some(dir) => PathBuf::from(dir),
            None => bail!(
                "{PATHS}.{} is not set in {}; pass --directory or run `notekit config set {PATHS} {} <DIR>`",
                args.use_config,
                config.path().display(),
                args.use_config
            ),
        },
    };
    let stats = if args.stats.is_empty() {
        StatKind::DEFAULT.to_vec()
    } else {
        args.stats.clone()
    };

    let listing = list_directory(&directory, &stats)?;
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };
    let output = format_listing(&listing, format);
    if args.json {
        println!("{output}");
    } else {
        print!("{output}");
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_config(action: ConfigAction, config: &mut Configuration) -> anyhow::Result<ExitCode> {
    match action {
        ConfigAction::Path => println!("{}", config.path().display()),
        ConfigAction::Show => print!("{}", config.to_toml()?),
        ConfigAction::Get { section, key } => match config.get(&section, &key) {
            Some(value) => println!("{value}"),
            None => {
                eprintln!("{section}.{key} is not set");
                return Ok(ExitCode::FAILURE);
            }
        },
        ConfigAction::Set {
            section,
            key,
            value,
        } => config.set(&section, &key, &value)?,
    }
    Ok(ExitCode::SUCCESS)
}
