use anyhow::Result;
use bit_prompt::areas::environment::Environment;
use bit_prompt::areas::repository::Repository;
use bit_prompt::artifacts::format::shell::Shell;
use clap::{Parser, Subcommand, ValueEnum};
use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

const LOG_ENV: &str = "BIT_PROMPT_LOG";
const LOG_LEVEL_ENV: &str = "BIT_PROMPT_LOG_LEVEL";
const DEFAULT_LOG_LEVEL: &str = "debug";

#[derive(Parser)]
#[command(
    name = "bit-prompt",
    version = "0.1.0",
    about = "Git status for shell prompts",
    long_about = "Prints a compact, colorized summary of the repository the shell is in: \
    branch, upstream divergence, in-progress operation, staged and unstaged changes, and stash. \
    Prints nothing outside a repository.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        long,
        global = true,
        help = "Describe the repository at this path instead of the current directory"
    )]
    path: Option<PathBuf>,
    #[arg(
        long,
        value_enum,
        global = true,
        default_value_t = Shell::Plain,
        help = "Mark escape sequences as zero-width for this shell"
    )]
    shell: Shell,
    #[arg(
        long,
        value_enum,
        global = true,
        default_value_t = ColorChoice::Always,
        help = "Whether to emit color escape sequences"
    )]
    color: ColorChoice,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Always,
    Never,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "query",
        about = "Print the prompt status",
        long_about = "This command prints the status substituted into FORMAT, \
        without a trailing newline. FORMAT is printf-style: the first %s is replaced \
        by the status and %% is a literal percent sign."
    )]
    Query {
        #[arg(index = 1, help = "printf-style template for the status")]
        format: Option<String>,
    },
    #[command(
        name = "apply",
        about = "Print a full prompt around the status",
        long_about = "This command prints PRE, the templated status and POST as one string \
        for the shell to assign to its prompt variable. \
        Outside a repository it prints PRE and POST only."
    )]
    Apply {
        #[arg(index = 1, help = "Text before the status")]
        pre: String,
        #[arg(index = 2, help = "Text after the status")]
        post: String,
        #[arg(index = 3, help = "printf-style template for the status")]
        format: Option<String>,
    },
}

fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();

    // prompt substitution captures stdout, so the terminal check would always fail
    colored::control::set_override(cli.color == ColorChoice::Always);

    let Some(path) = resolve_path(cli.path.as_deref()) else {
        return print_without_status(&cli.command);
    };
    let repository = Repository::new(
        &path,
        cli.path.is_some(),
        Environment::from_process(),
        Box::new(std::io::stdout()),
    );

    match &cli.command {
        Commands::Query { format } => repository.query(format.as_deref(), cli.shell)?,
        Commands::Apply { pre, post, format } => {
            repository.apply(pre, post, format.as_deref(), cli.shell)?
        }
    }

    Ok(())
}

/// The directory to describe. `None` when it cannot be named, e.g. the shell
/// sits in a directory that has since been removed.
fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match (explicit, env::current_dir()) {
        (Some(path), Ok(pwd)) => Some(pwd.join(path)),
        (None, Ok(pwd)) => Some(pwd),
        (Some(path), Err(_)) if path.is_absolute() => Some(path.to_path_buf()),
        (_, Err(error)) => {
            debug!(event = "prompt.main.no_working_directory", error = %error);
            None
        }
    }
}

/// What `query` and `apply` print outside any repository.
fn print_without_status(command: &Commands) -> Result<()> {
    let mut stdout = std::io::stdout();

    if let Commands::Apply { pre, post, .. } = command {
        write!(stdout, "{pre}{post}")?;
    }
    stdout.flush()?;

    Ok(())
}

/// Opt-in tracing. `BIT_PROMPT_LOG=1` (or `true`, `stderr`) logs to stderr;
/// any other value is a file that JSON lines are appended to.
fn setup_logging() {
    let Ok(log_setting) = env::var(LOG_ENV) else {
        return;
    };

    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};

    let level = env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    match log_setting.as_str() {
        "" => {}
        "1" | "true" | "stderr" => {
            use is_terminal::IsTerminal;

            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false);

            tracing_subscriber::registry().with(filter).with(layer).init();
        }
        path => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok();

            if let Some(file) = file {
                let layer = fmt::layer()
                    .json()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_target(false);

                tracing_subscriber::registry().with(filter).with(layer).init();
            }
        }
    }
}
