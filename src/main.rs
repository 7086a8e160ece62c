use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use flexi_logger::LoggerHandle;
use log::{debug, error, info};

use tasktalk::commands::process_input;
use tasktalk::logging::{init_logging, DEFAULT_LOG_LEVEL};
use tasktalk::storage::{default_db_path, Storage};
use tasktalk::task_list::TaskList;
use tasktalk::ui::{render, FAREWELL, GREETING};

#[derive(Parser)]
#[command(name = "tasktalk")]
#[command(about = "Chat-style terminal task tracker", long_about = None)]
struct Cli {
    /// Task file (defaults to $TASKS_DB or the user data directory)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    Chat,
    /// Run a single command, e.g. `tasktalk exec todo read book`
    Exec {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        return completions(shell);
    }

    let storage = Storage::new(cli.db.clone().unwrap_or_else(default_db_path));
    let _logger = start_logging(cli.log_level.as_deref(), storage.path());

    let result = match cli.command {
        Some(Commands::Exec { words }) => exec(&words.join(" "), &storage),
        _ => chat(&storage).map(|()| ExitCode::SUCCESS),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn chat(storage: &Storage) -> anyhow::Result<()> {
    let mut tasks = match storage.load() {
        Ok(tasks) => tasks,
        Err(e) => {
            error!("could not load {}: {}", storage.path().display(), e);
            let backup = storage.back_up().with_context(|| {
                format!("could not read {} ({}) and could not move it aside", storage.path().display(), e)
            })?;
            println!(
                "{}",
                render(&format!(
                    "Could not read {}: {}\nIt was moved to {}.\nStarting with an empty list.",
                    storage.path().display(),
                    e,
                    backup.display()
                ))
            );
            TaskList::new()
        }
    };

    println!("{}", render(GREETING));

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read input")?;
        match process_input(&line, &mut tasks) {
            Ok(reply) => {
                println!("{}", render(&reply.text));
                if reply.changed {
                    if let Err(e) = storage.save(&tasks) {
                        error!("save failed: {}", e);
                        eprintln!("Failed to save tasks: {}", e);
                    }
                }
                if reply.terminate {
                    info!("session end");
                    return Ok(());
                }
            }
            Err(e) => {
                debug!("command rejected: {}", e);
                println!("{}", render(&e.to_string()));
            }
        }
    }

    info!("session end (input closed)");
    println!("{}", render(FAREWELL));
    Ok(())
}

fn exec(input: &str, storage: &Storage) -> anyhow::Result<ExitCode> {
    let mut tasks = storage
        .load()
        .with_context(|| format!("failed to load tasks from {}", storage.path().display()))?;

    match process_input(input, &mut tasks) {
        Ok(reply) => {
            println!("{}", render(&reply.text));
            if reply.changed {
                storage.save(&tasks).context("failed to save tasks")?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            debug!("command rejected: {}", e);
            eprintln!("{}", render(&e.to_string()));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn start_logging(level: Option<&str>, db_path: &Path) -> Option<LoggerHandle> {
    let level = level
        .map(str::to_owned)
        .or_else(|| std::env::var("TASKTALK_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned());
    let log_dir = db_path
        .parent()
        .filter(|d| !d.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    match init_logging(&level, log_dir) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            None
        }
    }
}

fn completions(shell: &str) -> ExitCode {
    let shell_enum = match shell {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "powershell" => Shell::PowerShell,
        "elvish" => Shell::Elvish,
        _ => {
            eprintln!("Unsupported shell: {}", shell);
            return ExitCode::FAILURE;
        }
    };
    let mut cmd = Cli::command();
    generate(shell_enum, &mut cmd, "tasktalk", &mut io::stdout());
    ExitCode::SUCCESS
}
