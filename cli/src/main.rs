use anyhow::{Context, Result};
use clap::Parser;
use regform_core::{
    config, help, CommandRunner, DryRunRunner, Error, ProcessRunner, Registry, TargetKind,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Translation tasks for the registration form app.
#[derive(Debug, Parser)]
#[command(name = "regform", about = "Run the project's translation tasks")]
struct Cli {
    /// Task to run. Defaults to `help`.
    task: Option<String>,
    /// Path to a config file. Defaults to `regform.toml` when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// File the help listing is read from. Repeat to merge several files.
    #[arg(long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,
    /// Do not colorize task names.
    #[arg(long)]
    no_color: bool,
    /// Print delegated commands instead of running them.
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    if let Ok(filter) = std::env::var("REGFORM_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(err) => {
            eprintln!("Error: {err:#}");
            match err.downcast_ref::<Error>() {
                Some(Error::UnknownTask { .. }) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let mut config = config::resolve(cli.config.as_deref(), &cwd)?;
    if cli.no_color || no_color_env() {
        config.color = false;
    }

    let registry = Registry::new(&config);
    let name = cli.task.as_deref().unwrap_or("help");
    let target = registry.find(name)?;

    match &target.kind {
        TargetKind::Help => {
            let stdout = std::io::stdout();
            let files = if cli.files.is_empty() {
                vec![config.makefile]
            } else {
                cli.files
            };
            help::print_help(&files, &mut stdout.lock(), config.color)?;
            Ok(0)
        }
        TargetKind::Delegate(invocation) => {
            let code = if cli.dry_run {
                DryRunRunner::new(std::io::stdout()).run(invocation)?
            } else {
                ProcessRunner::new().run(invocation)?
            };
            Ok(code)
        }
    }
}

fn no_color_env() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty())
}
