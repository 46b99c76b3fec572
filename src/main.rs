mod cli;

use clap::error::ErrorKind;
use clap::Parser;
use cli::{Args, Command, ConvertArgs};
use env_logger::Env;
use kissbom::adapters::outbound::console::StderrProgressReporter;
use kissbom::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
use kissbom::adapters::outbound::network::GitHubReleaseChecker;
use kissbom::application::dto::{ConvertRequest, DEFAULT_FALLBACK_NAME};
use kissbom::application::use_cases::{CheckForUpdateUseCase, ConvertSbomUseCase};
use kissbom::config::{self, ConfigFile};
use kissbom::shared::error::ExitCode;
use kissbom::shared::Result;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;

const PROJECT_URL: &str = "https://github.com/devops-kung-fu/kissbom";
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
                _ => ExitCode::InvalidArguments,
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::init_from_env(Env::default().default_filter_or(log_level));

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    if !args.quiet {
        print_banner();
    }

    let config = load_config(args.config.as_deref())?;

    let check_updates = !args.offline && config.check_updates.unwrap_or(true);
    if check_updates && !args.quiet {
        notify_if_outdated();
    }

    match args.command {
        Command::Convert(convert) => run_convert(convert, &config, args.quiet),
    }
}

fn run_convert(convert: ConvertArgs, config: &ConfigFile, quiet: bool) -> Result<()> {
    let format = match convert.format {
        Some(format) => format,
        None => config.output_format()?.unwrap_or_default(),
    };
    let fallback_name = convert
        .name
        .or_else(|| config.name.clone())
        .unwrap_or_else(|| DEFAULT_FALLBACK_NAME.to_string());
    let output_dir = convert
        .output_dir
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    log::debug!(
        "Resolved options: format={}, name={:?}, output_dir={}",
        format,
        fallback_name,
        output_dir.display()
    );

    let progress_reporter = if quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let use_case = ConvertSbomUseCase::new(
        FileSystemReader::new(),
        FileSystemWriter::new(),
        progress_reporter,
    );

    let request = ConvertRequest::new(convert.input, format, fallback_name, output_dir);
    let response = use_case.execute(request)?;

    println!("{}", response.output_file_name);

    Ok(())
}

/// Loads the config named on the command line, else the one in the working directory.
fn load_config(path: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = path {
        log::debug!("Loading config file: {}", path.display());
        return config::load_config_from_path(path);
    }

    let cwd = std::env::current_dir()?;
    match config::discover_config(&cwd)? {
        Some(found) => {
            log::debug!("Using {} from {}", config::CONFIG_FILENAME, cwd.display());
            Ok(found)
        }
        None => Ok(ConfigFile::default()),
    }
}

fn notify_if_outdated() {
    let checker = match GitHubReleaseChecker::new() {
        Ok(checker) => checker,
        Err(e) => {
            log::debug!("Skipping version check: {}", e);
            return;
        }
    };
    if let Some(latest) = CheckForUpdateUseCase::new(checker, VERSION).execute() {
        eprintln!(
            "{}",
            format!(
                "A newer version of kissbom is available: {} (running v{})",
                latest, VERSION
            )
            .yellow()
        );
        eprintln!();
    }
}

fn print_banner() {
    eprintln!("{} {}", "kissbom".bold(), format!("v{}", VERSION).dimmed());
    eprintln!("{}", PROJECT_URL.cyan());
    eprintln!();
}
