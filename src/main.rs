use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use vetnav::core::action::{Action, update};
use vetnav::core::config::{self, ResolvedConfig};
use vetnav::core::date;
use vetnav::core::diagnostics;
use vetnav::core::state::App;
use vetnav::tui;

#[derive(Parser)]
#[command(name = "vetnav", about = "Sistema Veterinaria in the terminal")]
struct Args {
    /// Section to show first (overrides config and VETNAV_DEFAULT_SECTION)
    #[arg(short, long)]
    section: Option<String>,

    /// Config file to use instead of ~/.vetnav/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run every diagnostic check, print the results and exit
    #[arg(long, conflicts_with = "info")]
    check: bool,

    /// Print project info as JSON and exit
    #[arg(long)]
    info: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to vetnav.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("vetnav.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("vetnav starting up");

    let resolved = match config::load_config(args.config.as_deref())
        .and_then(|c| config::resolve(&c, args.section.as_deref()))
    {
        Ok(resolved) => resolved,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("vetnav: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.info {
        return print_info(&resolved);
    }
    if args.check {
        return run_check(&resolved);
    }

    match tui::run(resolved) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal error: {}", e);
            eprintln!("vetnav: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_info(resolved: &ResolvedConfig) -> ExitCode {
    match serde_json::to_string_pretty(&resolved.project) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("vetnav: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Both diagnostics passes, back to back, printed to stdout.
fn run_check(resolved: &ResolvedConfig) -> ExitCode {
    let locale = date::parse_locale(&resolved.locale);
    let mut app = App::from_config(resolved, date::today(locale, &resolved.date_format));
    let terminal = diagnostics::detect_terminal_from_env().to_string();
    update(&mut app, Action::RunDeferredDiagnostics { terminal });

    for line in &app.console.lines {
        println!("{}", line.text);
    }

    if app.diagnostics.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
