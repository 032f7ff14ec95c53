use std::path::PathBuf;
use std::process;

use clap::Parser;
use ptmm::commands::setup::{self, SetupOutcome};
use ptmm::locate;
use ptmm::patch::PatchError;
use ptmm::session::Session;
use ptmm::utils::console::Console;
use ptmm::utils::picker::DialogPicker;
use ptmm::utils::xdelta::{DEFAULT_PROGRAM, Xdelta3};
use ptmm::workspace::Workspace;

#[derive(Parser)]
#[command(name = "ptmm")]
#[command(about = "A Pizza Tower mod manager")]
#[command(version)]
struct Cli {
    /// Directory holding ptmm.json, vanilla/ and patches/
    #[arg(long, default_value = ".")]
    workdir: PathBuf,
    /// xdelta3 executable to run
    #[arg(long, default_value = DEFAULT_PROGRAM)]
    xdelta: PathBuf,
    /// Print debug logs
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(2);
    }
}

fn run(cli: Cli) -> Result<(), PatchError> {
    let workspace = Workspace::new(cli.workdir);
    let tool = Xdelta3::new(cli.xdelta);
    let mut console = Console::stdio();

    if !workspace.is_configured() {
        if workspace.has_legacy_config() {
            log::warn!("ignoring ptmm.cfg from an earlier release; setup will run again");
        }
        let outcome = setup::run(
            &workspace,
            locate::locate_install(),
            &tool,
            &DialogPicker,
            &mut console,
        )?;
        log::debug!("setup finished with code {}", outcome.code());
        if !matches!(outcome, SetupOutcome::Complete(_)) {
            return Ok(());
        }
    }

    let mut session = Session::open(workspace, Box::new(tool), Box::new(DialogPicker), console)?;
    session.run()
}
