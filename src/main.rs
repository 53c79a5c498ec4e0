use anyhow::{Context, Result};
use clap::Parser;

use bump::cli::{Outcome, ReleaseOrchestrator};
use bump::git::SystemGit;
use bump::ui::{self, TerminalWizard};
use bump::{config, logging};

#[derive(clap::Parser)]
#[command(
    name = "bump",
    version,
    about = "Create a release branch with a version bump commit for mix.exs or package.json projects"
)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    let work_dir = match std::env::current_dir().context("Failed to resolve the working directory") {
        Ok(dir) => dir,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let config = match config::load_config(&work_dir) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init_logging(&config.logging) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    let git = SystemGit::at(&work_dir);
    let mut wizard = TerminalWizard::new();
    let mut orchestrator = ReleaseOrchestrator::new(&git, &mut wizard, &work_dir);

    match orchestrator.run() {
        Ok(Outcome::Released { plan, .. }) => {
            ui::display_release_summary(&plan);
            Ok(())
        }
        Ok(Outcome::Cancelled) => {
            ui::display_cancelled();
            Ok(())
        }
        Err(failure) => {
            tracing::debug!(stage = %failure.stage, "release pipeline failed");
            ui::display_error(&failure.error.to_string());
            if let Some(warning) = failure.stranded_warning() {
                ui::display_boundary_warning(&warning);
            }
            std::process::exit(1);
        }
    }
}
