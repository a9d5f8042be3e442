use tracing::{debug, instrument};

use crate::application::{BurnService, Scenario};
use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let mut settings = Settings::load()?;
    if let Some(frontier) = cli.frontier {
        settings.frontier = frontier;
    }
    debug!(?settings, "settings loaded");
    let service = BurnService::new(settings.frontier);

    match &cli.command {
        Some(Commands::Demo) | None => _demo(&service, &settings),
        Some(Commands::Run { scenario, start }) => _run(&service, *scenario, *start),
        Some(Commands::Tree { scenario }) => _tree(*scenario),
        // Completions are generated in main, which owns the clap Command
        Some(Commands::Completion { .. }) => Ok(()),
    }
}

/// Stage lines of every demo scenario, separated by `divider`.
pub fn render_demo(service: &BurnService, divider: &str) -> CliResult<Vec<String>> {
    let mut lines = Vec::new();
    for (i, scenario) in Scenario::DEMO.into_iter().enumerate() {
        if i > 0 {
            lines.push(divider.to_string());
        }
        let report = service.burn_scenario(scenario, None)?;
        lines.extend(report.stages.iter().map(|s| output::stage_line(s)));
    }
    Ok(lines)
}

#[instrument(skip(service))]
fn _demo(service: &BurnService, settings: &Settings) -> CliResult<()> {
    for line in render_demo(service, &settings.divider)? {
        output::info(&line);
    }
    Ok(())
}

#[instrument(skip(service))]
fn _run(service: &BurnService, scenario: Scenario, start: Option<i64>) -> CliResult<()> {
    let report = service.burn_scenario(scenario, start)?;
    for stage in &report.stages {
        output::info(&output::stage_line(stage));
    }
    debug!(
        burn_time = report.burn_time(),
        policy = ?service.policy(),
        "done"
    );
    Ok(())
}

#[instrument]
fn _tree(scenario: Scenario) -> CliResult<()> {
    let built = scenario.build().map_err(crate::application::ApplicationError::from)?;
    output::header(&format!("scenario {}", scenario));
    output::info(&built.tree.to_tree_string());
    Ok(())
}
