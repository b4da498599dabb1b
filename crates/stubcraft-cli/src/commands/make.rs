//! Implementation of the `stubcraft make` command.
//!
//! Responsibility: translate CLI arguments into a `GenerationRequest`, wire
//! the adapters, call the core generate service, and display results. No
//! business logic lives here.

use tracing::{debug, instrument};

use stubcraft_adapters::{BuiltinStubs, LocalFilesystem, OverrideStubStore};
use stubcraft_core::{
    application::{GenerateService, GenerationReport, StubStore},
    domain::GenerationRequest,
    error::StubcraftError,
};

use crate::{
    cli::MakeArgs,
    config::{AppConfig, StubConfig},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `stubcraft make` command.
///
/// Dispatch sequence:
/// 1. Validate the name
/// 2. Wire stub store and filesystem adapters
/// 3. Run the generate service
/// 4. Report: JSON, or two confirmation lines
/// 5. Fail with `AlreadyExists` if a file was kept
#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(args: MakeArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let request = GenerationRequest::new(args.name.as_str(), args.force)
        .map_err(|e| CliError::Core(StubcraftError::from(e)))?;

    let service = GenerateService::new(
        stub_store(&config.stubs),
        Box::new(LocalFilesystem::new()),
        config.layout,
        &args.path,
    );

    let report = service.generate(&request)?;
    debug!(
        artifacts = report.artifacts.len(),
        bootstrap_created = report.bootstrap_created,
        "Generation report"
    );

    if output.format().is_report() {
        output.json(&report)?;
    } else if !report.has_conflicts() {
        print_summary(&report, &output)?;
    }

    if report.has_conflicts() {
        return Err(CliError::AlreadyExists {
            paths: report.conflicts().map(|a| a.path().to_path_buf()).collect(),
        });
    }

    Ok(())
}

/// Stub overrides are layered over the built-in stubs when configured.
fn stub_store(config: &StubConfig) -> Box<dyn StubStore> {
    match &config.path {
        Some(dir) => {
            debug!(dir = %dir.display(), "Using stub overrides");
            Box::new(OverrideStubStore::new(dir, Box::new(BuiltinStubs)))
        }
        None => Box::new(BuiltinStubs),
    }
}

fn print_summary(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    output.success("Repository created successfully.")?;
    output.success(&format!(
        "Repository {} bound to {}.",
        report.identity.class_name, report.identity.contract_name
    ))?;
    Ok(())
}
