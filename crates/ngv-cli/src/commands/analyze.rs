//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the analyze command.
///
/// Options are layered as config file < `NGV_*` variables < flags. The
/// exported analysis goes to `save` when set, stdout otherwise.
pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let options = utils::load(args.config.as_deref(), &args.overrides())?;
    tracing::debug!(?options, "resolved options");

    let result = ngv_analysis::analyze(&options)?;
    for warning in &result.warnings {
        ui::warning(warning);
    }

    let json = result.to_json()?;
    match &options.save {
        Some(path) => {
            utils::write_output(path, &json)?;
            ui::success(&format!("Wrote analysis to {}", path.display()));
        }
        None => println!("{json}"),
    }

    ui::success(&format!(
        "{} actions, {} references ({} files parsed, {} skipped)",
        result.actions.len(),
        result.reference_count(),
        result.files_parsed,
        result.files_skipped
    ));
    Ok(())
}
