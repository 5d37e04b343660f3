use anyhow::Result;

use super::super::{
    args::{ListCommand, OutputFormat},
    exit_status::ExitStatus,
    report,
};
use crate::core::ScanContext;

pub fn list(cmd: ListCommand) -> Result<ExitStatus> {
    let ctx = ScanContext::new(&cmd.common, &cmd.patterns)?;
    let output = ctx.output();

    match cmd.common.format {
        OutputFormat::Json => report::print_json(&output.instances)?,
        OutputFormat::Text => {
            report::print_instances(&output.instances);
            report::print_success(output.instances.len(), ctx.files.len());
        }
    }
    report::print_diagnostics(&output.diagnostics, ctx.verbose);

    Ok(ExitStatus::Success)
}
