use std::fs;

use carshare::batch::report::{render, ReportKind};
use carshare::batch::{transform_json, Batch};
use tracing::info;

use crate::cli::{ReportArg, TransformArgs};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::telemetry;

/// One-shot batch run: read the input document, compute the batch,
/// write the selected projection pretty-printed. Fail-fast; any error
/// aborts without partial output.
pub(crate) fn run(args: TransformArgs) -> Result<(), AppError> {
    let config = AppConfig::load();
    telemetry::init(&config.log_level)?;

    let input = args.input.unwrap_or(config.input);
    let output = args.output.unwrap_or(config.output);

    info!(path = %input.display(), "reading batch document");
    let text = fs::read_to_string(&input)?;
    let batch = transform_json(&text)?;
    info!(
        rentals = batch.rentals.len(),
        modifications = batch.modifications.len(),
        "batch computed"
    );

    let kind = report_kind(args.report, &batch);
    let report = render(&batch, kind);
    let rendered = serde_json::to_string_pretty(&report).map_err(AppError::Output)?;
    fs::write(&output, rendered)?;
    info!(path = %output.display(), "output document written");

    Ok(())
}

fn report_kind(arg: ReportArg, batch: &Batch) -> ReportKind {
    match arg {
        ReportArg::Auto => ReportKind::auto_for(batch),
        ReportArg::Prices => ReportKind::Prices,
        ReportArg::Quotes => ReportKind::Quotes,
        ReportArg::Actions => ReportKind::Actions,
        ReportArg::Modifications => ReportKind::Modifications,
    }
}
