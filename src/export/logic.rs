// src/export/logic.rs

use crate::core::logic::AnalysisReport;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_csv_table, export_json};
use crate::export::model::{LogExport, stacked_to_table, totals_to_document, totals_to_rows};
use crate::export::{ExportFormat, ReportKind};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High-level export of one analysis view.
pub struct ExportLogic;

impl ExportLogic {
    /// - `report`: which view (logs | totals | distribution | stacked)
    /// - `format`: csv | json
    /// - `file`: absolute output path (`~/` is expanded)
    pub fn export(
        analysis: &AnalysisReport<'_>,
        report: ReportKind,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        if analysis.filtered.is_empty() {
            warning("No records match the selected filters. Nothing to export.");
            return Ok(());
        }

        ensure_writable(&path, force)?;

        match (report, format) {
            (ReportKind::Logs, ExportFormat::Json) => {
                // same shape as the input snapshot, so it can be fed back with --snapshot
                export_json(&analysis.filtered.records, &path)?
            }
            (ReportKind::Logs, ExportFormat::Csv) => {
                let rows: Vec<LogExport> = analysis.filtered.iter().map(LogExport::from).collect();
                export_csv(&rows, &path)?
            }
            (ReportKind::Totals, ExportFormat::Json) => {
                export_json(&totals_to_document(&analysis.totals), &path)?
            }
            (ReportKind::Totals, ExportFormat::Csv) => {
                export_csv(&totals_to_rows(&analysis.totals), &path)?
            }
            (ReportKind::Distribution, ExportFormat::Json) => {
                export_json(&analysis.distribution, &path)?
            }
            (ReportKind::Distribution, ExportFormat::Csv) => {
                export_csv(analysis.distribution.slices(), &path)?
            }
            (ReportKind::Stacked, ExportFormat::Json) => export_json(&analysis.stacked, &path)?,
            (ReportKind::Stacked, ExportFormat::Csv) => {
                let (headers, rows) = stacked_to_table(&analysis.stacked);
                export_csv_table(&headers, &rows, &path)?
            }
        }

        Ok(())
    }
}
