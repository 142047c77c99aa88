// ==========================================
// 家庭住房分配系统 - 报表层
// ==========================================
// 职责: PackingResult → CSV / JSON 文本 → 文件
// ==========================================

pub mod csv_report;
pub mod error;
pub mod json_report;

pub use csv_report::{render_packing_csv, CsvReport, ASSIGNMENT_COLUMNS};
pub use error::{ReportError, ReportResult};
pub use json_report::render_packing_json;

use crate::config::packing_config::OutputFormat;
use crate::domain::packing::PackingResult;
use std::path::Path;
use tracing::{info, instrument};

/// 按输出格式生成报表文本
pub fn render(result: &PackingResult, format: OutputFormat) -> ReportResult<String> {
    match format {
        OutputFormat::Csv => render_packing_csv(result),
        OutputFormat::Json => render_packing_json(result),
    }
}

/// 生成报表并写出到文件（覆盖已有文件）
#[instrument(skip(result, path, format), fields(path = %path.display(), format = %format))]
pub fn write_report(result: &PackingResult, format: OutputFormat, path: &Path) -> ReportResult<()> {
    let content = render(result, format)?;
    std::fs::write(path, content).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(assignments = result.assignments.len(), "报表已写出");
    Ok(())
}
