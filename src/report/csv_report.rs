// ==========================================
// 家庭住房分配系统 - CSV 报表
// ==========================================
// 格式:
//   # 注释块（楼栋入住统计 / 未匹配家庭）
//   表头
//   每条分配明细一行
// ==========================================

use crate::domain::packing::PackingResult;
use crate::report::error::{ReportError, ReportResult};
use csv::{Terminator, WriterBuilder};

/// 分配明细表头
pub const ASSIGNMENT_COLUMNS: [&str; 4] = ["Family", "Family Group", "Family Size", "Building Name"];

// ==========================================
// CsvReport - 带注释头的 CSV 构建器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct CsvReport {
    columns: Vec<String>,
    comments: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvReport {
    pub fn new<S: AsRef<str>>(columns: &[S]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.as_ref().to_string()).collect(),
            comments: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// 追加注释行（输出时加 "# " 前缀）
    pub fn add_comment(&mut self, comment: impl Into<String>) -> &mut Self {
        self.comments.push(format!("# {}", comment.into()));
        self
    }

    /// 追加数据行（列数不足补空，超出截断）
    pub fn add_row<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = values.into_iter().map(Into::into).collect();
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 生成 CSV 文本
    pub fn render(&self) -> ReportResult<String> {
        let mut output = String::new();
        for comment in &self.comments {
            output.push_str(comment);
            output.push('\n');
        }

        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ReportError::Buffer(e.to_string()))?;
        let table = String::from_utf8(bytes).map_err(|e| ReportError::Buffer(e.to_string()))?;
        output.push_str(&table);
        Ok(output)
    }
}

/// 生成分配结果 CSV 报表
pub fn render_packing_csv(result: &PackingResult) -> ReportResult<String> {
    let mut report = CsvReport::new(&ASSIGNMENT_COLUMNS);

    report.add_comment("Buildings filled:");
    for building in &result.building_results {
        report.add_comment(format!(
            "  {} (#{}): {}/{}",
            building.name, building.priority, building.capacity_filled, building.capacity
        ));
    }
    report.add_comment(" ");

    if !result.no_matches.is_empty() {
        let no_matches = result
            .no_matches
            .iter()
            .map(|f| format!("{}/{}", f.name, f.size))
            .collect::<Vec<_>>()
            .join(",");
        report.add_comment(format!("No matches: {}", no_matches));
        report.add_comment(" ");
    }

    for assignment in &result.assignments {
        report.add_row([
            assignment.family_name.clone(),
            assignment.family_group.clone(),
            assignment.family_size.to_string(),
            assignment.building_name.clone(),
        ]);
    }

    report.render()
}
