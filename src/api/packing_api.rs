// ==========================================
// 家庭住房分配系统 - 分配 API
// ==========================================
// 职责: 导入 → 分配 → 报表 的完整流程编排
// 红线: 楼栋导入失败即终止；家庭行级问题与分配告警只记录不终止
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::PackingConfig;
use crate::domain::packing::PackingResult;
use crate::engine::Allocator;
use crate::importer::{BuildingImporter, FamilyImporter, ImportWarning};
use crate::report;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, instrument, warn};

/// 一次分配运行的汇总
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingSummary {
    pub output_path: PathBuf,
    pub assigned_families: usize,
    pub assigned_people: u64,
    pub unmatched_families: usize,
    pub unmatched_people: u64,
    pub import_warnings: Vec<ImportWarning>,
    pub packing_warnings: usize,
}

/// 分配 API
pub struct PackingApi {
    config: PackingConfig,
    allocator: Allocator,
}

impl PackingApi {
    pub fn new(config: PackingConfig) -> Self {
        Self {
            config,
            allocator: Allocator::new(),
        }
    }

    pub fn config(&self) -> &PackingConfig {
        &self.config
    }

    /// 导入并分配，不写出报表
    ///
    /// # 返回
    /// - Ok((PackingResult, 导入告警))
    /// - Err(ApiError): 楼栋/家庭文件无法读取或楼栋数据非法
    pub fn pack(&self) -> ApiResult<(PackingResult, Vec<ImportWarning>)> {
        let building_groups = BuildingImporter::new(self.config.building_columns.clone())
            .import_file(&self.config.buildings_path)
            .map_err(ApiError::BuildingImport)?;

        let families = FamilyImporter::new(self.config.family_columns.clone())
            .import_file(&self.config.families_path)
            .map_err(ApiError::FamilyImport)?;

        for warning in &families.warnings {
            warn!(%warning, "家庭数据行告警");
        }

        let result = self.allocator.pack(
            &building_groups,
            &families.family_groups,
            &families.requests,
        );

        for warning in &result.warnings {
            warn!(%warning, "分配告警");
        }

        Ok((result, families.warnings))
    }

    /// 执行完整分配流程并写出报表
    #[instrument(skip(self), fields(
        families = %self.config.families_path.display(),
        buildings = %self.config.buildings_path.display(),
        output = %self.config.output_path.display()
    ))]
    pub fn run(&self) -> ApiResult<PackingSummary> {
        let (result, import_warnings) = self.pack()?;

        report::write_report(&result, self.config.output_format, &self.config.output_path)?;

        let summary = PackingSummary {
            output_path: self.config.output_path.clone(),
            assigned_families: result.assignments.len(),
            assigned_people: result.assigned_people(),
            unmatched_families: result.no_matches.len(),
            unmatched_people: result.unmatched_people(),
            import_warnings,
            packing_warnings: result.warnings.len(),
        };

        info!(
            assigned_families = summary.assigned_families,
            assigned_people = summary.assigned_people,
            unmatched_families = summary.unmatched_families,
            unmatched_people = summary.unmatched_people,
            "分配完成"
        );
        Ok(summary)
    }
}
