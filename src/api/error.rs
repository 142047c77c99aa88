// ==========================================
// 家庭住房分配系统 - API层错误类型
// ==========================================
// 职责: 汇总各层致命错误，向调用方给出显式原因
// ==========================================

use crate::config::ConfigError;
use crate::importer::error::ImportError;
use crate::report::error::ReportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("楼栋数据导入失败: {0}")]
    BuildingImport(#[source] ImportError),

    #[error("家庭数据导入失败: {0}")]
    FamilyImport(#[source] ImportError),

    #[error("报表输出失败: {0}")]
    Report(#[from] ReportError),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
