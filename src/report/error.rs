// ==========================================
// 家庭住房分配系统 - 报表错误类型
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

/// 报表生成/写出错误
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV 报表生成失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON 报表生成失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("报表缓冲区转换失败: {0}")]
    Buffer(String),

    #[error("报表写出失败 ({path}): {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result 类型别名
pub type ReportResult<T> = Result<T, ReportError>;
