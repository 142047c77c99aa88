// ==========================================
// 家庭住房分配系统 - API 层
// ==========================================
// 职责: 提供分配流程接口，供命令行入口与集成调用
// ==========================================

pub mod error;
pub mod packing_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use packing_api::{PackingApi, PackingSummary};
