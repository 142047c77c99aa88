// ==========================================
// 家庭住房分配系统 - 核心库
// ==========================================
// 职责: 按优先级将家庭组整体分配到楼栋
// 技术栈: Rust + CSV/Excel 输入 + CSV/JSON 报表
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 分配规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 报表层 - 结果输出
pub mod report;

// 配置层 - 运行配置
pub mod config;

// API 层 - 流程编排
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{FamilyGroupOrigin, HousingType};

// 领域实体
pub use domain::{
    Assignment, Building, BuildingGroup, BuildingResult, Family, FamilyGroup,
    FamilyRequestingBuilding, PackingResult, PackingWarning,
};

// 引擎
pub use engine::{Allocator, PrioritySorter};

// 配置
pub use config::{ConfigManager, OutputFormat, PackingConfig};

// API
pub use api::{ApiError, ApiResult, PackingApi, PackingSummary};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "家庭住房分配系统";
