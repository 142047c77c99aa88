// ==========================================
// 家庭住房分配系统 - 配置层
// ==========================================
// 职责: 运行配置管理（路径、输出格式、列名映射）
// 存储: JSON 配置文件（可选）
// ==========================================

pub mod config_manager;
pub mod packing_config;

// 重导出核心配置
pub use config_manager::{ConfigError, ConfigManager};
pub use packing_config::{BuildingColumns, FamilyColumns, OutputFormat, PackingConfig};
