// ==========================================
// 家庭住房分配系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、分配结果
// 红线: 不含文件读写逻辑,不含引擎逻辑
// ==========================================

pub mod building;
pub mod family;
pub mod packing;
pub mod types;

// 重导出核心类型
pub use building::{Building, BuildingGroup};
pub use family::{Family, FamilyGroup, FamilyRequestingBuilding};
pub use packing::{Assignment, BuildingResult, PackingResult, PackingWarning};
pub use types::{FamilyGroupOrigin, HousingType};
