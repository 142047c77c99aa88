// ==========================================
// 家庭住房分配系统 - 引擎层
// ==========================================
// 职责: 实现分配算法,不做文件读写
// 红线: 引擎无副作用，告警以数据形式返回
// ==========================================

pub mod allocation_record;
pub mod allocator;
pub mod ordering;
pub mod working_set;

// 重导出核心引擎
pub use allocation_record::{AllocationGroup, AllocationRecord, AssignedFamily, CapacityConstraint};
pub use allocator::{Allocator, FALLBACK_PRIORITY_BASE};
pub use ordering::PrioritySorter;
pub use working_set::WorkingSet;
