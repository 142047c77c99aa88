// ==========================================
// 家庭住房分配系统 - 分配引擎
// ==========================================
// 职责: 楼栋组 + 家庭组 + 指定楼栋家庭 → 分配结果
// 流程: 归一化 → 处理指定楼栋 → 家庭组整体分配 → 汇总结果
// 红线: 家庭组要么全部入住，要么全部进入 no_matches
// ==========================================

mod core;
mod requests;

#[cfg(test)]
mod tests;

pub use self::core::{Allocator, FALLBACK_PRIORITY_BASE};
