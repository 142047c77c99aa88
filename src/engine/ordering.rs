// ==========================================
// 家庭住房分配系统 - 优先级排序引擎
// ==========================================
// 职责: 楼栋组 / 家庭组 / 组内家庭的一次性排序
// 红线: 必须使用稳定排序，同优先级保持输入顺序（唯一的确定性 tie-break）
// ==========================================

use crate::domain::family::{Family, FamilyGroup};
use crate::engine::allocation_record::AllocationGroup;
use std::cmp::Ordering;

// ==========================================
// PrioritySorter - 优先级排序引擎
// ==========================================
pub struct PrioritySorter {
    // 无状态引擎，不需要注入依赖
}

impl PrioritySorter {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 排序楼栋组
    ///
    /// 排序键: priority 数值升序（1 号组最先分配）
    pub fn sort_building_groups(&self, groups: &mut [AllocationGroup]) {
        groups.sort_by_key(|g| g.priority);
    }

    /// 排序家庭组，并对组内家庭按人数降序排序
    ///
    /// 排序键:
    /// 1) origin: Grouped 先于 RequestFallback
    /// 2) priority 数值升序
    pub fn sort_family_groups(&self, groups: &mut [FamilyGroup]) {
        groups.sort_by(|a, b| self.compare_family_groups(a, b));
        for group in groups.iter_mut() {
            self.sort_families(&mut group.families);
        }
    }

    /// 组内家庭按人数降序（最难安置的先尝试）
    pub fn sort_families(&self, families: &mut [Family]) {
        families.sort_by(|a, b| b.size.cmp(&a.size));
    }

    fn compare_family_groups(&self, a: &FamilyGroup, b: &FamilyGroup) -> Ordering {
        a.origin
            .cmp(&b.origin)
            .then_with(|| a.priority.cmp(&b.priority))
    }
}

impl Default for PrioritySorter {
    fn default() -> Self {
        Self::new()
    }
}
