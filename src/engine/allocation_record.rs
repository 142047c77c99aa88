// ==========================================
// 家庭住房分配系统 - 楼栋分配记录
// ==========================================
// 职责: 单栋楼的可变入住状态 + 唯一的状态变更原语 try_assign
// 红线: capacity_filled 永不超过 capacity；失败时不产生任何变更
// ==========================================

use crate::domain::building::{Building, BuildingGroup};
use crate::domain::family::Family;

// ==========================================
// Trait: CapacityConstraint
// ==========================================
// 用途: 分配前的容量/类型约束检查接口
pub trait CapacityConstraint {
    /// 检查是否可接纳该家庭（容量 + 住房类型）
    fn can_accept(&self, family: &Family) -> bool;

    /// 计算剩余容量
    fn remaining_capacity(&self) -> u32;
}

/// 已入住家庭（附带所属家庭组名称）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedFamily {
    pub family: Family,
    pub family_group: String, // 指定楼栋直接入住时为空串
}

// ==========================================
// AllocationRecord - 楼栋分配记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationRecord {
    pub building: Building,
    pub capacity_filled: u32,
    pub assigned: Vec<AssignedFamily>,
}

impl AllocationRecord {
    /// 以零入住创建记录
    pub fn new(building: Building) -> Self {
        Self {
            building,
            capacity_filled: 0,
            assigned: Vec::new(),
        }
    }

    /// 尝试将家庭分配到本楼栋
    ///
    /// # 参数
    /// - `family`: 待分配家庭
    /// - `family_group`: 所属家庭组名称（直接指定时传空串）
    ///
    /// # 返回
    /// - `true`: 已入住（capacity_filled 增加 family.size，并记录家庭）
    /// - `false`: 容量不足或住房类型不符，记录保持不变
    pub fn try_assign(&mut self, family: &Family, family_group: &str) -> bool {
        if !self.can_accept(family) {
            return false;
        }

        self.capacity_filled += family.size;
        self.assigned.push(AssignedFamily {
            family: family.clone(),
            family_group: family_group.to_string(),
        });
        true
    }
}

impl CapacityConstraint for AllocationRecord {
    fn can_accept(&self, family: &Family) -> bool {
        family.size <= self.remaining_capacity() && family.accepts(self.building.housing_type)
    }

    fn remaining_capacity(&self) -> u32 {
        self.building.capacity.saturating_sub(self.capacity_filled)
    }
}

// ==========================================
// AllocationGroup - 楼栋组分配状态
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationGroup {
    pub name: String,
    pub priority: i32,
    pub records: Vec<AllocationRecord>,
}

impl AllocationGroup {
    /// 组内剩余容量之和（仅作预筛，不保证住房类型可行）
    pub fn remaining_capacity(&self) -> u64 {
        self.records
            .iter()
            .map(|r| u64::from(r.remaining_capacity()))
            .sum()
    }
}

impl From<&BuildingGroup> for AllocationGroup {
    fn from(group: &BuildingGroup) -> Self {
        Self {
            name: group.name.clone(),
            priority: group.priority,
            records: group
                .buildings
                .iter()
                .cloned()
                .map(AllocationRecord::new)
                .collect(),
        }
    }
}
