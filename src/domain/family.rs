// ==========================================
// 家庭住房分配系统 - 家庭领域模型
// ==========================================
// 职责: 家庭、家庭组、指定楼栋的家庭
// 红线: 家庭组整体分配，不拆分家庭
// ==========================================

use crate::domain::types::{FamilyGroupOrigin, HousingType};
use serde::{Deserialize, Serialize};

// ==========================================
// Family - 家庭（分配的最小单位）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    pub name: String,
    pub size: u32,                                  // 人数
    pub required_housing_type: Option<HousingType>, // None 表示不限
}

impl Family {
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        Self {
            name: name.into(),
            size,
            required_housing_type: None,
        }
    }

    pub fn with_housing_type(mut self, housing_type: HousingType) -> Self {
        self.required_housing_type = Some(housing_type);
        self
    }

    /// 判断该家庭能否入住指定住房类型
    pub fn accepts(&self, housing_type: HousingType) -> bool {
        self.required_housing_type
            .map_or(true, |required| required == housing_type)
    }
}

// ==========================================
// FamilyGroup - 家庭组
// ==========================================
// size 仅供展示，分配时以成员人数之和为准
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyGroup {
    pub name: String,
    pub priority: i32,
    pub size: u64, // 成员人数之和
    pub families: Vec<Family>,
    pub origin: FamilyGroupOrigin,
}

impl FamilyGroup {
    /// 创建源数据家庭组（size 由成员累加）
    pub fn new(name: impl Into<String>, priority: i32, families: Vec<Family>) -> Self {
        let size = families.iter().map(|f| u64::from(f.size)).sum();
        Self {
            name: name.into(),
            priority,
            size,
            families,
            origin: FamilyGroupOrigin::Grouped,
        }
    }

    /// 创建指定楼栋失败后的单家庭组（名称为空）
    pub fn request_fallback(priority: i32, family: Family) -> Self {
        Self {
            name: String::new(),
            priority,
            size: u64::from(family.size),
            families: vec![family],
            origin: FamilyGroupOrigin::RequestFallback,
        }
    }

    /// 成员人数之和
    pub fn total_size(&self) -> u64 {
        self.families.iter().map(|f| u64::from(f.size)).sum()
    }

    pub fn push(&mut self, family: Family) {
        self.size += u64::from(family.size);
        self.families.push(family);
    }
}

// ==========================================
// FamilyRequestingBuilding - 指定楼栋的家庭
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyRequestingBuilding {
    pub family: Family,
    pub requested_building_name: String,
}

impl FamilyRequestingBuilding {
    pub fn new(family: Family, requested_building_name: impl Into<String>) -> Self {
        Self {
            family,
            requested_building_name: requested_building_name.into(),
        }
    }
}
