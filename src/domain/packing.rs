// ==========================================
// 家庭住房分配系统 - 分配结果模型
// ==========================================
// 职责: 分配引擎输出（分配明细、楼栋入住统计、未匹配家庭、告警）
// 红线: 每个家庭只出现在 assignments 或 no_matches 其中之一
// ==========================================

use crate::domain::family::Family;
use crate::domain::types::HousingType;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Assignment - 分配明细
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub family_name: String,
    pub family_size: u32,
    pub family_group: String, // 指定楼栋直接入住时为空串
    pub building_name: String,
    pub building_group: String,
}

// ==========================================
// BuildingResult - 楼栋入住统计
// ==========================================
// 每栋楼都会输出一条，即使入住人数为 0
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingResult {
    pub name: String,
    pub priority: i32, // 所属楼栋组优先级
    pub capacity: u32,
    pub capacity_filled: u32,
}

// ==========================================
// PackingWarning - 分配告警（非致命）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackingWarning {
    /// 指定的楼栋不存在
    UnknownBuilding {
        family_name: String,
        requested_building_name: String,
    },
    /// 指定楼栋已满或住房类型不符
    RequestRejected {
        family_name: String,
        building_name: String,
        building_housing_type: HousingType,
    },
}

impl fmt::Display for PackingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackingWarning::UnknownBuilding {
                family_name,
                requested_building_name,
            } => write!(
                f,
                "无法将家庭 '{}' 分配到指定楼栋 '{}': 楼栋不存在",
                family_name, requested_building_name
            ),
            PackingWarning::RequestRejected {
                family_name,
                building_name,
                building_housing_type,
            } => write!(
                f,
                "无法将家庭 '{}' 分配到指定楼栋 '{}' ({}): 楼栋已满或住房类型不符",
                family_name, building_name, building_housing_type
            ),
        }
    }
}

// ==========================================
// PackingResult - 单次分配结果
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingResult {
    pub assignments: Vec<Assignment>,
    pub no_matches: Vec<Family>,
    pub building_results: Vec<BuildingResult>,
    pub warnings: Vec<PackingWarning>,
}

impl PackingResult {
    /// 已分配人数
    pub fn assigned_people(&self) -> u64 {
        self.assignments.iter().map(|a| u64::from(a.family_size)).sum()
    }

    /// 未匹配人数
    pub fn unmatched_people(&self) -> u64 {
        self.no_matches.iter().map(|f| u64::from(f.size)).sum()
    }

    /// 查询指定楼栋的分配明细
    pub fn assignments_for<'a>(
        &'a self,
        building_name: &'a str,
    ) -> impl Iterator<Item = &'a Assignment> + 'a {
        self.assignments
            .iter()
            .filter(move |a| a.building_name == building_name)
    }

    /// 查询指定楼栋的入住统计
    pub fn building(&self, name: &str) -> Option<&BuildingResult> {
        self.building_results.iter().find(|b| b.name == name)
    }
}
