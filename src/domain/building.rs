// ==========================================
// 家庭住房分配系统 - 楼栋领域模型
// ==========================================
// 职责: 楼栋与楼栋组（输入实体，运行期间不可变）
// ==========================================

use crate::domain::types::HousingType;
use serde::{Deserialize, Serialize};

// ==========================================
// Building - 楼栋
// ==========================================
// 名称为唯一标识（忽略大小写）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub name: String,              // 楼栋名称
    pub capacity: u32,             // 总容量 (人)
    pub housing_type: HousingType, // 住房类型
}

impl Building {
    pub fn new(name: impl Into<String>, capacity: u32, housing_type: HousingType) -> Self {
        Self {
            name: name.into(),
            capacity,
            housing_type,
        }
    }
}

// ==========================================
// BuildingGroup - 楼栋组
// ==========================================
// 组内楼栋顺序即首次适配的扫描顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingGroup {
    pub name: String,
    pub priority: i32,
    pub buildings: Vec<Building>,
}

impl BuildingGroup {
    pub fn new(name: impl Into<String>, priority: i32, buildings: Vec<Building>) -> Self {
        Self {
            name: name.into(),
            priority,
            buildings,
        }
    }

    /// 组内总容量
    pub fn total_capacity(&self) -> u32 {
        self.buildings.iter().map(|b| b.capacity).sum()
    }
}
