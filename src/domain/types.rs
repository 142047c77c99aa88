// ==========================================
// 家庭住房分配系统 - 领域类型定义
// ==========================================
// 职责: 住房类型、家庭组来源等枚举
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 住房类型 (Housing Type)
// ==========================================
// 序列化格式: 小写 (与源数据一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HousingType {
    Cottage, // 独栋小屋
    Hotel,   // 酒店
}

impl HousingType {
    /// 按名称解析（忽略大小写与首尾空白）
    ///
    /// # 返回
    /// - Some(HousingType): 可识别的住房类型
    /// - None: 无法识别（由调用方决定是否告警）
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "cottage" => Some(HousingType::Cottage),
            "hotel" => Some(HousingType::Hotel),
            _ => None,
        }
    }
}

impl fmt::Display for HousingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HousingType::Cottage => write!(f, "cottage"),
            HousingType::Hotel => write!(f, "hotel"),
        }
    }
}

// ==========================================
// 家庭组来源 (Family Group Origin)
// ==========================================
// 排序时 Grouped 一律先于 RequestFallback，不依赖优先级数值约定
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FamilyGroupOrigin {
    Grouped,         // 源数据中的家庭组
    RequestFallback, // 指定楼栋失败后合成的单家庭组
}

impl fmt::Display for FamilyGroupOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FamilyGroupOrigin::Grouped => write!(f, "GROUPED"),
            FamilyGroupOrigin::RequestFallback => write!(f, "REQUEST_FALLBACK"),
        }
    }
}
