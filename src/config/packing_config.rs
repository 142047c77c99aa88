// ==========================================
// 家庭住房分配系统 - 分配配置项
// ==========================================
// 职责: 输入/输出路径、输出格式、源数据列名
// 说明: 所有字段均有默认值，配置文件只需填写需要覆写的部分
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

// ==========================================
// 输出格式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,  // 带注释头的 CSV 报表
    Json, // 完整分配结果
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

// ==========================================
// 家庭数据列名
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyColumns {
    pub group_number: String,
    pub housing_type: String,
    pub size: String,
    pub first_name: String,
    pub last_name: String,
    pub requested_building: String,
    pub email: String,
}

impl Default for FamilyColumns {
    fn default() -> Self {
        Self {
            group_number: "Group number".to_string(),
            housing_type: "Total # Room Type".to_string(),
            size: "Total # people".to_string(),
            first_name: "Primary Registrant".to_string(),
            last_name: "Primary Registrant Last".to_string(),
            requested_building: "House/Hotel Name Assigned".to_string(),
            email: "Email".to_string(),
        }
    }
}

// ==========================================
// 楼栋数据列名
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingColumns {
    pub name: String,
    pub housing_type: String,
    pub group_priority: String,
    pub capacity: String,
}

impl Default for BuildingColumns {
    fn default() -> Self {
        Self {
            name: "Name".to_string(),
            housing_type: "Housing Type".to_string(),
            group_priority: "Building Group #".to_string(),
            capacity: "Total Capacity".to_string(),
        }
    }
}

// ==========================================
// PackingConfig - 分配配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackingConfig {
    pub families_path: PathBuf,
    pub buildings_path: PathBuf,
    pub output_path: PathBuf,
    pub output_format: OutputFormat,
    pub family_columns: FamilyColumns,
    pub building_columns: BuildingColumns,
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self {
            families_path: PathBuf::from("input_families.csv"),
            buildings_path: PathBuf::from("input_buildings.csv"),
            output_path: PathBuf::from("building-assignments.csv"),
            output_format: OutputFormat::Csv,
            family_columns: FamilyColumns::default(),
            building_columns: BuildingColumns::default(),
        }
    }
}
