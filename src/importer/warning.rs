// ==========================================
// 家庭住房分配系统 - 导入告警
// ==========================================
// 职责: 家庭数据的非致命问题（跳过该行或降级为“不限住房类型”）
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImportWarning {
    /// 人数无法解析，该家庭被跳过
    UnparseableFamilySize {
        row: usize,
        family_name: String,
        value: String,
    },
    /// 组号中无法提取优先级，该家庭被跳过
    UnparseablePriority {
        row: usize,
        family_name: String,
        group_number: String,
    },
    /// 住房类型无法识别，按不限处理
    UnparseableHousingType {
        row: usize,
        family_name: String,
        value: String,
    },
}

impl ImportWarning {
    /// 是否导致该行被跳过
    pub fn skips_row(&self) -> bool {
        !matches!(self, ImportWarning::UnparseableHousingType { .. })
    }
}

impl fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportWarning::UnparseableFamilySize {
                row,
                family_name,
                value,
            } => write!(
                f,
                "跳过家庭 '{}' (行 {}): 无法解析人数 '{}'",
                family_name, row, value
            ),
            ImportWarning::UnparseablePriority {
                row,
                family_name,
                group_number,
            } => write!(
                f,
                "跳过家庭 '{}' (行 {}): 无法从组号 '{}' 解析优先级",
                family_name, row, group_number
            ),
            ImportWarning::UnparseableHousingType {
                row,
                family_name,
                value,
            } => write!(
                f,
                "家庭 '{}' (行 {}): 无法识别住房类型 '{}'，按不限处理",
                family_name, row, value
            ),
        }
    }
}
