// ==========================================
// 家庭住房分配系统 - 字段映射器实现
// ==========================================
// 职责: 源列名 → 中间记录（尚未做类型转换）
// ==========================================

use crate::config::packing_config::{BuildingColumns, FamilyColumns};
use crate::importer::importer_trait::RawRecord;

/// 家庭行中间记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFamilyRecord {
    pub name: String,
    pub group_number: Option<String>,
    pub housing_type: Option<String>,
    pub size: Option<String>,
    pub requested_building: Option<String>,
    pub row_number: usize,
}

/// 楼栋行中间记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBuildingRecord {
    pub name: Option<String>,
    pub housing_type: Option<String>,
    pub group_priority: Option<String>,
    pub capacity: Option<String>,
    pub row_number: usize,
}

pub struct FieldMapper;

impl FieldMapper {
    /// 映射家庭行
    ///
    /// 家庭名称格式: "{名} {姓} ({邮箱})"
    pub fn map_family(
        &self,
        row: &RawRecord,
        columns: &FamilyColumns,
        row_number: usize,
    ) -> RawFamilyRecord {
        let first = self.get_string(row, &columns.first_name).unwrap_or_default();
        let last = self.get_string(row, &columns.last_name).unwrap_or_default();
        let email = self.get_string(row, &columns.email).unwrap_or_default();

        RawFamilyRecord {
            name: format!("{} {} ({})", first, last, email),
            group_number: self.get_string(row, &columns.group_number),
            housing_type: self.get_string(row, &columns.housing_type),
            size: self.get_string(row, &columns.size),
            requested_building: self.get_string(row, &columns.requested_building),
            row_number,
        }
    }

    /// 映射楼栋行
    pub fn map_building(
        &self,
        row: &RawRecord,
        columns: &BuildingColumns,
        row_number: usize,
    ) -> RawBuildingRecord {
        RawBuildingRecord {
            name: self.get_string(row, &columns.name),
            housing_type: self.get_string(row, &columns.housing_type),
            group_priority: self.get_string(row, &columns.group_priority),
            capacity: self.get_string(row, &columns.capacity),
            row_number,
        }
    }

    /// 提取字符串字段（空值视为缺失）
    fn get_string(&self, row: &RawRecord, key: &str) -> Option<String> {
        row.get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }
}
