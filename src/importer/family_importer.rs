// ==========================================
// 家庭住房分配系统 - 家庭数据导入
// ==========================================
// 职责: 行记录 → 家庭组 + 指定楼栋家庭
// 规则:
// 1) 人数无法解析 → 跳过该行（告警）
// 2) 住房类型无法识别 → 不限（告警）
// 3) 有指定楼栋 → 指定楼栋家庭（不进入家庭组）
// 4) 组号无法解析优先级 → 跳过该行（告警）
// ==========================================

use crate::config::packing_config::FamilyColumns;
use crate::domain::family::{Family, FamilyGroup, FamilyRequestingBuilding};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::{FieldMapper, RawFamilyRecord};
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::importer_trait::RawRecord;
use crate::importer::warning::ImportWarning;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, instrument};

/// 家庭数据导入结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyImport {
    pub family_groups: Vec<FamilyGroup>, // 按首次出现顺序
    pub requests: Vec<FamilyRequestingBuilding>,
    pub warnings: Vec<ImportWarning>,
}

impl FamilyImport {
    /// 导入的家庭总数
    pub fn family_count(&self) -> usize {
        self.family_groups
            .iter()
            .map(|g| g.families.len())
            .sum::<usize>()
            + self.requests.len()
    }
}

// ==========================================
// FamilyImporter - 家庭数据导入器
// ==========================================
pub struct FamilyImporter {
    columns: FamilyColumns,
    mapper: FieldMapper,
    cleaner: DataCleaner,
}

impl FamilyImporter {
    pub fn new(columns: FamilyColumns) -> Self {
        Self {
            columns,
            mapper: FieldMapper,
            cleaner: DataCleaner,
        }
    }

    /// 从文件导入（CSV / Excel）
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn import_file<P: AsRef<Path>>(&self, path: P) -> ImportResult<FamilyImport> {
        let records = UniversalFileParser.parse(path)?;
        let result = self.import_records(&records);
        info!(
            families = result.family_count(),
            family_groups = result.family_groups.len(),
            requests = result.requests.len(),
            warnings = result.warnings.len(),
            "家庭数据导入完成"
        );
        Ok(result)
    }

    /// 从行记录导入（行号从 1 开始）
    pub fn import_records(&self, records: &[RawRecord]) -> FamilyImport {
        let mut result = FamilyImport::default();
        let mut group_index: HashMap<String, usize> = HashMap::new();

        for (idx, row) in records.iter().enumerate() {
            let raw = self.mapper.map_family(row, &self.columns, idx + 1);
            self.import_row(raw, &mut result, &mut group_index);
        }

        result
    }

    fn import_row(
        &self,
        raw: RawFamilyRecord,
        result: &mut FamilyImport,
        group_index: &mut HashMap<String, usize>,
    ) {
        let size_text = raw.size.clone().unwrap_or_default();
        let Some(size) = self.cleaner.parse_family_size(&size_text) else {
            result.warnings.push(ImportWarning::UnparseableFamilySize {
                row: raw.row_number,
                family_name: raw.name,
                value: size_text,
            });
            return;
        };

        let required_housing_type = match self
            .cleaner
            .clean_housing_type(raw.housing_type.as_deref())
        {
            Ok(housing_type) => housing_type,
            Err(value) => {
                result.warnings.push(ImportWarning::UnparseableHousingType {
                    row: raw.row_number,
                    family_name: raw.name.clone(),
                    value,
                });
                None
            }
        };

        let family = Family {
            name: raw.name,
            size,
            required_housing_type,
        };

        // 指定楼栋的家庭不参与分组
        if let Some(requested) = raw.requested_building {
            result
                .requests
                .push(FamilyRequestingBuilding::new(family, requested));
            return;
        }

        let group_number = raw.group_number.unwrap_or_default();
        let Some(priority) = self.cleaner.extract_group_priority(&group_number) else {
            result.warnings.push(ImportWarning::UnparseablePriority {
                row: raw.row_number,
                family_name: family.name,
                group_number,
            });
            return;
        };

        let group_name = format!("Group{}", group_number);
        match group_index.get(&group_name) {
            Some(&idx) => result.family_groups[idx].push(family),
            None => {
                group_index.insert(group_name.clone(), result.family_groups.len());
                result
                    .family_groups
                    .push(FamilyGroup::new(group_name, priority, vec![family]));
            }
        }
    }
}

impl Default for FamilyImporter {
    fn default() -> Self {
        Self::new(FamilyColumns::default())
    }
}
