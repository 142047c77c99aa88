// ==========================================
// 家庭住房分配系统 - 楼栋数据导入
// ==========================================
// 职责: 行记录 → 楼栋组（按首次出现顺序）
// 红线: 楼栋数据定义资源全集，任何字段错误都终止导入
// ==========================================

use crate::config::packing_config::BuildingColumns;
use crate::domain::building::{Building, BuildingGroup};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::{FieldMapper, RawBuildingRecord};
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::importer_trait::RawRecord;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, instrument};

// ==========================================
// BuildingImporter - 楼栋数据导入器
// ==========================================
pub struct BuildingImporter {
    columns: BuildingColumns,
    mapper: FieldMapper,
    cleaner: DataCleaner,
}

impl BuildingImporter {
    pub fn new(columns: BuildingColumns) -> Self {
        Self {
            columns,
            mapper: FieldMapper,
            cleaner: DataCleaner,
        }
    }

    /// 从文件导入（CSV / Excel）
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn import_file<P: AsRef<Path>>(&self, path: P) -> ImportResult<Vec<BuildingGroup>> {
        let records = UniversalFileParser.parse(path)?;
        let groups = self.import_records(&records)?;
        info!(
            building_groups = groups.len(),
            buildings = groups.iter().map(|g| g.buildings.len()).sum::<usize>(),
            "楼栋数据导入完成"
        );
        Ok(groups)
    }

    /// 从行记录导入（行号从 1 开始）
    pub fn import_records(&self, records: &[RawRecord]) -> ImportResult<Vec<BuildingGroup>> {
        let mut groups: Vec<BuildingGroup> = Vec::new();
        let mut group_index: HashMap<i32, usize> = HashMap::new();

        for (idx, row) in records.iter().enumerate() {
            let raw = self.mapper.map_building(row, &self.columns, idx + 1);
            let (priority, building) = self.convert(raw)?;

            match group_index.get(&priority) {
                Some(&group_idx) => groups[group_idx].buildings.push(building),
                None => {
                    group_index.insert(priority, groups.len());
                    groups.push(BuildingGroup::new(
                        format!("BuildingGroup{}", priority),
                        priority,
                        vec![building],
                    ));
                }
            }
        }

        Ok(groups)
    }

    /// 行记录 → (楼栋组优先级, 楼栋)
    ///
    /// 比家庭数据更严格：名称缺失、住房类型无法识别也终止导入，不做透传
    fn convert(&self, raw: RawBuildingRecord) -> ImportResult<(i32, Building)> {
        let row = raw.row_number;
        let name = raw.name.ok_or_else(|| ImportError::MissingField {
            row,
            field: self.columns.name.clone(),
        })?;

        let priority_text = raw.group_priority.unwrap_or_default();
        let priority = self.cleaner.parse_priority(&priority_text).ok_or_else(|| {
            ImportError::TypeConversionError {
                row,
                field: self.columns.group_priority.clone(),
                message: format!("无法解析楼栋 '{}' 的楼栋组优先级: '{}'", name, priority_text),
            }
        })?;

        let capacity_text = raw.capacity.unwrap_or_default();
        let capacity = self.cleaner.parse_capacity(&capacity_text).ok_or_else(|| {
            ImportError::TypeConversionError {
                row,
                field: self.columns.capacity.clone(),
                message: format!("无法解析楼栋 '{}' 的容量: '{}'", name, capacity_text),
            }
        })?;

        let housing_type = match self.cleaner.clean_housing_type(raw.housing_type.as_deref()) {
            Ok(Some(housing_type)) => housing_type,
            Ok(None) => {
                return Err(ImportError::MissingField {
                    row,
                    field: self.columns.housing_type.clone(),
                })
            }
            Err(value) => {
                return Err(ImportError::InvalidHousingType {
                    row,
                    building: name,
                    value,
                })
            }
        };

        Ok((priority, Building::new(name, capacity, housing_type)))
    }
}

impl Default for BuildingImporter {
    fn default() -> Self {
        Self::new(BuildingColumns::default())
    }
}
