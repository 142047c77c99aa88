// ==========================================
// 家庭住房分配系统 - 导入层
// ==========================================
// 职责: 外部表格数据 → 领域实体
// 支持: CSV, Excel
// ==========================================

pub mod building_importer;
pub mod data_cleaner;
pub mod error;
pub mod family_importer;
pub mod field_mapper;
pub mod file_parser;
pub mod importer_trait;
pub mod warning;

// 重导出核心类型
pub use building_importer::BuildingImporter;
pub use data_cleaner::DataCleaner;
pub use error::{ImportError, ImportResult};
pub use family_importer::{FamilyImport, FamilyImporter};
pub use field_mapper::{FieldMapper, RawBuildingRecord, RawFamilyRecord};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use importer_trait::{FileParser, RawRecord};
pub use warning::ImportWarning;
