// ==========================================
// 家庭住房分配系统 - 数据清洗器实现
// ==========================================
// 职责: 数值 / 住房类型 / 组号优先级的宽松解析
// 说明: 数值按“前导整数”解析，"4 people" 视为 4
// ==========================================

use crate::domain::types::HousingType;

pub struct DataCleaner;

impl DataCleaner {
    /// 解析前导整数（允许前导空白与正负号，忽略其后的非数字内容）
    pub fn leading_integer(&self, value: &str) -> Option<i64> {
        let trimmed = value.trim_start();
        let (sign, digits_start) = match trimmed.chars().next() {
            Some('-') => (-1, 1),
            Some('+') => (1, 1),
            _ => (1, 0),
        };

        let digits: String = trimmed[digits_start..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if digits.is_empty() {
            return None;
        }

        digits.parse::<i64>().ok().map(|n| sign * n)
    }

    /// 解析家庭人数（必须为正整数）
    pub fn parse_family_size(&self, value: &str) -> Option<u32> {
        self.leading_integer(value)
            .filter(|n| *n > 0)
            .and_then(|n| u32::try_from(n).ok())
    }

    /// 解析楼栋容量（必须为正整数）
    pub fn parse_capacity(&self, value: &str) -> Option<u32> {
        self.leading_integer(value)
            .filter(|n| *n > 0)
            .and_then(|n| u32::try_from(n).ok())
    }

    /// 解析楼栋组优先级
    pub fn parse_priority(&self, value: &str) -> Option<i32> {
        self.leading_integer(value)
            .and_then(|n| i32::try_from(n).ok())
    }

    /// 从组号中提取优先级（第一段连续数字）
    ///
    /// 例如 "A12-b" → 12，"Group 3" → 3
    pub fn extract_group_priority(&self, group_number: &str) -> Option<i32> {
        let digits: String = group_number
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse::<i32>().ok()
    }

    /// 清洗住房类型
    ///
    /// # 返回
    /// - Ok(None): 空值（不限）
    /// - Ok(Some(_)): 可识别的住房类型
    /// - Err(原值): 无法识别
    pub fn clean_housing_type(&self, value: Option<&str>) -> Result<Option<HousingType>, String> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            None => Ok(None),
            Some(v) => HousingType::parse(v).map(Some).ok_or_else(|| v.to_string()),
        }
    }
}
