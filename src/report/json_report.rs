// ==========================================
// 家庭住房分配系统 - JSON 报表
// ==========================================

use crate::domain::packing::PackingResult;
use crate::report::error::ReportResult;

/// 生成分配结果 JSON 报表（完整 PackingResult，含告警）
pub fn render_packing_json(result: &PackingResult) -> ReportResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::family::Family;
    use crate::domain::packing::PackingWarning;
    use crate::domain::types::HousingType;

    #[test]
    fn test_render_packing_json() {
        let result = PackingResult {
            no_matches: vec![Family::new("Bob", 4)],
            warnings: vec![PackingWarning::RequestRejected {
                family_name: "Bob".to_string(),
                building_name: "Grand".to_string(),
                building_housing_type: HousingType::Hotel,
            }],
            ..PackingResult::default()
        };

        let json = render_packing_json(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["no_matches"][0]["name"], "Bob");
        assert_eq!(value["warnings"][0]["kind"], "REQUEST_REJECTED");
        assert_eq!(value["warnings"][0]["building_housing_type"], "hotel");

        let parsed: PackingResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
