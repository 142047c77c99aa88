use super::core::PackingRun;
use crate::domain::family::{Family, FamilyGroup, FamilyRequestingBuilding};
use crate::domain::packing::PackingWarning;
use crate::domain::types::HousingType;
use std::collections::HashMap;
use tracing::debug;

impl PackingRun {
    /// 处理指定楼栋的家庭
    ///
    /// 规则:
    /// 1) 楼栋名忽略大小写匹配，重名时后出现的楼栋生效
    /// 2) 楼栋不存在 → 告警，追加合成家庭组（不带住房类型提示）
    /// 3) 入住失败 → 告警，追加合成家庭组，家庭未指定住房类型时沿用该楼栋的类型
    /// 4) 入住成功 → 直接记录，家庭组名为空串
    pub(super) fn honor_requests(&mut self, requests: &[FamilyRequestingBuilding]) {
        if requests.is_empty() {
            return;
        }

        let index = self.building_index();

        for request in requests {
            let key = request.requested_building_name.to_lowercase();
            let Some(&(group_idx, record_idx)) = index.get(&key) else {
                self.warnings.push(PackingWarning::UnknownBuilding {
                    family_name: request.family.name.clone(),
                    requested_building_name: request.requested_building_name.clone(),
                });
                self.append_fallback_group(request.family.clone(), None);
                continue;
            };

            let record = &mut self.groups[group_idx].records[record_idx];
            if record.try_assign(&request.family, "") {
                debug!(
                    family = %request.family.name,
                    building = %record.building.name,
                    "已分配到指定楼栋"
                );
                continue;
            }

            let housing_type = record.building.housing_type;
            self.warnings.push(PackingWarning::RequestRejected {
                family_name: request.family.name.clone(),
                building_name: record.building.name.clone(),
                building_housing_type: housing_type,
            });
            self.append_fallback_group(request.family.clone(), Some(housing_type));
        }
    }

    /// 楼栋名（小写）→ (楼栋组下标, 楼栋下标)
    fn building_index(&self) -> HashMap<String, (usize, usize)> {
        let mut index = HashMap::new();
        for (group_idx, group) in self.groups.iter().enumerate() {
            for (record_idx, record) in group.records.iter().enumerate() {
                index.insert(
                    record.building.name.to_lowercase(),
                    (group_idx, record_idx),
                );
            }
        }
        index
    }

    fn append_fallback_group(&mut self, mut family: Family, hint: Option<HousingType>) {
        if family.required_housing_type.is_none() {
            family.required_housing_type = hint;
        }

        let priority = self.next_fallback_priority;
        self.next_fallback_priority += 1;
        self.family_groups
            .push(FamilyGroup::request_fallback(priority, family));
    }
}
