use crate::domain::building::BuildingGroup;
use crate::domain::family::{Family, FamilyGroup, FamilyRequestingBuilding};
use crate::domain::packing::{Assignment, BuildingResult, PackingResult, PackingWarning};
use crate::engine::allocation_record::AllocationGroup;
use crate::engine::ordering::PrioritySorter;
use crate::engine::working_set::WorkingSet;
use tracing::{debug, instrument};

/// 合成家庭组的起始优先级（仅用于展示，排序依据 origin）
pub const FALLBACK_PRIORITY_BASE: i32 = 1000;

// ==========================================
// Allocator - 分配引擎
// ==========================================
pub struct Allocator {
    sorter: PrioritySorter,
}

impl Allocator {
    pub fn new() -> Self {
        Self {
            sorter: PrioritySorter::new(),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 执行一次完整分配
    ///
    /// 输入不会被修改；所有可变状态只存在于本次调用内。
    ///
    /// # 参数
    /// - `building_groups`: 楼栋组（未排序）
    /// - `family_groups`: 家庭组（未排序）
    /// - `requests`: 指定楼栋的家庭（按输入顺序处理）
    ///
    /// # 返回
    /// 分配明细、楼栋入住统计、未匹配家庭、告警
    #[instrument(skip_all, fields(
        building_groups = building_groups.len(),
        family_groups = family_groups.len(),
        requests = requests.len()
    ))]
    pub fn pack(
        &self,
        building_groups: &[BuildingGroup],
        family_groups: &[FamilyGroup],
        requests: &[FamilyRequestingBuilding],
    ) -> PackingResult {
        // 1. 归一化：零入住记录 + 排序
        let mut run = PackingRun::normalize(&self.sorter, building_groups, family_groups);

        // 2. 处理指定楼栋（失败者追加为合成家庭组）
        run.honor_requests(requests);

        // 3. 家庭组整体分配
        run.pack_groups();

        // 4. 汇总结果
        let result = run.into_result();
        debug!(
            assignments = result.assignments.len(),
            no_matches = result.no_matches.len(),
            warnings = result.warnings.len(),
            "分配完成"
        );
        result
    }
}

impl Default for Allocator {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// PackingRun - 单次分配的可变状态
// ==========================================
pub(super) struct PackingRun {
    pub(super) groups: Vec<AllocationGroup>,
    pub(super) family_groups: Vec<FamilyGroup>,
    pub(super) no_matches: Vec<Family>,
    pub(super) warnings: Vec<PackingWarning>,
    pub(super) next_fallback_priority: i32,
}

impl PackingRun {
    fn normalize(
        sorter: &PrioritySorter,
        building_groups: &[BuildingGroup],
        family_groups: &[FamilyGroup],
    ) -> Self {
        let mut groups: Vec<AllocationGroup> =
            building_groups.iter().map(AllocationGroup::from).collect();
        sorter.sort_building_groups(&mut groups);

        let mut family_groups = family_groups.to_vec();
        sorter.sort_family_groups(&mut family_groups);

        Self {
            groups,
            family_groups,
            no_matches: Vec::new(),
            warnings: Vec::new(),
            next_fallback_priority: FALLBACK_PRIORITY_BASE,
        }
    }

    fn pack_groups(&mut self) {
        let family_groups = std::mem::take(&mut self.family_groups);

        for family_group in &family_groups {
            if !self.pack_family_group(family_group) {
                debug!(
                    family_group = %family_group.name,
                    size = family_group.total_size(),
                    "家庭组无法整体分配"
                );
                self.no_matches.extend(family_group.families.iter().cloned());
            }
        }

        self.family_groups = family_groups;
    }

    /// 首个能整体容纳家庭组的楼栋组胜出（非最优适配）
    fn pack_family_group(&mut self, family_group: &FamilyGroup) -> bool {
        let total_size = family_group.total_size();

        for group in self.groups.iter_mut() {
            // 剩余容量预筛
            if group.remaining_capacity() < total_size {
                continue;
            }

            let mut working = WorkingSet::begin(&mut group.records);
            let all_placed = family_group.families.iter().all(|family| {
                working
                    .try_assign_first_fit(family, &family_group.name)
                    .is_some()
            });

            if all_placed {
                working.commit();
                debug!(
                    family_group = %family_group.name,
                    building_group = %group.name,
                    "家庭组已分配"
                );
                return true;
            }
        }

        false
    }

    fn into_result(self) -> PackingResult {
        let mut assignments = Vec::new();
        let mut building_results = Vec::new();

        for group in &self.groups {
            for record in &group.records {
                building_results.push(BuildingResult {
                    name: record.building.name.clone(),
                    priority: group.priority,
                    capacity: record.building.capacity,
                    capacity_filled: record.capacity_filled,
                });

                for assigned in &record.assigned {
                    assignments.push(Assignment {
                        family_name: assigned.family.name.clone(),
                        family_size: assigned.family.size,
                        family_group: assigned.family_group.clone(),
                        building_name: record.building.name.clone(),
                        building_group: group.name.clone(),
                    });
                }
            }
        }

        PackingResult {
            assignments,
            no_matches: self.no_matches,
            building_results,
            warnings: self.warnings,
        }
    }
}
