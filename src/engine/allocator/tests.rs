use super::{Allocator, FALLBACK_PRIORITY_BASE};
use crate::domain::building::{Building, BuildingGroup};
use crate::domain::family::{Family, FamilyGroup, FamilyRequestingBuilding};
use crate::domain::packing::{PackingResult, PackingWarning};
use crate::domain::types::HousingType;
use std::collections::HashMap;

// ==========================================
// 测试辅助函数
// ==========================================

fn cottage(name: &str, capacity: u32) -> Building {
    Building::new(name, capacity, HousingType::Cottage)
}

fn hotel(name: &str, capacity: u32) -> Building {
    Building::new(name, capacity, HousingType::Hotel)
}

fn family(name: &str, size: u32) -> Family {
    Family::new(name, size)
}

/// 校验通用不变量：
/// - 每栋楼 capacity_filled = 分配人数之和 ≤ capacity
/// - 每个家庭只出现一次
fn assert_invariants(result: &PackingResult, expected_families: &[&str]) {
    let mut filled: HashMap<&str, u32> = HashMap::new();
    for a in &result.assignments {
        *filled.entry(a.building_name.as_str()).or_insert(0) += a.family_size;
    }
    for b in &result.building_results {
        assert!(b.capacity_filled <= b.capacity, "楼栋 {} 超员", b.name);
        assert_eq!(
            filled.get(b.name.as_str()).copied().unwrap_or(0),
            b.capacity_filled,
            "楼栋 {} 入住人数与明细不一致",
            b.name
        );
    }

    let mut seen: Vec<&str> = result
        .assignments
        .iter()
        .map(|a| a.family_name.as_str())
        .chain(result.no_matches.iter().map(|f| f.name.as_str()))
        .collect();
    seen.sort_unstable();
    let mut expected = expected_families.to_vec();
    expected.sort_unstable();
    assert_eq!(seen, expected);
}

// ==========================================
// 基本分配
// ==========================================

#[test]
fn test_group_fits_single_building() {
    let buildings = vec![BuildingGroup::new("BG1", 1, vec![cottage("A", 5)])];
    let families = vec![FamilyGroup::new(
        "Group1",
        1,
        vec![family("F3", 3), family("F2", 2)],
    )];

    let result = Allocator::new().pack(&buildings, &families, &[]);

    assert_eq!(result.assignments.len(), 2);
    assert!(result.no_matches.is_empty());
    assert_eq!(result.building("A").unwrap().capacity_filled, 5);
    assert!(result
        .assignments
        .iter()
        .all(|a| a.building_name == "A" && a.family_group == "Group1" && a.building_group == "BG1"));
    assert_invariants(&result, &["F3", "F2"]);
}

#[test]
fn test_group_larger_than_total_capacity_is_rejected() {
    let buildings = vec![BuildingGroup::new("BG1", 1, vec![cottage("A", 5)])];
    let families = vec![FamilyGroup::new(
        "Group1",
        1,
        vec![family("F3", 3), family("F3b", 3)],
    )];

    let result = Allocator::new().pack(&buildings, &families, &[]);

    assert!(result.assignments.is_empty());
    assert_eq!(result.no_matches.len(), 2);
    assert_eq!(result.building("A").unwrap().capacity_filled, 0);
    assert_invariants(&result, &["F3", "F3b"]);
}

#[test]
fn test_building_results_emitted_for_every_building() {
    let buildings = vec![
        BuildingGroup::new("BG2", 2, vec![cottage("C", 4)]),
        BuildingGroup::new("BG1", 1, vec![cottage("A", 5), hotel("B", 3)]),
    ];

    let result = Allocator::new().pack(&buildings, &[], &[]);

    let names: Vec<&str> = result.building_results.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert_eq!(result.building_results[2].priority, 2);
    assert!(result.building_results.iter().all(|b| b.capacity_filled == 0));
}

// ==========================================
// 整体分配（全有或全无）
// ==========================================

#[test]
fn test_all_or_nothing_when_one_family_cannot_fit() {
    // 容量预筛通过（总量 6 ≤ 7），但 hotel 家庭无处可去
    let buildings = vec![BuildingGroup::new("BG1", 1, vec![cottage("A", 7)])];
    let families = vec![FamilyGroup::new(
        "Group1",
        1,
        vec![
            family("F2", 2),
            family("H4", 4).with_housing_type(HousingType::Hotel),
        ],
    )];

    let result = Allocator::new().pack(&buildings, &families, &[]);

    assert!(result.assignments.is_empty());
    assert_eq!(result.no_matches.len(), 2);
    assert_eq!(result.building("A").unwrap().capacity_filled, 0);
    assert_invariants(&result, &["F2", "H4"]);
}

#[test]
fn test_rejected_attempt_leaves_no_phantom_assignments() {
    // 第一个楼栋组尝试失败后再由第二个楼栋组接收
    let buildings = vec![
        BuildingGroup::new("BG1", 1, vec![cottage("A", 4), cottage("B", 4)]),
        BuildingGroup::new("BG2", 2, vec![hotel("H", 10)]),
    ];
    let families = vec![FamilyGroup::new(
        "Group1",
        1,
        vec![
            family("F3", 3),
            family("H2", 2).with_housing_type(HousingType::Hotel),
        ],
    )];

    let result = Allocator::new().pack(&buildings, &families, &[]);

    assert_eq!(result.assignments_for("A").count(), 0);
    assert_eq!(result.building("A").unwrap().capacity_filled, 0);
    assert_eq!(result.building("H").unwrap().capacity_filled, 5);
    assert_invariants(&result, &["F3", "H2"]);
}

#[test]
fn test_group_spreads_across_buildings_first_fit() {
    let buildings = vec![BuildingGroup::new(
        "BG1",
        1,
        vec![cottage("A", 4), cottage("B", 4)],
    )];
    let families = vec![FamilyGroup::new(
        "Group1",
        1,
        vec![family("F1", 1), family("F3", 3), family("F2", 2)],
    )];

    let result = Allocator::new().pack(&buildings, &families, &[]);

    // 按人数降序: F3 → A, F2 → B, F1 → A
    assert_eq!(result.building("A").unwrap().capacity_filled, 4);
    assert_eq!(result.building("B").unwrap().capacity_filled, 2);
    let in_a: Vec<&str> = result.assignments_for("A").map(|a| a.family_name.as_str()).collect();
    assert_eq!(in_a, vec!["F3", "F1"]);
    assert_invariants(&result, &["F1", "F3", "F2"]);
}

#[test]
fn test_first_building_group_wins_not_best_fit() {
    let buildings = vec![
        BuildingGroup::new("BG2", 2, vec![cottage("Exact", 3)]),
        BuildingGroup::new("BG1", 1, vec![cottage("Large", 10)]),
    ];
    let families = vec![FamilyGroup::new("Group1", 1, vec![family("F3", 3)])];

    let result = Allocator::new().pack(&buildings, &families, &[]);

    assert_eq!(result.assignments[0].building_name, "Large");
    assert_eq!(result.assignments[0].building_group, "BG1");
}

#[test]
fn test_family_group_priority_order() {
    // 只有一栋楼，优先级 1 的家庭组先入住
    let buildings = vec![BuildingGroup::new("BG1", 1, vec![cottage("A", 4)])];
    let families = vec![
        FamilyGroup::new("Group2", 2, vec![family("Second", 4)]),
        FamilyGroup::new("Group1", 1, vec![family("First", 4)]),
    ];

    let result = Allocator::new().pack(&buildings, &families, &[]);

    assert_eq!(result.assignments[0].family_name, "First");
    assert_eq!(result.no_matches[0].name, "Second");
}

#[test]
fn test_equal_priority_keeps_input_order() {
    let buildings = vec![BuildingGroup::new("BG1", 1, vec![cottage("A", 4)])];
    let families = vec![
        FamilyGroup::new("GroupA", 1, vec![family("A", 4)]),
        FamilyGroup::new("GroupB", 1, vec![family("B", 4)]),
    ];

    let result = Allocator::new().pack(&buildings, &families, &[]);

    assert_eq!(result.assignments[0].family_name, "A");
    assert_eq!(result.no_matches[0].name, "B");
}

#[test]
fn test_hotel_family_never_in_cottage() {
    let buildings = vec![BuildingGroup::new(
        "BG1",
        1,
        vec![cottage("C1", 10), cottage("C2", 10), hotel("H1", 2)],
    )];
    let families = vec![
        FamilyGroup::new(
            "Group1",
            1,
            vec![family("H3", 3).with_housing_type(HousingType::Hotel)],
        ),
        FamilyGroup::new(
            "Group2",
            2,
            vec![family("H2", 2).with_housing_type(HousingType::Hotel)],
        ),
    ];

    let result = Allocator::new().pack(&buildings, &families, &[]);

    for a in &result.assignments {
        assert_eq!(a.building_name, "H1");
    }
    assert_eq!(result.no_matches.len(), 1);
    assert_eq!(result.no_matches[0].name, "H3");
}

#[test]
fn test_pack_is_deterministic() {
    let buildings = vec![
        BuildingGroup::new("BG2", 2, vec![cottage("C", 6), hotel("D", 4)]),
        BuildingGroup::new("BG1", 1, vec![cottage("A", 5), hotel("B", 3)]),
    ];
    let families = vec![
        FamilyGroup::new("Group3", 3, vec![family("a", 2), family("b", 2)]),
        FamilyGroup::new("Group1", 1, vec![family("c", 3), family("d", 1)]),
        FamilyGroup::new("Group1b", 1, vec![family("e", 4)]),
    ];
    let requests = vec![FamilyRequestingBuilding::new(family("r", 2), "b")];

    let allocator = Allocator::new();
    let first = allocator.pack(&buildings, &families, &requests);
    let second = allocator.pack(&buildings, &families, &requests);

    assert_eq!(first, second);
    assert_invariants(&first, &["a", "b", "c", "d", "e", "r"]);
}

#[test]
fn test_empty_inputs() {
    let result = Allocator::new().pack(&[], &[], &[]);
    assert_eq!(result, PackingResult::default());

    let families = vec![FamilyGroup::new("Group1", 1, vec![family("F", 1)])];
    let result = Allocator::new().pack(&[], &families, &[]);
    assert_eq!(result.no_matches.len(), 1);
}

// ==========================================
// 指定楼栋
// ==========================================

#[test]
fn test_request_assigned_directly_case_insensitive() {
    let buildings = vec![BuildingGroup::new("BG1", 1, vec![cottage("Maple", 5)])];
    let requests = vec![FamilyRequestingBuilding::new(family("R", 3), "mAPLE")];

    let result = Allocator::new().pack(&buildings, &[], &requests);

    assert_eq!(result.assignments.len(), 1);
    assert_eq!(result.assignments[0].building_name, "Maple");
    assert_eq!(result.assignments[0].family_group, "");
    assert!(result.warnings.is_empty());
}

#[test]
fn test_request_unknown_building_falls_back() {
    let buildings = vec![BuildingGroup::new("BG1", 1, vec![hotel("H", 5)])];
    let requests = vec![FamilyRequestingBuilding::new(family("R", 3), "Nowhere")];

    let result = Allocator::new().pack(&buildings, &[], &requests);

    assert_eq!(
        result.warnings,
        vec![PackingWarning::UnknownBuilding {
            family_name: "R".to_string(),
            requested_building_name: "Nowhere".to_string(),
        }]
    );
    // 无住房类型提示，仍可入住 hotel
    assert_eq!(result.assignments[0].building_name, "H");
    assert_eq!(result.assignments[0].family_group, "");
}

#[test]
fn test_request_full_building_falls_back_after_named_groups() {
    let buildings = vec![BuildingGroup::new(
        "BG1",
        1,
        vec![cottage("Full", 2), cottage("Other", 3)],
    )];
    let families = vec![FamilyGroup::new("Group9", 9, vec![family("G3", 3)])];
    let requests = vec![
        FamilyRequestingBuilding::new(family("Early", 2), "Full"),
        FamilyRequestingBuilding::new(family("Late", 3), "full"),
    ];

    let result = Allocator::new().pack(&buildings, &families, &requests);

    // Early 直接入住 Full；Late 的合成组排在 Group9 之后，Other 已被 Group9 占满
    assert_eq!(result.building("Full").unwrap().capacity_filled, 2);
    assert_eq!(result.assignments_for("Other").next().unwrap().family_name, "G3");
    assert_eq!(result.no_matches.len(), 1);
    assert_eq!(result.no_matches[0].name, "Late");
    assert!(matches!(
        result.warnings[0],
        PackingWarning::RequestRejected { ref building_name, .. } if building_name == "Full"
    ));
    assert_invariants(&result, &["Early", "Late", "G3"]);
}

#[test]
fn test_request_rejection_hints_building_housing_type() {
    let buildings = vec![BuildingGroup::new(
        "BG1",
        1,
        vec![cottage("BigCottage", 10), hotel("SmallHotel", 1), hotel("Hotel2", 5)],
    )];
    let requests = vec![FamilyRequestingBuilding::new(family("R", 3), "SmallHotel")];

    let result = Allocator::new().pack(&buildings, &[], &requests);

    // 合成组继承 hotel 类型，跳过 BigCottage
    assert_eq!(result.assignments[0].building_name, "Hotel2");
}

#[test]
fn test_request_rejection_keeps_own_housing_type() {
    let buildings = vec![BuildingGroup::new(
        "BG1",
        1,
        vec![hotel("SmallHotel", 1), cottage("Cottage", 10), hotel("Hotel2", 5)],
    )];
    let requests = vec![FamilyRequestingBuilding::new(
        family("R", 3).with_housing_type(HousingType::Cottage),
        "SmallHotel",
    )];

    let result = Allocator::new().pack(&buildings, &[], &requests);

    assert_eq!(result.assignments[0].building_name, "Cottage");
}

#[test]
fn test_request_type_mismatch_is_rejected() {
    let buildings = vec![BuildingGroup::new("BG1", 1, vec![cottage("C", 10)])];
    let requests = vec![FamilyRequestingBuilding::new(
        family("R", 2).with_housing_type(HousingType::Hotel),
        "C",
    )];

    let result = Allocator::new().pack(&buildings, &[], &requests);

    assert!(result.assignments.is_empty());
    assert_eq!(result.no_matches[0].name, "R");
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn test_duplicate_building_names_later_wins() {
    let buildings = vec![
        BuildingGroup::new("BG1", 1, vec![cottage("Twin", 5)]),
        BuildingGroup::new("BG2", 2, vec![cottage("twin", 5)]),
    ];
    let requests = vec![FamilyRequestingBuilding::new(family("R", 2), "TWIN")];

    let result = Allocator::new().pack(&buildings, &[], &requests);

    assert_eq!(result.assignments[0].building_group, "BG2");
}

#[test]
fn test_huge_families_do_not_overflow_group_size() {
    let buildings = vec![BuildingGroup::new("BG1", 1, vec![cottage("A", u32::MAX)])];
    let families = vec![FamilyGroup::new(
        "Group1",
        1,
        vec![family("Big1", 3_000_000_000), family("Big2", 3_000_000_000)],
    )];

    let result = Allocator::new().pack(&buildings, &families, &[]);

    assert_eq!(families[0].total_size(), 6_000_000_000);
    assert!(result.assignments.is_empty());
    assert_eq!(result.no_matches.len(), 2);
    assert_eq!(result.unmatched_people(), 6_000_000_000);
    assert_eq!(result.building("A").unwrap().capacity_filled, 0);
    assert_invariants(&result, &["Big1", "Big2"]);
}

#[test]
fn test_fallback_priority_base() {
    assert_eq!(FALLBACK_PRIORITY_BASE, 1000);
}
