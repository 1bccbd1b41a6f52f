use parkdiff::diff::{compute_delta, ValueKind};
use parkdiff::path::{Path, Pattern};
use serde_json::json;

#[test]
fn identical_trees_produce_empty_delta() {
    let doc = json!({
        "Items": [
            {"carParkFacilityNameTc": "Central", "availableVacancy": 10,
             "parkingInfoList": [{"availableVacancy": 4}]}
        ],
        "count": 1
    });
    let delta = compute_delta(&doc, &doc, &[]);
    assert!(delta.is_empty());
}

#[test]
fn scalar_value_change_is_classified() {
    let old = json!({"a": 1});
    let new = json!({"a": 2});
    let delta = compute_delta(&old, &new, &[]);
    assert_eq!(delta.value_changes.len(), 1);
    assert!(delta.additions.is_empty());
    assert!(delta.removals.is_empty());
    assert!(delta.type_changes.is_empty());
    let change = &delta.value_changes[0];
    assert_eq!(change.path.to_string(), "root['a']");
    assert_eq!(change.old, json!(1));
    assert_eq!(change.new, json!(2));
}

#[test]
fn number_to_string_is_a_type_change_not_a_value_change() {
    let old = json!({"a": 1});
    let new = json!({"a": "1"});
    let delta = compute_delta(&old, &new, &[]);
    assert!(delta.value_changes.is_empty());
    assert_eq!(delta.type_changes.len(), 1);
    let change = &delta.type_changes[0];
    assert_eq!(change.old_kind, ValueKind::Number);
    assert_eq!(change.new_kind, ValueKind::String);
    assert_eq!(change.old, json!(1));
    assert_eq!(change.new, json!("1"));
}

#[test]
fn mapping_against_sequence_is_a_type_change() {
    let old = json!({"a": {"x": 1}});
    let new = json!({"a": [1]});
    let delta = compute_delta(&old, &new, &[]);
    assert_eq!(delta.type_changes.len(), 1);
    assert_eq!(delta.type_changes[0].old_kind, ValueKind::Mapping);
    assert_eq!(delta.type_changes[0].new_kind, ValueKind::Sequence);
}

#[test]
fn added_and_removed_keys_are_complementary() {
    let old = json!({"keep": 1, "gone": 2});
    let new = json!({"keep": 1, "fresh": 3});
    let delta = compute_delta(&old, &new, &[]);
    assert_eq!(delta.additions.len(), 1);
    assert_eq!(delta.additions[0].path.to_string(), "root['fresh']");
    assert_eq!(delta.additions[0].value, json!(3));
    assert_eq!(delta.removals.len(), 1);
    assert_eq!(delta.removals[0].path.to_string(), "root['gone']");
    assert!(delta.value_changes.is_empty());
    assert!(delta.type_changes.is_empty());
}

#[test]
fn equal_values_never_appear_in_any_group() {
    let old = json!({"a": 1, "b": "x", "c": [1, 2], "d": {"e": null}});
    let delta = compute_delta(&old, &old.clone(), &[]);
    assert!(delta.is_empty());
}

#[test]
fn sequences_compare_positionally() {
    // Mid-sequence insertion: every later index reports as changed, with
    // the surplus tail as an addition. Accepted positional behavior.
    let old = json!({"list": [1, 2, 3]});
    let new = json!({"list": [1, 9, 2, 3]});
    let delta = compute_delta(&old, &new, &[]);
    assert_eq!(delta.value_changes.len(), 2);
    assert_eq!(delta.value_changes[0].path.to_string(), "root['list'][1]");
    assert_eq!(delta.value_changes[1].path.to_string(), "root['list'][2]");
    assert_eq!(delta.additions.len(), 1);
    assert_eq!(delta.additions[0].path.to_string(), "root['list'][3]");
}

#[test]
fn shrinking_sequence_reports_tail_removals() {
    let old = json!([1, 2, 3]);
    let new = json!([1]);
    let delta = compute_delta(&old, &new, &[]);
    assert_eq!(delta.removals.len(), 2);
    assert_eq!(delta.removals[0].path.to_string(), "root[1]");
    assert_eq!(delta.removals[1].path.to_string(), "root[2]");
}

#[test]
fn excluded_paths_never_reach_the_delta() {
    let exclude = vec![Pattern::parse("root['Items'][*]['modified']").unwrap()];
    let old = json!({"Items": [
        {"modified": "2024-01-01", "availableVacancy": 10},
        {"modified": "2024-01-01", "availableVacancy": 7}
    ]});
    let new = json!({"Items": [
        {"modified": "2024-01-02", "availableVacancy": 12},
        {"modified": "2024-01-02", "availableVacancy": 7}
    ]});
    let delta = compute_delta(&old, &new, &exclude);
    assert_eq!(delta.value_changes.len(), 1);
    assert_eq!(
        delta.value_changes[0].path.to_string(),
        "root['Items'][0]['availableVacancy']"
    );
}

#[test]
fn exclusion_covers_the_whole_subtree() {
    let exclude = vec![Pattern::parse("root['meta']").unwrap()];
    let old = json!({"meta": {"a": 1, "b": {"c": 2}}, "x": 1});
    let new = json!({"meta": {"a": 9, "extra": true}, "x": 2});
    let delta = compute_delta(&old, &new, &exclude);
    assert_eq!(delta.value_changes.len(), 1);
    assert_eq!(delta.value_changes[0].path.to_string(), "root['x']");
    assert!(delta.additions.is_empty());
    assert!(delta.removals.is_empty());
}

#[test]
fn excluded_additions_and_removals_are_suppressed_too() {
    let exclude = vec![Pattern::parse("root['Items'][*]['created']").unwrap()];
    let old = json!({"Items": [{}]});
    let new = json!({"Items": [{"created": "2024-01-01"}]});
    let delta = compute_delta(&old, &new, &exclude);
    assert!(delta.is_empty());
}

#[test]
fn pattern_parsing_rejects_malformed_text() {
    assert!(Pattern::parse("Items[0]").is_err());
    assert!(Pattern::parse("root['open").is_err());
    assert!(Pattern::parse("root[x]").is_err());
    assert!(Pattern::parse("root").is_err());
    assert!(Pattern::parse("root['Items'][*]").is_ok());
}

#[test]
fn pattern_wildcard_matches_any_index_only() {
    let pattern = Pattern::parse("root['Items'][*]['modified']").unwrap();
    let matching = Path::root()
        .push_key("Items")
        .push_index(5)
        .push_key("modified");
    assert!(pattern.matches(&matching));
    let key_instead_of_index = Path::root()
        .push_key("Items")
        .push_key("5")
        .push_key("modified");
    assert!(!pattern.matches(&key_instead_of_index));
}
