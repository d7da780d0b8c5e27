use knapsack_core::{ProblemInstance, Selection};

fn small_instance() -> ProblemInstance {
    ProblemInstance::from_parts(vec![2, 3, 4, 5], vec![3.0, 4.0, 5.0, 6.0], 5).unwrap()
}

#[test]
fn test_totals_and_counts() {
    let instance = small_instance();
    let mut selection = Selection::empty(4);
    selection.taken[0] = true;
    selection.taken[1] = true;

    assert_eq!(selection.selected_count(), 2);
    assert_eq!(selection.selected_items(), vec![0, 1]);
    assert_eq!(selection.total_weight(&instance), 5);
    assert!((selection.total_value(&instance) - 7.0).abs() < 1e-12);
    assert!((selection.verify(&instance).unwrap() - 7.0).abs() < 1e-12);
}

#[test]
fn test_verify_rejects_overweight_selection() {
    let instance = small_instance();
    let mut selection = Selection::empty(4);
    selection.taken[2] = true;
    selection.taken[3] = true; // weight 9 > capacity 5

    assert!(selection.verify(&instance).is_err());
}

#[test]
fn test_verify_rejects_length_mismatch() {
    let instance = small_instance();
    let selection = Selection::empty(3);
    assert!(selection.verify(&instance).is_err());
}

#[test]
fn test_empty_selection_is_valid_for_any_capacity() {
    let instance = small_instance();
    let selection = Selection::empty(4);
    assert_eq!(selection.verify(&instance).unwrap(), 0.0);
}
