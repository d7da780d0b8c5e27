use knapsack_core::{GenerationParams, Item, ProblemInstance};

fn make_seed(index: u64) -> [u8; 32] {
    let mut seed = [0u8; 32];
    seed[0..8].copy_from_slice(&index.to_le_bytes());
    seed
}

#[test]
fn test_generation_is_deterministic_per_seed() {
    let params = GenerationParams::new(200, 5000);
    let a = ProblemInstance::generate_instance(&make_seed(7), &params).unwrap();
    let b = ProblemInstance::generate_instance(&make_seed(7), &params).unwrap();
    let c = ProblemInstance::generate_instance(&make_seed(8), &params).unwrap();

    assert_eq!(a.items, b.items);
    assert_ne!(a.items, c.items);
}

#[test]
fn test_generated_items_respect_ranges_and_density() {
    let params = GenerationParams::new(500, 10_000);
    let instance = ProblemInstance::generate_instance(&make_seed(0), &params).unwrap();

    assert_eq!(instance.num_items(), 500);
    for (i, item) in instance.items.iter().enumerate() {
        assert_eq!(item.id, i);
        assert!((1..=100).contains(&item.weight));
        assert!(item.value >= 100.0 && item.value <= 1000.0);
        assert!((item.density - item.value / item.weight as f64).abs() < 1e-12);
    }
}

#[test]
fn test_zero_weight_is_rejected() {
    assert!(Item::new(0, 0, 5.0).is_err());
    assert!(ProblemInstance::from_parts(vec![2, 0, 3], vec![1.0, 2.0, 3.0], 10).is_err());
}

#[test]
fn test_mismatched_parts_are_rejected() {
    assert!(ProblemInstance::from_parts(vec![2, 3], vec![1.0], 10).is_err());
}

#[test]
fn test_invalid_generation_params_are_rejected() {
    let mut params = GenerationParams::new(10, 100);
    params.min_weight = 0;
    assert!(ProblemInstance::generate_instance(&make_seed(0), &params).is_err());

    let mut params = GenerationParams::new(10, 100);
    params.min_weight = 50;
    params.max_weight = 10;
    assert!(ProblemInstance::generate_instance(&make_seed(0), &params).is_err());
}

#[test]
fn test_items_by_density_orders_deterministically() {
    // Two items with identical density; tie must go to the lower id.
    let instance =
        ProblemInstance::from_parts(vec![4, 2, 1], vec![8.0, 4.0, 3.0], 10).unwrap();
    let sorted = instance.items_by_density();

    assert_eq!(
        sorted.iter().map(|item| item.id).collect::<Vec<_>>(),
        vec![2, 0, 1]
    );
    // The original catalog is untouched.
    assert_eq!(
        instance.items.iter().map(|item| item.id).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
}

#[test]
fn test_instance_json_round_trip() {
    let params = GenerationParams::new(20, 300);
    let instance = ProblemInstance::generate_instance(&make_seed(3), &params).unwrap();

    let json = serde_json::to_string(&instance).unwrap();
    let decoded: ProblemInstance = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.capacity, instance.capacity);
    assert_eq!(decoded.items, instance.items);
}
