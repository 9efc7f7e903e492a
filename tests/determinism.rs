use star_system_generator::common::{SeededRandom, hash_to_degrees, hash_to_int};
use star_system_generator::config::GeneratorConfig;
use star_system_generator::generate_system;
use star_system_generator::generator::{
    BodyType, GenerationRequest, generate_id, generate_system_with,
};

#[test]
fn hash_matches_reference_values() {
    assert_eq!(hash_to_int(""), 0);
    assert_eq!(hash_to_int("hello"), 99_162_322);
    assert_eq!(hash_to_degrees("hello"), 322);
    assert_eq!(hash_to_degrees("Regina-planet-0"), 40);
    assert_eq!(hash_to_degrees("polygenelubricants"), 128);
}

#[test]
fn degrees_stay_in_range_for_many_keys() {
    for n in 0..2_000 {
        let key = format!("sector-{n}-body");
        assert!(hash_to_degrees(&key) < 360, "{key}");
    }
}

#[test]
fn seeded_random_is_reproducible() {
    let mut a = SeededRandom::new(1);
    let mut b = SeededRandom::new(1);
    let xs: Vec<f64> = (0..16).map(|_| a.next_f64()).collect();
    let ys: Vec<f64> = (0..16).map(|_| b.next_f64()).collect();
    assert_eq!(xs, ys);
    assert!(xs.iter().all(|x| (0.0..1.0).contains(x)));
    assert_ne!(SeededRandom::new(2).next_f64(), xs[0]);
}

#[test]
fn identical_inputs_give_identical_systems() {
    let a = generate_system("1910", "A867974-C", "G2 V", Some(3));
    let b = generate_system("1910", "A867974-C", "G2 V", Some(3));
    assert_eq!(a, b);
}

#[test]
fn different_hexes_give_different_layouts() {
    let a = generate_system("1910", "A867974-C", "G2 V", Some(2));
    let b = generate_system("1911", "A867974-C", "G2 V", Some(2));
    assert_ne!(a, b);
    let ids_a: Vec<_> = a.iter().map(|o| o.id.as_str()).collect();
    assert!(b.iter().all(|o| !ids_a.contains(&o.id.as_str())));
}

#[test]
fn first_gas_giant_depends_on_the_hex() {
    let first_giant = |hex: &str| {
        generate_system(hex, "A867974-C", "G2 V", Some(1))
            .into_iter()
            .find(|o| o.body_type == BodyType::GasGiant)
            .expect("one gas giant")
    };
    let a = first_giant("0101");
    let b = first_giant("2525");
    assert!(
        a.orbit_au() != b.orbit_au() || a.subtype != b.subtype || a.radius_km != b.radius_km,
        "{a:?} vs {b:?}"
    );
}

#[test]
fn ids_are_unique_within_a_system() {
    let config = GeneratorConfig::default();
    let request = GenerationRequest::new("0304", "A9A8A98-E", "F2 V").gas_giants(5).belts(2);
    let system = generate_system_with(&request, &config);
    let mut ids: Vec<_> = system.objects().iter().map(|o| o.id.clone()).collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn generated_ids_follow_the_naming_scheme() {
    let objects = generate_system("1910", "A867974-C", "G2 V", Some(1));
    for object in &objects {
        let index = index_of(&object.id);
        let expected = generate_id("1910", object.body_type, index, object.parent_id());
        assert_eq!(object.id, expected);
    }
}

/// The index is the second-to-last dash-separated field.
fn index_of(id: &str) -> usize {
    id.rsplit('-').nth(1).and_then(|s| s.parse().ok()).expect("index field")
}
