use star_system_generator::calendar::{CampaignDate, parse_date};
use star_system_generator::generator::{GenerationRequest, generate_system_with};
use star_system_generator::orbits::{
    OrbitQuery, OrbitalSystem, SystemSnapshot, calculate_orbital_position,
    calculate_system_orbits, get_initial_bearing, orbital_period_days,
};

fn at(date: &str) -> CampaignDate {
    parse_date(date).expect("valid date")
}

#[test]
fn epoch_position_is_initial_bearing() {
    let epoch = at("1100-001 00:00");
    let bearing = calculate_orbital_position(&OrbitQuery {
        system_name: "Regina",
        planet_index: 0,
        orbit_au: 1.0,
        current_date: &epoch,
    });
    assert_eq!(bearing, get_initial_bearing("Regina", 0));
    assert_eq!(bearing, 40.0);
}

#[test]
fn half_period_moves_half_a_turn() {
    // 4 AU -> 8 years; four years on the body has swept 180 degrees.
    let date = at("1104-001");
    let query = OrbitQuery {
        system_name: "Regina",
        planet_index: 3,
        orbit_au: 4.0,
        current_date: &date,
    };
    let start = get_initial_bearing("Regina", 3);
    let now = calculate_orbital_position(&query);
    let swept = (now - start).rem_euclid(360.0);
    assert!((swept - 180.0).abs() < 1e-9, "swept {swept}");
}

#[test]
fn bearings_stay_normalised_over_centuries() {
    let snapshot: SystemSnapshot = serde_json::from_str(
        r#"{"name":"Efate","planets":[{"orbitAU":0.05},{"orbitAU":1.0},{"orbitAU":39.5}]}"#,
    )
    .unwrap();
    for year in (900..1400).step_by(37) {
        for day in [1, 120, 365] {
            let date = CampaignDate::new(year, day, 13, 7).unwrap();
            for bearing in calculate_system_orbits(Some(&snapshot), &date).values() {
                assert!((0.0..360.0).contains(bearing), "{date}: {bearing}");
            }
        }
    }
}

#[test]
fn kepler_period_scaling() {
    assert_eq!(orbital_period_days(1.0), 365.0);
    let ratio = orbital_period_days(5.2 * 8.0) / orbital_period_days(5.2);
    assert!((ratio - 8f64.powf(1.5)).abs() < 1e-9);
    assert_eq!(orbital_period_days(0.0), 365.0);
}

#[test]
fn generated_system_feeds_the_orbit_map() {
    let request = GenerationRequest::new("1910", "A867974-C", "G2 V").gas_giants(3);
    let system = generate_system_with(&request, &Default::default()).named("Regina");
    let date = at("1105-123 12:00");
    let map = calculate_system_orbits(Some(&system), &date);

    let planets: Vec<_> = system.planets().collect();
    assert_eq!(map.len(), planets.len());
    assert_eq!(system.planet_orbits_au().unwrap().len(), planets.len());
    for (index, planet) in planets.iter().enumerate() {
        let expected = calculate_orbital_position(&OrbitQuery {
            system_name: "Regina",
            planet_index: index,
            orbit_au: planet.orbit_au().unwrap(),
            current_date: &date,
        });
        assert_eq!(map[&index], expected);
    }
}

#[test]
fn missing_system_gives_empty_map() {
    let map = calculate_system_orbits::<SystemSnapshot>(None, &CampaignDate::epoch());
    assert!(map.is_empty());
}
