use star_system_generator::config::{ConfigError, GeneratorConfig, load_generator_config};
use star_system_generator::generator::{BodyType, GenerationRequest, generate_system_with};

#[test]
fn shipped_default_config_matches_builtin_defaults() {
    let config = load_generator_config("configs/generator/default.toml").expect("default config");
    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn shipped_sparse_config_loads() {
    let config = load_generator_config("configs/generator/sparse.yaml").expect("sparse config");
    assert_eq!(config.max_world_moons, 0);
    assert_eq!(config.gas_giant_spacing, 2.2);
    assert_eq!(config.frost_line_factor, GeneratorConfig::default().frost_line_factor);
}

#[test]
fn wider_spacing_pushes_outer_giants_out() {
    let request = GenerationRequest::new("1910", "A867974-C", "G2 V").gas_giants(4);
    let stock = generate_system_with(&request, &GeneratorConfig::default());
    let sparse = load_generator_config("configs/generator/sparse.yaml").unwrap();
    let wide = generate_system_with(&request, &sparse);

    let last_giant = |system: &star_system_generator::StarSystem| {
        system
            .planets()
            .filter(|o| o.body_type == BodyType::GasGiant)
            .filter_map(|o| o.orbit_au())
            .last()
            .unwrap()
    };
    assert!(last_giant(&wide) > last_giant(&stock));
    assert!(wide.moons().all(|m| m.parent_id() != Some(wide.mainworld().unwrap().id.as_str())));
}

#[test]
fn invalid_config_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "frost_line_factor = 0.5\n").unwrap();
    assert!(matches!(load_generator_config(&path), Err(ConfigError::Invalid(_))));

    std::fs::write(&path, "frost_line_factor = \"far\"\n").unwrap();
    assert!(matches!(load_generator_config(&path), Err(ConfigError::Toml(_))));
}
