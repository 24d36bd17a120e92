use hvac_sizing_toolbox::config::{load_or_default, Config, ConfigError, UnitSystem};
use std::fs;

#[test]
fn default_config_round_trips() {
    let cfg = Config::default();
    let text = toml::to_string_pretty(&cfg).expect("serialize");
    let back = Config::from_toml_str(&text).expect("parse");
    assert_eq!(cfg, back);
}

#[test]
fn partial_config_fills_defaults() {
    let cfg = Config::from_toml_str(
        r#"
        unit_system = "IP"

        [water_heater]
        target_temp_f = 120.0
        "#,
    )
    .expect("parse");
    assert_eq!(cfg.unit_system, UnitSystem::IP);
    assert_eq!(cfg.water_heater.target_temp_f, 120.0);
    assert_eq!(cfg.water_heater.inlet_temp_f, 40.0);
    assert_eq!(cfg.condenser_water, Config::default().condenser_water);
}

#[test]
fn rejects_non_positive_efficiency() {
    let err = Config::from_toml_str(
        r#"
        [water_heater]
        thermal_efficiency = 0.0
        "#,
    )
    .expect_err("efficiency 0 must be rejected");
    assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
}

#[test]
fn rejects_inverted_wet_bulb_limits() {
    let err = Config::from_toml_str(
        r#"
        [condenser_water]
        min_design_wet_bulb_f = 82.0
        max_design_wet_bulb_f = 80.0
        "#,
    )
    .expect_err("inverted limits must be rejected");
    assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
}

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = std::env::temp_dir().join(format!("hvac_sizing_cfg_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("config.toml");
    let _ = fs::remove_file(&path);

    let cfg = load_or_default(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());

    let again = load_or_default(&path).expect("reload");
    assert_eq!(again, cfg);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn rejects_non_finite_policy_values() {
    for (section, key, value) in [
        ("water_heater", "inlet_temp_f", "nan"),
        ("booster", "temperature_rise_r", "nan"),
        ("chilled_water", "supply_temp_f", "inf"),
        ("hot_water", "reset_high_oat_f", "-inf"),
        ("condenser_water", "float_down_to_f", "nan"),
    ] {
        let text = format!("[{section}]\n{key} = {value}\n");
        let err = Config::from_toml_str(&text).expect_err("non-finite value must be rejected");
        assert!(matches!(err, ConfigError::Invalid(_)), "{section}.{key}: {err}");
    }
}
