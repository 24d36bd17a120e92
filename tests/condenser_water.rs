use approx::assert_abs_diff_eq;
use hvac_sizing_toolbox::{
    cooling::{
        compute_condenser_water_design, plan_condenser_loop, plan_condenser_loop_for_wet_bulb,
        CondenserWaterPolicy,
    },
    design_day::{DayType, DesignDay, DesignWetBulbSource, HumidityIndicatingType},
    plant_loop::{LoopType, PlantLoopError},
    units::{c_to_f, delta_k_to_r, f_to_c},
};

const TOL_F: f64 = 1e-9;

fn wb_day(name: &str, wet_bulb_f: f64) -> DesignDay {
    DesignDay {
        name: name.into(),
        day_type: DayType::SummerDesignDay,
        humidity_indicating_type: HumidityIndicatingType::Wetbulb,
        humidity_condition_at_max_dry_bulb: f_to_c(wet_bulb_f),
    }
}

#[test]
fn rating_wet_bulb_gives_85f_leaving() {
    let d = compute_condenser_water_design(f_to_c(78.0));
    assert_abs_diff_eq!(c_to_f(d.leaving_temp_c), 85.0, epsilon = TOL_F);
    assert_abs_diff_eq!(delta_k_to_r(d.approach_k), 7.0, epsilon = TOL_F);
    assert_abs_diff_eq!(delta_k_to_r(d.range_k), 10.0, epsilon = TOL_F);
    assert!(d.warnings.is_empty(), "{:?}", d.warnings);
}

#[test]
fn low_wet_bulb_is_raised_to_68f() {
    let d = compute_condenser_water_design(f_to_c(60.0));
    assert_abs_diff_eq!(c_to_f(d.design_wet_bulb_c), 68.0, epsilon = TOL_F);
    assert_abs_diff_eq!(c_to_f(d.leaving_temp_c), 78.0, epsilon = TOL_F);
    assert_abs_diff_eq!(delta_k_to_r(d.approach_k), 10.0, epsilon = TOL_F);
    assert_eq!(d.warnings.len(), 1);
}

#[test]
fn high_wet_bulb_matches_80f() {
    let at_80 = compute_condenser_water_design(f_to_c(80.0));
    let at_90 = compute_condenser_water_design(f_to_c(90.0));
    assert_abs_diff_eq!(at_90.leaving_temp_c, at_80.leaving_temp_c, epsilon = TOL_F);
    assert_abs_diff_eq!(at_90.approach_k, at_80.approach_k, epsilon = TOL_F);
    assert_abs_diff_eq!(at_90.design_wet_bulb_c, at_80.design_wet_bulb_c, epsilon = TOL_F);
    assert_eq!(at_90.warnings.len(), 1);
}

#[test]
fn leaving_and_approach_hold_across_range() {
    let mut wb_f = 68.0;
    while wb_f <= 80.0 {
        let d = compute_condenser_water_design(f_to_c(wb_f));
        let leaving_f = c_to_f(d.leaving_temp_c);
        assert!(
            (leaving_f - f64::min(85.0, wb_f + 10.0)).abs() < 1e-6,
            "wb={wb_f} leaving={leaving_f}"
        );
        let approach_f = delta_k_to_r(d.approach_k);
        assert!((approach_f - (leaving_f - wb_f)).abs() < 1e-6, "wb={wb_f}");
        wb_f += 0.5;
    }
}

#[test]
fn nan_wet_bulb_uses_rating_condition() {
    let d = compute_condenser_water_design(f64::NAN);
    assert_abs_diff_eq!(c_to_f(d.design_wet_bulb_c), 78.0, epsilon = TOL_F);
    assert_abs_diff_eq!(c_to_f(d.leaving_temp_c), 85.0, epsilon = TOL_F);
    assert!(!d.warnings.is_empty());
}

#[test]
fn design_days_pick_worst_wet_bulb_day() {
    let days = vec![
        wb_day("Chicago Ann Clg .4% Condns WB=>MDB", 76.0),
        wb_day("Chicago Ann Clg 1% Condns WB=>MDB", 74.5),
        // 건구 기준 설계일은 무시
        wb_day("Chicago Ann Clg .4% Condns DB=>MWB", 79.5),
        DesignDay {
            name: "Chicago Ann Htg 99.6% Condns DB".into(),
            day_type: DayType::WinterDesignDay,
            humidity_indicating_type: HumidityIndicatingType::Wetbulb,
            humidity_condition_at_max_dry_bulb: f_to_c(0.0),
        },
    ];
    let plan = plan_condenser_loop(LoopType::Condenser, &days, &CondenserWaterPolicy::default())
        .expect("condenser loop");
    assert_eq!(plan.wet_bulb_source, DesignWetBulbSource::DesignDays);
    assert_abs_diff_eq!(c_to_f(plan.design.design_wet_bulb_c), 76.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c_to_f(plan.design.leaving_temp_c), 85.0, epsilon = 1e-9);
    assert_abs_diff_eq!(delta_k_to_r(plan.tower.design_approach_k), 9.0, epsilon = 1e-9);
}

#[test]
fn missing_wet_bulb_days_fall_back_to_78f() {
    let days = vec![DesignDay {
        name: "Site WB=>MDB".into(),
        day_type: DayType::SummerDesignDay,
        humidity_indicating_type: HumidityIndicatingType::Dewpoint,
        humidity_condition_at_max_dry_bulb: 20.0,
    }];
    let plan = plan_condenser_loop(LoopType::Condenser, &days, &CondenserWaterPolicy::default())
        .expect("condenser loop");
    assert_eq!(plan.wet_bulb_source, DesignWetBulbSource::RatingCondition);
    assert_abs_diff_eq!(c_to_f(plan.design.design_wet_bulb_c), 78.0, epsilon = 1e-9);
    // 습도 지정 방식 경고 + 정격 조건 대체 경고
    assert_eq!(plan.warnings.len(), 2, "{:?}", plan.warnings);
}

#[test]
fn non_finite_wet_bulb_day_is_skipped_with_warning() {
    let days = vec![
        wb_day("Site .4% Condns WB=>MDB", 74.0),
        DesignDay {
            humidity_condition_at_max_dry_bulb: f64::NAN,
            ..wb_day("Site 1% Condns WB=>MDB", 0.0)
        },
    ];
    let plan = plan_condenser_loop(LoopType::Condenser, &days, &CondenserWaterPolicy::default())
        .expect("condenser loop");
    assert_eq!(plan.wet_bulb_source, DesignWetBulbSource::DesignDays);
    assert_abs_diff_eq!(c_to_f(plan.design.design_wet_bulb_c), 74.0, epsilon = 1e-9);
    assert_eq!(plan.warnings.len(), 1, "{:?}", plan.warnings);
    assert!(plan.warnings[0].starts_with("Site 1% Condns WB=>MDB"));

    let only_invalid = [DesignDay {
        humidity_condition_at_max_dry_bulb: f64::INFINITY,
        ..wb_day("Site WB=>MDB", 0.0)
    }];
    let plan = plan_condenser_loop(LoopType::Condenser, &only_invalid, &CondenserWaterPolicy::default())
        .expect("condenser loop");
    assert_eq!(plan.wet_bulb_source, DesignWetBulbSource::RatingCondition);
    // 값 제외 경고 + 정격 조건 대체 경고
    assert_eq!(plan.warnings.len(), 2, "{:?}", plan.warnings);
}

#[test]
fn loop_sizing_uses_leaving_and_range() {
    let plan = plan_condenser_loop_for_wet_bulb(
        LoopType::Condenser,
        f_to_c(72.0),
        &CondenserWaterPolicy::default(),
    )
    .expect("condenser loop");
    assert_eq!(plan.wet_bulb_source, DesignWetBulbSource::Specified);
    assert_abs_diff_eq!(c_to_f(plan.sizing.design_exit_temp_c), 82.0, epsilon = 1e-9);
    assert_abs_diff_eq!(delta_k_to_r(plan.sizing.design_delta_t_k), 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c_to_f(plan.sizing.min_loop_temp_c), 34.0, epsilon = 1e-9);
    let max_c = plan.sizing.max_loop_temp_c.expect("max loop temp");
    assert_abs_diff_eq!(c_to_f(max_c), 200.0, epsilon = 1e-9);

    assert_abs_diff_eq!(c_to_f(plan.setpoint.min_setpoint_c), 70.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c_to_f(plan.setpoint.max_setpoint_c), 82.0, epsilon = 1e-9);
    assert_abs_diff_eq!(plan.setpoint.offset_k, plan.design.approach_k, epsilon = 1e-12);
}

#[test]
fn tower_wet_bulb_never_below_68f() {
    let plan = plan_condenser_loop_for_wet_bulb(
        LoopType::Condenser,
        f_to_c(50.0),
        &CondenserWaterPolicy::default(),
    )
    .expect("condenser loop");
    assert_abs_diff_eq!(
        c_to_f(plan.tower.design_inlet_air_wet_bulb_c),
        68.0,
        epsilon = 1e-9
    );
}

#[test]
fn setpoint_max_never_below_min() {
    // 여름 습구가 낮아 공급온도가 최저 설정 아래로 내려가는 정책
    let policy = CondenserWaterPolicy {
        min_design_wet_bulb_f: 50.0,
        ..CondenserWaterPolicy::default()
    };
    for wb_f in [50.0, 55.0, 59.0, 60.0, 65.0, 75.0] {
        let plan = plan_condenser_loop_for_wet_bulb(LoopType::Condenser, f_to_c(wb_f), &policy)
            .expect("condenser loop");
        assert!(
            plan.setpoint.max_setpoint_c >= plan.setpoint.min_setpoint_c,
            "wb={wb_f}"
        );
    }

    let low = plan_condenser_loop_for_wet_bulb(LoopType::Condenser, f_to_c(55.0), &policy)
        .expect("condenser loop");
    assert_abs_diff_eq!(c_to_f(low.design.leaving_temp_c), 65.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c_to_f(low.setpoint.max_setpoint_c), 70.0, epsilon = 1e-9);
    assert_eq!(low.design.warnings.len(), 1, "{:?}", low.design.warnings);
}

#[test]
fn clamp_warning_is_reported_once() {
    let plan = plan_condenser_loop_for_wet_bulb(
        LoopType::Condenser,
        f_to_c(90.0),
        &CondenserWaterPolicy::default(),
    )
    .expect("condenser loop");
    assert_eq!(plan.design.warnings.len(), 1);
    assert!(plan.warnings.is_empty(), "{:?}", plan.warnings);

    let text = toml::to_string_pretty(&plan).expect("serialize");
    assert_eq!(text.matches(&plan.design.warnings[0]).count(), 1, "{text}");
}

#[test]
fn condenser_policy_rejects_cooling_loop() {
    let err = plan_condenser_loop(LoopType::Cooling, &[], &CondenserWaterPolicy::default())
        .expect_err("cooling loop must be rejected");
    assert_eq!(
        err,
        PlantLoopError::WrongLoopType {
            expected: LoopType::Condenser,
            found: LoopType::Cooling,
        }
    );
}
