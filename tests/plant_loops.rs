use approx::assert_abs_diff_eq;
use hvac_sizing_toolbox::{
    cooling::{plan_chilled_water_loop, ChilledWaterPolicy},
    heating::{plan_hot_water_loop, HotWaterPolicy},
    plant_loop::{LoopType, OutdoorAirReset, PlantLoopError},
    units::{c_to_f, delta_k_to_r, f_to_c},
};

#[test]
fn chilled_water_design_temperatures() {
    let plan = plan_chilled_water_loop(LoopType::Cooling, &ChilledWaterPolicy::default())
        .expect("chilled water");
    assert_abs_diff_eq!(c_to_f(plan.sizing.design_exit_temp_c), 44.0, epsilon = 1e-9);
    assert_abs_diff_eq!(delta_k_to_r(plan.sizing.design_delta_t_k), 12.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c_to_f(plan.sizing.min_loop_temp_c), 34.0, epsilon = 1e-9);
    assert_abs_diff_eq!(
        c_to_f(plan.reference_entering_condenser_temp_c),
        85.0,
        epsilon = 1e-9
    );
}

#[test]
fn chilled_water_reset_follows_oat() {
    let plan = plan_chilled_water_loop(LoopType::Cooling, &ChilledWaterPolicy::default())
        .expect("chilled water");
    let at = |oat_f: f64| c_to_f(plan.reset.setpoint_at(f_to_c(oat_f)));
    assert_abs_diff_eq!(at(90.0), 44.0, epsilon = 1e-9);
    assert_abs_diff_eq!(at(80.0), 44.0, epsilon = 1e-9);
    assert_abs_diff_eq!(at(70.0), 49.0, epsilon = 1e-9);
    assert_abs_diff_eq!(at(60.0), 54.0, epsilon = 1e-9);
    assert_abs_diff_eq!(at(50.0), 54.0, epsilon = 1e-9);
}

#[test]
fn hot_water_design_and_reset() {
    let plan =
        plan_hot_water_loop(LoopType::Heating, &HotWaterPolicy::default()).expect("hot water");
    assert_abs_diff_eq!(c_to_f(plan.sizing.design_exit_temp_c), 180.0, epsilon = 1e-9);
    assert_abs_diff_eq!(delta_k_to_r(plan.sizing.design_delta_t_k), 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c_to_f(plan.sizing.min_loop_temp_c), 50.0, epsilon = 1e-9);
    assert!(plan.sizing.max_loop_temp_c.is_none());

    let at = |oat_f: f64| c_to_f(plan.reset.setpoint_at(f_to_c(oat_f)));
    assert_abs_diff_eq!(at(0.0), 180.0, epsilon = 1e-9);
    assert_abs_diff_eq!(at(35.0), 165.0, epsilon = 1e-9);
    assert_abs_diff_eq!(at(60.0), 150.0, epsilon = 1e-9);
}

#[test]
fn loop_policies_check_loop_type() {
    assert_eq!(
        plan_chilled_water_loop(LoopType::Heating, &ChilledWaterPolicy::default()),
        Err(PlantLoopError::WrongLoopType {
            expected: LoopType::Cooling,
            found: LoopType::Heating,
        })
    );
    assert!(plan_hot_water_loop(LoopType::Condenser, &HotWaterPolicy::default()).is_err());
}

#[test]
fn degenerate_reset_span_returns_high_setpoint() {
    let reset = OutdoorAirReset {
        setpoint_at_low_oat_c: 10.0,
        low_oat_c: 20.0,
        setpoint_at_high_oat_c: 5.0,
        high_oat_c: 20.0,
    };
    assert_eq!(reset.setpoint_at(19.0), 10.0);
    assert_eq!(reset.setpoint_at(21.0), 5.0);
}
