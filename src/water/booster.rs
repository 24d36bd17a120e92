//! 주방 식기세척용 부스터 온수기 산정.
//!
//! 주 급탕 루프 공급온도에서 40°F를 더 올린다. 전기식, 6 gal 고정,
//! 식기세척 피크는 60%로 본다.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::water_heater::{heating_capacity_btu_h, total_adjusted_flow_gal_per_h, FixtureDemandProfile};
use crate::units::{btu_h_to_w, c_to_f, f_to_c, gal_to_m3};

/// 부스터 정책 파라미터.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoosterPolicy {
    /// 온도 상승폭(°F)
    pub temperature_rise_r: f64,
    pub thermal_efficiency: f64,
    pub peak_flow_fraction: f64,
    pub tank_volume_gal: f64,
    pub water_density_lb_per_gal: f64,
    pub water_specific_heat_btu_per_lb_f: f64,
}

impl Default for BoosterPolicy {
    fn default() -> Self {
        Self {
            temperature_rise_r: 40.0,
            thermal_efficiency: 1.0,
            peak_flow_fraction: 0.6,
            tank_volume_gal: 6.0,
            water_density_lb_per_gal: 8.4,
            water_specific_heat_btu_per_lb_f: 1.0,
        }
    }
}

impl BoosterPolicy {
    pub fn validate(&self) -> Result<(), String> {
        let all = [
            self.temperature_rise_r,
            self.thermal_efficiency,
            self.peak_flow_fraction,
            self.tank_volume_gal,
            self.water_density_lb_per_gal,
            self.water_specific_heat_btu_per_lb_f,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err("booster: 유한하지 않은 값이 있습니다".into());
        }
        if self.water_density_lb_per_gal <= 0.0 || self.water_specific_heat_btu_per_lb_f <= 0.0 {
            return Err("booster: 물 물성값은 0보다 커야 합니다".into());
        }
        if self.thermal_efficiency.is_nan() || self.thermal_efficiency <= 0.0 {
            return Err("booster: thermal_efficiency는 0보다 커야 합니다".into());
        }
        if self.temperature_rise_r <= 0.0 || self.tank_volume_gal <= 0.0 {
            return Err("booster: 온도 상승폭과 저탕량은 0보다 커야 합니다".into());
        }
        if self.peak_flow_fraction < 0.0 {
            return Err("booster: peak_flow_fraction은 음수일 수 없습니다".into());
        }
        Ok(())
    }
}

/// 부스터 산정 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoosterHeaterSizing {
    pub capacity_w: f64,
    pub volume_m3: f64,
    /// 부스터 입구(주 루프 공급)온도(°C)
    pub inlet_temp_c: f64,
    /// 부스터 출구 온도(°C)
    pub outlet_temp_c: f64,
    pub warnings: Vec<String>,
}

/// 주 루프 공급온도(°C)를 입구로 하는 부스터 온수기를 산정한다.
pub fn size_booster_water_heater(
    fixtures: &[FixtureDemandProfile],
    supply_temp_c: f64,
    policy: &BoosterPolicy,
) -> BoosterHeaterSizing {
    let mut warnings = Vec::new();
    let flow_gph = total_adjusted_flow_gal_per_h(fixtures, &mut warnings);

    let inlet_f = c_to_f(supply_temp_c);
    let outlet_f = inlet_f + policy.temperature_rise_r;
    let efficiency = if policy.thermal_efficiency > 0.0 {
        policy.thermal_efficiency
    } else {
        let msg = format!(
            "부스터 열효율 {}이(가) 유효하지 않아 1.0을 사용합니다.",
            policy.thermal_efficiency
        );
        warn!("{msg}");
        warnings.push(msg);
        1.0
    };

    let capacity_btu_h = heating_capacity_btu_h(
        flow_gph,
        policy.peak_flow_fraction,
        policy.temperature_rise_r,
        efficiency,
        policy.water_density_lb_per_gal,
        policy.water_specific_heat_btu_per_lb_f,
    );
    info!(
        "부스터 {:.0}°F → {:.0}°F, 용량 {:.0} Btu/h",
        inlet_f, outlet_f, capacity_btu_h
    );

    BoosterHeaterSizing {
        capacity_w: btu_h_to_w(capacity_btu_h),
        volume_m3: gal_to_m3(policy.tank_volume_gal),
        inlet_temp_c: supply_temp_c,
        outlet_temp_c: f_to_c(outlet_f),
        warnings,
    }
}
