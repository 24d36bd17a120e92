//! 냉수 루프 설계 온도 정책.
//!
//! G3.1.3.8: 공급 44°F / 환수 56°F. G3.1.3.9: 외기 80°F 이상에서 44°F,
//! 60°F 이하에서 54°F로 공급온도 리셋.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::plant_loop::{require_loop_type, LoopSizing, LoopType, OutdoorAirReset, PlantLoopError};
use crate::units::{delta_r_to_k, f_to_c};

/// 냉수 루프 정책 파라미터(°F).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChilledWaterPolicy {
    pub supply_temp_f: f64,
    pub delta_t_r: f64,
    pub min_loop_temp_f: f64,
    pub max_loop_temp_f: f64,
    /// 칠러 정격 냉각수 입구온도(°F)
    pub reference_entering_condenser_temp_f: f64,
    /// 외기가 낮을 때 공급온도 상승폭(°F)
    pub reset_increase_r: f64,
    pub reset_low_oat_f: f64,
    pub reset_high_oat_f: f64,
}

impl Default for ChilledWaterPolicy {
    fn default() -> Self {
        Self {
            supply_temp_f: 44.0,
            delta_t_r: 12.0,
            min_loop_temp_f: 34.0,
            max_loop_temp_f: 200.0,
            reference_entering_condenser_temp_f: 85.0,
            reset_increase_r: 10.0,
            reset_low_oat_f: 60.0,
            reset_high_oat_f: 80.0,
        }
    }
}

impl ChilledWaterPolicy {
    pub fn validate(&self) -> Result<(), String> {
        let all = [
            self.supply_temp_f,
            self.delta_t_r,
            self.min_loop_temp_f,
            self.max_loop_temp_f,
            self.reference_entering_condenser_temp_f,
            self.reset_increase_r,
            self.reset_low_oat_f,
            self.reset_high_oat_f,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err("chilled_water: 유한하지 않은 값이 있습니다".into());
        }
        if self.delta_t_r <= 0.0 {
            return Err("chilled_water: delta_t_r는 0보다 커야 합니다".into());
        }
        if self.reset_low_oat_f >= self.reset_high_oat_f {
            return Err("chilled_water: 리셋 외기 하한이 상한 이상입니다".into());
        }
        if self.min_loop_temp_f >= self.max_loop_temp_f {
            return Err("chilled_water: 루프 최저온도가 최고온도 이상입니다".into());
        }
        Ok(())
    }
}

/// 냉수 루프 설계값.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChilledWaterPlan {
    pub sizing: LoopSizing,
    pub reference_entering_condenser_temp_c: f64,
    pub reset: OutdoorAirReset,
}

/// 냉수 루프 설계값을 만든다. 냉방 루프가 아니면 오류.
pub fn plan_chilled_water_loop(
    loop_type: LoopType,
    policy: &ChilledWaterPolicy,
) -> Result<ChilledWaterPlan, PlantLoopError> {
    require_loop_type(loop_type, LoopType::Cooling)?;

    let sizing = LoopSizing {
        design_exit_temp_c: f_to_c(policy.supply_temp_f),
        design_delta_t_k: delta_r_to_k(policy.delta_t_r),
        min_loop_temp_c: f_to_c(policy.min_loop_temp_f),
        max_loop_temp_c: Some(f_to_c(policy.max_loop_temp_f)),
    };

    // 외기가 더울 때 설계값, 선선할 때 상승
    let at_high_f = policy.supply_temp_f;
    let at_low_f = at_high_f + policy.reset_increase_r;
    let reset = OutdoorAirReset {
        setpoint_at_low_oat_c: f_to_c(at_low_f),
        low_oat_c: f_to_c(policy.reset_low_oat_f),
        setpoint_at_high_oat_c: f_to_c(at_high_f),
        high_oat_c: f_to_c(policy.reset_high_oat_f),
    };
    info!(
        "냉수 온도 리셋 {:.0}°F → {:.0}°F (외기 {:.0}°F ~ {:.0}°F)",
        at_high_f, at_low_f, policy.reset_high_oat_f, policy.reset_low_oat_f
    );

    Ok(ChilledWaterPlan {
        sizing,
        reference_entering_condenser_temp_c: f_to_c(policy.reference_entering_condenser_temp_f),
        reset,
    })
}
