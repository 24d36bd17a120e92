//! 온수(난방) 루프 설계 온도 정책.
//!
//! G3.1.3.3: 공급 180°F / 환수 130°F. G3.1.3.4: 외기 20°F 이하에서 180°F,
//! 50°F 이상에서 150°F로 공급온도 리셋.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::plant_loop::{require_loop_type, LoopSizing, LoopType, OutdoorAirReset, PlantLoopError};
use crate::units::{delta_r_to_k, f_to_c};

/// 온수 루프 정책 파라미터(°F).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotWaterPolicy {
    pub supply_temp_f: f64,
    pub delta_t_r: f64,
    pub min_loop_temp_f: f64,
    /// 외기가 높을 때 공급온도 하강폭(°F)
    pub reset_decrease_r: f64,
    pub reset_low_oat_f: f64,
    pub reset_high_oat_f: f64,
}

impl Default for HotWaterPolicy {
    fn default() -> Self {
        Self {
            supply_temp_f: 180.0,
            delta_t_r: 50.0,
            min_loop_temp_f: 50.0,
            reset_decrease_r: 30.0,
            reset_low_oat_f: 20.0,
            reset_high_oat_f: 50.0,
        }
    }
}

impl HotWaterPolicy {
    pub fn validate(&self) -> Result<(), String> {
        let all = [
            self.supply_temp_f,
            self.delta_t_r,
            self.min_loop_temp_f,
            self.reset_decrease_r,
            self.reset_low_oat_f,
            self.reset_high_oat_f,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err("hot_water: 유한하지 않은 값이 있습니다".into());
        }
        if self.delta_t_r <= 0.0 {
            return Err("hot_water: delta_t_r는 0보다 커야 합니다".into());
        }
        if self.reset_low_oat_f >= self.reset_high_oat_f {
            return Err("hot_water: 리셋 외기 하한이 상한 이상입니다".into());
        }
        if self.min_loop_temp_f >= self.supply_temp_f {
            return Err("hot_water: 루프 최저온도가 공급온도 이상입니다".into());
        }
        Ok(())
    }
}

/// 온수 루프 설계값.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotWaterPlan {
    pub sizing: LoopSizing,
    pub reset: OutdoorAirReset,
}

/// 온수 루프 설계값을 만든다. 난방 루프가 아니면 오류.
pub fn plan_hot_water_loop(
    loop_type: LoopType,
    policy: &HotWaterPolicy,
) -> Result<HotWaterPlan, PlantLoopError> {
    require_loop_type(loop_type, LoopType::Heating)?;

    let sizing = LoopSizing {
        design_exit_temp_c: f_to_c(policy.supply_temp_f),
        design_delta_t_k: delta_r_to_k(policy.delta_t_r),
        min_loop_temp_c: f_to_c(policy.min_loop_temp_f),
        max_loop_temp_c: None,
    };

    let at_low_f = policy.supply_temp_f;
    let at_high_f = at_low_f - policy.reset_decrease_r;
    info!(
        "온수 온도 리셋 {:.0}°F → {:.0}°F (외기 {:.0}°F ~ {:.0}°F)",
        at_low_f, at_high_f, policy.reset_low_oat_f, policy.reset_high_oat_f
    );

    Ok(HotWaterPlan {
        sizing,
        reset: OutdoorAirReset {
            setpoint_at_low_oat_c: f_to_c(at_low_f),
            low_oat_c: f_to_c(policy.reset_low_oat_f),
            setpoint_at_high_oat_c: f_to_c(at_high_f),
            high_oat_c: f_to_c(policy.reset_high_oat_f),
        },
    })
}
