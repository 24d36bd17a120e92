//! 복수기(냉각수) 루프 설계 온도 정책.
//!
//! ASHRAE 90.1 Appendix G3.1.3.11 기준:
//! 냉각수 공급온도는 85°F 또는 설계 습구온도 + 10°F 중 낮은 값, 설계 Range는 10°F.
//! 규칙은 화씨로 정의되어 있으나 입출력은 모두 SI(°C, K)이다.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::design_day::{select_design_wet_bulb, DesignDay, DesignWetBulbSource};
use crate::plant_loop::{require_loop_type, LoopSizing, LoopType, PlantLoopError};
use crate::units::{c_to_f, delta_r_to_k, f_to_c};

/// 냉각수 온도 정책 파라미터. 값은 모두 화씨 기준이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CondenserWaterPolicy {
    /// 시뮬레이션 엔진이 허용하는 설계 습구온도 하한(°F)
    pub min_design_wet_bulb_f: f64,
    /// 설계 습구온도 상한(°F)
    pub max_design_wet_bulb_f: f64,
    /// 설계일 정보가 없을 때 쓰는 CTI 정격 습구온도(°F)
    pub rating_wet_bulb_f: f64,
    /// 기준 Approach(°F)
    pub design_approach_r: f64,
    /// 설계 Range(°F)
    pub design_range_r: f64,
    /// 냉각수 공급온도 상한(°F)
    pub max_leaving_temp_f: f64,
    /// 기상 조건이 허용할 때 유지하는 최저 공급온도(°F). 설정점 매니저 최솟값.
    pub float_down_to_f: f64,
    pub min_loop_temp_f: f64,
    pub max_loop_temp_f: f64,
}

impl Default for CondenserWaterPolicy {
    fn default() -> Self {
        Self {
            min_design_wet_bulb_f: 68.0,
            max_design_wet_bulb_f: 80.0,
            rating_wet_bulb_f: 78.0,
            design_approach_r: 10.0,
            design_range_r: 10.0,
            max_leaving_temp_f: 85.0,
            float_down_to_f: 70.0,
            min_loop_temp_f: 34.0,
            max_loop_temp_f: 200.0,
        }
    }
}

impl CondenserWaterPolicy {
    /// 파라미터 일관성을 확인한다.
    pub fn validate(&self) -> Result<(), String> {
        let all = [
            self.min_design_wet_bulb_f,
            self.max_design_wet_bulb_f,
            self.rating_wet_bulb_f,
            self.design_approach_r,
            self.design_range_r,
            self.max_leaving_temp_f,
            self.float_down_to_f,
            self.min_loop_temp_f,
            self.max_loop_temp_f,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err("condenser_water: 유한하지 않은 값이 있습니다".into());
        }
        if self.min_design_wet_bulb_f > self.max_design_wet_bulb_f {
            return Err(format!(
                "condenser_water: 습구온도 하한 {}°F가 상한 {}°F보다 큽니다",
                self.min_design_wet_bulb_f, self.max_design_wet_bulb_f
            ));
        }
        if self.design_approach_r < 0.0 || self.design_range_r <= 0.0 {
            return Err("condenser_water: approach는 0 이상, range는 0보다 커야 합니다".into());
        }
        if self.min_loop_temp_f >= self.max_loop_temp_f {
            return Err("condenser_water: 루프 최저온도가 최고온도 이상입니다".into());
        }
        Ok(())
    }

    /// 설계 외기 습구온도(°C)로 냉각수 설계 온도를 계산한다.
    ///
    /// 범위를 벗어난 입력은 오류 없이 한계값으로 보정하고 경고를 남긴다.
    pub fn design(&self, outdoor_wet_bulb_c: f64) -> CondenserWaterDesign {
        let mut warnings = Vec::new();

        let mut wb_f = c_to_f(outdoor_wet_bulb_c);
        if !wb_f.is_finite() {
            let msg = format!(
                "설계 습구온도가 유효하지 않습니다({outdoor_wet_bulb_c}). CTI 정격 {:.0}°F를 사용합니다.",
                self.rating_wet_bulb_f
            );
            warn!("{msg}");
            warnings.push(msg);
            wb_f = self.rating_wet_bulb_f;
        }
        if wb_f > self.max_design_wet_bulb_f {
            let msg = format!(
                "설계 습구온도 {:.1}°F를 엔진 입력 상한 {:.0}°F로 낮춥니다.",
                wb_f, self.max_design_wet_bulb_f
            );
            warn!("{msg}");
            warnings.push(msg);
            wb_f = self.max_design_wet_bulb_f;
        } else if wb_f < self.min_design_wet_bulb_f {
            let msg = format!(
                "설계 습구온도 {:.1}°F를 엔진 입력 하한 {:.0}°F로 올립니다.",
                wb_f, self.min_design_wet_bulb_f
            );
            warn!("{msg}");
            warnings.push(msg);
            wb_f = self.min_design_wet_bulb_f;
        }

        let leaving_f = self.max_leaving_temp_f.min(wb_f + self.design_approach_r);
        // 상한이 걸리면 approach가 기준값보다 작아진다.
        let approach_r = leaving_f - wb_f;

        if leaving_f < self.float_down_to_f {
            let msg = format!(
                "냉각수 공급온도 {:.1}°F가 최저 설정 {:.1}°F보다 낮습니다. 최고 설정온도를 최저값에 맞춥니다.",
                leaving_f, self.float_down_to_f
            );
            warn!("{msg}");
            warnings.push(msg);
        }

        info!(
            "설계 습구 {:.1}°F, approach {:.1}°F, range {:.1}°F, 냉각수 공급 {:.1}°F",
            wb_f, approach_r, self.design_range_r, leaving_f
        );

        CondenserWaterDesign {
            design_wet_bulb_c: f_to_c(wb_f),
            leaving_temp_c: f_to_c(leaving_f),
            approach_k: delta_r_to_k(approach_r),
            range_k: delta_r_to_k(self.design_range_r),
            warnings,
        }
    }
}

/// 냉각수 설계 온도 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CondenserWaterDesign {
    /// 보정 후 설계 습구온도(°C)
    pub design_wet_bulb_c: f64,
    /// 냉각수 공급(냉각탑 출구)온도(°C)
    pub leaving_temp_c: f64,
    /// Approach = 공급온도 - 습구온도 (K)
    pub approach_k: f64,
    /// Range (K)
    pub range_k: f64,
    pub warnings: Vec<String>,
}

/// 기본 정책으로 냉각수 설계 온도를 계산한다.
pub fn compute_condenser_water_design(outdoor_wet_bulb_c: f64) -> CondenserWaterDesign {
    CondenserWaterPolicy::default().design(outdoor_wet_bulb_c)
}

/// 가변속 냉각탑 설계 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoolingTowerDesignInputs {
    pub design_inlet_air_wet_bulb_c: f64,
    pub design_approach_k: f64,
    pub design_range_k: f64,
}

/// 외기 습구온도 추종 설정점 매니저 값. 항상 `max_setpoint_c >= min_setpoint_c`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FollowWetBulbSetpoint {
    pub min_setpoint_c: f64,
    pub max_setpoint_c: f64,
    /// 습구온도에 더하는 오프셋(= approach, K)
    pub offset_k: f64,
}

/// 복수기 루프에 적용할 설계값 묶음.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CondenserLoopPlan {
    pub design: CondenserWaterDesign,
    pub sizing: LoopSizing,
    pub tower: CoolingTowerDesignInputs,
    pub setpoint: FollowWetBulbSetpoint,
    pub wet_bulb_source: DesignWetBulbSource,
    /// 설계 습구온도 선정 단계 진단. 온도 보정 경고는 `design.warnings`에 있다.
    pub warnings: Vec<String>,
}

/// 설계일 목록으로부터 복수기 루프 설계값을 만든다.
///
/// 복수기 루프가 아니면 호출 측 오용이므로 오류를 반환한다.
pub fn plan_condenser_loop(
    loop_type: LoopType,
    design_days: &[DesignDay],
    policy: &CondenserWaterPolicy,
) -> Result<CondenserLoopPlan, PlantLoopError> {
    require_loop_type(loop_type, LoopType::Condenser)?;
    let selected = select_design_wet_bulb(design_days, policy);
    Ok(build_plan(
        policy,
        selected.value_c,
        selected.source,
        selected.warnings,
    ))
}

/// 이미 알고 있는 설계 습구온도(°C)로 복수기 루프 설계값을 만든다.
pub fn plan_condenser_loop_for_wet_bulb(
    loop_type: LoopType,
    outdoor_wet_bulb_c: f64,
    policy: &CondenserWaterPolicy,
) -> Result<CondenserLoopPlan, PlantLoopError> {
    require_loop_type(loop_type, LoopType::Condenser)?;
    Ok(build_plan(
        policy,
        outdoor_wet_bulb_c,
        DesignWetBulbSource::Specified,
        Vec::new(),
    ))
}

fn build_plan(
    policy: &CondenserWaterPolicy,
    outdoor_wet_bulb_c: f64,
    source: DesignWetBulbSource,
    warnings: Vec<String>,
) -> CondenserLoopPlan {
    let design = policy.design(outdoor_wet_bulb_c);

    let sizing = LoopSizing {
        design_exit_temp_c: design.leaving_temp_c,
        design_delta_t_k: design.range_k,
        min_loop_temp_c: f_to_c(policy.min_loop_temp_f),
        max_loop_temp_c: Some(f_to_c(policy.max_loop_temp_f)),
    };

    // 엔진의 냉각탑 습구 입력 하한
    let tower_wb_floor_c = f_to_c(policy.min_design_wet_bulb_f);
    let tower = CoolingTowerDesignInputs {
        design_inlet_air_wet_bulb_c: design.design_wet_bulb_c.max(tower_wb_floor_c),
        design_approach_k: design.approach_k,
        design_range_k: design.range_k,
    };

    let min_setpoint_c = f_to_c(policy.float_down_to_f);
    let setpoint = FollowWetBulbSetpoint {
        min_setpoint_c,
        max_setpoint_c: design.leaving_temp_c.max(min_setpoint_c),
        offset_k: design.approach_k,
    };

    CondenserLoopPlan {
        design,
        sizing,
        tower,
        setpoint,
        wet_bulb_source: source,
        warnings,
    }
}
