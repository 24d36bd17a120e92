//! 급탕 저탕식 온수기 용량/저탕량 산정.
//!
//! PNNL Prototype Model Enhancements(2014) A.1.4 기준:
//! 용량[Btu/h] = 피크분율 × Σ(조정 피크유량[gal/h]) × 8.4 lb/gal × 1.0 Btu/lb·°F × ΔT / 효율,
//! 저탕량은 1 gal / (kBtu/h), 최소 40 gal.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::schedule::Schedule;
use crate::units::{btu_h_to_w, convert_volume_flow, gal_to_m3, m3_to_gal, w_to_btu_h, VolumeFlowUnit};

/// 급탕 기구 하나의 수요 프로파일.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixtureDemandProfile {
    /// 정격 피크 유량(m³/s)
    pub peak_flow_rate_m3_per_s: f64,
    /// 사용 스케줄의 연간 최댓값(0~1)
    pub schedule_max_fraction: f64,
}

impl FixtureDemandProfile {
    pub fn new(peak_flow_rate_m3_per_s: f64, schedule_max_fraction: f64) -> Self {
        Self {
            peak_flow_rate_m3_per_s,
            schedule_max_fraction,
        }
    }

    /// 스케줄에서 최대 분율을 읽어 프로파일을 만든다.
    /// 스케줄 정보가 없거나 해석할 수 없으면 1.0을 가정하고 `warnings`에 남긴다.
    pub fn from_schedule(
        peak_flow_rate_m3_per_s: f64,
        schedule: Option<&Schedule>,
        warnings: &mut Vec<String>,
    ) -> Self {
        let fraction = schedule_max_fraction(schedule).unwrap_or_else(|msg| {
            warn!("{msg}");
            warnings.push(msg);
            1.0
        });
        Self::new(peak_flow_rate_m3_per_s, fraction)
    }

    /// 조정 피크 유량(m³/s) = 피크 유량 × 스케줄 최대 분율.
    pub fn adjusted_peak_flow_m3_per_s(&self) -> f64 {
        self.peak_flow_rate_m3_per_s * self.schedule_max_fraction
    }
}

/// 스케줄의 최대 분율. 구할 수 없으면 진단 메시지를 `Err`로 돌려준다.
pub fn schedule_max_fraction(schedule: Option<&Schedule>) -> Result<f64, String> {
    match schedule {
        None => Err("사용 스케줄이 없어 최대 분율 1.0을 가정합니다.".into()),
        Some(sch) => sch.max_value().ok_or_else(|| {
            format!(
                "{} 스케줄에서 최댓값을 구할 수 없어 최대 분율 1.0을 가정합니다.",
                sch.kind_name()
            )
        }),
    }
}

/// 온수기 산정 정책 파라미터.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterHeaterPolicy {
    /// 급수 온도(°F)
    pub inlet_temp_f: f64,
    /// 저탕 목표 온도(°F)
    pub target_temp_f: f64,
    pub thermal_efficiency: f64,
    pub peak_flow_fraction: f64,
    /// 용량 1 kBtu/h당 저탕량(gal)
    pub storage_gal_per_kbtu_h: f64,
    /// 최소 저탕량(gal)
    pub min_volume_gal: f64,
    pub water_density_lb_per_gal: f64,
    pub water_specific_heat_btu_per_lb_f: f64,
}

impl Default for WaterHeaterPolicy {
    fn default() -> Self {
        Self {
            inlet_temp_f: 40.0,
            target_temp_f: 140.0,
            thermal_efficiency: 0.8,
            peak_flow_fraction: 1.0,
            storage_gal_per_kbtu_h: 1.0,
            min_volume_gal: 40.0,
            water_density_lb_per_gal: 8.4,
            water_specific_heat_btu_per_lb_f: 1.0,
        }
    }
}

impl WaterHeaterPolicy {
    pub fn validate(&self) -> Result<(), String> {
        let all = [
            self.inlet_temp_f,
            self.target_temp_f,
            self.thermal_efficiency,
            self.peak_flow_fraction,
            self.storage_gal_per_kbtu_h,
            self.min_volume_gal,
            self.water_density_lb_per_gal,
            self.water_specific_heat_btu_per_lb_f,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err("water_heater: 유한하지 않은 값이 있습니다".into());
        }
        if self.thermal_efficiency.is_nan() || self.thermal_efficiency <= 0.0 {
            return Err("water_heater: thermal_efficiency는 0보다 커야 합니다".into());
        }
        if self.target_temp_f <= self.inlet_temp_f {
            return Err("water_heater: 목표 온도가 급수 온도보다 높아야 합니다".into());
        }
        if self.peak_flow_fraction < 0.0
            || self.storage_gal_per_kbtu_h < 0.0
            || self.min_volume_gal < 0.0
        {
            return Err("water_heater: 분율/저탕 비율/최소 저탕량은 음수일 수 없습니다".into());
        }
        if self.water_density_lb_per_gal <= 0.0 || self.water_specific_heat_btu_per_lb_f <= 0.0 {
            return Err("water_heater: 물 물성값은 0보다 커야 합니다".into());
        }
        Ok(())
    }
}

/// 온수기 산정 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterHeaterSizing {
    /// 가열 용량(W)
    pub capacity_w: f64,
    /// 저탕량(m³). 최소 저탕량 이상.
    pub volume_m3: f64,
    /// 조정 피크 유량 합계(m³/s)
    pub total_adjusted_flow_m3_per_s: f64,
    pub warnings: Vec<String>,
}

impl WaterHeaterSizing {
    pub fn capacity_btu_per_h(&self) -> f64 {
        w_to_btu_h(self.capacity_w)
    }

    pub fn volume_gal(&self) -> f64 {
        m3_to_gal(self.volume_m3)
    }
}

/// 조정 피크 유량 합계(gal/h). 음수/비유한 값은 0으로 취급하고 경고를 남긴다.
pub(crate) fn total_adjusted_flow_gal_per_h(
    fixtures: &[FixtureDemandProfile],
    warnings: &mut Vec<String>,
) -> f64 {
    fixtures
        .iter()
        .enumerate()
        .map(|(i, f)| {
            let flow = sanitize(f.peak_flow_rate_m3_per_s, i, "피크 유량", warnings);
            let fraction = sanitize(f.schedule_max_fraction, i, "스케줄 분율", warnings);
            convert_volume_flow(
                flow * fraction,
                VolumeFlowUnit::CubicMeterPerSecond,
                VolumeFlowUnit::GallonPerHour,
            )
        })
        .sum()
}

fn sanitize(value: f64, index: usize, what: &str, warnings: &mut Vec<String>) -> f64 {
    if value.is_finite() && value >= 0.0 {
        return value;
    }
    let msg = format!("기구 #{index}의 {what} 값 {value}이(가) 유효하지 않아 0으로 취급합니다.");
    warn!("{msg}");
    warnings.push(msg);
    0.0
}

/// 유량(gal/h)과 온도 상승(°F)으로부터 가열 용량(Btu/h).
pub(crate) fn heating_capacity_btu_h(
    flow_gal_per_h: f64,
    peak_flow_fraction: f64,
    delta_t_f: f64,
    thermal_efficiency: f64,
    density_lb_per_gal: f64,
    specific_heat_btu_per_lb_f: f64,
) -> f64 {
    peak_flow_fraction * flow_gal_per_h * density_lb_per_gal * specific_heat_btu_per_lb_f
        * delta_t_f
        / thermal_efficiency
}

/// 급탕 기구 목록으로 온수기 용량과 저탕량을 산정한다.
///
/// 기구가 없으면 용량 0, 저탕량은 최소값이다. 어떤 경우에도 실패하지 않는다.
pub fn compute_water_heater_sizing(
    fixtures: &[FixtureDemandProfile],
    policy: &WaterHeaterPolicy,
) -> WaterHeaterSizing {
    let mut warnings = Vec::new();
    let flow_gph = total_adjusted_flow_gal_per_h(fixtures, &mut warnings);

    let efficiency = if policy.thermal_efficiency > 0.0 {
        policy.thermal_efficiency
    } else {
        let msg = format!(
            "열효율 {}이(가) 유효하지 않아 1.0을 사용합니다.",
            policy.thermal_efficiency
        );
        warn!("{msg}");
        warnings.push(msg);
        1.0
    };

    let delta_t_f = policy.target_temp_f - policy.inlet_temp_f;
    let capacity_btu_h = heating_capacity_btu_h(
        flow_gph,
        policy.peak_flow_fraction,
        delta_t_f,
        efficiency,
        policy.water_density_lb_per_gal,
        policy.water_specific_heat_btu_per_lb_f,
    );
    info!(
        "용량 {:.0} Btu/h = {} 피크분율 × {:.1} gal/h × {} lb/gal × {} Btu/lb°F × ({:.0} - {:.0})°F / {} 효율",
        capacity_btu_h,
        policy.peak_flow_fraction,
        flow_gph,
        policy.water_density_lb_per_gal,
        policy.water_specific_heat_btu_per_lb_f,
        policy.target_temp_f,
        policy.inlet_temp_f,
        efficiency
    );

    let computed_gal = capacity_btu_h / 1000.0 * policy.storage_gal_per_kbtu_h;
    let volume_gal = computed_gal.max(policy.min_volume_gal);

    WaterHeaterSizing {
        capacity_w: btu_h_to_w(capacity_btu_h),
        volume_m3: gal_to_m3(volume_gal),
        total_adjusted_flow_m3_per_s: convert_volume_flow(
            flow_gph,
            VolumeFlowUnit::GallonPerHour,
            VolumeFlowUnit::CubicMeterPerSecond,
        ),
        warnings,
    }
}
