//! 급탕(서비스 온수) 설비 산정 모듈.
//! 주 온수기 용량/저탕량, 부스터 온수기, 배관 기생 손실로 구성한다.

pub mod booster;
pub mod distribution;
pub mod water_heater;

use serde::Serialize;

pub use booster::{size_booster_water_heater, BoosterHeaterSizing, BoosterPolicy};
pub use distribution::DistributionPiping;
pub use water_heater::{
    compute_water_heater_sizing, schedule_max_fraction, FixtureDemandProfile, WaterHeaterPolicy,
    WaterHeaterSizing,
};

/// 급탕 시스템 설계값 묶음.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceWaterHeatingDesign {
    pub water_heater: WaterHeaterSizing,
    /// 배관 기생 손실(W). 배관 정보가 없으면 0.
    pub parasitic_fuel_consumption_rate_w: f64,
}

/// 온수기 산정과 배관 기생 손실을 함께 계산한다.
pub fn size_service_water_heating(
    fixtures: &[FixtureDemandProfile],
    piping: Option<&DistributionPiping>,
    policy: &WaterHeaterPolicy,
) -> ServiceWaterHeatingDesign {
    ServiceWaterHeatingDesign {
        water_heater: compute_water_heater_sizing(fixtures, policy),
        parasitic_fuel_consumption_rate_w: piping.map_or(0.0, DistributionPiping::parasitic_loss_w),
    }
}
