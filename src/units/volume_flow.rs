use serde::{Deserialize, Serialize};

use super::volume::M3_PER_GALLON;

/// 체적 유량 단위. 내부 기준은 m³/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeFlowUnit {
    CubicMeterPerSecond,
    CubicMeterPerHour,
    LiterPerSecond,
    /// gal/min
    GallonPerMinute,
    /// gal/h
    GallonPerHour,
    /// ft³/min
    CubicFootPerMinute,
}

const M3_PER_FT3: f64 = 0.028_316_846_592;

fn to_m3_per_s(value: f64, unit: VolumeFlowUnit) -> f64 {
    match unit {
        VolumeFlowUnit::CubicMeterPerSecond => value,
        VolumeFlowUnit::CubicMeterPerHour => value / 3600.0,
        VolumeFlowUnit::LiterPerSecond => value / 1000.0,
        VolumeFlowUnit::GallonPerMinute => value * M3_PER_GALLON / 60.0,
        VolumeFlowUnit::GallonPerHour => value * M3_PER_GALLON / 3600.0,
        VolumeFlowUnit::CubicFootPerMinute => value * M3_PER_FT3 / 60.0,
    }
}

fn from_m3_per_s(value: f64, unit: VolumeFlowUnit) -> f64 {
    match unit {
        VolumeFlowUnit::CubicMeterPerSecond => value,
        VolumeFlowUnit::CubicMeterPerHour => value * 3600.0,
        VolumeFlowUnit::LiterPerSecond => value * 1000.0,
        VolumeFlowUnit::GallonPerMinute => value * 60.0 / M3_PER_GALLON,
        VolumeFlowUnit::GallonPerHour => value * 3600.0 / M3_PER_GALLON,
        VolumeFlowUnit::CubicFootPerMinute => value * 60.0 / M3_PER_FT3,
    }
}

/// 체적 유량을 변환한다.
pub fn convert_volume_flow(value: f64, from: VolumeFlowUnit, to: VolumeFlowUnit) -> f64 {
    if from == to {
        return value;
    }
    from_m3_per_s(to_m3_per_s(value, from), to)
}
