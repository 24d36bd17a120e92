use serde::{Deserialize, Serialize};

/// 체적 단위. 내부 기준은 입방미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    CubicMeter,
    Liter,
    /// 미국 갤런
    Gallon,
    CubicFoot,
}

/// 1 US gal = 3.785411784 L
pub const M3_PER_GALLON: f64 = 0.003_785_411_784;
const M3_PER_FT3: f64 = 0.028_316_846_592;

fn to_cubic_meter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMeter => value,
        VolumeUnit::Liter => value / 1000.0,
        VolumeUnit::Gallon => value * M3_PER_GALLON,
        VolumeUnit::CubicFoot => value * M3_PER_FT3,
    }
}

fn from_cubic_meter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMeter => value,
        VolumeUnit::Liter => value * 1000.0,
        VolumeUnit::Gallon => value / M3_PER_GALLON,
        VolumeUnit::CubicFoot => value / M3_PER_FT3,
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    from_cubic_meter(to_cubic_meter(value, from), to)
}

/// 갤런 → m³
pub fn gal_to_m3(value_gal: f64) -> f64 {
    value_gal * M3_PER_GALLON
}

/// m³ → 갤런
pub fn m3_to_gal(value_m3: f64) -> f64 {
    value_m3 / M3_PER_GALLON
}
