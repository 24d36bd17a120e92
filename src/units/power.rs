use serde::{Deserialize, Serialize};

/// 동력/열량 단위. 내부 기준은 W이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Watt,
    Kilowatt,
    BtuPerHour,
    KiloBtuPerHour,
    /// 냉동톤 (12,000 Btu/h)
    TonRefrigeration,
}

/// 1 Btu(IT) = 1055.05585262 J
const W_PER_BTU_H: f64 = 1055.055_852_62 / 3600.0;

fn to_watt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value,
        PowerUnit::Kilowatt => value * 1000.0,
        PowerUnit::BtuPerHour => value * W_PER_BTU_H,
        PowerUnit::KiloBtuPerHour => value * 1000.0 * W_PER_BTU_H,
        PowerUnit::TonRefrigeration => value * 12_000.0 * W_PER_BTU_H,
    }
}

fn from_watt(value_w: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value_w,
        PowerUnit::Kilowatt => value_w / 1000.0,
        PowerUnit::BtuPerHour => value_w / W_PER_BTU_H,
        PowerUnit::KiloBtuPerHour => value_w / W_PER_BTU_H / 1000.0,
        PowerUnit::TonRefrigeration => value_w / W_PER_BTU_H / 12_000.0,
    }
}

/// 동력을 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    from_watt(to_watt(value, from), to)
}

/// Btu/h → W
pub fn btu_h_to_w(value_btu_h: f64) -> f64 {
    value_btu_h * W_PER_BTU_H
}

/// W → Btu/h
pub fn w_to_btu_h(value_w: f64) -> f64 {
    value_w / W_PER_BTU_H
}
