use serde::{Deserialize, Serialize};

/// 온도 단위. 내부 기준은 켈빈이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

/// 온도차 단위. 배율만 다르다(°C=K, °F=R).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureDiffUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

const KELVIN_OFFSET: f64 = 273.15;
const RANKINE_OFFSET: f64 = 459.67;
const R_PER_K: f64 = 1.8;

fn to_kelvin(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value,
        TemperatureUnit::Celsius => value + KELVIN_OFFSET,
        TemperatureUnit::Fahrenheit => (value + RANKINE_OFFSET) / R_PER_K,
        TemperatureUnit::Rankine => value / R_PER_K,
    }
}

fn from_kelvin(value_k: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value_k,
        TemperatureUnit::Celsius => value_k - KELVIN_OFFSET,
        TemperatureUnit::Fahrenheit => value_k * R_PER_K - RANKINE_OFFSET,
        TemperatureUnit::Rankine => value_k * R_PER_K,
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }
    from_kelvin(to_kelvin(value, from), to)
}

/// 온도차를 변환한다. 기준점 없이 배율만 적용한다.
pub fn convert_temperature_diff(
    value: f64,
    from: TemperatureDiffUnit,
    to: TemperatureDiffUnit,
) -> f64 {
    let k = match from {
        TemperatureDiffUnit::Kelvin | TemperatureDiffUnit::Celsius => value,
        TemperatureDiffUnit::Fahrenheit | TemperatureDiffUnit::Rankine => value / R_PER_K,
    };
    match to {
        TemperatureDiffUnit::Kelvin | TemperatureDiffUnit::Celsius => k,
        TemperatureDiffUnit::Fahrenheit | TemperatureDiffUnit::Rankine => k * R_PER_K,
    }
}

/// °F → °C. 설계 규칙이 화씨 기준이라 자주 쓰인다.
pub fn f_to_c(value_f: f64) -> f64 {
    (value_f - 32.0) / R_PER_K
}

/// °C → °F.
pub fn c_to_f(value_c: f64) -> f64 {
    value_c * R_PER_K + 32.0
}

/// 온도차 °F(R) → K.
pub fn delta_r_to_k(delta_r: f64) -> f64 {
    delta_r / R_PER_K
}

/// 온도차 K → °F(R).
pub fn delta_k_to_r(delta_k: f64) -> f64 {
    delta_k * R_PER_K
}
