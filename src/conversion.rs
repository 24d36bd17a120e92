use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 {kind:?} 단위: {unit}")]
    UnknownUnit { kind: QuantityKind, unit: String },
}

/// 문자열 단위를 해석하여 값을 변환한다.
///
/// 단위 문자열 예시: `F`, `C`, `inH2O`, `Pa`, `gal`, `gpm`, `m3/s`, `kBtu/h`.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        QuantityKind::TemperatureDifference => {
            let from = parse_temperature_diff_unit(from_unit_str)?;
            let to = parse_temperature_diff_unit(to_unit_str)?;
            Ok(convert_temperature_diff(value, from, to))
        }
        QuantityKind::Pressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            Ok(convert_pressure(value, from, to))
        }
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Area => {
            let from = parse_area_unit(from_unit_str)?;
            let to = parse_area_unit(to_unit_str)?;
            Ok(convert_area(value, from, to))
        }
        QuantityKind::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            Ok(convert_volume(value, from, to))
        }
        QuantityKind::VolumeFlow => {
            let from = parse_volume_flow_unit(from_unit_str)?;
            let to = parse_volume_flow_unit(to_unit_str)?;
            Ok(convert_volume_flow(value, from, to))
        }
        QuantityKind::Power => {
            let from = parse_power_unit(from_unit_str)?;
            let to = parse_power_unit(to_unit_str)?;
            Ok(convert_power(value, from, to))
        }
    }
}

fn unknown(kind: QuantityKind, s: &str) -> ConversionError {
    ConversionError::UnknownUnit {
        kind,
        unit: s.to_string(),
    }
}

pub fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "r" | "rankine" => Ok(TemperatureUnit::Rankine),
        _ => Err(unknown(QuantityKind::Temperature, s)),
    }
}

fn parse_temperature_diff_unit(s: &str) -> Result<TemperatureDiffUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "k" | "kelvin" | "deltak" => Ok(TemperatureDiffUnit::Kelvin),
        "c" | "celsius" | "°c" | "deltac" => Ok(TemperatureDiffUnit::Celsius),
        "f" | "fahrenheit" | "°f" | "deltaf" => Ok(TemperatureDiffUnit::Fahrenheit),
        "r" | "rankine" => Ok(TemperatureDiffUnit::Rankine),
        _ => Err(unknown(QuantityKind::TemperatureDifference, s)),
    }
}

fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "bar" => Ok(PressureUnit::Bar),
        "psi" => Ok(PressureUnit::Psi),
        "inh2o" | "in h2o" | "inwc" | "in.w.c." => Ok(PressureUnit::InchWater),
        "fth2o" | "ft h2o" | "fthead" => Ok(PressureUnit::FootWater),
        _ => Err(unknown(QuantityKind::Pressure, s)),
    }
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "mm" => Ok(LengthUnit::Millimeter),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "ft" | "foot" => Ok(LengthUnit::Foot),
        _ => Err(unknown(QuantityKind::Length, s)),
    }
}

fn parse_area_unit(s: &str) -> Result<AreaUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m2" | "m^2" | "sqm" => Ok(AreaUnit::SquareMeter),
        "ft2" | "ft^2" | "sqft" => Ok(AreaUnit::SquareFoot),
        _ => Err(unknown(QuantityKind::Area, s)),
    }
}

fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m3" | "m^3" => Ok(VolumeUnit::CubicMeter),
        "l" | "liter" | "litre" => Ok(VolumeUnit::Liter),
        "gal" | "gallon" => Ok(VolumeUnit::Gallon),
        "ft3" | "ft^3" | "cuft" => Ok(VolumeUnit::CubicFoot),
        _ => Err(unknown(QuantityKind::Volume, s)),
    }
}

pub fn parse_volume_flow_unit(s: &str) -> Result<VolumeFlowUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m3/s" | "m^3/s" => Ok(VolumeFlowUnit::CubicMeterPerSecond),
        "m3/h" | "m^3/h" | "m3/hr" => Ok(VolumeFlowUnit::CubicMeterPerHour),
        "l/s" => Ok(VolumeFlowUnit::LiterPerSecond),
        "gpm" | "gal/min" => Ok(VolumeFlowUnit::GallonPerMinute),
        "gph" | "gal/h" | "gal/hr" => Ok(VolumeFlowUnit::GallonPerHour),
        "cfm" | "ft3/min" => Ok(VolumeFlowUnit::CubicFootPerMinute),
        _ => Err(unknown(QuantityKind::VolumeFlow, s)),
    }
}

fn parse_power_unit(s: &str) -> Result<PowerUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "w" | "watt" => Ok(PowerUnit::Watt),
        "kw" | "kilowatt" => Ok(PowerUnit::Kilowatt),
        "btu/h" | "btu/hr" | "btuh" => Ok(PowerUnit::BtuPerHour),
        "kbtu/h" | "kbtu/hr" | "mbh" => Ok(PowerUnit::KiloBtuPerHour),
        "ton" | "tons" | "rt" => Ok(PowerUnit::TonRefrigeration),
        _ => Err(unknown(QuantityKind::Power, s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ip_flow_aliases() {
        assert_eq!(
            parse_volume_flow_unit("GPM").unwrap(),
            VolumeFlowUnit::GallonPerMinute
        );
        assert_eq!(
            parse_volume_flow_unit(" gal/hr ").unwrap(),
            VolumeFlowUnit::GallonPerHour
        );
    }

    #[test]
    fn unknown_unit_reports_kind() {
        let err = convert(QuantityKind::Power, 1.0, "hp", "W").unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownUnit {
                kind: QuantityKind::Power,
                unit: "hp".into()
            }
        );
    }
}
