use serde::{Deserialize, Serialize};

/// 차압 단위. 내부 기준은 Pa이다.
/// 팬 정압, 펌프 양정처럼 대기압 보정이 필요 없는 압력차만 다룬다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    Bar,
    Psi,
    /// 수주 인치 (inH2O, 60°F 기준)
    InchWater,
    /// 수두 피트 (ftH2O)
    FootWater,
}

const PA_PER_INH2O: f64 = 249.088_908_333;
const PA_PER_PSI: f64 = 6_894.757_293;
const PA_PER_BAR: f64 = 100_000.0;

fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value,
        PressureUnit::KiloPascal => value * 1000.0,
        PressureUnit::Bar => value * PA_PER_BAR,
        PressureUnit::Psi => value * PA_PER_PSI,
        PressureUnit::InchWater => value * PA_PER_INH2O,
        PressureUnit::FootWater => value * PA_PER_INH2O * 12.0,
    }
}

fn from_pascal(value_pa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value_pa,
        PressureUnit::KiloPascal => value_pa / 1000.0,
        PressureUnit::Bar => value_pa / PA_PER_BAR,
        PressureUnit::Psi => value_pa / PA_PER_PSI,
        PressureUnit::InchWater => value_pa / PA_PER_INH2O,
        PressureUnit::FootWater => value_pa / (PA_PER_INH2O * 12.0),
    }
}

/// 압력(차압)을 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    from_pascal(to_pascal(value, from), to)
}
