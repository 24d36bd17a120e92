use serde::{Deserialize, Serialize};

/// 면적 단위. 내부 기준은 제곱미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMeter,
    SquareFoot,
}

const M2_PER_FT2: f64 = 0.092_903_04;

/// 면적을 변환한다.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    let m2 = match from {
        AreaUnit::SquareMeter => value,
        AreaUnit::SquareFoot => value * M2_PER_FT2,
    };
    match to {
        AreaUnit::SquareMeter => m2,
        AreaUnit::SquareFoot => m2 / M2_PER_FT2,
    }
}
