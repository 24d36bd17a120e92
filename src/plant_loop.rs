//! 플랜트 루프 설계값 공통 타입.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 플랜트 루프 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum LoopType {
    Condenser,
    Cooling,
    Heating,
}

/// 루프 정책을 적용할 수 없을 때의 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlantLoopError {
    /// 정책이 요구하는 루프 종류와 다름 (호출 측 오용)
    #[error("{expected:?} 루프용 정책을 {found:?} 루프에 적용할 수 없습니다")]
    WrongLoopType { expected: LoopType, found: LoopType },
}

/// 루프 종류를 확인한다.
pub(crate) fn require_loop_type(found: LoopType, expected: LoopType) -> Result<(), PlantLoopError> {
    if found == expected {
        Ok(())
    } else {
        Err(PlantLoopError::WrongLoopType { expected, found })
    }
}

/// 루프 사이징 값 (Sizing:Plant + 루프 온도 한계).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoopSizing {
    /// 설계 루프 출구(공급) 온도(°C)
    pub design_exit_temp_c: f64,
    /// 설계 루프 온도차(K)
    pub design_delta_t_k: f64,
    /// 루프 최저 온도(°C)
    pub min_loop_temp_c: f64,
    /// 루프 최고 온도(°C). 지정하지 않는 루프도 있다.
    pub max_loop_temp_c: Option<f64>,
}

/// 외기온도에 따른 공급수 온도 리셋.
///
/// 두 점 사이는 선형 보간하고, 바깥에서는 끝점 값을 유지한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutdoorAirReset {
    pub setpoint_at_low_oat_c: f64,
    pub low_oat_c: f64,
    pub setpoint_at_high_oat_c: f64,
    pub high_oat_c: f64,
}

impl OutdoorAirReset {
    /// 주어진 외기온도(°C)에서의 공급수 설정온도(°C).
    pub fn setpoint_at(&self, oat_c: f64) -> f64 {
        if oat_c <= self.low_oat_c {
            return self.setpoint_at_low_oat_c;
        }
        if oat_c >= self.high_oat_c {
            return self.setpoint_at_high_oat_c;
        }
        let span = self.high_oat_c - self.low_oat_c;
        if span.abs() < 1e-12 {
            return self.setpoint_at_high_oat_c;
        }
        let frac = (oat_c - self.low_oat_c) / span;
        self.setpoint_at_low_oat_c
            + frac * (self.setpoint_at_high_oat_c - self.setpoint_at_low_oat_c)
    }
}
