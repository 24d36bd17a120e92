//! 급탕 배관 열손실(온수기 기생 손실) 추정.
//!
//! PNNL Prototype Model Enhancements(2014) A.3.1 배관 길이, A.4 배관 배출/열손실 표.

use serde::{Deserialize, Serialize};

use crate::units::{btu_h_to_w, m_to_ft};

/// 급탕 분배 배관 조건.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionPiping {
    /// 급탕 공급 바닥면적(m²)
    pub floor_area_m2: f64,
    /// 유효 층수
    pub effective_num_stories: f64,
    /// 순환식 여부
    #[serde(default)]
    pub circulating: bool,
    /// 보온 두께(in)
    #[serde(default)]
    pub insulation_thickness_in: f64,
}

/// 배관 1 ft당 배출 열량(Btu/h)
const PIPE_DUMP_BTU_H_PER_FT: f64 = 0.689;

impl DistributionPiping {
    /// 배관 길이(m) = 2 × (√(면적/층수) + 10 × (층수 - 1))
    pub fn pipe_length_m(&self) -> f64 {
        let stories = self.effective_num_stories.max(1.0);
        let area = self.floor_area_m2.max(0.0);
        2.0 * ((area / stories).sqrt() + 10.0 * (stories - 1.0))
    }

    /// 보온 두께와 순환 여부에 따른 1 ft당 열손실(Btu/h·ft).
    pub fn loss_per_foot_btu_h(&self) -> f64 {
        let t = self.insulation_thickness_in;
        match (self.circulating, t >= 1.0, t >= 0.5) {
            (true, true, _) => 16.10,
            (true, false, true) => 17.5,
            (true, false, false) => 30.8,
            (false, true, _) => 11.27,
            (false, false, true) => 12.25,
            (false, false, false) => 28.07,
        }
    }

    /// 기생 손실(W) = 배관 배출 + 배관 열손실.
    pub fn parasitic_loss_w(&self) -> f64 {
        let length_ft = m_to_ft(self.pipe_length_m());
        let dump = length_ft * PIPE_DUMP_BTU_H_PER_FT;
        let loss = length_ft * self.loss_per_foot_btu_h();
        btu_h_to_w(dump + loss)
    }
}
