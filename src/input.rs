//! CLI 입력 파일(TOML) 형식.
//!
//! 급탕 기구 목록:
//!
//! ```toml
//! [[fixtures]]
//! name = "Lavatory"
//! peak_flow_rate = 1.0
//! flow_unit = "gpm"
//! schedule = { type = "Constant", value = 1.0 }
//!
//! [piping]
//! floor_area_m2 = 2000.0
//! effective_num_stories = 2.0
//! circulating = true
//! insulation_thickness_in = 1.0
//! ```
//!
//! 설계일 목록은 `[[design_days]]` 배열로 [`DesignDay`] 필드를 그대로 쓴다.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::conversion::{parse_volume_flow_unit, ConversionError};
use crate::design_day::DesignDay;
use crate::schedule::Schedule;
use crate::units::{convert_volume_flow, VolumeFlowUnit};
use crate::water::{DistributionPiping, FixtureDemandProfile};

/// 입력 파일 처리 오류.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("입력 파일을 읽을 수 없습니다({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("입력 파일 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("기구 '{name}': {source}")]
    Unit {
        name: String,
        #[source]
        source: ConversionError,
    },
}

fn default_flow_unit() -> String {
    "m3/s".into()
}

/// 급탕 기구 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureInput {
    pub name: String,
    pub peak_flow_rate: f64,
    #[serde(default = "default_flow_unit")]
    pub flow_unit: String,
    #[serde(default)]
    pub schedule: Option<Schedule>,
}

impl FixtureInput {
    /// 수요 프로파일로 변환한다. 스케줄 진단은 `warnings`에 모은다.
    pub fn to_profile(&self, warnings: &mut Vec<String>) -> Result<FixtureDemandProfile, InputError> {
        let unit = parse_volume_flow_unit(&self.flow_unit).map_err(|source| InputError::Unit {
            name: self.name.clone(),
            source,
        })?;
        let peak_m3_s = convert_volume_flow(
            self.peak_flow_rate,
            unit,
            VolumeFlowUnit::CubicMeterPerSecond,
        );
        let mut diagnostics = Vec::new();
        let profile =
            FixtureDemandProfile::from_schedule(peak_m3_s, self.schedule.as_ref(), &mut diagnostics);
        warnings.extend(diagnostics.into_iter().map(|msg| format!("{}: {msg}", self.name)));
        Ok(profile)
    }
}

/// 급탕 입력 파일.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServiceWaterInput {
    #[serde(default)]
    pub fixtures: Vec<FixtureInput>,
    #[serde(default)]
    pub piping: Option<DistributionPiping>,
}

impl ServiceWaterInput {
    pub fn from_toml_str(content: &str) -> Result<Self, InputError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, InputError> {
        Self::from_toml_str(&read(path)?)
    }

    /// 모든 기구를 수요 프로파일로 변환한다.
    pub fn profiles(&self) -> Result<(Vec<FixtureDemandProfile>, Vec<String>), InputError> {
        let mut warnings = Vec::new();
        let profiles = self
            .fixtures
            .iter()
            .map(|f| f.to_profile(&mut warnings))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((profiles, warnings))
    }
}

/// 설계일 입력 파일.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DesignDayInput {
    #[serde(default)]
    pub design_days: Vec<DesignDay>,
}

impl DesignDayInput {
    pub fn from_toml_str(content: &str) -> Result<Self, InputError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, InputError> {
        Self::from_toml_str(&read(path)?)
    }
}

fn read(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })
}
