use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use crate::cooling::{ChilledWaterPolicy, CondenserWaterPolicy};
use crate::heating::HotWaterPolicy;
use crate::water::{BoosterPolicy, WaterHeaterPolicy};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 결과 표시 단위 시스템.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum UnitSystem {
    /// °C, K, m³, W
    SI,
    /// °F, gal, Btu/h
    IP,
}

/// 애플리케이션 설정. 정책별 기본값은 각 정책 타입의 `Default`에 모여 있고,
/// 파일에서 빠진 항목은 기본값으로 채운다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub unit_system: UnitSystem,
    pub condenser_water: CondenserWaterPolicy,
    pub chilled_water: ChilledWaterPolicy,
    pub hot_water: HotWaterPolicy,
    pub water_heater: WaterHeaterPolicy,
    pub booster: BoosterPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::SI,
            condenser_water: CondenserWaterPolicy::default(),
            chilled_water: ChilledWaterPolicy::default(),
            hot_water: HotWaterPolicy::default(),
            water_heater: WaterHeaterPolicy::default(),
            booster: BoosterPolicy::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 값은 읽었으나 정책 파라미터가 서로 맞지 않음
    #[error("잘못된 설정: {0}")]
    Invalid(String),
}

impl Config {
    /// 모든 정책 파라미터를 검증한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.condenser_water
            .validate()
            .and_then(|_| self.chilled_water.validate())
            .and_then(|_| self.hot_water.validate())
            .and_then(|_| self.water_heater.validate())
            .and_then(|_| self.booster.validate())
            .map_err(ConfigError::Invalid)
    }

    /// TOML 문자열에서 설정을 읽고 검증한다.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// 설정을 파일로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        debug!("설정 저장: {}", path.display());
        Ok(())
    }
}

/// 설정 파일을 로드하거나, 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg = Config::from_toml_str(&content)?;
        info!("설정 로드: {}", path.display());
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        info!("기본 설정 생성: {}", path.display());
        Ok(cfg)
    }
}
