use serde::{Deserialize, Serialize};

/// 변환기가 다루는 물리량 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum QuantityKind {
    Temperature,
    TemperatureDifference,
    Pressure,
    Length,
    Area,
    Volume,
    VolumeFlow,
    Power,
}
