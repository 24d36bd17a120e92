//! 단위 정의 및 변환 모듈 모음.
//! 설계 규칙은 대부분 IP 단위로 정의되어 있으므로 °F/gal/Btu 헬퍼를 함께 둔다.

pub mod area;
pub mod length;
pub mod power;
pub mod pressure;
pub mod temperature;
pub mod volume;
pub mod volume_flow;

pub use area::{convert_area, AreaUnit};
pub use length::{convert_length, m_to_ft, LengthUnit};
pub use power::{btu_h_to_w, convert_power, w_to_btu_h, PowerUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use temperature::{
    c_to_f, convert_temperature, convert_temperature_diff, delta_k_to_r, delta_r_to_k, f_to_c,
    TemperatureDiffUnit, TemperatureUnit,
};
pub use volume::{convert_volume, gal_to_m3, m3_to_gal, VolumeUnit};
pub use volume_flow::{convert_volume_flow, VolumeFlowUnit};
