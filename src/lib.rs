//! 핵심 산정 로직을 라이브러리로 분리하여 CLI 외의 설비 생성 계층에서도 그대로 쓴다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod cooling;
pub mod design_day;
pub mod heating;
pub mod input;
pub mod plant_loop;
pub mod quantity;
pub mod schedule;
pub mod ui_cli;
pub mod units;
pub mod water;
