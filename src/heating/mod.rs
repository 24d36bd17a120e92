//! 난방 측 플랜트 루프 정책.

pub mod hot_water;

pub use hot_water::{plan_hot_water_loop, HotWaterPlan, HotWaterPolicy};
