//! 냉방 측 플랜트 루프 정책을 모아둔다.
//! 복수기(냉각수) 루프 온도/냉각탑 설계값, 냉수 루프 온도와 리셋으로 구성한다.

pub mod chilled_water;
pub mod condenser_water;

pub use chilled_water::{plan_chilled_water_loop, ChilledWaterPlan, ChilledWaterPolicy};
pub use condenser_water::{
    compute_condenser_water_design, plan_condenser_loop, plan_condenser_loop_for_wet_bulb,
    CondenserLoopPlan, CondenserWaterDesign, CondenserWaterPolicy, CoolingTowerDesignInputs,
    FollowWetBulbSetpoint,
};
