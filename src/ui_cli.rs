use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{UnitSystem, DEFAULT_CONFIG_PATH};
use crate::cooling::{ChilledWaterPlan, CondenserLoopPlan};
use crate::heating::HotWaterPlan;
use crate::plant_loop::{LoopSizing, LoopType, OutdoorAirReset};
use crate::quantity::QuantityKind;
use crate::units::{c_to_f, delta_k_to_r, m3_to_gal, w_to_btu_h};
use crate::water::{BoosterHeaterSizing, ServiceWaterHeatingDesign};

/// HVAC 플랜트 루프 및 급탕 설비 설계값 산정 도구.
#[derive(Debug, Parser)]
#[command(name = "hvac_sizing_toolbox", version)]
pub struct Cli {
    /// 설정 파일 경로 (없으면 기본값으로 생성)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// 결과 표시 단위 (설정 파일 값보다 우선)
    #[arg(long, global = true, value_enum)]
    pub units: Option<UnitSystem>,
    /// 출력 형식
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// 로그 상세도 (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

/// 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Toml,
}

/// 하위 명령.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// 복수기(냉각수) 루프 온도와 냉각탑 설계값
    Condenser(CondenserArgs),
    /// 냉수 루프 온도와 리셋
    ChilledWater(LoopArgs),
    /// 온수 루프 온도와 리셋
    HotWater(LoopArgs),
    /// 급탕 온수기 용량/저탕량
    WaterHeater(WaterHeaterArgs),
    /// 식기세척 부스터 온수기
    Booster(BoosterArgs),
    /// 단위 변환
    Convert(ConvertArgs),
}

#[derive(Debug, Args)]
pub struct CondenserArgs {
    /// 설계 외기 습구온도
    #[arg(long, conflicts_with = "design_days", allow_negative_numbers = true)]
    pub wet_bulb: Option<f64>,
    /// 습구온도 단위 (C, F, K)
    #[arg(long, default_value = "C")]
    pub unit: String,
    /// 설계일 TOML 파일 ([[design_days]])
    #[arg(long)]
    pub design_days: Option<PathBuf>,
    /// 적용 대상 루프 종류
    #[arg(long, value_enum, default_value_t = LoopType::Condenser)]
    pub loop_type: LoopType,
}

#[derive(Debug, Args)]
pub struct LoopArgs {
    /// 적용 대상 루프 종류 (생략 시 명령에 맞는 종류)
    #[arg(long, value_enum)]
    pub loop_type: Option<LoopType>,
}

#[derive(Debug, Args)]
pub struct WaterHeaterArgs {
    /// 급탕 기구 TOML 파일 ([[fixtures]], [piping])
    #[arg(long)]
    pub fixtures: PathBuf,
}

#[derive(Debug, Args)]
pub struct BoosterArgs {
    /// 급탕 기구 TOML 파일
    #[arg(long)]
    pub fixtures: PathBuf,
    /// 주 급탕 루프 공급온도
    #[arg(long, allow_negative_numbers = true)]
    pub supply_temp: f64,
    /// 공급온도 단위 (C, F, K)
    #[arg(long, default_value = "C")]
    pub unit: String,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    #[arg(value_enum)]
    pub kind: QuantityKind,
    #[arg(allow_negative_numbers = true)]
    pub value: f64,
    pub from: String,
    pub to: String,
}

fn temp(c: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::SI => format!("{c:.2} °C"),
        UnitSystem::IP => format!("{:.1} °F", c_to_f(c)),
    }
}

fn delta(k: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::SI => format!("{k:.2} K"),
        UnitSystem::IP => format!("{:.1} °F", delta_k_to_r(k)),
    }
}

fn volume(m3: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::SI => format!("{m3:.4} m³"),
        UnitSystem::IP => format!("{:.1} gal", m3_to_gal(m3)),
    }
}

fn power(w: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::SI => format!("{:.2} kW", w / 1000.0),
        UnitSystem::IP => format!("{:.0} Btu/h", w_to_btu_h(w)),
    }
}

fn print_warnings(warnings: &[String]) {
    for w in warnings {
        println!("  경고: {w}");
    }
}

fn print_sizing(sizing: &LoopSizing, units: UnitSystem) {
    println!("설계 공급온도: {}", temp(sizing.design_exit_temp_c, units));
    println!("설계 온도차: {}", delta(sizing.design_delta_t_k, units));
    match sizing.max_loop_temp_c {
        Some(max) => println!(
            "루프 온도 범위: {} ~ {}",
            temp(sizing.min_loop_temp_c, units),
            temp(max, units)
        ),
        None => println!("루프 최저온도: {}", temp(sizing.min_loop_temp_c, units)),
    }
}

fn print_reset(reset: &OutdoorAirReset, units: UnitSystem) {
    println!(
        "공급온도 리셋: 외기 {}에서 {}, 외기 {}에서 {}",
        temp(reset.low_oat_c, units),
        temp(reset.setpoint_at_low_oat_c, units),
        temp(reset.high_oat_c, units),
        temp(reset.setpoint_at_high_oat_c, units)
    );
}

/// 복수기 루프 결과를 출력한다.
pub fn print_condenser_plan(plan: &CondenserLoopPlan, units: UnitSystem) {
    println!("\n-- 복수기 루프 --");
    println!(
        "설계 습구온도: {} ({:?})",
        temp(plan.design.design_wet_bulb_c, units),
        plan.wet_bulb_source
    );
    println!("냉각수 공급온도: {}", temp(plan.design.leaving_temp_c, units));
    println!(
        "Approach: {}, Range: {}",
        delta(plan.design.approach_k, units),
        delta(plan.design.range_k, units)
    );
    print_sizing(&plan.sizing, units);
    println!(
        "냉각탑 입력 습구온도: {}",
        temp(plan.tower.design_inlet_air_wet_bulb_c, units)
    );
    println!(
        "습구 추종 설정점: {} ~ {} (오프셋 {})",
        temp(plan.setpoint.min_setpoint_c, units),
        temp(plan.setpoint.max_setpoint_c, units),
        delta(plan.setpoint.offset_k, units)
    );
    print_warnings(&plan.warnings);
    print_warnings(&plan.design.warnings);
}

/// 냉수 루프 결과를 출력한다.
pub fn print_chilled_water_plan(plan: &ChilledWaterPlan, units: UnitSystem) {
    println!("\n-- 냉수 루프 --");
    print_sizing(&plan.sizing, units);
    println!(
        "칠러 정격 냉각수 입구온도: {}",
        temp(plan.reference_entering_condenser_temp_c, units)
    );
    print_reset(&plan.reset, units);
}

/// 온수 루프 결과를 출력한다.
pub fn print_hot_water_plan(plan: &HotWaterPlan, units: UnitSystem) {
    println!("\n-- 온수 루프 --");
    print_sizing(&plan.sizing, units);
    print_reset(&plan.reset, units);
}

/// 급탕 설계 결과를 출력한다.
pub fn print_service_water_heating(design: &ServiceWaterHeatingDesign, units: UnitSystem) {
    let heater = &design.water_heater;
    println!("\n-- 급탕 온수기 --");
    println!("가열 용량: {}", power(heater.capacity_w, units));
    println!("저탕량: {}", volume(heater.volume_m3, units));
    println!(
        "배관 기생 손실: {}",
        power(design.parasitic_fuel_consumption_rate_w, units)
    );
    print_warnings(&heater.warnings);
}

/// 부스터 결과를 출력한다.
pub fn print_booster(sizing: &BoosterHeaterSizing, units: UnitSystem) {
    println!("\n-- 부스터 온수기 --");
    println!(
        "온도: {} → {}",
        temp(sizing.inlet_temp_c, units),
        temp(sizing.outlet_temp_c, units)
    );
    println!("가열 용량: {}", power(sizing.capacity_w, units));
    println!("저탕량: {}", volume(sizing.volume_m3, units));
    print_warnings(&sizing.warnings);
}
