use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::config::{Config, ConfigError};
use crate::conversion::{self, parse_temperature_unit, ConversionError};
use crate::cooling::{plan_chilled_water_loop, plan_condenser_loop, plan_condenser_loop_for_wet_bulb};
use crate::heating::plan_hot_water_loop;
use crate::input::{DesignDayInput, InputError, ServiceWaterInput};
use crate::plant_loop::{LoopType, PlantLoopError};
use crate::ui_cli::{self, Cli, Command, OutputFormat};
use crate::units::{convert_temperature, TemperatureUnit};
use crate::water::{size_booster_water_heater, size_service_water_heating};

/// 애플리케이션 실행 중 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("입력 오류: {0}")]
    Input(#[from] InputError),
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    #[error("플랜트 루프 오류: {0}")]
    PlantLoop(#[from] PlantLoopError),
    #[error("결과 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

fn emit<T: Serialize>(
    report: &T,
    format: OutputFormat,
    text: impl FnOnce(&T),
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => text(report),
        OutputFormat::Toml => print!("{}", toml::to_string_pretty(report)?),
    }
    Ok(())
}

fn to_celsius(value: f64, unit: &str) -> Result<f64, AppError> {
    let from = parse_temperature_unit(unit)?;
    Ok(convert_temperature(value, from, TemperatureUnit::Celsius))
}

// 입력 단계 진단을 산정 단계 진단 앞에 둔다
fn prepend_warnings(target: &mut Vec<String>, mut first: Vec<String>) {
    first.append(target);
    *target = first;
}

/// 하위 명령을 실행한다.
pub fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let units = config.unit_system;
    debug!("명령 실행: {:?}", cli.command);
    match &cli.command {
        Command::Condenser(args) => {
            let plan = match (&args.design_days, args.wet_bulb) {
                (Some(path), _) => {
                    let input = DesignDayInput::load(path)?;
                    plan_condenser_loop(args.loop_type, &input.design_days, &config.condenser_water)?
                }
                (None, Some(wb)) => plan_condenser_loop_for_wet_bulb(
                    args.loop_type,
                    to_celsius(wb, &args.unit)?,
                    &config.condenser_water,
                )?,
                // 설계일 정보가 없으면 정격 조건으로
                (None, None) => plan_condenser_loop(args.loop_type, &[], &config.condenser_water)?,
            };
            emit(&plan, cli.format, |p| ui_cli::print_condenser_plan(p, units))
        }
        Command::ChilledWater(args) => {
            let loop_type = args.loop_type.unwrap_or(LoopType::Cooling);
            let plan = plan_chilled_water_loop(loop_type, &config.chilled_water)?;
            emit(&plan, cli.format, |p| ui_cli::print_chilled_water_plan(p, units))
        }
        Command::HotWater(args) => {
            let loop_type = args.loop_type.unwrap_or(LoopType::Heating);
            let plan = plan_hot_water_loop(loop_type, &config.hot_water)?;
            emit(&plan, cli.format, |p| ui_cli::print_hot_water_plan(p, units))
        }
        Command::WaterHeater(args) => {
            let input = ServiceWaterInput::load(&args.fixtures)?;
            let (profiles, warnings) = input.profiles()?;
            let mut design =
                size_service_water_heating(&profiles, input.piping.as_ref(), &config.water_heater);
            prepend_warnings(&mut design.water_heater.warnings, warnings);
            emit(&design, cli.format, |d| {
                ui_cli::print_service_water_heating(d, units)
            })
        }
        Command::Booster(args) => {
            let input = ServiceWaterInput::load(&args.fixtures)?;
            let (profiles, warnings) = input.profiles()?;
            let supply_c = to_celsius(args.supply_temp, &args.unit)?;
            let mut sizing = size_booster_water_heater(&profiles, supply_c, &config.booster);
            prepend_warnings(&mut sizing.warnings, warnings);
            emit(&sizing, cli.format, |s| ui_cli::print_booster(s, units))
        }
        Command::Convert(args) => {
            let result = conversion::convert(args.kind, args.value, &args.from, &args.to)?;
            println!("{result} {}", args.to.trim());
            Ok(())
        }
    }
}
