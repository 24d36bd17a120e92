//! 냉각탑 사이징용 설계 외기 습구온도 선정.
//!
//! 하절기 설계일 중 이름에 `WB=>MDB`가 포함된 날(습구온도 기준 설계일)만 사용하며,
//! 그중 최악(최고) 값을 택한다. 해당 설계일이 없으면 CTI 정격 조건(78°F)을 쓴다.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cooling::condenser_water::CondenserWaterPolicy;
use crate::units::{c_to_f, f_to_c};

/// 설계일 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayType {
    SummerDesignDay,
    WinterDesignDay,
}

/// 습도 조건 지정 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HumidityIndicatingType {
    Wetbulb,
    Dewpoint,
    HumidityRatio,
    Enthalpy,
}

/// 설계일 하나.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignDay {
    pub name: String,
    pub day_type: DayType,
    pub humidity_indicating_type: HumidityIndicatingType,
    /// 최고 건구온도 시점의 습도 조건 값. 습구 지정이면 °C.
    pub humidity_condition_at_max_dry_bulb: f64,
}

/// 설계 습구온도를 어디서 얻었는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DesignWetBulbSource {
    DesignDays,
    RatingCondition,
    /// 호출 측이 직접 지정
    Specified,
}

/// 설계 습구온도 선정 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignWetBulb {
    pub value_c: f64,
    pub source: DesignWetBulbSource,
    pub warnings: Vec<String>,
}

const WET_BULB_DAY_MARKER: &str = "WB=>MDB";

/// 설계일 목록에서 냉각탑 사이징용 습구온도를 고른다.
pub fn select_design_wet_bulb(
    design_days: &[DesignDay],
    policy: &CondenserWaterPolicy,
) -> DesignWetBulb {
    let mut warnings = Vec::new();
    let mut wet_bulbs_c = Vec::new();

    for dd in design_days {
        if dd.day_type != DayType::SummerDesignDay || !dd.name.contains(WET_BULB_DAY_MARKER) {
            continue;
        }
        if dd.humidity_indicating_type == HumidityIndicatingType::Wetbulb {
            let value = dd.humidity_condition_at_max_dry_bulb;
            if value.is_finite() {
                wet_bulbs_c.push(value);
            } else {
                let msg = format!("{}: 습구온도 값 {value}이(가) 유효하지 않아 제외합니다.", dd.name);
                warn!("{msg}");
                warnings.push(msg);
            }
        } else {
            let msg = format!(
                "{}: 습도가 {:?}로 지정되어 습구온도를 알 수 없습니다.",
                dd.name, dd.humidity_indicating_type
            );
            warn!("{msg}");
            warnings.push(msg);
        }
    }

    let worst = wet_bulbs_c
        .into_iter()
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))));

    match worst {
        Some(value_c) => {
            info!(
                "설계일(WB=>MDB) 최대 습구온도 {:.1}°F",
                c_to_f(value_c)
            );
            DesignWetBulb {
                value_c,
                source: DesignWetBulbSource::DesignDays,
                warnings,
            }
        }
        None => {
            let msg = format!(
                "습구 설계일을 찾지 못했습니다. CTI 정격 조건 {:.0}°F를 사용합니다.",
                policy.rating_wet_bulb_f
            );
            warn!("{msg}");
            warnings.push(msg);
            DesignWetBulb {
                value_c: f_to_c(policy.rating_wet_bulb_f),
                source: DesignWetBulbSource::RatingCondition,
                warnings,
            }
        }
    }
}
