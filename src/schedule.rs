//! 사용 스케줄(분율 스케줄) 모델.
//!
//! 스케줄 표현 방식(상수/규칙/컴팩트)을 하나의 열거형으로 묶고, 종류에 관계없이
//! `min_max()`와 `max_value()`로 연간 최솟값·최댓값을 얻는다.
//! 설계일(design day) 값은 포함하지 않는다.

use serde::{Deserialize, Serialize};

/// 하루 프로파일. 시각 정보 없이 값 목록만 보관한다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DaySchedule {
    #[serde(default)]
    pub name: Option<String>,
    pub values: Vec<f64>,
}

impl DaySchedule {
    pub fn new(values: Vec<f64>) -> Self {
        Self { name: None, values }
    }
}

/// 연간 최솟값/최댓값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax {
    pub min: f64,
    pub max: f64,
}

/// 스케줄 표현 방식.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Schedule {
    /// 연중 일정한 값
    Constant { value: f64 },
    /// 기본 일 프로파일 + 규칙별 일 프로파일
    Ruleset {
        default_day: DaySchedule,
        #[serde(default)]
        rules: Vec<DaySchedule>,
    },
    /// IDF Schedule:Compact 필드 목록 (`Through:`, `For:`, `Until:`, 값 ...)
    Compact { fields: Vec<String> },
    /// 연간 스케줄 등 최솟값/최댓값을 구할 수 없는 형식
    #[serde(other)]
    Unsupported,
}

impl Schedule {
    /// 스케줄 종류 이름. 진단 메시지에 쓴다.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Schedule::Constant { .. } => "Constant",
            Schedule::Ruleset { .. } => "Ruleset",
            Schedule::Compact { .. } => "Compact",
            Schedule::Unsupported => "Unsupported",
        }
    }

    /// 연간 최솟값/최댓값. 값을 찾을 수 없으면 `None`.
    pub fn min_max(&self) -> Option<MinMax> {
        match self {
            Schedule::Constant { value } => Some(MinMax {
                min: *value,
                max: *value,
            }),
            Schedule::Ruleset { default_day, rules } => fold_min_max(
                std::iter::once(default_day)
                    .chain(rules.iter())
                    .flat_map(|day| day.values.iter().copied()),
            ),
            Schedule::Compact { fields } => fold_min_max(compact_values(fields)),
            Schedule::Unsupported => None,
        }
    }

    /// 연간 최댓값.
    pub fn max_value(&self) -> Option<f64> {
        self.min_max().map(|mm| mm.max)
    }
}

fn fold_min_max(values: impl Iterator<Item = f64>) -> Option<MinMax> {
    values.filter(|v| v.is_finite()).fold(None, |acc, v| match acc {
        None => Some(MinMax { min: v, max: v }),
        Some(mm) => Some(MinMax {
            min: mm.min.min(v),
            max: mm.max.max(v),
        }),
    })
}

// `Until:` 필드 바로 다음 필드만 값으로 취급한다.
fn compact_values(fields: &[String]) -> impl Iterator<Item = f64> + '_ {
    fields.windows(2).filter_map(|pair| {
        if pair[0].to_lowercase().contains("until") {
            pair[1].trim().parse::<f64>().ok()
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn ruleset_scans_default_and_rule_days() {
        let sch = Schedule::Ruleset {
            default_day: DaySchedule::new(vec![0.1, 0.4]),
            rules: vec![DaySchedule::new(vec![0.05, 0.9]), DaySchedule::new(vec![0.3])],
        };
        let mm = sch.min_max().unwrap();
        assert_eq!(mm.min, 0.05);
        assert_eq!(mm.max, 0.9);
    }

    #[test]
    fn compact_ignores_non_value_fields() {
        let sch = Schedule::Compact {
            fields: fields(&[
                "Through: 12/31",
                "For: Weekdays",
                "Until: 07:00",
                "0.15",
                "Until: 24:00",
                "0.75",
                "For: AllOtherDays",
                "Until: 24:00",
                "0.2",
            ]),
        };
        let mm = sch.min_max().unwrap();
        assert_eq!(mm.min, 0.15);
        assert_eq!(mm.max, 0.75);
    }

    #[test]
    fn compact_without_values_has_no_extremes() {
        let sch = Schedule::Compact {
            fields: fields(&["Through: 12/31", "For: AllDays"]),
        };
        assert_eq!(sch.max_value(), None);
    }

    #[test]
    fn unknown_type_deserializes_as_unsupported() {
        let sch: Schedule = toml::from_str("type = \"Year\"\nname = \"annual\"").unwrap();
        assert_eq!(sch, Schedule::Unsupported);
        assert_eq!(sch.max_value(), None);
    }

    #[test]
    fn constant_from_toml() {
        let sch: Schedule = toml::from_str("type = \"Constant\"\nvalue = 0.6").unwrap();
        assert_eq!(sch.max_value(), Some(0.6));
    }
}
