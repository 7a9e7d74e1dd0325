//! Text and JSON rendering of analysis results.

use serde::Serialize;
use serde_json::Value;

use crate::analysis::{try_int, Analysis, ParamSet, PiGroup, RepeatingSource};
use crate::units::DimVector;

/// Renders a power as an integer when it is whole, otherwise to six decimals.
pub fn format_power(power: f64) -> String {
    match try_int(power) {
        Some(i) => i.to_string(),
        None => format!("{}", (power * 1e6).round() / 1e6),
    }
}

fn power_value(power: f64) -> Value {
    match try_int(power) {
        Some(i) => Value::from(i),
        None => Value::from(power),
    }
}

/// `(a)^2 (b) (c)^-1`: descending power, zero powers omitted.
pub fn format_group(params: &ParamSet, group: &PiGroup) -> String {
    let mut entries = group.entries().to_vec();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));

    entries
        .iter()
        .filter_map(|(id, power)| {
            let name = params[*id].name();
            match try_int(*power) {
                Some(0) => None,
                Some(1) => Some(format!("({name})")),
                _ => Some(format!("({name})^{}", format_power(*power))),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One `Pi-Group i:  ...` line per group, numbered from 1.
pub fn format_groups(params: &ParamSet, groups: &[PiGroup]) -> String {
    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        out.push_str(&format!("Pi-Group {}:  {}\n", i + 1, format_group(params, group)));
    }
    out
}

#[derive(Debug, Clone, Serialize)]
pub struct TermReport {
    pub param: String,
    pub power: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    pub subject: String,
    pub text: String,
    pub terms: Vec<TermReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParamReport {
    pub name: String,
    pub dim: DimVector,
}

/// Serializable view of an [`Analysis`], keyed by parameter name.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub parameters: Vec<ParamReport>,
    pub repeating: Vec<String>,
    pub repeating_source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub groups: Vec<GroupReport>,
}

impl AnalysisReport {
    pub fn new(title: Option<&str>, params: &ParamSet, analysis: &Analysis) -> Self {
        let groups = analysis
            .groups
            .iter()
            .map(|group| GroupReport {
                subject: params[group.subject()].name().to_string(),
                text: format_group(params, group),
                terms: group
                    .nonzero_entries()
                    .map(|(id, power)| TermReport {
                        param: params[id].name().to_string(),
                        power: power_value(power),
                    })
                    .collect(),
            })
            .collect();

        Self {
            title: title.map(str::to_string),
            parameters: params
                .iter()
                .map(|(_, p)| ParamReport {
                    name: p.name().to_string(),
                    dim: *p.dim(),
                })
                .collect(),
            repeating: analysis
                .repeating
                .iter()
                .map(|id| params[*id].name().to_string())
                .collect(),
            repeating_source: match analysis.source {
                RepeatingSource::Supplied => "supplied",
                RepeatingSource::Searched => "searched",
            },
            warning: analysis.validation.reason(),
            groups,
        }
    }
}
