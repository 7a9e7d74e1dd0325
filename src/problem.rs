//! Problem description files.
//!
//! A problem is a JSON object listing parameters by name with either an
//! explicit exponent list (`dim`) or a named quantity (`quantity`), plus an
//! optional repeating list and dependent parameter, both by name. A file holds
//! either one problem or `{"problems": [...]}`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::analysis::{run, Analysis, AnalysisError, ParamId, ParamSet, Parameter};
use crate::units::QuantityError;

/// The problems from the original demo script.
pub const DEMO_PROBLEMS: &str = include_str!("../demos/demo.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dim: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProblemSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub parameters: Vec<ParamSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub repeating: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependent: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProblemList {
    problems: Vec<ProblemSpec>,
}

/// A problem with its parameters resolved.
#[derive(Debug, Clone)]
pub struct Problem {
    pub title: Option<String>,
    pub params: ParamSet,
    pub repeating: Vec<ParamId>,
    pub dependent: Option<ParamId>,
}

impl Problem {
    pub fn from_spec(spec: &ProblemSpec) -> Result<Self, ProblemError> {
        let mut params = ParamSet::new();
        for p in &spec.parameters {
            if params.find(&p.name).is_some() {
                return Err(ProblemError::DuplicateName {
                    name: p.name.clone(),
                });
            }
            let param = match (&p.dim, &p.quantity) {
                (Some(_), Some(_)) => {
                    return Err(ProblemError::ConflictingDim {
                        param: p.name.clone(),
                    })
                }
                (Some(dim), None) => Parameter::from_exponents(p.name.as_str(), dim),
                (None, Some(quantity)) => Parameter::from_quantity_name(p.name.as_str(), quantity),
                (None, None) => Ok(Parameter::dimensionless(p.name.as_str())),
            }
            .map_err(|source| ProblemError::Quantity {
                param: p.name.clone(),
                source,
            })?;
            params.add(param);
        }

        let lookup = |name: &str, role: &'static str| {
            params.find(name).ok_or_else(|| ProblemError::UnknownName {
                name: name.to_string(),
                role,
            })
        };
        let repeating = spec
            .repeating
            .iter()
            .map(|name| lookup(name.as_str(), "repeating"))
            .collect::<Result<Vec<_>, _>>()?;
        let dependent = spec
            .dependent
            .as_deref()
            .map(|name| lookup(name, "dependent"))
            .transpose()?;

        Ok(Self {
            title: spec.title.clone(),
            params,
            repeating,
            dependent,
        })
    }

    pub fn run(&self) -> Result<Analysis, AnalysisError> {
        run(&self.params, Some(&self.repeating), self.dependent)
    }
}

/// Parses one problem or a `problems` list.
pub fn parse_problems(text: &str) -> Result<Vec<Problem>, ProblemError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let specs = if value.get("problems").is_some() {
        serde_json::from_value::<ProblemList>(value)?.problems
    } else {
        vec![serde_json::from_value::<ProblemSpec>(value)?]
    };
    specs.iter().map(Problem::from_spec).collect()
}

pub fn load_problems(path: &Path) -> Result<Vec<Problem>, ProblemError> {
    let text = std::fs::read_to_string(path).map_err(|err| ProblemError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;
    parse_problems(&text)
}

pub fn demo_problems() -> Result<Vec<Problem>, ProblemError> {
    parse_problems(DEMO_PROBLEMS)
}

/// Error type for reading problem descriptions.
#[derive(Debug)]
pub enum ProblemError {
    Io { path: String, message: String },
    Json(serde_json::Error),
    /// A parameter's dimension could not be built.
    Quantity { param: String, source: QuantityError },
    /// Both `dim` and `quantity` were given.
    ConflictingDim { param: String },
    DuplicateName { name: String },
    /// A repeating or dependent entry names no parameter.
    UnknownName { name: String, role: &'static str },
}

impl fmt::Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemError::Io { path, message } => {
                write!(f, "failed to read '{}': {}", path, message)
            }
            ProblemError::Json(err) => write!(f, "invalid problem description: {}", err),
            ProblemError::Quantity { param, source } => {
                write!(f, "parameter '{}': {}", param, source)
            }
            ProblemError::ConflictingDim { param } => write!(
                f,
                "parameter '{}' gives both 'dim' and 'quantity'",
                param
            ),
            ProblemError::DuplicateName { name } => {
                write!(f, "parameter '{}' is defined more than once", name)
            }
            ProblemError::UnknownName { name, role } => {
                write!(f, "{} parameter '{}' is not defined", role, name)
            }
        }
    }
}

impl std::error::Error for ProblemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProblemError::Json(err) => Some(err),
            ProblemError::Quantity { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ProblemError {
    fn from(err: serde_json::Error) -> Self {
        ProblemError::Json(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::si;

    #[test]
    fn explicit_and_named_dimensions_resolve() {
        let problems = parse_problems(
            r#"{
                "title": "drag",
                "parameters": [
                    {"name": "DeltaP", "dim": [1, -2, -2]},
                    {"name": "D", "quantity": "length"},
                    {"name": "Re"}
                ],
                "repeating": ["D"],
                "dependent": "DeltaP"
            }"#,
        )
        .unwrap();
        assert_eq!(problems.len(), 1);
        let p = &problems[0];
        assert_eq!(p.title.as_deref(), Some("drag"));
        assert_eq!(p.params.len(), 3);
        assert_eq!(*p.params[p.repeating[0]].dim(), si::LENGTH);
        assert_eq!(p.dependent, p.params.find("DeltaP"));
        assert!(p.params[p.params.find("Re").unwrap()].dim().is_dimensionless());
    }

    #[test]
    fn unknown_quantity_is_a_configuration_error() {
        let err = parse_problems(r#"{"parameters": [{"name": "x", "quantity": "speed"}]}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ProblemError::Quantity {
                source: QuantityError::UnknownQuantity { .. },
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "parameter 'x': unknown quantity type 'speed'"
        );
    }

    #[test]
    fn malformed_descriptions_are_rejected() {
        let both = r#"{"parameters": [{"name": "x", "dim": [1], "quantity": "mass"}]}"#;
        assert!(matches!(
            parse_problems(both),
            Err(ProblemError::ConflictingDim { .. })
        ));

        let dup = r#"{"parameters": [{"name": "x"}, {"name": "x"}]}"#;
        assert!(matches!(
            parse_problems(dup),
            Err(ProblemError::DuplicateName { .. })
        ));

        let missing = r#"{"parameters": [{"name": "x"}], "dependent": "y"}"#;
        match parse_problems(missing) {
            Err(ProblemError::UnknownName { name, role }) => {
                assert_eq!(name, "y");
                assert_eq!(role, "dependent");
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let long = r#"{"parameters": [{"name": "x", "dim": [0, 0, 0, 0, 0, 0, 0, 1]}]}"#;
        assert!(matches!(
            parse_problems(long),
            Err(ProblemError::Quantity {
                source: QuantityError::DimTooLong { len: 8 },
                ..
            })
        ));

        assert!(matches!(
            parse_problems("{\"parameters\": [], \"extra\": 1}"),
            Err(ProblemError::Json(_))
        ));
    }

    #[test]
    fn problem_lists_parse_in_order() {
        let problems = parse_problems(
            r#"{"problems": [
                {"title": "a", "parameters": [{"name": "x"}]},
                {"title": "b", "parameters": [{"name": "y", "quantity": "volumne"}]}
            ]}"#,
        )
        .unwrap();
        let titles: Vec<_> = problems.iter().map(|p| p.title.as_deref()).collect();
        assert_eq!(titles, vec![Some("a"), Some("b")]);
        let y = problems[1].params.find("y").unwrap();
        assert_eq!(*problems[1].params[y].dim(), si::VOLUME);
    }

    #[test]
    fn demo_problems_parse() {
        let problems = demo_problems().unwrap();
        assert_eq!(problems.len(), 4);
    }
}
