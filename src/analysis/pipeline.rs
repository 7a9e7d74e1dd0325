use crate::units::DimVector;

use super::error::AnalysisError;
use super::normalize::normalize;
use super::param::{ParamId, ParamSet};
use super::rank::{rank, TermCounts};
use super::repeating::{find_repeating, validate, Validation};
use super::solve::raw_exponents;

/// Residual exponent magnitude still accepted as dimensionless.
pub const DIMENSIONLESS_TOLERANCE: f64 = 1e-6;

/// A dimensionless product `∏ param^power`.
///
/// Entries are ordered `[subject, repeating...]`. Zero powers are kept in the
/// entry list; they simply do not contribute to the product.
#[derive(Debug, Clone, PartialEq)]
pub struct PiGroup {
    subject: ParamId,
    entries: Vec<(ParamId, f64)>,
}

impl PiGroup {
    /// The non-repeating parameter this group was solved for.
    pub fn subject(&self) -> ParamId {
        self.subject
    }

    pub fn entries(&self) -> &[(ParamId, f64)] {
        &self.entries
    }

    pub fn nonzero_entries(&self) -> impl Iterator<Item = (ParamId, f64)> + '_ {
        self.entries.iter().copied().filter(|(_, p)| *p != 0.0)
    }

    pub fn power_of(&self, id: ParamId) -> f64 {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == id)
            .map_or(0.0, |(_, p)| *p)
    }

    /// Net dimension of the product.
    pub fn dimension(&self, params: &ParamSet) -> DimVector {
        self.entries
            .iter()
            .fold(DimVector::dimensionless(), |acc, (id, p)| {
                acc * params[*id].dim().powf(*p)
            })
    }

    pub fn is_dimensionless(&self, params: &ParamSet) -> bool {
        self.dimension(params)
            .is_near_dimensionless(DIMENSIONLESS_TOLERANCE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatingSource {
    /// Passed in by the caller and used as given.
    Supplied,
    /// Chosen by the combination search.
    Searched,
}

/// Outcome of a full run.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub repeating: Vec<ParamId>,
    pub source: RepeatingSource,
    /// Result of checking a supplied repeating list. Searched lists are always valid.
    pub validation: Validation,
    pub groups: Vec<PiGroup>,
}

impl Analysis {
    pub fn counts(&self) -> TermCounts {
        TermCounts {
            pi_terms: self.groups.len(),
            repeating: self.repeating.len(),
        }
    }

    pub fn group_for(&self, subject: ParamId) -> Option<&PiGroup> {
        self.groups.iter().find(|g| g.subject == subject)
    }
}

/// Solves and rescales the Pi group for one non-repeating parameter.
pub fn solve_group(
    params: &ParamSet,
    subject: ParamId,
    repeating: &[ParamId],
) -> Result<PiGroup, AnalysisError> {
    let raw = raw_exponents(params, subject, repeating)?;
    let powers = normalize(&raw).ok_or_else(|| AnalysisError::ZeroExponents {
        param: params[subject].name().to_string(),
    })?;
    log::debug!("scaled powers for '{}': {:?}", params[subject].name(), powers);

    let entries = std::iter::once(subject)
        .chain(repeating.iter().copied())
        .zip(powers)
        .collect();
    Ok(PiGroup { subject, entries })
}

/// Derives the Pi groups for `params`.
///
/// With no `repeating` list (or an empty one) the repeating set is searched
/// for, never picking `dependent`. A supplied list is validated but used
/// regardless; the outcome is reported in [`Analysis::validation`].
///
/// Groups follow parameter order with the repeating members left out.
pub fn run(
    params: &ParamSet,
    repeating: Option<&[ParamId]>,
    dependent: Option<ParamId>,
) -> Result<Analysis, AnalysisError> {
    if params.is_empty() {
        return Err(AnalysisError::EmptyParameterList);
    }
    if let Some(dep) = dependent {
        params.check(dep)?;
    }

    let (repeating, source, validation) = match repeating {
        Some(list) if !list.is_empty() => {
            let validation = validate(params, list)?;
            (list.to_vec(), RepeatingSource::Supplied, validation)
        }
        _ => (
            find_repeating(params, dependent)?,
            RepeatingSource::Searched,
            Validation::Valid,
        ),
    };

    log::debug!(
        "rank {}, repeating {:?} ({:?})",
        rank(&params.all_dims()),
        repeating
            .iter()
            .map(|id| params[*id].name())
            .collect::<Vec<_>>(),
        source
    );

    let groups = params
        .ids()
        .filter(|id| !repeating.contains(id))
        .map(|id| solve_group(params, id, &repeating))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Analysis {
        repeating,
        source,
        validation,
        groups,
    })
}
