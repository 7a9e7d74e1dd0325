//! Choosing and checking the repeating variables.
//!
//! A repeating set is valid when it has exactly as many members as the rank
//! of the full dimension matrix, and its own columns reach that rank.

use std::fmt;

use super::error::AnalysisError;
use super::param::{ParamId, ParamSet};
use super::rank::rank;

/// Why a repeating set was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatingIssue {
    WrongLength { expected: usize, found: usize },
    NotIndependent { expected: usize, rank: usize },
}

impl fmt::Display for RepeatingIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepeatingIssue::WrongLength { expected, found } => write!(
                f,
                "repeating list should be of length {}, found {}",
                expected, found
            ),
            RepeatingIssue::NotIndependent { expected, rank } => write!(
                f,
                "repeating parameters are not dimensionally independent (rank {}, expected {})",
                rank, expected
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid(RepeatingIssue),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    pub fn issue(&self) -> Option<RepeatingIssue> {
        match self {
            Validation::Valid => None,
            Validation::Invalid(issue) => Some(*issue),
        }
    }

    /// Human-readable reason, `None` when valid.
    pub fn reason(&self) -> Option<String> {
        self.issue().map(|issue| issue.to_string())
    }
}

/// Checks a repeating set against the whole parameter list.
pub fn validate(params: &ParamSet, repeating: &[ParamId]) -> Result<Validation, AnalysisError> {
    let required = rank(&params.all_dims());
    validate_with_rank(params, repeating, required)
}

fn validate_with_rank(
    params: &ParamSet,
    repeating: &[ParamId],
    required: usize,
) -> Result<Validation, AnalysisError> {
    let dims = params.dims(repeating)?;
    if repeating.len() != required {
        return Ok(Validation::Invalid(RepeatingIssue::WrongLength {
            expected: required,
            found: repeating.len(),
        }));
    }

    let subset_rank = rank(&dims);
    if subset_rank < required {
        return Ok(Validation::Invalid(RepeatingIssue::NotIndependent {
            expected: required,
            rank: subset_rank,
        }));
    }

    Ok(Validation::Valid)
}

/// Finds the first valid repeating set, skipping `dependent`.
///
/// Candidates are the parameters in list order minus `dependent`. Subsets
/// are tried in lexicographic combination order over that pool, so the
/// result depends only on the order parameters were added.
pub fn find_repeating(
    params: &ParamSet,
    dependent: Option<ParamId>,
) -> Result<Vec<ParamId>, AnalysisError> {
    let required = rank(&params.all_dims());
    let pool: Vec<ParamId> = params.ids().filter(|id| Some(*id) != dependent).collect();

    for combo in Combinations::new(pool.len(), required) {
        let candidate: Vec<ParamId> = combo.iter().map(|&i| pool[i]).collect();
        if validate_with_rank(params, &candidate, required)?.is_valid() {
            log::debug!(
                "repeating set found: {:?}",
                candidate.iter().map(|id| params[*id].name()).collect::<Vec<_>>()
            );
            return Ok(candidate);
        }
    }

    Err(AnalysisError::SearchExhausted {
        required,
        pool: pool.len(),
    })
}

/// Index combinations of `k` out of `n` in lexicographic order.
struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        let k = self.indices.len();
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] != i + self.n - k {
                break;
            }
        }

        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}
