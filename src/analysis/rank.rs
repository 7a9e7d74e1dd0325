use nalgebra::DMatrix;

use crate::units::{DimVector, NUM_BASE_DIMS};

/// Singular values above this count towards the rank.
pub const RANK_TOLERANCE: f64 = 1e-10;

/// Stacks dimension vectors as columns: one row per base dimension, one column per parameter.
pub fn dimension_matrix(dims: &[DimVector]) -> DMatrix<f64> {
    DMatrix::from_fn(NUM_BASE_DIMS, dims.len(), |r, c| dims[c].as_array()[r])
}

/// Numerical rank of the dimension matrix built from `dims`.
pub fn rank(dims: &[DimVector]) -> usize {
    if dims.is_empty() {
        return 0;
    }
    dimension_matrix(dims)
        .singular_values()
        .iter()
        .filter(|s| **s > RANK_TOLERANCE)
        .count()
}

/// How many repeating parameters and Pi groups a parameter list calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermCounts {
    pub pi_terms: usize,
    pub repeating: usize,
}

pub fn term_counts(dims: &[DimVector]) -> TermCounts {
    let repeating = rank(dims);
    TermCounts {
        pi_terms: dims.len() - repeating,
        repeating,
    }
}
