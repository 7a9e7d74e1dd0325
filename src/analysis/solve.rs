use nalgebra::DMatrix;

use crate::units::{DimVector, NUM_BASE_DIMS};

use super::error::AnalysisError;
use super::param::{ParamId, ParamSet};

/// Absolute floor of the null-direction cutoff; see [`null_vector`].
pub const NULL_TOLERANCE: f64 = 1e-15;
/// Null-vector components smaller than this are numerical noise.
pub const NOISE_FLOOR: f64 = 1e-8;

/// Raw exponents making `subject` dimensionless together with `repeating`.
///
/// The result is ordered `[subject, repeating...]` and is only defined up to
/// a nonzero scale factor until it is passed through `normalize`.
pub fn raw_exponents(
    params: &ParamSet,
    subject: ParamId,
    repeating: &[ParamId],
) -> Result<Vec<f64>, AnalysisError> {
    let mut dims = Vec::with_capacity(repeating.len() + 1);
    dims.extend(params.dims(&[subject])?);
    dims.extend(params.dims(repeating)?);

    let name = params[subject].name();
    let null = null_vector(&dims).map_err(|dimension| AnalysisError::DegenerateNullSpace {
        param: name.to_string(),
        dimension,
    })?;

    log::debug!("raw null vector for '{}': {:?}", name, null);
    Ok(null)
}

/// Single null-space direction of the column matrix built from `dims`.
///
/// Returns the observed null-space dimension when it is not exactly one.
pub fn null_vector(dims: &[DimVector]) -> Result<Vec<f64>, usize> {
    let cols = dims.len();
    if cols == 0 {
        return Err(0);
    }
    // Pad to square so every right-singular vector has a singular value.
    let rows = NUM_BASE_DIMS.max(cols);
    let matrix = DMatrix::from_fn(rows, cols, |r, c| {
        if r < NUM_BASE_DIMS {
            dims[c].as_array()[r]
        } else {
            0.0
        }
    });

    let svd = matrix.svd(false, true);
    let Some(v_t) = svd.v_t else {
        return Err(0);
    };

    let sigma_max = svd.singular_values.max();
    // NULL_TOLERANCE is only the floor; the relative term covers SVD round-off
    // on exact null directions that land a few ulps above it.
    let tol = NULL_TOLERANCE.max(f64::EPSILON * rows as f64 * sigma_max);
    let null: Vec<usize> = svd
        .singular_values
        .iter()
        .enumerate()
        .filter(|(_, s)| **s <= tol)
        .map(|(i, _)| i)
        .collect();

    if null.len() != 1 {
        return Err(null.len());
    }

    Ok(v_t
        .row(null[0])
        .iter()
        .map(|v| if v.abs() < NOISE_FLOOR { 0.0 } else { *v })
        .collect())
}
