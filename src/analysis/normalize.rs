//! Rescaling of raw null vectors into readable exponents.
//!
//! A null vector is defined only up to a nonzero scale. Four candidate
//! factors are scored by how many exponents come out whole and how many come
//! out positive; the first best candidate wins.

/// Decimal places used by the whole-number test.
pub const WHOLE_DECIMALS: i32 = 6;

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// True when `value` rounds to a whole number at [`WHOLE_DECIMALS`] places.
pub fn is_whole(value: f64) -> bool {
    round_to(value, WHOLE_DECIMALS) % 1.0 == 0.0
}

/// Integer value of `value` if it passes [`is_whole`].
pub fn try_int(value: f64) -> Option<i64> {
    if is_whole(value) {
        Some(round_to(value, WHOLE_DECIMALS) as i64)
    } else {
        None
    }
}

/// Whole entries plus strictly positive entries.
pub fn score(trial: &[f64]) -> usize {
    let whole = trial.iter().filter(|p| is_whole(**p)).count();
    let positive = trial.iter().filter(|p| **p > 0.0).count();
    whole + positive
}

/// Best of `+1/max|p|`, `-1/max|p|`, `+1/min|p|`, `-1/min|p|` (minimum over non-zero entries).
///
/// Returns `None` when every power is zero.
pub fn best_factor(powers: &[f64]) -> Option<f64> {
    let max_abs = powers.iter().fold(0.0, |m: f64, p| m.max(p.abs()));
    let min_abs = powers
        .iter()
        .filter(|p| **p != 0.0)
        .fold(f64::INFINITY, |m: f64, p| m.min(p.abs()));
    if max_abs == 0.0 {
        return None;
    }

    let candidates = [1.0 / max_abs, -1.0 / max_abs, 1.0 / min_abs, -1.0 / min_abs];
    let mut best: Option<(f64, usize)> = None;
    for factor in candidates {
        let trial: Vec<f64> = powers.iter().map(|p| p * factor).collect();
        let s = score(&trial);
        log::trace!("factor {:.6} scores {}", factor, s);
        if best.map_or(true, |(_, top)| s > top) {
            best = Some((factor, s));
        }
    }
    best.map(|(factor, _)| factor)
}

/// Rescales a raw null vector; `None` when it has no non-zero entry.
///
/// The input is first brought to unit max-norm with its leading non-zero
/// entry positive, so the result does not depend on the scale or sign the
/// decomposition happened to return.
pub fn normalize(raw: &[f64]) -> Option<Vec<f64>> {
    let max_abs = raw.iter().fold(0.0, |m: f64, p| m.max(p.abs()));
    let lead = raw.iter().copied().find(|p| *p != 0.0)?;
    let unit_scale = lead.signum() / max_abs;
    let unit: Vec<f64> = raw.iter().map(|p| p * unit_scale).collect();

    let factor = best_factor(&unit)?;
    Some(unit.iter().map(|p| p * factor).collect())
}
