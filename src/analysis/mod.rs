//! Buckingham Pi analysis: rank, repeating variables, null spaces and exponent scaling.

pub mod error;
pub mod normalize;
pub mod param;
pub mod pipeline;
pub mod rank;
pub mod repeating;
pub mod solve;

pub use error::AnalysisError;
pub use normalize::{is_whole, normalize, try_int};
pub use param::{ParamId, ParamSet, Parameter};
pub use pipeline::{run, solve_group, Analysis, PiGroup, RepeatingSource};
pub use rank::{rank, term_counts, TermCounts};
pub use repeating::{find_repeating, validate, RepeatingIssue, Validation};
