pub mod analysis;
pub mod problem;
pub mod report;
pub mod units;

pub use analysis::{run, Analysis, AnalysisError, ParamId, ParamSet, Parameter, PiGroup};
