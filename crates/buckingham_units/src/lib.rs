pub mod quantity;
pub mod units;

pub use quantity::{Quantity, QuantityError};
pub use units::{si, BaseDim, DimVector, NUM_BASE_DIMS};
