pub mod df;
pub mod error;
#[cfg(feature = "random")]
pub mod random;

pub use df::{ColumnVector, DataFrame, DataVector, RowVector};
pub use error::FrameError;
