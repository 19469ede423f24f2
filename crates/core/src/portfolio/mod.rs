pub mod summary;
pub mod valuation;

pub use summary::*;
pub use valuation::*;
