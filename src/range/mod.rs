pub mod selection;
pub use selection::*;

pub mod summary;
pub use summary::*;
