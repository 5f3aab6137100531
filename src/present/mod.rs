pub mod highlight;
pub use highlight::*;

pub mod presenter;
pub use presenter::*;

pub mod recorder;
pub use recorder::*;
