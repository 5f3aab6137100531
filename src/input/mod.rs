pub mod adapter;
pub use adapter::*;

pub mod bounds;
pub use bounds::*;

pub mod device;
pub use device::*;
