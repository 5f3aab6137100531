pub mod axis;
pub use axis::*;

pub mod button;
pub use button::*;

pub mod controller;
pub use controller::*;

pub mod event;
pub use event::*;

pub mod mode;
pub use mode::*;

pub mod session;
pub use session::*;
