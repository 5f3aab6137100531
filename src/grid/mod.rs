pub mod category;
pub use category::*;

pub mod cells;
pub use cells::*;

pub mod hand;
pub use hand::*;

pub mod index;
pub use index::*;

pub mod position;
pub use position::*;
