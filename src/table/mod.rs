pub mod controller;
pub mod seed;
pub mod selection;

pub use controller::{RowAction, TableController};
pub use selection::{Selection, SelectionMode};
