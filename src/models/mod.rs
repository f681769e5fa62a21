pub mod color;
pub mod grid;
pub mod matrix;
pub mod module;

pub use color::parse_color;
pub use grid::ModuleGrid;
pub use matrix::BitMatrix;
pub use module::{Corner, CornerDecisions, CornerRounding, Direction, Module, Neighbors};
