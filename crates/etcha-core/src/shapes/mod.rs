mod grid;
mod point;
mod rect;

pub use grid::{Delta, Grid, GridError, GridPos};
pub use point::Point;
pub use rect::Rect;
