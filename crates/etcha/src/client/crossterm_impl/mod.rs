mod canvas;
mod utils;

pub use canvas::CrosstermCanvas;
pub use utils::RawTerminalGuard;
