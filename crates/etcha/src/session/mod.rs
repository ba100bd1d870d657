mod drawer;
mod keymap;
mod mode;
pub mod utils;

use etcha_core::{config::SketchConfig, shapes::Rect};

pub use drawer::{Busy, Drawer};
pub use keymap::{Action, Keymap};
pub use mode::Mode;

use crate::client::Redraw;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sketch,
    Script,
}

impl Focus {
    pub const fn is_script(&self) -> bool {
        matches!(self, Self::Script)
    }
}

/// Holds application state
pub struct Session {
    pub drawer: Drawer,
    pub keymap: Keymap,
    pub focus: Focus,
    pub script_pos: usize,
    pub exit_code: Option<i32>,
    last_log: Option<String>,
}

impl Session {
    pub fn new(sketch_area: Rect, config: &SketchConfig) -> anyhow::Result<Self> {
        Ok(Self {
            drawer: Drawer::new(sketch_area, config)?,
            keymap: Keymap::sketch_mode(),
            focus: Focus::Sketch,
            script_pos: 0,
            exit_code: None,
            last_log: None,
        })
    }

    pub const fn should_exit(&self) -> bool {
        self.exit_code.is_some()
    }

    pub fn quit(&mut self) {
        self.exit_code = Some(0);
    }

    pub fn clear_script(&mut self) {
        self.drawer.clear_script();
        self.script_pos = 0;
    }

    pub fn on_log(&mut self, log: String) -> Redraw {
        self.last_log = Some(log);
        Redraw(true)
    }

    pub fn last_log(&self) -> Option<&str> {
        self.last_log.as_deref()
    }
}
