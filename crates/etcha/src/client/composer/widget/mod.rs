mod script;
mod sketch;
mod status;

pub use script::ScriptWidget;
pub use sketch::SketchWidget;
pub use status::StatusWidget;

use crossterm::event::Event;
use etcha_core::shapes::Rect;

use crate::client::surface::Surface;

use super::{Context, Cursor, EventResult};

pub trait Widget {
    fn draw(&self, area: Rect, surface: &mut Surface, ctx: &Context<'_>);

    fn should_update(&self) -> bool {
        true
    }

    fn handle_event(&mut self, _event: &Event, _context: &mut Context) -> EventResult {
        EventResult::Ignored
    }

    fn cursor(&self) -> Option<Cursor> {
        None
    }

    fn update_state(&mut self, _: Rect, _context: &mut Context) {}

    /// Probably not a good idea but ok for now
    fn area(&self, viewport: Rect) -> Rect;
}
