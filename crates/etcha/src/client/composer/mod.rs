pub mod layouter;
pub mod widget;

use crossterm::event::Event;

use etcha_core::shapes::{Point, Rect};

use crate::session::Session;

use self::widget::Widget;

use super::{canvas::Canvas, style::CursorKind, surface::Surface, Redraw};

pub struct Context<'a> {
    pub session: &'a mut Session,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor(pub Point, pub CursorKind);

pub enum EventResult {
    Ignored,
    Consumed,
}

pub struct Composer {
    widgets: Vec<Box<dyn Widget>>,
    surfaces: Surfaces,
}

impl Composer {
    pub fn new(rect: Rect) -> Self {
        let surfaces = Surfaces::new(rect);

        Self {
            surfaces,
            widgets: vec![],
        }
    }

    pub fn render<C: Canvas>(
        &mut self,
        canvas: &mut C,
        ctx: &mut Context<'_>,
    ) -> anyhow::Result<()> {
        let viewport = self.surfaces.surface_mut().area;

        for widget in &mut self.widgets {
            if widget.should_update() {
                let area = widget.area(viewport);
                widget.update_state(area, ctx);
            }
        }

        let current_surface = self.surfaces.surface_mut();

        for widget in &self.widgets {
            widget.draw(widget.area(viewport), current_surface, ctx);
        }

        self.surfaces.render(canvas)?;

        // topmost widget owns the terminal cursor
        let cursor = self.widgets.iter().rev().find_map(|widget| widget.cursor());

        match cursor {
            Some(Cursor(point, kind)) => {
                canvas.move_cursor(point)?;
                canvas.set_cursor_kind(kind)?;
                canvas.show_cursor()?;
            }
            None => canvas.hide_cursor()?,
        }

        Ok(())
    }

    pub fn handle_event(&mut self, event: Event, ctx: &mut Context) -> Redraw {
        let resized = if let Event::Resize(x, y) = event {
            self.surfaces.resize(Rect::new(0, 0, x, y));
            true
        } else {
            false
        };

        let mut consumed = false;

        for widget in self.widgets.iter_mut().rev() {
            if matches!(widget.handle_event(&event, ctx), EventResult::Consumed) {
                consumed = true;
                break;
            }
        }

        Redraw(consumed || resized)
    }

    pub fn push_widget<W: Widget + 'static>(&mut self, widget: W) {
        self.widgets.push(Box::new(widget));
    }
}

struct Surfaces {
    surfaces: [Surface; 2],
    current_surface: usize,
}

impl Surfaces {
    pub fn new(rect: Rect) -> Self {
        let surfaces = [Surface::empty(rect), Surface::empty(rect)];

        Self {
            surfaces,
            current_surface: 0,
        }
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surfaces[self.current_surface]
    }

    pub fn render<C: Canvas>(&mut self, canvas: &mut C) -> anyhow::Result<()> {
        let current_surface = &self.surfaces[self.current_surface];
        let prev_surface = &self.surfaces[1 - self.current_surface];

        let diff = prev_surface.diff(current_surface);
        canvas.draw(diff.into_iter())?;
        canvas.flush()?;

        // swap surfaces
        self.surfaces[1 - self.current_surface].reset();
        self.current_surface = 1 - self.current_surface;

        Ok(())
    }

    pub fn resize(&mut self, rect: Rect) {
        self.surfaces[self.current_surface].resize(rect);
        self.surfaces[1 - self.current_surface].resize(rect);
    }
}
