use etcha_core::shapes::{Point, Rect};
use unicode_width::UnicodeWidthStr;

use crate::client::{
    composer::{layouter, Context},
    style::{Color, Style},
    surface::Surface,
};

use super::Widget;

/// Bottom bar: mode, cursor position, trail length and the last log line.
#[derive(Debug, Default)]
pub struct StatusWidget;

impl Widget for StatusWidget {
    fn draw(&self, area: Rect, surface: &mut Surface, ctx: &Context<'_>) {
        if area.area() == 0 {
            return;
        }

        let style = Style::default().fg(Color::Black).bg(Color::Gray);

        for x in area.left()..area.right() {
            let idx = surface.index_of(Point::new(x, area.y));
            surface[idx].set_symbol(" ").set_style(style);
        }

        let session = &ctx.session;
        let drawer = &session.drawer;
        let position = drawer.position();

        let mut left = format!(
            " {} | ({}, {}) | {} steps",
            drawer.mode(),
            position.x,
            position.y,
            drawer.executed().len()
        );

        if session.focus.is_script() {
            left.push_str(" | edit");
        }

        surface.set_stringn(
            Point::new(area.x, area.y),
            &left,
            area.width as usize,
            style,
        );

        if let Some(log) = session.last_log() {
            let x = area.x + left.width() as u16 + 3;

            if x < area.right() {
                surface.set_stringn(
                    Point::new(x, area.y),
                    log,
                    (area.right() - x) as usize,
                    style,
                );
            }
        }
    }

    fn area(&self, viewport: Rect) -> Rect {
        layouter::status(viewport)
    }
}
