use crossterm::event::{Event, KeyCode, KeyModifiers};
use etcha_core::{
    graphemes,
    script::Script,
    shapes::{Point, Rect},
};

use crate::{
    client::{
        composer::{layouter, Context, Cursor, EventResult},
        style::{CursorKind, Style},
        surface::Surface,
    },
    session::Focus,
};

use super::Widget;

/// Program pane. A plain editor over the recorded script; grabs the
/// keyboard while it holds focus, except for CONTROL/ALT chords.
#[derive(Debug, Default)]
pub struct ScriptWidget {
    cursor: Option<Cursor>,
    vscroll: usize,
}

impl Widget for ScriptWidget {
    fn draw(&self, area: Rect, surface: &mut Surface, ctx: &Context<'_>) {
        if area.area() == 0 {
            return;
        }

        let text = ctx.session.drawer.script().text();

        let max_y = (area.height as usize).min(text.len_lines().saturating_sub(self.vscroll));

        let style = Style::default();

        for y in 0..max_y {
            let line = text.line(y + self.vscroll);

            surface.set_stringn(
                Point::new(area.x, area.y + y as u16),
                &line.to_string(),
                area.width as usize,
                style,
            );
        }
    }

    fn handle_event(&mut self, event: &Event, ctx: &mut Context) -> EventResult {
        if !ctx.session.focus.is_script() {
            return EventResult::Ignored;
        }

        let key = match event {
            Event::Key(ev) => *ev,
            _ => return EventResult::Ignored,
        };

        // chords stay global
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return EventResult::Ignored;
        }

        let session = &mut *ctx.session;
        let pos = session.script_pos;

        match key.code {
            KeyCode::Esc | KeyCode::Tab => session.focus = Focus::Sketch,
            KeyCode::Char(ch) => {
                session.drawer.script_mut().insert_char(pos, ch);
                session.script_pos += 1;
            }
            KeyCode::Enter => {
                session.drawer.script_mut().insert_char(pos, '\n');
                session.script_pos += 1;
            }
            KeyCode::Backspace => {
                let start =
                    graphemes::prev_grapheme_boundary(session.drawer.script().text().slice(..), pos);
                session.drawer.script_mut().remove(start..pos);
                session.script_pos = start;
            }
            KeyCode::Left => {
                session.script_pos =
                    graphemes::prev_grapheme_boundary(session.drawer.script().text().slice(..), pos);
            }
            KeyCode::Right => {
                session.script_pos =
                    graphemes::next_grapheme_boundary(session.drawer.script().text().slice(..), pos);
            }
            KeyCode::Up => session.script_pos = vertical_move(session.drawer.script(), pos, true),
            KeyCode::Down => {
                session.script_pos = vertical_move(session.drawer.script(), pos, false);
            }
            _ => {}
        }

        EventResult::Consumed
    }

    fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }

    fn update_state(&mut self, area: Rect, ctx: &mut Context) {
        let session = &mut *ctx.session;

        let max_pos = session.drawer.script().len_chars();
        session.script_pos = session.script_pos.min(max_pos);

        let text = session.drawer.script().text();
        let line_idx = text.char_to_line(session.script_pos);
        let offset = session.script_pos - text.line_to_char(line_idx);
        let col = session.drawer.script().column(line_idx, offset);

        let height = area.height as usize;

        if line_idx < self.vscroll {
            self.vscroll = line_idx;
        } else if height > 0 && line_idx >= self.vscroll + height {
            self.vscroll = line_idx + 1 - height;
        }

        self.cursor = if session.focus.is_script() {
            let x = (col as u16).min(area.width.saturating_sub(1));
            let y = ((line_idx - self.vscroll) as u16).min(area.height.saturating_sub(1));

            Some(Cursor(
                Point::new(area.x + x, area.y + y),
                CursorKind::Line,
            ))
        } else {
            None
        };
    }

    fn area(&self, viewport: Rect) -> Rect {
        layouter::script(viewport)
    }
}

/// Moves one line up or down keeping the char offset, clamped to the
/// target line's content (its trailing newline is not a valid stop).
fn vertical_move(script: &Script, pos: usize, up: bool) -> usize {
    let text = script.text();
    let line_idx = text.char_to_line(pos);

    let target = if up {
        match line_idx.checked_sub(1) {
            Some(target) => target,
            None => return pos,
        }
    } else {
        let target = line_idx + 1;

        if target >= text.len_lines() {
            return pos;
        }

        target
    };

    let offset = pos - text.line_to_char(line_idx);

    let target_line = text.line(target);
    let mut max_offset = target_line.len_chars();

    if max_offset > 0 && target_line.char(max_offset - 1) == '\n' {
        max_offset -= 1;
    }

    text.line_to_char(target) + offset.min(max_offset)
}
