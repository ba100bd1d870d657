use crossterm::event::Event;
use etcha_core::shapes::Rect;

use crate::{
    client::{
        composer::{layouter, Context, EventResult},
        surface::Surface,
    },
    session::{Action, Focus},
};

use super::Widget;

/// Drawing pane. Blits the drawer's raster and dispatches bound keys.
#[derive(Debug, Default)]
pub struct SketchWidget;

impl Widget for SketchWidget {
    fn draw(&self, area: Rect, surface: &mut Surface, ctx: &Context<'_>) {
        surface.blit(ctx.session.drawer.sketch(), area);
    }

    fn handle_event(&mut self, event: &Event, ctx: &mut Context) -> EventResult {
        let key = match event {
            Event::Key(ev) => *ev,
            _ => return EventResult::Ignored,
        };

        let action = match ctx.session.keymap.feed(key) {
            Some(action) => action,
            None => return EventResult::Ignored,
        };

        match action {
            Action::Turtle(command) => {
                if let Err(err) = ctx.session.drawer.execute(command) {
                    log::trace!("{command} dropped: {err}");
                }
            }
            Action::Run => {
                if let Err(err) = ctx.session.drawer.start_program() {
                    log::trace!("run dropped: {err}");
                }
            }
            Action::ClearScript => ctx.session.clear_script(),
            Action::EditScript => ctx.session.focus = Focus::Script,
            Action::Quit => ctx.session.quit(),
        }

        EventResult::Consumed
    }

    fn area(&self, viewport: Rect) -> Rect {
        layouter::sketch(viewport)
    }
}

#[cfg(test)]
mod test {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use etcha_core::{command::Command, config::SketchConfig, shapes::GridPos};

    use super::*;
    use crate::session::{Mode, Session};

    fn test_session() -> Session {
        let config = SketchConfig {
            pitch: 5,
            ..Default::default()
        };

        Session::new(Rect::new(0, 0, 100, 100), &config).unwrap()
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn arrows_move_the_cursor() {
        let mut session = test_session();
        let mut widget = SketchWidget::default();

        {
            let mut ctx = Context {
                session: &mut session,
            };

            widget.handle_event(&key(KeyCode::Right), &mut ctx);
            widget.handle_event(&key(KeyCode::Down), &mut ctx);
        }

        assert_eq!(session.drawer.position(), GridPos::new(11, 11));
        assert_eq!(
            session.drawer.executed(),
            [Command::Right, Command::Down]
        );
    }

    #[test]
    fn run_key_replays_the_script() {
        let mut session = test_session();
        let mut widget = SketchWidget::default();

        let mut ctx = Context {
            session: &mut session,
        };

        widget.handle_event(&key(KeyCode::Up), &mut ctx);
        widget.handle_event(&key(KeyCode::Char('r')), &mut ctx);

        assert_eq!(ctx.session.drawer.mode(), Mode::Running);
        // replay starts from a fresh state with the first command applied
        assert_eq!(ctx.session.drawer.position(), GridPos::new(10, 9));
        assert!(ctx.session.drawer.executed().is_empty());
    }

    #[test]
    fn unbound_keys_fall_through() {
        let mut session = test_session();
        let mut widget = SketchWidget::default();

        let mut ctx = Context {
            session: &mut session,
        };

        let result = widget.handle_event(&key(KeyCode::Char('z')), &mut ctx);

        assert!(matches!(result, EventResult::Ignored));
    }

    #[test]
    fn quit_sets_exit_code() {
        let mut session = test_session();
        let mut widget = SketchWidget::default();

        {
            let mut ctx = Context {
                session: &mut session,
            };

            widget.handle_event(
                &Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
                &mut ctx,
            );
        }

        assert_eq!(session.exit_code, Some(0));
    }
}
