use std::{collections::VecDeque, time::Duration};

use etcha_core::{
    command::Command,
    config::SketchConfig,
    script::Script,
    shapes::{Delta, Grid, GridPos, Rect},
};
use thiserror::Error;

use crate::client::{paint, style::Style, surface::Surface};

use super::Mode;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("a program is already running")]
pub struct Busy;

/// Cursor on a grid, leaving a trail. Interactive keys and replayed
/// programs funnel through the same handlers; replay owns the state for
/// as long as [`Mode::Running`] lasts.
pub struct Drawer {
    grid: Grid,
    grid_style: Style,
    path_style: Style,
    cursor_style: Style,
    weight: u16,
    step_delay: Duration,
    position: GridPos,
    mode: Mode,
    executed: Vec<Command>,
    script: Script,
    sketch: Surface,
    queue: VecDeque<Command>,
}

impl Drawer {
    pub fn new(area: Rect, config: &SketchConfig) -> anyhow::Result<Self> {
        let grid = Grid::new(area.width, area.height, config.pitch)?;

        let grid_style = Style::default().fg(config.grid_color.parse()?);
        let path_style = Style::default().fg(config.path_color.parse()?);
        let cursor_style = Style::default().fg(config.cursor_color.parse()?);

        let mut drawer = Self {
            grid,
            grid_style,
            path_style,
            cursor_style,
            weight: config.weight,
            step_delay: Duration::from_millis(config.step_delay_ms),
            position: GridPos::new(0, 0),
            mode: Mode::Interactive,
            executed: vec![],
            script: Script::new(),
            sketch: Surface::empty(Rect::new(0, 0, area.width, area.height)),
            queue: VecDeque::new(),
        };

        drawer.reset_state();

        Ok(drawer)
    }

    pub const fn position(&self) -> GridPos {
        self.position
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub fn executed(&self) -> &[Command] {
        &self.executed
    }

    pub const fn script(&self) -> &Script {
        &self.script
    }

    pub fn script_mut(&mut self) -> &mut Script {
        &mut self.script
    }

    pub const fn sketch(&self) -> &Surface {
        &self.sketch
    }

    pub const fn step_delay(&self) -> Duration {
        self.step_delay
    }

    /// Applies a single interactive command, then records it in the trail
    /// and at the end of the script.
    pub fn execute(&mut self, command: Command) -> Result<(), Busy> {
        if self.mode.is_running() {
            return Err(Busy);
        }

        self.apply(command);
        self.executed.push(command);
        self.script.record(command);

        Ok(())
    }

    /// Snapshots the script and starts replaying it from a fresh state.
    /// The first command lands immediately, the rest are released by
    /// [`Self::step_program`]. Replayed commands are not recorded.
    pub fn start_program(&mut self) -> Result<(), Busy> {
        if self.mode.is_running() {
            return Err(Busy);
        }

        self.queue = VecDeque::from(self.script.commands());
        self.mode = Mode::Running;

        self.reset_state();
        self.step_program();

        Ok(())
    }

    /// Releases the next queued command. One extra step after the last
    /// command switches back to interactive mode.
    pub fn step_program(&mut self) {
        debug_assert!(self.mode.is_running());

        match self.queue.pop_front() {
            Some(command) => self.apply(command),
            None => self.mode = Mode::Interactive,
        }
    }

    pub fn clear_script(&mut self) {
        self.script.clear();
    }

    fn apply(&mut self, command: Command) {
        match command.delta() {
            Some(delta) => self.apply_move(delta),
            None => self.reset_state(),
        }
    }

    fn apply_move(&mut self, delta: Delta) {
        let from = self.position;
        let to = from.translated(delta);

        paint::segment(&mut self.sketch, &self.grid, from, to, self.path_style, self.weight);

        self.position = to;
        self.draw_cursor();
    }

    fn draw_cursor(&mut self) {
        paint::point(
            &mut self.sketch,
            &self.grid,
            self.position,
            self.cursor_style,
            self.weight,
        );
    }

    fn reset_state(&mut self) {
        self.position = self.grid.center();
        self.executed.clear();

        paint::clear(&mut self.sketch);
        paint::grid(&mut self.sketch, &self.grid, self.grid_style);
        self.draw_cursor();
    }
}

#[cfg(test)]
mod test {
    use etcha_core::shapes::Point;

    use super::*;
    use crate::client::style::Color;

    // 100x100 cells with a pitch of 5 gives the same 20x20 grid as the
    // classic 500x500/25 canvas
    fn drawer() -> Drawer {
        let config = SketchConfig {
            pitch: 5,
            ..Default::default()
        };

        Drawer::new(Rect::new(0, 0, 100, 100), &config).unwrap()
    }

    fn symbol_at(drawer: &Drawer, x: u16, y: u16) -> &str {
        let sketch = drawer.sketch();
        &sketch[sketch.index_of(Point::new(x, y))].symbol
    }

    #[test]
    fn starts_centered_with_no_trail() {
        let drawer = drawer();

        assert_eq!(drawer.position(), GridPos::new(10, 10));
        assert_eq!(drawer.mode(), Mode::Interactive);
        assert!(drawer.executed().is_empty());
        assert!(drawer.script().is_empty());
    }

    #[test]
    fn interactive_commands_move_and_record() {
        let mut drawer = drawer();

        drawer.execute(Command::Right).unwrap();
        drawer.execute(Command::Right).unwrap();
        drawer.execute(Command::Down).unwrap();

        assert_eq!(drawer.position(), GridPos::new(12, 11));
        assert_eq!(
            drawer.executed(),
            [Command::Right, Command::Right, Command::Down]
        );
        assert_eq!(drawer.script().text().to_string(), "right\nright\ndown\n");
    }

    #[test]
    fn position_is_center_plus_vector_sum() {
        let mut drawer = drawer();
        let center = drawer.position();

        let commands = [
            Command::Up,
            Command::Left,
            Command::Left,
            Command::Down,
            Command::Down,
            Command::Right,
        ];

        let mut sum = (0, 0);

        for command in commands {
            drawer.execute(command).unwrap();

            let delta = command.delta().unwrap();
            sum = (sum.0 + delta.dx, sum.1 + delta.dy);
        }

        assert_eq!(
            drawer.position(),
            GridPos::new(center.x + sum.0, center.y + sum.1)
        );
    }

    #[test]
    fn reset_recenters_and_clears_the_trail_but_not_the_script() {
        let mut drawer = drawer();

        drawer.execute(Command::Up).unwrap();
        drawer.execute(Command::Reset).unwrap();

        assert_eq!(drawer.position(), GridPos::new(10, 10));
        // the reset itself is recorded after the handler ran
        assert_eq!(drawer.executed(), [Command::Reset]);
        assert_eq!(drawer.script().text().to_string(), "up\nreset\n");
    }

    #[test]
    fn program_replays_from_fresh_state() {
        let mut drawer = drawer();

        drawer.execute(Command::Down).unwrap();
        *drawer.script_mut() = Script::from_text("up\nup\nleft\n");

        drawer.start_program().unwrap();

        // reset plus the first command, applied immediately
        assert_eq!(drawer.mode(), Mode::Running);
        assert_eq!(drawer.position(), GridPos::new(10, 9));

        drawer.step_program();
        assert_eq!(drawer.position(), GridPos::new(10, 8));

        drawer.step_program();
        assert_eq!(drawer.position(), GridPos::new(9, 8));
        assert_eq!(drawer.mode(), Mode::Running);

        // one extra step unlocks
        drawer.step_program();
        assert_eq!(drawer.mode(), Mode::Interactive);

        // replayed commands leave no trail and no new script lines
        assert!(drawer.executed().is_empty());
        assert_eq!(drawer.script().text().to_string(), "up\nup\nleft\n");
    }

    #[test]
    fn empty_program_resets_and_unlocks_immediately() {
        let mut drawer = drawer();

        drawer.execute(Command::Left).unwrap();
        drawer.clear_script();

        drawer.start_program().unwrap();

        assert_eq!(drawer.mode(), Mode::Interactive);
        assert_eq!(drawer.position(), GridPos::new(10, 10));
        assert!(drawer.executed().is_empty());
    }

    #[test]
    fn unknown_script_lines_are_skipped() {
        let mut drawer = drawer();

        *drawer.script_mut() = Script::from_text("up\nfly\n\n DOWN \n");

        drawer.start_program().unwrap();
        drawer.step_program();
        drawer.step_program();

        assert_eq!(drawer.position(), GridPos::new(10, 10));
        assert_eq!(drawer.mode(), Mode::Interactive);
    }

    #[test]
    fn input_while_running_is_rejected_without_side_effects() {
        let mut drawer = drawer();

        *drawer.script_mut() = Script::from_text("right\nright\n");
        drawer.start_program().unwrap();

        let position = drawer.position();

        assert_eq!(drawer.execute(Command::Up), Err(Busy));
        assert_eq!(drawer.start_program(), Err(Busy));

        assert_eq!(drawer.position(), position);
        assert!(drawer.executed().is_empty());
        assert_eq!(drawer.script().text().to_string(), "right\nright\n");
        assert_eq!(drawer.mode(), Mode::Running);
    }

    #[test]
    fn moves_paint_the_sketch() {
        let mut drawer = drawer();

        // center (10,10) sits at cell (50,50)
        assert_eq!(symbol_at(&drawer, 50, 50), "█");

        drawer.execute(Command::Right).unwrap();

        for x in 50..=55 {
            assert_eq!(symbol_at(&drawer, x, 50), "█");
        }

        // path in the path color, cursor marker on top of the endpoint
        let sketch = drawer.sketch();
        assert_eq!(sketch[sketch.index_of(Point::new(52, 50))].fg, Color::Red);
        assert_eq!(sketch[sketch.index_of(Point::new(55, 50))].fg, Color::Blue);
    }
}
