use std::ops::Range;

use ropey::{Rope, RopeSlice};
use unicode_width::UnicodeWidthChar;

use crate::command::Command;
use crate::program;

/// Program text for a sketch. One command per line; anything else is kept
/// verbatim and skipped at parse time.
///
/// Interactive commands are echoed into the script via [`Self::record`], so
/// the text always replays the session when run as a program.
#[derive(Debug, Default)]
pub struct Script {
    text: Rope,
}

impl Script {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            text: Rope::from_str(text),
        }
    }

    pub const fn text(&self) -> &Rope {
        &self.text
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.len_chars() == 0
    }

    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.text.len_chars()
    }

    #[must_use]
    pub fn len_lines(&self) -> usize {
        self.text.len_lines()
    }

    #[must_use]
    pub fn line(&self, line_idx: usize) -> RopeSlice<'_> {
        self.text.line(line_idx)
    }

    /// Appends `command` as its own line at the end of the text.
    pub fn record(&mut self, command: Command) {
        let end = self.text.len_chars();
        self.text.insert(end, command.name());
        self.text.insert_char(self.text.len_chars(), '\n');
    }

    pub fn clear(&mut self) {
        self.text = Rope::new();
    }

    /// The command sequence the current text encodes.
    #[must_use]
    pub fn commands(&self) -> Vec<Command> {
        program::parse_rope(&self.text)
    }

    pub fn insert_char(&mut self, char_idx: usize, ch: char) {
        self.text.insert_char(char_idx, ch);
    }

    /// Removes the chars in `range`. Range ends are char indices, as
    /// everywhere else; grapheme-aware callers pass boundary-aligned ranges.
    pub fn remove(&mut self, range: Range<usize>) {
        self.text.remove(range);
    }

    /// Display-width column of `char_offset` within a line, for terminal
    /// cursor placement.
    #[must_use]
    pub fn column(&self, line_idx: usize, char_offset: usize) -> usize {
        let line = self.text.line(line_idx);

        (0..char_offset)
            .map(|i| line.char(i).width().unwrap_or(1))
            .sum()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn record_appends_one_line_per_command() {
        let mut script = Script::new();

        script.record(Command::Up);
        script.record(Command::Reset);

        assert_eq!(script.text().to_string(), "up\nreset\n");
        assert_eq!(script.commands(), vec![Command::Up, Command::Reset]);
    }

    #[test]
    fn clear_discards_everything() {
        let mut script = Script::from_text("up\ndown\n");

        script.clear();

        assert!(script.is_empty());
        assert_eq!(script.commands(), Vec::<Command>::new());
    }

    #[test]
    fn commands_skip_junk_lines() {
        let script = Script::from_text("up\nwat\n\n DOWN \n");
        assert_eq!(script.commands(), vec![Command::Up, Command::Down]);
    }

    #[test]
    fn edits_land_at_char_indices() {
        let mut script = Script::from_text("up\n");

        script.insert_char(0, 'u');
        assert_eq!(script.text().to_string(), "uup\n");

        script.remove(0..1);
        assert_eq!(script.text().to_string(), "up\n");
    }

    #[test]
    fn column_accounts_for_wide_chars() {
        let script = Script::from_text("日本go\n");

        assert_eq!(script.column(0, 0), 0);
        assert_eq!(script.column(0, 1), 2);
        assert_eq!(script.column(0, 2), 4);
        assert_eq!(script.column(0, 3), 5);
    }
}
