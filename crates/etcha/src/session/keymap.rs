use std::collections::HashMap;

use anyhow::Result;
use crossterm::event::KeyEvent;
use etcha_core::command::Command;

use super::utils::parse_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Turtle(Command),
    Run,
    EditScript,
    ClearScript,
    Quit,
}

#[derive(Debug, Default)]
pub struct Keymap(HashMap<KeyEvent, Action>);

impl Keymap {
    pub fn feed(&self, event: KeyEvent) -> Option<Action> {
        self.0.get(&event).copied()
    }

    pub fn sketch_mode() -> Self {
        let mappings = [
            ("<UP>", Action::Turtle(Command::Up)),
            ("<DOWN>", Action::Turtle(Command::Down)),
            ("<LEFT>", Action::Turtle(Command::Left)),
            ("<RIGHT>", Action::Turtle(Command::Right)),
            ("<ESC>", Action::Turtle(Command::Reset)),
            ("r", Action::Run),
            ("<F5>", Action::Run),
            ("i", Action::EditScript),
            ("<TAB>", Action::EditScript),
            ("c", Action::ClearScript),
            ("q", Action::Quit),
            ("<C-c>", Action::Quit),
        ];

        Self::with_mappings(mappings).expect("Failed to parse default keymap")
    }

    pub fn with_mappings(
        mappings: impl IntoIterator<Item = (&'static str, Action)>,
    ) -> Result<Self> {
        let mut keymap = Self::default();

        for (mapping, action) in mappings {
            let key = parse_key(mapping)?;
            keymap.0.insert(key, action);
        }

        Ok(keymap)
    }
}
