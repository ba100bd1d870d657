use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

use crate::shapes::Delta;

/// One step of a sketch, either a unit move or a wipe back to center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    Reset,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown command: {0:?}")]
pub struct UnknownCommand(pub String);

impl Command {
    pub const ALL: [Self; 5] = [Self::Up, Self::Down, Self::Left, Self::Right, Self::Reset];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::Reset => "reset",
        }
    }

    /// Unit displacement, `None` for [`Self::Reset`].
    pub const fn delta(&self) -> Option<Delta> {
        let delta = match self {
            Self::Up => Delta::new(0, -1),
            Self::Down => Delta::new(0, 1),
            Self::Left => Delta::new(-1, 0),
            Self::Right => Delta::new(1, 0),
            Self::Reset => return None,
        };

        Some(delta)
    }
}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        Self::ALL
            .into_iter()
            .find(|cmd| s.eq_ignore_ascii_case(cmd.name()))
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
