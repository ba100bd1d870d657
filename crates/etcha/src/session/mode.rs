use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Running,
}

impl Mode {
    pub const fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    pub const fn name(&self) -> &str {
        match self {
            Self::Interactive => "interactive",
            Self::Running => "running",
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
