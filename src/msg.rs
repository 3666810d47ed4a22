use std::fmt;

/// Direction of travel for sexp movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

/// Whether a movement grows the selection or only relocates the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExtendMode {
    #[default]
    Move,
    Select,
}

impl From<bool> for ExtendMode {
    fn from(select: bool) -> Self {
        if select {
            ExtendMode::Select
        } else {
            ExtendMode::Move
        }
    }
}

/// Every command the extension exposes to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    ExchangePointAndMark,
    ForwardSexp,
    ForwardSexpSelect,
    BackwardSexp,
    BackwardSexpSelect,
}

pub const COMMAND_PREFIX: &str = "advanced-navigation";

impl Command {
    pub const ALL: [Command; 5] = [
        Command::ExchangePointAndMark,
        Command::ForwardSexp,
        Command::ForwardSexpSelect,
        Command::BackwardSexp,
        Command::BackwardSexpSelect,
    ];

    /// Stable identifier the host binds keys to.
    pub fn id(&self) -> &'static str {
        match self {
            Command::ExchangePointAndMark => "advanced-navigation.exchangePointAndMark",
            Command::ForwardSexp => "advanced-navigation.forwardSexp",
            Command::ForwardSexpSelect => "advanced-navigation.forwardSexpSelect",
            Command::BackwardSexp => "advanced-navigation.backwardSexp",
            Command::BackwardSexpSelect => "advanced-navigation.backwardSexpSelect",
        }
    }

    pub fn from_id(id: &str) -> Option<Command> {
        if !id.starts_with(COMMAND_PREFIX) {
            return None;
        }
        Command::ALL.into_iter().find(|command| command.id() == id)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Command::ExchangePointAndMark => "Exchange Point and Mark",
            Command::ForwardSexp => "Forward Sexp",
            Command::ForwardSexpSelect => "Forward Sexp (Select)",
            Command::BackwardSexp => "Backward Sexp",
            Command::BackwardSexpSelect => "Backward Sexp (Select)",
        }
    }

    pub fn default_key(&self) -> &'static str {
        match self {
            Command::ExchangePointAndMark => "ctrl+x ctrl+x",
            Command::ForwardSexp => "ctrl+alt+f",
            Command::ForwardSexpSelect => "ctrl+alt+shift+f",
            Command::BackwardSexp => "ctrl+alt+b",
            Command::BackwardSexpSelect => "ctrl+alt+shift+b",
        }
    }

    /// Direction and extend flag for the sexp commands.
    pub fn sexp_motion(&self) -> Option<(Direction, ExtendMode)> {
        match self {
            Command::ExchangePointAndMark => None,
            Command::ForwardSexp => Some((Direction::Forward, ExtendMode::Move)),
            Command::ForwardSexpSelect => Some((Direction::Forward, ExtendMode::Select)),
            Command::BackwardSexp => Some((Direction::Backward, ExtendMode::Move)),
            Command::BackwardSexpSelect => Some((Direction::Backward, ExtendMode::Select)),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
