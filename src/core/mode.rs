/// Glyph drawn for each particle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Point,
    Line,
    Ring,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Point, Mode::Line, Mode::Ring];

    /// Text shown in the mode label.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Point => "Point",
            Mode::Line => "Line",
            Mode::Ring => "Ring",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeSelector {
    index: usize,
}

impl ModeSelector {
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn current(&self) -> Mode {
        Mode::ALL[self.index]
    }

    /// Select mode `i`, wrapping forward for out-of-range and negative values.
    pub fn set_mode(&mut self, i: i64) -> Mode {
        self.index = i.rem_euclid(Mode::ALL.len() as i64) as usize;
        self.current()
    }

    pub fn advance(&mut self) -> Mode {
        self.set_mode(self.index as i64 + 1)
    }

    pub fn apply(&mut self, cmd: ModeCommand) -> Mode {
        match cmd {
            ModeCommand::Set(i) => self.set_mode(i),
            ModeCommand::Advance => self.advance(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeCommand {
    Set(i64),
    Advance,
}

/// Map a keydown (`KeyboardEvent.key`, `KeyboardEvent.code`) to a mode command.
#[inline]
pub fn mode_command_for_key(key: &str, code: &str) -> Option<ModeCommand> {
    match key {
        "1" => Some(ModeCommand::Set(0)),
        "2" => Some(ModeCommand::Set(1)),
        "3" => Some(ModeCommand::Set(2)),
        _ if code == "Space" => Some(ModeCommand::Advance),
        _ => None,
    }
}
