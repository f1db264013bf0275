use crate::game::Heading;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Enter,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (_, KeyCode::Enter) => Some(Command::Enter),
            (m, _) if !normal_modifiers.contains(m) => None,
            (_, KeyCode::Char('w' | 'W') | KeyCode::Up) => Some(Command::Up),
            (_, KeyCode::Char('s' | 'S') | KeyCode::Down) => Some(Command::Down),
            (_, KeyCode::Char('a' | 'A') | KeyCode::Left) => Some(Command::Left),
            (_, KeyCode::Char('d' | 'D') | KeyCode::Right) => Some(Command::Right),
            (_, KeyCode::Char('q' | 'Q') | KeyCode::Esc) => Some(Command::Quit),
            _ => None,
        }
    }

    /// The heading requested by a movement command
    pub(crate) fn heading(self) -> Option<Heading> {
        match self {
            Command::Up => Some(Heading::Up),
            Command::Down => Some(Heading::Down),
            Command::Left => Some(Heading::Left),
            Command::Right => Some(Heading::Right),
            Command::Quit | Command::Enter => None,
        }
    }
}
