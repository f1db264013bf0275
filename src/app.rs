use crate::command::Command;
use crate::config::Styles;
use crate::game::Game;
use crate::util::get_display_area;
use crate::warning::{Warning, WarningOutcome};
use crossterm::event::{read, Event};
use rand::rngs::StdRng;
use ratatui::{backend::Backend, Frame, Terminal};
use std::collections::VecDeque;
use std::io;

#[derive(Clone, Debug)]
pub(crate) struct App {
    screen: Screen,

    /// Pop-ups still waiting to be dismissed, front first.  While any are
    /// present, they receive all input.
    warnings: VecDeque<Warning>,
}

impl App {
    pub(crate) fn new(styles: Styles, rng: StdRng, warnings: Vec<Warning>) -> App {
        App {
            screen: Screen::Game(Game::new(styles, rng)),
            warnings: warnings.into(),
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        if let Screen::Game(ref game) = self.screen {
            terminal.draw(|frame| {
                game.draw(frame);
                self.draw_warning(frame);
            })?;
        }
        Ok(())
    }

    fn draw_warning(&self, frame: &mut Frame<'_>) {
        if let Some(warning) = self.warnings.front() {
            frame.render_widget(warning, get_display_area(frame.area()));
        }
    }

    fn process_input(&mut self) -> io::Result<()> {
        if !self.warnings.is_empty() {
            self.handle_warning_event(read()?);
        } else if let Screen::Game(ref mut game) = self.screen {
            if let Some(screen) = game.process_input()? {
                self.screen = screen;
            }
        }
        Ok(())
    }

    fn handle_warning_event(&mut self, event: Event) {
        let Some(cmd) = event
            .as_key_press_event()
            .and_then(Command::from_key_event)
        else {
            return;
        };
        let Some(warning) = self.warnings.front() else {
            return;
        };
        match warning.handle_command(cmd) {
            Some(WarningOutcome::Dismissed) => {
                self.warnings.pop_front();
            }
            Some(WarningOutcome::Quit) => self.screen = Screen::Quit,
            None => (),
        }
    }

    fn quitting(&self) -> bool {
        matches!(self.screen, Screen::Quit)
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Screen {
    Game(Game),
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use rand::SeedableRng;

    fn new_app(warnings: Vec<Warning>) -> App {
        App::new(Styles::default(), StdRng::seed_from_u64(42), warnings)
    }

    fn warning(msg: &str) -> Warning {
        Warning::from_error_messages([String::from(msg)])
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_warning_event(Event::Key(code.into()));
    }

    #[test]
    fn enter_dismisses_warnings_in_order() {
        let mut app = new_app(vec![warning("first"), warning("second")]);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.warnings.front(), Some(&warning("second")));
        press(&mut app, KeyCode::Enter);
        assert!(app.warnings.is_empty());
        assert!(!app.quitting());
    }

    #[test]
    fn other_keys_keep_warning() {
        let mut app = new_app(vec![warning("first")]);
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.warnings.len(), 1);
        assert!(!app.quitting());
    }

    #[test]
    fn quit_from_warning() {
        let mut app = new_app(vec![warning("first")]);
        press(&mut app, KeyCode::Esc);
        assert!(app.quitting());
    }
}
