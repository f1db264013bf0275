use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::Widget,
};

/// The screen shown while no game is in progress: before the first game, and
/// after each game has ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Banner {
    title: &'static str,
    title_style: Style,
    /// Final score of the game that just ended
    score: Option<u32>,
}

impl Banner {
    pub(super) fn welcome() -> Banner {
        Banner {
            title: "Welcome to My Snake",
            title_style: consts::WELCOME_STYLE,
            score: None,
        }
    }

    pub(super) fn game_over(score: u32) -> Banner {
        Banner {
            title: "GAME OVER",
            title_style: consts::GAME_OVER_STYLE,
            score: Some(score),
        }
    }

    pub(super) fn won(score: u32) -> Banner {
        Banner {
            title: "THE SNAKE IS LONG ENOUGH AND YOU WIN!",
            title_style: consts::WIN_STYLE,
            score: Some(score),
        }
    }
}

static CONTROLS: &[&str] = &["Move: arrow keys or W A S D", "Quit: Q or Esc"];

impl Widget for Banner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled(self.title, self.title_style)).centered(),
            Line::default(),
        ];
        if let Some(score) = self.score {
            lines.push(Line::from(format!("Score: {score}")).centered());
            lines.push(Line::default());
        }
        lines.push(
            Line::from_iter([
                Span::raw("Press "),
                Span::styled("Enter", consts::KEY_STYLE),
                Span::raw(" to Start Game"),
            ])
            .centered(),
        );
        lines.push(Line::default());
        lines.extend(CONTROLS.iter().map(|&s| Line::from(s).centered()));
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let [text_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(area);
        Text::from(lines).render(text_area, buf);
    }
}
