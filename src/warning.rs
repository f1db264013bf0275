use crate::command::Command;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect, Size},
    text::{Line, Text},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};
use std::borrow::Cow;

/// A pop-up describing a non-fatal error, shown over the game until the user
/// dismisses it
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Warning {
    lines: Vec<String>,
}

impl Warning {
    /// Most lines of text shown.  Longer messages are cut short.
    const MAX_LINES: usize = 16;
    const TEXT_WIDTH: u16 = 48;
    const WIDTH: u16 = Self::TEXT_WIDTH + 4;

    /// Build a warning from an error message followed by the messages of its
    /// chain of causes
    pub(crate) fn from_error_messages<I>(msgs: I) -> Warning
    where
        I: IntoIterator<Item = String>,
    {
        let mut msgs = msgs.into_iter();
        let Some(headline) = msgs.next() else {
            return Warning::from_lines(vec![String::from("Something went wrong.")]);
        };
        let causes = msgs.collect::<Vec<_>>();
        let mut lines = Vec::new();
        wrap_into(&mut lines, &headline, "", "");
        if !causes.is_empty() {
            lines.push(String::new());
            lines.push(String::from("Caused by:"));
        }
        if let [cause] = causes.as_slice() {
            wrap_into(&mut lines, cause, "    ", "    ");
        } else {
            for (i, cause) in causes.iter().enumerate() {
                wrap_into(&mut lines, cause, &format!("{i:>5}: "), "       ");
            }
        }
        Warning::from_lines(lines)
    }

    pub(crate) fn from_anyhow(e: &anyhow::Error) -> Warning {
        Warning::from_error_messages(e.chain().map(ToString::to_string))
    }

    fn from_lines(mut lines: Vec<String>) -> Warning {
        if lines.len() > Warning::MAX_LINES {
            let hidden = lines.len() - (Warning::MAX_LINES - 1);
            lines.truncate(Warning::MAX_LINES - 1);
            lines.push(format!("    ... {hidden} more lines"));
        }
        Warning { lines }
    }

    pub(crate) fn handle_command(&self, cmd: Command) -> Option<WarningOutcome> {
        match cmd {
            Command::Enter => Some(WarningOutcome::Dismissed),
            Command::Quit => Some(WarningOutcome::Quit),
            _ => None,
        }
    }
}

fn wrap_into(lines: &mut Vec<String>, text: &str, first_indent: &str, rest_indent: &str) {
    let opts = textwrap::Options::new(usize::from(Warning::TEXT_WIDTH))
        .break_words(true)
        .initial_indent(first_indent)
        .subsequent_indent(rest_indent);
    lines.extend(textwrap::wrap(text, opts).into_iter().map(Cow::into_owned));
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum WarningOutcome {
    Dismissed,
    Quit,
}

impl<E: std::error::Error> From<E> for Warning {
    fn from(e: E) -> Warning {
        let mut msgs = vec![e.to_string()];
        let mut source = e.source();
        while let Some(src) = source {
            msgs.push(src.to_string());
            source = src.source();
        }
        Warning::from_error_messages(msgs)
    }
}

impl Widget for &Warning {
    // `area` is the whole display area; the pop-up is centered in it.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text_height = u16::try_from(self.lines.len()).unwrap_or(u16::MAX);
        let popup = center_rect(
            area,
            Size {
                width: Warning::WIDTH,
                height: text_height.saturating_add(4),
            },
        );
        let block = Block::bordered()
            .title_top(Line::from(" WARNING ").centered())
            .padding(Padding::horizontal(1));
        let [text_area, _, ok_area] = Layout::vertical([
            Constraint::Length(text_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(block.inner(popup));
        Clear.render(popup, buf);
        block.render(popup, buf);
        Text::from_iter(self.lines.iter().map(String::as_str)).render(text_area, buf);
        Line::from("[OK]").centered().render(ok_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use anyhow::Context;
    use pretty_assertions::assert_eq;
    use std::io;

    fn render(warning: &Warning) -> Buffer {
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        warning.render(area, &mut buffer);
        buffer
    }

    fn long_chain() -> Warning {
        Warning::from_error_messages((1..=20).map(|i| format!("step {i} of 20 went wrong")))
    }

    #[test]
    fn no_messages() {
        let warning = Warning::from_error_messages(Vec::new());
        assert_eq!(warning.lines, vec![String::from("Something went wrong.")]);
    }

    #[test]
    fn from_error_chain() {
        let e = ConfigError::Read(io::Error::other("Is a directory (os error 21)"));
        let warning = Warning::from(e);
        assert_eq!(
            warning.lines,
            vec![
                String::from("failed to read configuration file"),
                String::new(),
                String::from("Caused by:"),
                String::from("    Is a directory (os error 21)"),
            ]
        );
    }

    #[test]
    fn from_anyhow_chain() {
        let r = Err::<(), _>(io::Error::other("Permission denied (os error 13)"))
            .context("failed to open log file")
            .context("failed to install logger");
        let e = r.expect_err("result should be an error");
        let warning = Warning::from_anyhow(&e);
        assert_eq!(
            warning,
            Warning::from_error_messages([
                String::from("failed to install logger"),
                String::from("failed to open log file"),
                String::from("Permission denied (os error 13)"),
            ])
        );
    }

    #[test]
    fn dismiss_and_quit() {
        let warning = Warning::from_error_messages([String::from("Logging is off")]);
        assert_eq!(warning.handle_command(Command::Up), None);
        assert_eq!(warning.handle_command(Command::Left), None);
        assert_eq!(
            warning.handle_command(Command::Enter),
            Some(WarningOutcome::Dismissed)
        );
        assert_eq!(
            warning.handle_command(Command::Quit),
            Some(WarningOutcome::Quit)
        );
    }

    #[test]
    fn long_chain_is_cut_short() {
        let warning = long_chain();
        assert_eq!(warning.lines.len(), 16);
        assert_eq!(warning.lines[14], "   11: step 13 of 20 went wrong");
        assert_eq!(warning.lines[15], "    ... 7 more lines");
    }

    #[test]
    fn render_no_cause() {
        let warning = Warning::from_error_messages([String::from("Logging could not be started")]);
        let expected = Buffer::with_lines([
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "              ┌──────────────────── WARNING ─────────────────────┐              ",
            "              │ Logging could not be started                     │              ",
            "              │                                                  │              ",
            "              │                       [OK]                       │              ",
            "              └──────────────────────────────────────────────────┘              ",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ]);
        assert_eq!(render(&warning), expected);
    }

    #[test]
    fn render_one_cause() {
        let warning = Warning::from_error_messages([
            String::from("failed to read configuration file"),
            String::from("Is a directory (os error 21)"),
        ]);
        let expected = Buffer::with_lines([
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "              ┌──────────────────── WARNING ─────────────────────┐              ",
            "              │ failed to read configuration file                │              ",
            "              │                                                  │              ",
            "              │ Caused by:                                       │              ",
            "              │     Is a directory (os error 21)                 │              ",
            "              │                                                  │              ",
            "              │                       [OK]                       │              ",
            "              └──────────────────────────────────────────────────┘              ",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ]);
        assert_eq!(render(&warning), expected);
    }

    #[test]
    fn render_two_causes() {
        let warning = Warning::from_error_messages([
            String::from("failed to install logger"),
            String::from("failed to open log file"),
            String::from("Permission denied (os error 13)"),
        ]);
        let expected = Buffer::with_lines([
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "              ┌──────────────────── WARNING ─────────────────────┐              ",
            "              │ failed to install logger                         │              ",
            "              │                                                  │              ",
            "              │ Caused by:                                       │              ",
            "              │     0: failed to open log file                   │              ",
            "              │     1: Permission denied (os error 13)           │              ",
            "              │                                                  │              ",
            "              │                       [OK]                       │              ",
            "              └──────────────────────────────────────────────────┘              ",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ]);
        assert_eq!(render(&warning), expected);
    }

    #[test]
    fn render_wrapped_one_cause() {
        let warning = Warning::from_error_messages([
            String::from("failed to determine path to local configuration directory"),
            String::from(
                "neither XDG_CONFIG_HOME nor HOME is set in the environment of this process",
            ),
        ]);
        let expected = Buffer::with_lines([
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "              ┌──────────────────── WARNING ─────────────────────┐              ",
            "              │ failed to determine path to local configuration  │              ",
            "              │ directory                                        │              ",
            "              │                                                  │              ",
            "              │ Caused by:                                       │              ",
            "              │     neither XDG_CONFIG_HOME nor HOME is set in   │              ",
            "              │     the environment of this process              │              ",
            "              │                                                  │              ",
            "              │                       [OK]                       │              ",
            "              └──────────────────────────────────────────────────┘              ",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ]);
        assert_eq!(render(&warning), expected);
    }

    #[test]
    fn render_wrapped_two_causes() {
        let warning = Warning::from_error_messages([
            String::from(
                "failed to parse configuration file /home/user/.config/gridsnake/config.toml",
            ),
            String::from("TOML parse error at line 2, column 9"),
            String::from(
                "invalid style \"bold sparkly\": expected a color name, a hex color, or an attribute",
            ),
        ]);
        let expected = Buffer::with_lines([
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "              ┌──────────────────── WARNING ─────────────────────┐              ",
            "              │ failed to parse configuration file               │              ",
            "              │ /home/user/.config/gridsnake/config.toml         │              ",
            "              │                                                  │              ",
            "              │ Caused by:                                       │              ",
            "              │     0: TOML parse error at line 2, column 9      │              ",
            "              │     1: invalid style \"bold sparkly\": expected a  │              ",
            "              │        color name, a hex color, or an attribute  │              ",
            "              │                                                  │              ",
            "              │                       [OK]                       │              ",
            "              └──────────────────────────────────────────────────┘              ",
            "",
            "",
            "",
            "",
            "",
            "",
        ]);
        assert_eq!(render(&warning), expected);
    }

    #[test]
    fn render_cut_short() {
        let expected = Buffer::with_lines([
            "",
            "",
            "              ┌──────────────────── WARNING ─────────────────────┐              ",
            "              │ step 1 of 20 went wrong                          │              ",
            "              │                                                  │              ",
            "              │ Caused by:                                       │              ",
            "              │     0: step 2 of 20 went wrong                   │              ",
            "              │     1: step 3 of 20 went wrong                   │              ",
            "              │     2: step 4 of 20 went wrong                   │              ",
            "              │     3: step 5 of 20 went wrong                   │              ",
            "              │     4: step 6 of 20 went wrong                   │              ",
            "              │     5: step 7 of 20 went wrong                   │              ",
            "              │     6: step 8 of 20 went wrong                   │              ",
            "              │     7: step 9 of 20 went wrong                   │              ",
            "              │     8: step 10 of 20 went wrong                  │              ",
            "              │     9: step 11 of 20 went wrong                  │              ",
            "              │    10: step 12 of 20 went wrong                  │              ",
            "              │    11: step 13 of 20 went wrong                  │              ",
            "              │     ... 7 more lines                             │              ",
            "              │                                                  │              ",
            "              │                       [OK]                       │              ",
            "              └──────────────────────────────────────────────────┘              ",
            "",
            "",
        ]);
        assert_eq!(render(&long_chain()), expected);
    }
}
