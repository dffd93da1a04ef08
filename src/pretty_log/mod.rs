use crossterm::cursor::MoveUp;
use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use std::io::{Stdout, Write};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ThemeColor {
    Main,
    Second,
    Success,
    Warn,
    Error,
}

impl From<ThemeColor> for Color {
    fn from(value: ThemeColor) -> Self {
        match value {
            ThemeColor::Main => Color::Reset,
            ThemeColor::Second => Color::DarkGrey,
            ThemeColor::Success => Color::Green,
            ThemeColor::Warn => Color::Yellow,
            ThemeColor::Error => Color::Red,
        }
    }
}

pub fn colored_println(stdout: &mut Stdout, color: ThemeColor, msg: &str) {
    let _ = execute!(
        stdout,
        SetForegroundColor(color.into()),
        Print(msg),
        ResetColor,
        Print("\n"),
    );
    let _ = stdout.flush();
}

/// # clean one line
///
/// Move the cursor up one line and clear it, so the next print overwrites the last one.
pub fn clean_one_line(stdout: &mut Stdout) {
    let _ = execute!(stdout, MoveUp(1), Clear(ClearType::CurrentLine));
}

/// Prints a progress line in place, replacing the previous progress line if there is one.
#[derive(Default)]
pub struct ProgressLine {
    shown: bool,
}

impl ProgressLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, stdout: &mut Stdout, color: ThemeColor, msg: &str) {
        if self.shown {
            clean_one_line(stdout);
        }
        colored_println(stdout, color, msg);
        self.shown = true;
    }

    /// Forget the current progress line, the next update starts on a fresh line.
    pub fn detach(&mut self) {
        self.shown = false;
    }
}
