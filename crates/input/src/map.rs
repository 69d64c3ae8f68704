//! Key mapping from terminal events to quiz inputs.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the screen is currently asking for. The same key means different
/// things per mode: `q` is an answer while playing and "quit" on game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Answering,
    Revealing,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizInput {
    Char(char),
    Backspace,
    Submit,
    Continue,
    Restart,
    Quit,
}

/// Map keyboard input to a quiz input for the given mode.
pub fn handle_key_event(key: KeyEvent, mode: InputMode) -> Option<QuizInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(QuizInput::Quit);
    }

    match mode {
        InputMode::Answering => match key.code {
            KeyCode::Enter => Some(QuizInput::Submit),
            KeyCode::Backspace => Some(QuizInput::Backspace),
            KeyCode::Char(c)
                if !c.is_control()
                    && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(QuizInput::Char(c))
            }
            _ => None,
        },
        InputMode::Revealing => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(QuizInput::Continue),
            _ => None,
        },
        InputMode::GameOver => match key.code {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Some(QuizInput::Restart),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(QuizInput::Quit),
            _ => None,
        },
    }
}

/// Keys that leave the game from any screen.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
