//! Conversions from crossterm events into [`InputEvent`].
//!
//! Only key *presses* are forwarded. Repeats and releases, focus changes, resizes and unmapped key
//! codes convert to [`UnsupportedEvent`] so callers can `continue` their loop on `Err`.

use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::KeyModifiers;
use crate::input::MouseEvent;
use crate::input::MouseEventKind;
use crossterm::event as ct;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("terminal event has no field-input equivalent")]
pub struct UnsupportedEvent;

impl TryFrom<ct::Event> for InputEvent {
    type Error = UnsupportedEvent;

    fn try_from(ev: ct::Event) -> Result<Self, Self::Error> {
        match ev {
            ct::Event::Key(key) => KeyEvent::try_from(key).map(InputEvent::Key),
            ct::Event::Paste(s) => Ok(InputEvent::Paste(s)),
            ct::Event::Mouse(m) => MouseEvent::try_from(m).map(InputEvent::Mouse),
            _ => Err(UnsupportedEvent),
        }
    }
}

impl TryFrom<ct::KeyEvent> for KeyEvent {
    type Error = UnsupportedEvent;

    fn try_from(key: ct::KeyEvent) -> Result<Self, Self::Error> {
        if key.kind != ct::KeyEventKind::Press {
            return Err(UnsupportedEvent);
        }
        let code = match key.code {
            ct::KeyCode::Char(c) => KeyCode::Char(c),
            ct::KeyCode::Enter => KeyCode::Enter,
            ct::KeyCode::Backspace => KeyCode::Backspace,
            ct::KeyCode::Delete => KeyCode::Delete,
            ct::KeyCode::Tab => KeyCode::Tab,
            ct::KeyCode::BackTab => KeyCode::BackTab,
            ct::KeyCode::Esc => KeyCode::Esc,
            ct::KeyCode::Left => KeyCode::Left,
            ct::KeyCode::Right => KeyCode::Right,
            ct::KeyCode::Up => KeyCode::Up,
            ct::KeyCode::Down => KeyCode::Down,
            ct::KeyCode::Home => KeyCode::Home,
            ct::KeyCode::End => KeyCode::End,
            _ => return Err(UnsupportedEvent),
        };
        Ok(KeyEvent::new(code).with_modifiers(modifiers(key.modifiers)))
    }
}

impl TryFrom<ct::MouseEvent> for MouseEvent {
    type Error = UnsupportedEvent;

    fn try_from(m: ct::MouseEvent) -> Result<Self, Self::Error> {
        let kind = match m.kind {
            ct::MouseEventKind::Down(ct::MouseButton::Left) => MouseEventKind::Down,
            ct::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
            ct::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
            _ => return Err(UnsupportedEvent),
        };
        Ok(MouseEvent {
            x: m.column,
            y: m.row,
            kind,
        })
    }
}

fn modifiers(m: ct::KeyModifiers) -> KeyModifiers {
    KeyModifiers {
        shift: m.contains(ct::KeyModifiers::SHIFT),
        ctrl: m.contains(ct::KeyModifiers::CONTROL),
        alt: m.contains(ct::KeyModifiers::ALT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_converts_and_release_is_rejected() {
        let press = ct::KeyEvent::new(ct::KeyCode::Char('u'), ct::KeyModifiers::CONTROL);
        assert_eq!(
            InputEvent::try_from(ct::Event::Key(press)),
            Ok(InputEvent::Key(crate::keymap::key_ctrl('u')))
        );

        let release = ct::KeyEvent::new_with_kind(
            ct::KeyCode::Char('u'),
            ct::KeyModifiers::NONE,
            ct::KeyEventKind::Release,
        );
        assert_eq!(KeyEvent::try_from(release), Err(UnsupportedEvent));
    }

    #[test]
    fn resize_is_unsupported() {
        assert_eq!(
            InputEvent::try_from(ct::Event::Resize(80, 24)),
            Err(UnsupportedEvent)
        );
    }
}
