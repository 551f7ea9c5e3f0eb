use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::KeyModifiers;

/// A named group of key chords with the text shown in a help line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyBinding {
    pub keys: Vec<KeyEvent>,
    pub help_key: String,
    pub help_desc: String,
}

impl KeyBinding {
    pub fn new(
        help_key: impl Into<String>,
        help_desc: impl Into<String>,
        keys: Vec<KeyEvent>,
    ) -> Self {
        Self {
            keys,
            help_key: help_key.into(),
            help_desc: help_desc.into(),
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.keys.iter().any(|k| key_event_matches(k, event))
    }

    /// `"key desc"`, as rendered in a help line.
    pub fn help(&self) -> String {
        format!("{} {}", self.help_key, self.help_desc)
    }
}

/// Modifiers must match exactly: `Ctrl+u` never matches a plain `u` binding.
pub fn key_event_matches(pattern: &KeyEvent, event: &KeyEvent) -> bool {
    pattern.code == event.code && pattern.modifiers == event.modifiers
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code)
}

pub fn key_char(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c))
}

pub fn key_ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c)).with_modifiers(KeyModifiers::CTRL)
}

/// Joins the help text of `bindings` with two spaces.
pub fn help_line<'a>(bindings: impl IntoIterator<Item = &'a KeyBinding>) -> String {
    bindings
        .into_iter()
        .map(KeyBinding::help)
        .collect::<Vec<_>>()
        .join("  ")
}
