use crate::component::FieldAction;
use crate::component::HasIsRequired;
use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::MouseEventKind;
use crate::keymap;
use crate::keymap::KeyBinding;
use crate::render;
use crate::selectable::SelectOptions;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Span;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PickerProps {
    pub options: SelectOptions,
    pub selected_key: String,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub is_required: bool,
}

impl HasIsRequired for PickerProps {
    fn with_required(mut self, is_required: bool) -> Self {
        self.is_required = is_required;
        self
    }
}

/// Key bindings for cycling through options.
///
/// `clear` only applies to optional pickers; a required picker keeps its selection.
#[derive(Clone, Debug)]
pub struct PickerKeys {
    pub next: KeyBinding,
    pub prev: KeyBinding,
    pub clear: KeyBinding,
}

impl Default for PickerKeys {
    fn default() -> Self {
        Self {
            next: KeyBinding::new(
                "↓/j",
                "next",
                vec![
                    keymap::key(KeyCode::Down),
                    keymap::key(KeyCode::Right),
                    keymap::key_char('j'),
                ],
            ),
            prev: KeyBinding::new(
                "↑/k",
                "prev",
                vec![
                    keymap::key(KeyCode::Up),
                    keymap::key(KeyCode::Left),
                    keymap::key_char('k'),
                ],
            ),
            clear: KeyBinding::new(
                "⌫",
                "clear",
                vec![
                    keymap::key(KeyCode::Backspace),
                    keymap::key(KeyCode::Delete),
                ],
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickerAction {
    None,
    SelectionChanged(String),
}

impl FieldAction for PickerAction {
    fn changed_value(&self) -> Option<&str> {
        match self {
            Self::SelectionChanged(key) => Some(key),
            Self::None => None,
        }
    }
}

/// Inline option picker rendered as `Label *: ‹ Option ›`.
#[derive(Clone, Debug, Default)]
pub struct Picker {
    options: SelectOptions,
    selected: String,
    label: Option<String>,
    placeholder: Option<String>,
    is_required: bool,
    keys: PickerKeys,
}

impl Picker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_props(props: PickerProps) -> Self {
        let mut picker = Self::new();
        picker.apply_props(props);
        picker
    }

    pub fn with_keys(mut self, keys: PickerKeys) -> Self {
        self.keys = keys;
        self
    }

    pub fn apply_props(&mut self, props: PickerProps) {
        self.options = props.options;
        self.selected = props.selected_key;
        self.label = props.label;
        self.placeholder = props.placeholder;
        self.is_required = props.is_required;
    }

    pub fn selected_key(&self) -> &str {
        &self.selected
    }

    pub fn is_required(&self) -> bool {
        self.is_required
    }

    pub fn options(&self) -> &SelectOptions {
        &self.options
    }

    pub fn keys(&self) -> &PickerKeys {
        &self.keys
    }

    pub fn input(&mut self, event: InputEvent) -> PickerAction {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(m) => match m.kind {
                MouseEventKind::ScrollDown => self.step(1),
                MouseEventKind::ScrollUp => self.step(-1),
                MouseEventKind::Down => PickerAction::None,
            },
            InputEvent::Paste(_) => PickerAction::None,
        }
    }

    pub fn render_ref(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_style(Rect::new(area.x, area.y, area.width, 1), theme.value);

        let mut spans = render::field_prefix(self.label.as_deref(), self.is_required, theme);

        if self.selected.is_empty() {
            if let Some(placeholder) = &self.placeholder {
                spans.push(Span::styled(placeholder.as_str(), theme.placeholder));
            }
        } else {
            // Unknown keys show as-is so a stray value stays visible.
            let shown = self
                .options
                .find(&self.selected)
                .map_or(self.selected.as_str(), |o| o.label.as_str());
            spans.push(Span::styled("‹ ", theme.accent));
            spans.push(Span::styled(shown, theme.value));
            spans.push(Span::styled(" ›", theme.accent));
        }

        render::render_spans_clipped(area.x, area.y, 0, area.width, buf, &spans);
    }

    fn handle_key(&mut self, key: KeyEvent) -> PickerAction {
        if self.keys.next.matches(&key) {
            self.step(1)
        } else if self.keys.prev.matches(&key) {
            self.step(-1)
        } else if self.keys.clear.matches(&key) && !self.is_required {
            self.select(String::new())
        } else {
            PickerAction::None
        }
    }

    fn step(&mut self, delta: isize) -> PickerAction {
        let len = self.options.len();
        if len == 0 {
            return PickerAction::None;
        }
        let next = match self.options.position(&self.selected) {
            Some(i) => (i as isize + delta).rem_euclid(len as isize) as usize,
            None if delta >= 0 => 0,
            None => len - 1,
        };
        match self.options.get(next) {
            Some(option) => self.select(option.key.clone()),
            None => PickerAction::None,
        }
    }

    fn select(&mut self, key: String) -> PickerAction {
        if key == self.selected {
            return PickerAction::None;
        }
        tracing::trace!(from = %self.selected, to = %key, "picker selection changed");
        self.selected = key.clone();
        PickerAction::SelectionChanged(key)
    }
}
