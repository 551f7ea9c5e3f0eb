use crate::component::FieldAction;
use crate::component::HasIsRequired;
use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::keymap;
use crate::keymap::KeyBinding;
use crate::render;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Span;
use unicode_width::UnicodeWidthChar;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextFieldProps {
    pub value: String,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub is_required: bool,
}

impl HasIsRequired for TextFieldProps {
    fn with_required(mut self, is_required: bool) -> Self {
        self.is_required = is_required;
        self
    }
}

#[derive(Clone, Debug)]
pub struct TextFieldKeys {
    pub submit: KeyBinding,
    pub clear: KeyBinding,
}

impl Default for TextFieldKeys {
    fn default() -> Self {
        Self {
            submit: KeyBinding::new("enter", "submit", vec![keymap::key(KeyCode::Enter)]),
            clear: KeyBinding::new("^u", "clear", vec![keymap::key_ctrl('u')]),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextFieldAction {
    None,
    Changed(String),
    Submitted(String),
}

impl FieldAction for TextFieldAction {
    fn changed_value(&self) -> Option<&str> {
        match self {
            Self::Changed(value) => Some(value),
            Self::None | Self::Submitted(_) => None,
        }
    }
}

/// Single-line text input rendered as `Label *: value`.
///
/// The field is controlled: feed it [`TextFieldProps`] each frame with
/// [`apply_props`](Self::apply_props) and forward the actions it returns to the owning binding.
#[derive(Clone, Debug, Default)]
pub struct TextField {
    value: String,
    cursor: usize, // char index
    scroll_x: usize,
    label: Option<String>,
    placeholder: Option<String>,
    is_required: bool,
    keys: TextFieldKeys,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_props(props: TextFieldProps) -> Self {
        let mut field = Self::new();
        field.apply_props(props);
        field
    }

    pub fn with_keys(mut self, keys: TextFieldKeys) -> Self {
        self.keys = keys;
        self
    }

    /// Adopts `props`. The cursor is kept unless the value was replaced from outside, in which case
    /// it moves to the end.
    pub fn apply_props(&mut self, props: TextFieldProps) {
        if props.value != self.value {
            self.cursor = props.value.chars().count();
            self.value = props.value;
        }
        self.label = props.label;
        self.placeholder = props.placeholder;
        self.is_required = props.is_required;
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_required(&self) -> bool {
        self.is_required
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn keys(&self) -> &TextFieldKeys {
        &self.keys
    }

    pub fn input(&mut self, event: InputEvent) -> TextFieldAction {
        match event {
            InputEvent::Paste(s) => {
                let folded: String = s
                    .replace("\r\n", "\n")
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                if folded.is_empty() {
                    return TextFieldAction::None;
                }
                for ch in folded.chars() {
                    self.insert_char(ch);
                }
                self.changed()
            }
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(_) => TextFieldAction::None,
        }
    }

    /// Screen position of the cursor after the last [`render_ref`](Self::render_ref) into `area`.
    pub fn cursor_pos(&self, area: Rect) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let value_x = self.prefix_width().min(area.width as usize);
        let x = self.cursor_display_x().checked_sub(self.scroll_x)?;
        let x = value_x + x;
        if x >= area.width as usize {
            return None;
        }
        Some((area.x + x as u16, area.y))
    }

    pub fn render_ref(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let row = Rect::new(area.x, area.y, area.width, 1);
        buf.set_style(row, theme.value);

        let prefix = self.prefix_spans(theme);
        let used = render::render_spans_clipped(area.x, area.y, 0, area.width, buf, &prefix);
        let value_w = area.width.saturating_sub(used);
        if value_w == 0 {
            return;
        }
        let x = area.x + used;

        if self.value.is_empty() {
            self.scroll_x = 0;
            if let Some(placeholder) = &self.placeholder {
                render::render_str_clipped(
                    x,
                    area.y,
                    0,
                    value_w,
                    buf,
                    placeholder,
                    theme.placeholder,
                );
            }
            return;
        }

        self.ensure_cursor_visible(value_w as usize);
        render::render_str_clipped(
            x,
            area.y,
            self.scroll_x,
            value_w,
            buf,
            &self.value,
            theme.value,
        );
    }

    fn prefix_spans(&self, theme: &Theme) -> Vec<Span<'_>> {
        render::field_prefix(self.label.as_deref(), self.is_required, theme)
    }

    fn prefix_width(&self) -> usize {
        render::spans_width(&self.prefix_spans(&Theme::default()))
    }

    fn handle_key(&mut self, key: KeyEvent) -> TextFieldAction {
        if self.keys.submit.matches(&key) {
            tracing::trace!(value = %self.value, "text field submitted");
            return TextFieldAction::Submitted(self.value.clone());
        }
        if self.keys.clear.matches(&key) {
            if self.value.is_empty() {
                return TextFieldAction::None;
            }
            self.value.clear();
            self.cursor = 0;
            return self.changed();
        }

        match key.code {
            KeyCode::Char(c) => {
                if key.modifiers.is_chord() {
                    return TextFieldAction::None;
                }
                self.insert_char(c);
                self.changed()
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return TextFieldAction::None;
                }
                self.cursor -= 1;
                self.remove_at_cursor();
                self.changed()
            }
            KeyCode::Delete => {
                if self.cursor >= self.char_len() {
                    return TextFieldAction::None;
                }
                self.remove_at_cursor();
                self.changed()
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                TextFieldAction::None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_len());
                TextFieldAction::None
            }
            KeyCode::Home => {
                self.cursor = 0;
                TextFieldAction::None
            }
            KeyCode::End => {
                self.cursor = self.char_len();
                TextFieldAction::None
            }
            KeyCode::Enter
            | KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Esc
            | KeyCode::Up
            | KeyCode::Down => TextFieldAction::None,
        }
    }

    fn changed(&self) -> TextFieldAction {
        TextFieldAction::Changed(self.value.clone())
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn insert_char(&mut self, ch: char) {
        let idx = byte_index_from_char_index(&self.value, self.cursor);
        self.value.insert(idx, ch);
        self.cursor += 1;
    }

    fn remove_at_cursor(&mut self) {
        let start = byte_index_from_char_index(&self.value, self.cursor);
        let end = byte_index_from_char_index(&self.value, self.cursor + 1);
        self.value.replace_range(start..end, "");
    }

    fn cursor_display_x(&self) -> usize {
        self.value
            .chars()
            .take(self.cursor)
            .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
            .sum()
    }

    fn ensure_cursor_visible(&mut self, width: usize) {
        let cx = self.cursor_display_x();
        if cx < self.scroll_x {
            self.scroll_x = cx;
        } else if cx >= self.scroll_x + width {
            self.scroll_x = cx + 1 - width;
        }
    }
}

fn byte_index_from_char_index(s: &str, char_idx: usize) -> usize {
    match s.char_indices().nth(char_idx) {
        Some((i, _)) => i,
        None => s.len(),
    }
}
