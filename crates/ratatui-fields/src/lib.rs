//! `ratatui-fields` pairs form-field state with terminal widgets.
//!
//! Each field is a *binding* ([`editable::Editable`] or [`selectable::Selectable`]) that owns the
//! raw input and derives a final value, plus a widget ([`text_field::TextField`] or
//! [`picker::Picker`]) that renders it. The app owns both and wires them once per event:
//!
//! ```
//! use ratatui_fields::prelude::*;
//!
//! let mut email = Editable::new("", Required, |value| TextFieldProps {
//!     value: value.to_string(),
//!     label: Some("Email".into()),
//!     ..Default::default()
//! });
//! let mut widget = TextField::from_props(email.props());
//!
//! for ev in InputEvent::chars(" a@b.c ") {
//!     let action = widget.input(ev);
//!     email.handle_action(&action);
//!     widget.apply_props(email.props());
//! }
//! assert_eq!(email.final_value(), "a@b.c");
//! ```
//!
//! Enable the `crossterm` feature for `TryFrom<crossterm::event::Event>` conversions, and `serde`
//! to load [`selectable::SelectOptions`] from config files.
pub use ratatui_fields_core::component;
pub use ratatui_fields_core::editable;
pub use ratatui_fields_core::input;
pub use ratatui_fields_core::keymap;
pub use ratatui_fields_core::picker;
pub use ratatui_fields_core::render;
pub use ratatui_fields_core::requirement;
pub use ratatui_fields_core::selectable;
pub use ratatui_fields_core::text_field;
pub use ratatui_fields_core::theme;

#[cfg(feature = "crossterm")]
pub use ratatui_fields_core::crossterm_input;

pub mod prelude {
    pub use crate::component::FieldAction;
    pub use crate::component::HasIsRequired;
    pub use crate::editable::Editable;
    pub use crate::input::InputEvent;
    pub use crate::input::KeyCode;
    pub use crate::picker::Picker;
    pub use crate::picker::PickerAction;
    pub use crate::picker::PickerProps;
    pub use crate::requirement::Dynamic;
    pub use crate::requirement::Optional;
    pub use crate::requirement::Required;
    pub use crate::requirement::Requirement;
    pub use crate::selectable::SelectOption;
    pub use crate::selectable::SelectOptions;
    pub use crate::selectable::Selectable;
    pub use crate::text_field::TextField;
    pub use crate::text_field::TextFieldAction;
    pub use crate::text_field::TextFieldProps;
    pub use crate::theme::Theme;
}
