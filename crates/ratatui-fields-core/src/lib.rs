//! `ratatui-fields-core` binds form-field state to terminal widgets.
//!
//! A *binding* owns the raw value of one field and derives the *final* value handed to whatever
//! consumes the form:
//! - [`editable::Editable`]: free text, trimmed; an optional field that trims to nothing is `None`.
//! - [`selectable::Selectable`]: one key out of [`selectable::SelectOptions`], compared exactly;
//!   an optional field with no selection is `None`.
//!
//! Whether a field is required is fixed per binding through a [`requirement::Requirement`] tag, so
//! the final value's type says whether it can be absent.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you drive input + rendering from your app.
//! - No async runtime, no interior mutability: a binding is owned by the code that renders it.
//! - Widgets are pluggable: any props type implementing [`component::HasIsRequired`] can be fed by
//!   a binding, and any action implementing [`component::FieldAction`] can update one.
//!
//! ## Getting started
//!
//! Most users should depend on the facade crate `ratatui-fields`. The bundled widgets are
//! [`text_field::TextField`] and [`picker::Picker`].
pub mod theme;

pub mod input;
pub mod keymap;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod render;

pub mod component;
pub mod requirement;

pub mod editable;
pub mod selectable;

pub mod picker;
pub mod text_field;
