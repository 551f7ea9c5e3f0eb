//! Binding for a free-text field.
//!
//! ```
//! use ratatui_fields_core::editable::Editable;
//! use ratatui_fields_core::requirement::Optional;
//! use ratatui_fields_core::text_field::TextFieldProps;
//!
//! let mut name = Editable::new("  Ada ", Optional, |value| TextFieldProps {
//!     value: value.to_string(),
//!     label: Some("Name".into()),
//!     ..Default::default()
//! });
//! assert_eq!(name.final_value(), Some("Ada".to_string()));
//!
//! name.set("   ");
//! assert_eq!(name.raw_value(), "   ");
//! assert_eq!(name.final_value(), None);
//! assert!(!name.props().is_required);
//! ```

use std::fmt;

use crate::component::FieldAction;
use crate::component::HasIsRequired;
use crate::requirement::Requirement;

/// Owns the raw text of one field and derives its trimmed final value.
///
/// `M` maps the raw value to the props of whatever widget renders the field; the binding then
/// stamps its required flag onto those props, overriding whatever the mapper chose.
pub struct Editable<R, M> {
    raw: String,
    requirement: R,
    mapper: M,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EditableSnapshot<F, P> {
    pub raw_value: String,
    pub final_value: F,
    pub props: P,
}

impl<R: Requirement, M> Editable<R, M> {
    /// Replaces the raw value. Setting the current value again has no observable effect on the
    /// value.
    pub fn set(&mut self, value: impl Into<String>) {
        self.raw = value.into();
        tracing::trace!(
            raw = %self.raw,
            required = self.requirement.is_required(),
            "editable field set"
        );
    }

    pub fn raw_value(&self) -> &str {
        &self.raw
    }

    pub fn requirement(&self) -> R {
        self.requirement
    }

    pub fn is_required(&self) -> bool {
        self.requirement.is_required()
    }

    /// The raw value with surrounding whitespace trimmed (see [`trim_whitespace`]); optional
    /// fields yield `None` once nothing is left.
    pub fn final_value(&self) -> R::Final {
        self.requirement.finalize(trim_whitespace(&self.raw))
    }

    /// Applies a widget action; returns `true` if the action carried a value.
    pub fn handle_action(&mut self, action: &impl FieldAction) -> bool {
        match action.changed_value() {
            Some(value) => {
                self.set(value);
                true
            }
            None => false,
        }
    }
}

impl<R, M, P> Editable<R, M>
where
    R: Requirement,
    M: Fn(&str) -> P,
    P: HasIsRequired,
{
    pub fn new(initial: impl Into<String>, requirement: R, mapper: M) -> Self {
        Self {
            raw: initial.into(),
            requirement,
            mapper,
        }
    }

    pub fn props(&self) -> P {
        (self.mapper)(&self.raw).with_required(self.requirement.is_required())
    }

    pub fn snapshot(&self) -> EditableSnapshot<R::Final, P> {
        EditableSnapshot {
            raw_value: self.raw.clone(),
            final_value: self.final_value(),
            props: self.props(),
        }
    }
}

/// Whitespace stripped from both ends of an editable value.
///
/// This is the web-form set: ASCII tab, line feed, vertical tab, form feed, carriage return and
/// space, every `Zs` space separator, U+2028/U+2029 and the byte-order mark U+FEFF. Unlike
/// [`char::is_whitespace`], U+0085 (NEL) is kept and U+FEFF is stripped.
pub fn is_field_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{B}'
            | '\u{C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

pub fn trim_whitespace(s: &str) -> &str {
    s.trim_matches(is_field_whitespace)
}

impl<R: fmt::Debug, M> fmt::Debug for Editable<R, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editable")
            .field("raw", &self.raw)
            .field("requirement", &self.requirement)
            .finish_non_exhaustive()
    }
}
