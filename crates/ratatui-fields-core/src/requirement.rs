//! Whether a field must be filled, and what that means for its final value.
//!
//! A required field always yields a value (possibly empty); an optional field yields `None` once
//! its normalized input is empty. The tag types carry that choice in the type system so a
//! [`Required`] binding hands out `String` while an [`Optional`] one hands out `Option<String>`.
//! [`Dynamic`] covers callers that only learn the flag at runtime.
//!
//! Required-ness is advisory: an empty required value is passed through, not rejected. Checking
//! that a required field is non-empty is left to whoever consumes the final value.

use std::fmt;

pub trait Requirement: Copy + fmt::Debug {
    /// What [`finalize`](Requirement::finalize) produces.
    type Final: Clone + fmt::Debug + PartialEq;

    fn is_required(&self) -> bool;

    /// Maps an already-normalized input to the final value.
    fn finalize(&self, normalized: &str) -> Self::Final;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Required;

impl Requirement for Required {
    type Final = String;

    fn is_required(&self) -> bool {
        true
    }

    fn finalize(&self, normalized: &str) -> String {
        normalized.to_string()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Optional;

impl Requirement for Optional {
    type Final = Option<String>;

    fn is_required(&self) -> bool {
        false
    }

    fn finalize(&self, normalized: &str) -> Option<String> {
        (!normalized.is_empty()).then(|| normalized.to_string())
    }
}

/// Runtime flag. Always `Some` when required, so callers branch on
/// [`is_required`](Requirement::is_required) instead of on the type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dynamic(pub bool);

impl From<bool> for Dynamic {
    fn from(is_required: bool) -> Self {
        Self(is_required)
    }
}

impl Requirement for Dynamic {
    type Final = Option<String>;

    fn is_required(&self) -> bool {
        self.0
    }

    fn finalize(&self, normalized: &str) -> Option<String> {
        if self.0 {
            Some(Required.finalize(normalized))
        } else {
            Optional.finalize(normalized)
        }
    }
}
