//! Seams between bindings and the widgets they drive.
//!
//! A binding never knows which widget it feeds. It only needs to stamp the required flag onto the
//! widget's props ([`HasIsRequired`]) and to learn when the widget reports a new value
//! ([`FieldAction`]). Any widget implementing both can be bound, including ones defined outside
//! this crate.

/// Props of a widget that can be told whether its field is required.
pub trait HasIsRequired {
    fn with_required(self, is_required: bool) -> Self;
}

/// An action emitted by a widget after handling input.
pub trait FieldAction {
    /// The field's new raw value, if this action changes it.
    fn changed_value(&self) -> Option<&str>;
}
