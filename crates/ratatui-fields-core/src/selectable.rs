//! Binding for a field whose value is one key out of a fixed option set.
//!
//! Unlike [`Editable`](crate::editable::Editable), the raw value is never trimmed: keys are
//! compared exactly, and only the empty string counts as "nothing selected".

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::component::FieldAction;
use crate::component::HasIsRequired;
use crate::requirement::Requirement;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectOption {
    pub key: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("duplicate option key `{key}` at position {index}")]
    DuplicateKey { key: String, index: usize },
}

/// Ordered options with unique keys.
///
/// Storage is shared, so cloning into widget props on every frame is cheap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<SelectOption>", into = "Vec<SelectOption>")
)]
pub struct SelectOptions {
    items: Arc<[SelectOption]>,
}

impl SelectOptions {
    pub fn new(options: impl IntoIterator<Item = SelectOption>) -> Result<Self, OptionsError> {
        let items: Vec<SelectOption> = options.into_iter().collect();
        let mut seen = HashSet::with_capacity(items.len());
        for (index, option) in items.iter().enumerate() {
            if !seen.insert(option.key.as_str()) {
                return Err(OptionsError::DuplicateKey {
                    key: option.key.clone(),
                    index,
                });
            }
        }
        Ok(Self {
            items: items.into(),
        })
    }

    /// Options whose label is the key itself.
    pub fn from_keys<K: Into<String>>(
        keys: impl IntoIterator<Item = K>,
    ) -> Result<Self, OptionsError> {
        Self::new(keys.into_iter().map(|k| {
            let key = k.into();
            SelectOption::new(key.clone(), key)
        }))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectOption> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[SelectOption] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.items.get(index)
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|o| o.key == key)
    }

    pub fn find(&self, key: &str) -> Option<&SelectOption> {
        self.items.iter().find(|o| o.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }
}

impl TryFrom<Vec<SelectOption>> for SelectOptions {
    type Error = OptionsError;

    fn try_from(options: Vec<SelectOption>) -> Result<Self, Self::Error> {
        Self::new(options)
    }
}

impl From<SelectOptions> for Vec<SelectOption> {
    fn from(options: SelectOptions) -> Self {
        options.items.to_vec()
    }
}

impl<'a> IntoIterator for &'a SelectOptions {
    type Item = &'a SelectOption;
    type IntoIter = std::slice::Iter<'a, SelectOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owns the selected key of one field.
///
/// The binding does not check that the key belongs to [`select_options`](Self::select_options);
/// a stray key flows through to [`final_value`](Self::final_value) unchanged.
pub struct Selectable<R, M> {
    options: SelectOptions,
    raw: String,
    requirement: R,
    mapper: M,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectableSnapshot<F, P> {
    pub select_options: SelectOptions,
    pub raw_value: String,
    pub final_value: F,
    pub props: P,
}

impl<R: Requirement, M> Selectable<R, M> {
    /// Selects `key`; `""` clears the selection.
    pub fn set(&mut self, key: impl Into<String>) {
        self.raw = key.into();
        tracing::trace!(
            key = %self.raw,
            known = self.raw.is_empty() || self.options.contains(&self.raw),
            required = self.requirement.is_required(),
            "selectable field set"
        );
    }

    pub fn select_options(&self) -> &SelectOptions {
        &self.options
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

    pub fn final_value(&self) -> R::Final {
        self.requirement.finalize(&self.raw)
    }

    /// The option whose key is the raw value, if any.
    pub fn selected_option(&self) -> Option<&SelectOption> {
        self.options.find(&self.raw)
    }

    /// Applies a widget action; returns `true` if the action carried a value.
    pub fn handle_action(&mut self, action: &impl FieldAction) -> bool {
        match action.changed_value() {
            Some(key) => {
                self.set(key);
                true
            }
            None => false,
        }
    }
}

impl<R, M, P> Selectable<R, M>
where
    R: Requirement,
    M: Fn(&str, &SelectOptions) -> P,
    P: HasIsRequired,
{
    pub fn new(
        options: SelectOptions,
        initial: impl Into<String>,
        requirement: R,
        mapper: M,
    ) -> Self {
        Self {
            options,
            raw: initial.into(),
            requirement,
            mapper,
        }
    }

    pub fn props(&self) -> P {
        (self.mapper)(&self.raw, &self.options).with_required(self.requirement.is_required())
    }

    pub fn snapshot(&self) -> SelectableSnapshot<R::Final, P> {
        SelectableSnapshot {
            select_options: self.options.clone(),
            raw_value: self.raw.clone(),
            final_value: self.final_value(),
            props: self.props(),
        }
    }
}

impl<R: fmt::Debug, M> fmt::Debug for Selectable<R, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selectable")
            .field("options", &self.options)
            .field("raw", &self.raw)
            .field("requirement", &self.requirement)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirement::Optional;
    use crate::requirement::Required;

    #[derive(Clone, Debug, PartialEq)]
    struct Props {
        selected: String,
        count: usize,
        is_required: bool,
    }

    impl HasIsRequired for Props {
        fn with_required(mut self, is_required: bool) -> Self {
            self.is_required = is_required;
            self
        }
    }

    fn mapper(selected: &str, options: &SelectOptions) -> Props {
        Props {
            selected: selected.to_string(),
            count: options.len(),
            is_required: false,
        }
    }

    fn abc() -> SelectOptions {
        SelectOptions::new([
            SelectOption::new("a", "A"),
            SelectOption::new("b", "B"),
            SelectOption::new("c", "C"),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_duplicate_keys() {
        let err = SelectOptions::from_keys(["a", "b", "a"]).unwrap_err();
        assert_eq!(
            err,
            OptionsError::DuplicateKey {
                key: "a".to_string(),
                index: 2
            }
        );
        assert_eq!(err.to_string(), "duplicate option key `a` at position 2");
    }

    #[test]
    fn reports_first_repeat_in_long_list() {
        let mut keys: Vec<String> = (0..500).map(|i| format!("k{i}")).collect();
        assert_eq!(SelectOptions::from_keys(keys.clone()).map(|o| o.len()), Ok(500));
        keys.push("k250".to_string());
        keys.push("k3".to_string());
        assert_eq!(
            SelectOptions::from_keys(keys),
            Err(OptionsError::DuplicateKey {
                key: "k250".to_string(),
                index: 500
            })
        );
    }

    #[test]
    fn whitespace_key_is_not_empty() {
        let mut field = Selectable::new(abc(), "a", Optional, mapper);
        field.set(" ");
        assert_eq!(field.final_value(), Some(" ".to_string()));
        field.set("");
        assert_eq!(field.final_value(), None);
    }

    #[test]
    fn unknown_key_flows_through() {
        let field = Selectable::new(abc(), "z", Required, mapper);
        assert_eq!(field.final_value(), "z");
        assert_eq!(field.selected_option(), None);
    }

    #[test]
    fn selected_option_follows_raw_value() {
        let mut field = Selectable::new(abc(), "a", Required, mapper);
        field.set("c");
        assert_eq!(field.selected_option(), Some(&SelectOption::new("c", "C")));
    }

    #[test]
    fn props_see_options_and_required_flag() {
        let field = Selectable::new(abc(), "b", Required, mapper);
        assert_eq!(
            field.props(),
            Props {
                selected: "b".to_string(),
                count: 3,
                is_required: true
            }
        );
        let snap = field.snapshot();
        assert_eq!(snap.select_options, abc());
        assert_eq!(snap.final_value, "b");
    }
}
