//! Explicit presence wrapper for partially supplied payload attributes.

use serde::{Deserialize, Deserializer};

use crate::error::DomainError;

/// An attribute that was either supplied with a value or left out.
///
/// Used with `#[serde(default)]`: a missing key deserializes to
/// [`Field::Unchanged`], a present key to [`Field::Set`]. An explicit
/// `null` is not a value of `T` and fails deserialization, unless the
/// attribute opts in with [`Field::nullable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field<T> {
    Unchanged,
    Set(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Unchanged
    }
}

impl<T> Field<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Field::Set(_))
    }

    /// Apply a fallible validation to a supplied value.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Field<U>, E> {
        match self {
            Field::Unchanged => Ok(Field::Unchanged),
            Field::Set(value) => f(value).map(Field::Set),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Unchanged => None,
            Field::Set(value) => Some(value),
        }
    }

    /// The supplied value, or a validation error naming the missing field.
    pub fn required(self, field_name: &'static str) -> Result<T, DomainError> {
        self.into_option()
            .ok_or_else(|| DomainError::validation(format!("{field_name} is required")))
    }

    /// Overwrite `target` when a value was supplied.
    pub fn apply_to(self, target: &mut T) {
        if let Field::Set(value) = self {
            *target = value;
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Field::Set(value),
            None => Field::Unchanged,
        }
    }
}

impl<'de, T> Deserialize<'de> for Field<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Field::Set)
    }
}

impl<T> Field<T> {
    /// `deserialize_with` hook for attributes where an explicit `null`
    /// means the same as leaving the key out.
    pub fn nullable<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Field::from)
    }
}
