//! Mapping between parsed properties and typed form values.

use crate::{
    error::FormError,
    fields::{self, FieldType},
    properties::{self, PropertyMap},
    statics,
};
use indexmap::{IndexMap, IndexSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Bool(bool),
    Text(String),
}

impl FieldValue {
    pub fn zero(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Bool => FieldValue::Bool(false),
            FieldType::String => FieldValue::Text(String::new()),
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Bool(_) => FieldType::Bool,
            FieldValue::Text(_) => FieldType::String,
        }
    }

    pub fn to_property_string(&self) -> String {
        match self {
            FieldValue::Bool(true) => statics::PROPS_TRUE.to_string(),
            FieldValue::Bool(false) => statics::PROPS_FALSE.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Field name -> value. Names always come from the registry.
pub type FormValues = IndexMap<&'static str, FieldValue>;

/// Property keys present in the loaded file. Gates which fields are shown and written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableSet(IndexSet<String>);

impl AvailableSet {
    pub fn from_props(props: &PropertyMap) -> Self {
        Self(props.keys().cloned().collect())
    }

    pub fn contains(&self, property_key: &str) -> bool {
        self.0.contains(property_key)
    }

}

impl<S: Into<String>> FromIterator<S> for AvailableSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Case-insensitive `true`/`1`/`yes`/`on`; anything else is false.
pub fn parse_bool_lenient(s: &str) -> bool {
    let s = s.trim();
    ["true", "1", "yes", "on"]
        .iter()
        .any(|t| s.eq_ignore_ascii_case(t))
}

/// Typed values for every registry field whose key is present. Absent keys stay unset.
pub fn to_form_data(props: &PropertyMap) -> FormValues {
    let mut values = FormValues::new();
    for field in fields::FIELDS {
        let Some(raw) = props.get(field.property_key) else {
            continue;
        };
        let value = match field.field_type {
            FieldType::Bool => FieldValue::Bool(parse_bool_lenient(raw)),
            FieldType::String => FieldValue::Text(raw.clone()),
        };
        values.insert(field.name, value);
    }
    values
}

/// Merge form values over `original`. Only keys in `available` are touched;
/// everything else in `original` passes through unchanged.
pub fn to_properties(
    values: &FormValues,
    original: &PropertyMap,
    available: &AvailableSet,
) -> PropertyMap {
    let mut props = original.clone();

    for field in fields::FIELDS {
        if !available.contains(field.property_key) {
            continue;
        }

        // An emptied input counts as "not supplied" when there is something to fall back to.
        let supplied = values.get(field.name).filter(|v| {
            !(field.default.is_some() && matches!(v, FieldValue::Text(s) if s.is_empty()))
        });

        let value = match (supplied, field.default) {
            (Some(v), _) => v.to_property_string(),
            (None, Some(default)) => default.to_property_string(),
            (None, None) => continue,
        };
        props.insert(field.property_key.to_string(), value);
    }

    props
}

/// Live form: typed field values plus the raw editor text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: FormValues,
    pub raw: String,
}

impl FormState {
    pub fn new(values: FormValues, raw: impl Into<String>) -> Self {
        Self {
            values,
            raw: raw.into(),
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), FormError> {
        let field = fields::find(name).ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        let value = value.into();
        if value.field_type() != field.field_type {
            return Err(FormError::TypeMismatch {
                field: field.name,
                expected: field.field_type,
            });
        }
        self.values.insert(field.name, value);
        Ok(())
    }

    /// Shallow merge; incoming values win.
    pub fn merge(&mut self, incoming: FormValues) {
        self.values.extend(incoming);
    }

    /// Re-sync structured fields from edited raw text without dropping fields
    /// the raw text no longer mentions.
    pub fn apply_raw(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
        let parsed = properties::parse(&self.raw);
        self.merge(to_form_data(&parsed));
    }
}
