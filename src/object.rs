use std::{fmt, str::FromStr};

use ordered_float::OrderedFloat;
use serde_json::{Map, Value};

use super::{Decode, ElementList, Error, JsonType, ProtocolViolation, Result};


/// A number the protocol declares as decimal, such as a timestamp in
/// milliseconds since the epoch.
pub type Decimal = OrderedFloat<f64>;

/// A borrowed view over one JSON object of a received message.
///
/// `ty` is the name of the element type the object is viewed as and only
/// appears in error messages.
#[derive(Clone, Copy, PartialEq)]
pub struct Object<'a> {
    ty: &'static str,
    map: &'a Map<String, Value>,
}

impl<'a> Object<'a> {
    pub fn new(ty: &'static str, value: &'a Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self::from_map(ty, map)),
            _ => Err(ProtocolViolation::NotAnObject {
                ty,
                got: JsonType::of(value),
            }
            .into()),
        }
    }
    pub fn from_map(ty: &'static str, map: &'a Map<String, Value>) -> Self {
        Self { ty, map }
    }
    pub(crate) fn with_type(self, ty: &'static str) -> Self {
        Self { ty, map: self.map }
    }

    pub fn type_name(&self) -> &'static str {
        self.ty
    }
    pub fn json(&self) -> &'a Map<String, Value> {
        self.map
    }

    /// Returns `true` if `field` is present and not `null`.
    pub fn has(&self, field: &str) -> bool {
        !matches!(self.map.get(field), None | Some(Value::Null))
    }

    pub fn get(&self, field: &'static str) -> Result<&'a Value> {
        match self.map.get(field) {
            None | Some(Value::Null) => {
                Err(ProtocolViolation::MissingField { ty: self.ty, field }.into())
            }
            Some(value) => Ok(value),
        }
    }
    fn get_opt(&self, field: &'static str) -> Option<&'a Value> {
        match self.map.get(field) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    pub fn str(&self, field: &'static str) -> Result<&'a str> {
        let value = self.get(field)?;
        value
            .as_str()
            .ok_or_else(|| self.type_error(field, "a string", value))
    }
    pub fn int(&self, field: &'static str) -> Result<i64> {
        let value = self.get(field)?;
        value
            .as_i64()
            .ok_or_else(|| self.type_error(field, "an integer", value))
    }
    pub fn bool(&self, field: &'static str) -> Result<bool> {
        let value = self.get(field)?;
        value
            .as_bool()
            .ok_or_else(|| self.type_error(field, "a boolean", value))
    }

    /// Reads a flag the protocol only adds when it is `true`.
    pub fn flag(&self, field: &'static str) -> Result<bool> {
        match self.get_opt(field) {
            None => Ok(false),
            Some(value) => value
                .as_bool()
                .ok_or_else(|| self.type_error(field, "a boolean", value)),
        }
    }

    pub fn decimal(&self, field: &'static str) -> Result<Decimal> {
        let value = self.get(field)?;
        value
            .as_f64()
            .map(OrderedFloat)
            .ok_or_else(|| self.type_error(field, "a number", value))
    }

    /// Decodes a nested object. The nested value borrows from the same tree.
    pub fn element<T: Decode<'a>>(&self, field: &'static str) -> Result<T> {
        let value = self.get(field)?;
        if !value.is_object() {
            return Err(self.type_error(field, "an object", value));
        }
        T::decode(value)
    }

    pub fn list<T: Decode<'a>>(&self, field: &'static str) -> Result<ElementList<'a, T>> {
        let value = self.get(field)?;
        match value {
            Value::Array(items) => Ok(ElementList::new(items)),
            _ => Err(self.type_error(field, "an array", value)),
        }
    }

    /// Parses a string field drawn from a closed enumeration.
    pub fn kind<T: FromStr>(&self, field: &'static str) -> Result<T> {
        let value = self.str(field)?;
        value.parse().map_err(|_| {
            ProtocolViolation::UnknownDiscriminator {
                ty: self.ty,
                field,
                value: value.to_string(),
            }
            .into()
        })
    }

    /// The value that selects the concrete shape of this object.
    ///
    /// This is the `type` field, or `kind` if the object has no `type`.
    pub fn discriminator(&self) -> Result<&'a str> {
        if self.has("type") {
            self.str("type")
        } else if self.has("kind") {
            self.str("kind")
        } else {
            Err(ProtocolViolation::MissingField {
                ty: self.ty,
                field: "type",
            }
            .into())
        }
    }

    fn type_error(&self, field: &'static str, expected: &'static str, value: &Value) -> Error {
        ProtocolViolation::FieldType {
            ty: self.ty,
            field,
            expected,
            got: JsonType::of(value),
        }
        .into()
    }
}

impl fmt::Debug for Object<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple(self.ty).field(self.map).finish()
    }
}
