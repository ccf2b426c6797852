// Copyright 2024 numcore developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt;

use crate::error::{from_kind, ErrorKind};
use crate::{FixedArray, Ix, Scalar};

/// Version tag written with every serialized array.
const ARRAY_FORMAT_VERSION: u8 = 1u8;

/// Verifies that the version of the deserialized array matches the current
/// `ARRAY_FORMAT_VERSION`.
pub fn verify_version<E>(v: u8) -> Result<(), E>
where E: de::Error
{
    if v != ARRAY_FORMAT_VERSION {
        let err_msg = format!("unknown array version: {}", v);
        Err(de::Error::custom(err_msg))
    } else {
        Ok(())
    }
}

/// **Requires crate feature `"serde"`**
///
/// Elements serialize as plain numbers and booleans.
impl Serialize for Scalar
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer
    {
        match *self {
            Scalar::Int(i) => serializer.serialize_i64(i),
            Scalar::Real(x) => serializer.serialize_f64(x),
            Scalar::Bool(b) => serializer.serialize_bool(b),
        }
    }
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor
{
    type Value = Scalar;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        formatter.write_str("an integer, a real or a boolean")
    }

    fn visit_bool<E>(self, b: bool) -> Result<Scalar, E>
    where E: de::Error
    {
        Ok(Scalar::Bool(b))
    }

    fn visit_i64<E>(self, i: i64) -> Result<Scalar, E>
    where E: de::Error
    {
        Ok(Scalar::Int(i))
    }

    fn visit_u64<E>(self, u: u64) -> Result<Scalar, E>
    where E: de::Error
    {
        i64::try_from(u)
            .map(Scalar::Int)
            .map_err(|_| de::Error::custom(from_kind(ErrorKind::TypeKind)))
    }

    fn visit_f64<E>(self, x: f64) -> Result<Scalar, E>
    where E: de::Error
    {
        Ok(Scalar::Real(x))
    }

    fn visit_str<E>(self, _: &str) -> Result<Scalar, E>
    where E: de::Error
    {
        Err(de::Error::custom(from_kind(ErrorKind::TypeKind)))
    }

    fn visit_unit<E>(self) -> Result<Scalar, E>
    where E: de::Error
    {
        Err(de::Error::custom(from_kind(ErrorKind::TypeKind)))
    }
}

/// **Requires crate feature `"serde"`**
impl<'de> Deserialize<'de> for Scalar
{
    fn deserialize<D>(deserializer: D) -> Result<Scalar, D::Error>
    where D: Deserializer<'de>
    {
        deserializer.deserialize_any(ScalarVisitor)
    }
}

/// **Requires crate feature `"serde"`**
impl Serialize for FixedArray
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where Se: Serializer
    {
        let mut state = serializer.serialize_struct("FixedArray", 3)?;
        state.serialize_field("v", &ARRAY_FORMAT_VERSION)?;
        state.serialize_field("dim", self.shape())?;
        state.serialize_field("data", self.as_slice())?;
        state.end()
    }
}

struct ArrayVisitor;

enum ArrayField
{
    Version,
    Dim,
    Data,
}

static ARRAY_FIELDS: &[&str] = &["v", "dim", "data"];

/// **Requires crate feature `"serde"`**
///
/// Deserialization runs the same validation as
/// [`FixedArray::from_shape_vec`]; its errors are reported as custom
/// deserializer errors.
impl<'de> Deserialize<'de> for FixedArray
{
    fn deserialize<D>(deserializer: D) -> Result<FixedArray, D::Error>
    where D: Deserializer<'de>
    {
        deserializer.deserialize_struct("FixedArray", ARRAY_FIELDS, ArrayVisitor)
    }
}

impl<'de> Deserialize<'de> for ArrayField
{
    fn deserialize<D>(deserializer: D) -> Result<ArrayField, D::Error>
    where D: Deserializer<'de>
    {
        struct ArrayFieldVisitor;

        impl<'de> Visitor<'de> for ArrayFieldVisitor
        {
            type Value = ArrayField;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result
            {
                formatter.write_str(r#""v", "dim", or "data""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<ArrayField, E>
            where E: de::Error
            {
                match value {
                    "v" => Ok(ArrayField::Version),
                    "dim" => Ok(ArrayField::Dim),
                    "data" => Ok(ArrayField::Data),
                    other => Err(de::Error::unknown_field(other, ARRAY_FIELDS)),
                }
            }

            fn visit_bytes<E>(self, value: &[u8]) -> Result<ArrayField, E>
            where E: de::Error
            {
                match value {
                    b"v" => Ok(ArrayField::Version),
                    b"dim" => Ok(ArrayField::Dim),
                    b"data" => Ok(ArrayField::Data),
                    other => Err(de::Error::unknown_field(&String::from_utf8_lossy(other), ARRAY_FIELDS)),
                }
            }
        }

        deserializer.deserialize_identifier(ArrayFieldVisitor)
    }
}

fn build<E>(dim: Vec<Ix>, data: Vec<Scalar>) -> Result<FixedArray, E>
where E: de::Error
{
    FixedArray::from_shape_vec(dim, data).map_err(de::Error::custom)
}

impl<'de> Visitor<'de> for ArrayVisitor
{
    type Value = FixedArray;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        formatter.write_str("numcore representation")
    }

    fn visit_seq<V>(self, mut visitor: V) -> Result<FixedArray, V::Error>
    where V: SeqAccess<'de>
    {
        let v: u8 = match visitor.next_element()? {
            Some(value) => value,
            None => {
                return Err(de::Error::invalid_length(0, &self));
            }
        };

        verify_version(v)?;

        let dim: Vec<Ix> = match visitor.next_element()? {
            Some(value) => value,
            None => {
                return Err(de::Error::invalid_length(1, &self));
            }
        };

        let data: Vec<Scalar> = match visitor.next_element()? {
            Some(value) => value,
            None => {
                return Err(de::Error::invalid_length(2, &self));
            }
        };

        build(dim, data)
    }

    fn visit_map<V>(self, mut visitor: V) -> Result<FixedArray, V::Error>
    where V: MapAccess<'de>
    {
        let mut v: Option<u8> = None;
        let mut data: Option<Vec<Scalar>> = None;
        let mut dim: Option<Vec<Ix>> = None;

        while let Some(key) = visitor.next_key()? {
            match key {
                ArrayField::Version => {
                    let val = visitor.next_value()?;
                    verify_version(val)?;
                    v = Some(val);
                }
                ArrayField::Data => {
                    data = Some(visitor.next_value()?);
                }
                ArrayField::Dim => {
                    dim = Some(visitor.next_value()?);
                }
            }
        }

        if v.is_none() {
            return Err(de::Error::missing_field("v"));
        }

        let data = match data {
            Some(data) => data,
            None => return Err(de::Error::missing_field("data")),
        };

        let dim = match dim {
            Some(dim) => dim,
            None => return Err(de::Error::missing_field("dim")),
        };

        build(dim, data)
    }
}
