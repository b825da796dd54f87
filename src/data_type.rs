//! Scalar element data types.

use thiserror::Error;

use serde::de::Error;

/// A data type.
///
/// Tags the scalar element kind of a numeric buffer. The set of data types
/// is fixed; every variant has a canonical lowercase name and a
/// single-character code accepted by [`DataType::from_name`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DataType {
    /// `bool` Boolean.
    Bool,
    /// `int8` Integer in `[-2^7, 2^7-1]`.
    Int8,
    /// `int16` Integer in `[-2^15, 2^15-1]`.
    Int16,
    /// `int32` Integer in `[-2^31, 2^31-1]`.
    Int32,
    /// `int64` Integer in `[-2^63, 2^63-1]`.
    Int64,
    /// `uint8` Integer in `[0, 2^8-1]`.
    UInt8,
    /// `float32` IEEE 754 single-precision floating point: sign bit, 8 bits exponent, 23 bits mantissa.
    Float32,
    /// `float64` IEEE 754 double-precision floating point: sign bit, 11 bits exponent, 52 bits mantissa.
    Float64,
}

/// A data type error.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum DataTypeError {
    /// The name or character code does not identify a supported data type.
    #[error("unknown dtype name: \"{_0}\"")]
    UnknownName(String),
    /// Two data types were expected to be identical.
    #[error("dtype mismatched: {_0} != {_1}")]
    Mismatched(DataType, DataType),
}

/// Mapping from canonical names and character codes to data types.
///
/// Canonical names precede character codes; no key occurs twice.
const NAME_MAPPING: [(&str, DataType); 16] = [
    // canonical names
    ("bool", DataType::Bool),
    ("int8", DataType::Int8),
    ("int16", DataType::Int16),
    ("int32", DataType::Int32),
    ("int64", DataType::Int64),
    ("uint8", DataType::UInt8),
    ("float32", DataType::Float32),
    ("float64", DataType::Float64),
    // character codes
    ("?", DataType::Bool),
    ("b", DataType::Int8),
    ("h", DataType::Int16),
    ("i", DataType::Int32),
    ("q", DataType::Int64),
    ("B", DataType::UInt8),
    ("f", DataType::Float32),
    ("d", DataType::Float64),
];

impl DataType {
    /// Returns the canonical name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt8 => "uint8",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        }
    }

    /// Returns the single-character code.
    ///
    /// Codes are parse-side aliases only; display and serialization always
    /// use the canonical name.
    #[must_use]
    pub const fn char_code(&self) -> char {
        match self {
            Self::Bool => '?',
            Self::Int8 => 'b',
            Self::Int16 => 'h',
            Self::Int32 => 'i',
            Self::Int64 => 'q',
            Self::UInt8 => 'B',
            Self::Float32 => 'f',
            Self::Float64 => 'd',
        }
    }

    /// Returns the size in bytes of an element.
    #[must_use]
    pub const fn size(&self) -> usize {
        match self {
            Self::Bool | Self::Int8 | Self::UInt8 => 1,
            Self::Int16 => 2,
            Self::Int32 | Self::Float32 => 4,
            Self::Int64 | Self::Float64 => 8,
        }
    }

    /// Create a data type from its canonical name or character code.
    ///
    /// Matching is exact and case-sensitive.
    ///
    /// ```
    /// # use ndbuf_data_type::DataType;
    /// assert_eq!(DataType::from_name("float32")?, DataType::Float32);
    /// assert_eq!(DataType::from_name("f")?, DataType::Float32);
    /// # Ok::<(), ndbuf_data_type::DataTypeError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`DataTypeError::UnknownName`] if `name` matches no canonical
    /// name or character code.
    pub fn from_name(name: &str) -> Result<Self, DataTypeError> {
        NAME_MAPPING
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, data_type)| *data_type)
            .ok_or_else(|| DataTypeError::UnknownName(name.to_string()))
    }

    /// Returns every supported data type, in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Bool,
            Self::Int8,
            Self::Int16,
            Self::Int32,
            Self::Int64,
            Self::UInt8,
            Self::Float32,
            Self::Float64,
        ]
    }

    /// Checks that two data types are identical.
    ///
    /// # Errors
    ///
    /// Returns [`DataTypeError::Mismatched`] if the data types differ.
    pub fn check_equal(self, other: Self) -> Result<(), DataTypeError> {
        if self == other {
            Ok(())
        } else {
            Err(DataTypeError::Mismatched(self, other))
        }
    }
}

impl core::fmt::Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl core::str::FromStr for DataType {
    type Err = DataTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl serde::Serialize for DataType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::Deserialize<'de> for DataType {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let name = String::deserialize(d)?;
        Self::from_name(&name).map_err(|err| D::Error::custom(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_type_name_round_trip() {
        for data_type in DataType::all() {
            assert_eq!(DataType::from_name(data_type.name()).unwrap(), data_type);
        }
    }

    #[test]
    fn data_type_all() {
        assert_eq!(
            DataType::all(),
            [
                DataType::Bool,
                DataType::Int8,
                DataType::Int16,
                DataType::Int32,
                DataType::Int64,
                DataType::UInt8,
                DataType::Float32,
                DataType::Float64,
            ]
        );
    }

    #[test]
    fn data_type_char_code() {
        assert_eq!(DataType::from_name("f").unwrap(), DataType::Float32);
        assert_eq!(
            DataType::from_name("f").unwrap(),
            DataType::from_name("float32").unwrap()
        );
        assert_eq!(DataType::from_name("?").unwrap(), DataType::Bool);
        assert_eq!(DataType::from_name("q").unwrap(), DataType::Int64);
        for data_type in DataType::all() {
            assert_eq!(
                DataType::from_name(&data_type.char_code().to_string()).unwrap(),
                data_type
            );
        }
    }

    #[test]
    fn data_type_unknown_name() {
        assert_eq!(
            DataType::from_name("complex128").unwrap_err().to_string(),
            "unknown dtype name: \"complex128\""
        );
    }

    #[test]
    fn data_type_name_exact_match() {
        assert!(DataType::from_name("Float32").is_err());
        assert!(DataType::from_name(" bool").is_err());
        assert!(DataType::from_name("bool ").is_err());
        assert!(DataType::from_name("").is_err());
    }

    #[test]
    fn data_type_check_equal() {
        assert!(DataType::Int32.check_equal(DataType::Int32).is_ok());
        assert_eq!(
            DataType::Int32
                .check_equal(DataType::Float32)
                .unwrap_err()
                .to_string(),
            "dtype mismatched: int32 != float32"
        );
    }

    #[test]
    fn data_type_display() {
        assert_eq!(format!("{}", DataType::Float32), "float32");
        assert_eq!(format!("{}", DataType::Bool), "bool");
        assert_eq!("int16".parse::<DataType>().unwrap(), DataType::Int16);
    }

    #[test]
    fn data_type_size() {
        assert_eq!(DataType::Bool.size(), 1);
        assert_eq!(DataType::Int8.size(), 1);
        assert_eq!(DataType::Int16.size(), 2);
        assert_eq!(DataType::Int32.size(), 4);
        assert_eq!(DataType::Int64.size(), 8);
        assert_eq!(DataType::UInt8.size(), 1);
        assert_eq!(DataType::Float32.size(), 4);
        assert_eq!(DataType::Float64.size(), 8);
    }

    #[test]
    fn data_type_serde() {
        assert_eq!(
            serde_json::to_string(&DataType::Float32).unwrap(),
            r#""float32""#
        );
        assert_eq!(
            serde_json::from_str::<DataType>(r#""float32""#).unwrap(),
            DataType::Float32
        );
        assert_eq!(
            serde_json::from_str::<DataType>(r#""d""#).unwrap(),
            DataType::Float64
        );
        assert!(serde_json::from_str::<DataType>(r#""complex128""#).is_err());
    }
}
