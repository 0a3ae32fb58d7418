//! SurrealDB value kinds used in field declarations

/// Kind of a scalar field or of a member of a nested object shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScalarType {
    #[default]
    Any,
    String,
    Number,
    Int,
    Float,
    Decimal,
    Bool,
    Datetime,
    Duration,
    Uuid,
    Bytes,
    Object,
    Array,
}

impl ScalarType {
    /// SurrealQL type keyword
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ScalarType::Any => "any",
            ScalarType::String => "string",
            ScalarType::Number => "number",
            ScalarType::Int => "int",
            ScalarType::Float => "float",
            ScalarType::Decimal => "decimal",
            ScalarType::Bool => "bool",
            ScalarType::Datetime => "datetime",
            ScalarType::Duration => "duration",
            ScalarType::Uuid => "uuid",
            ScalarType::Bytes => "bytes",
            ScalarType::Object => "object",
            ScalarType::Array => "array",
        }
    }

    /// Returns `true` for kinds that hold nested members
    #[inline]
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, ScalarType::Object | ScalarType::Array)
    }
}

impl core::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
