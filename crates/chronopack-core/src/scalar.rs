//! Scalar value seam between the container format and the codecs
//!
//! The container format (object/array framing, key lookup, slice
//! addressing) lives outside this workspace. Codecs only ever see one
//! scalar at a time: a `Scalar` on the read side, a `ScalarBuilder`
//! positioned to receive a single value on the write side.

/// One decoded binary scalar value
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    /// Signed 64-bit integer, the legacy epoch-millisecond representation
    Int(i64),
    Double(f64),
    String(String),
}

impl Scalar {
    pub fn is_string(&self) -> bool {
        matches!(self, Scalar::String(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Scalar::Int(_))
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Representation name used in type-mismatch diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "int",
            Scalar::Double(_) => "double",
            Scalar::String(_) => "string",
        }
    }
}

/// Write-side cursor accepting typed scalar values
///
/// The real container builder frames these into objects and arrays; here
/// the values are simply collected in order so codecs and tests can
/// observe exactly what was written.
#[derive(Clone, Debug, Default)]
pub struct ScalarBuilder {
    values: Vec<Scalar>,
}

impl ScalarBuilder {
    pub fn new() -> Self {
        ScalarBuilder { values: Vec::new() }
    }

    pub fn add_string(&mut self, value: impl Into<String>) {
        self.values.push(Scalar::String(value.into()));
    }

    pub fn add_int(&mut self, value: i64) {
        self.values.push(Scalar::Int(value));
    }

    pub fn add_bool(&mut self, value: bool) {
        self.values.push(Scalar::Bool(value));
    }

    pub fn add_double(&mut self, value: f64) {
        self.values.push(Scalar::Double(value));
    }

    /// Number of values written so far
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// View of the values written so far, in write order
    pub fn values(&self) -> &[Scalar] {
        &self.values
    }

    /// Consume the builder, yielding the written values
    pub fn into_values(self) -> Vec<Scalar> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_accessors() {
        let s = Scalar::String("2016-09-27".into());
        assert!(s.is_string());
        assert_eq!(s.as_str(), Some("2016-09-27"));
        assert!(!s.is_number());
        assert_eq!(s.as_i64(), None);

        let n = Scalar::Int(1475062216);
        assert!(n.is_number());
        assert_eq!(n.as_i64(), Some(1475062216));
        assert!(!n.is_string());

        assert_eq!(Scalar::Bool(true).type_name(), "bool");
        assert_eq!(Scalar::Null.type_name(), "null");
        assert_eq!(Scalar::Double(1.5).type_name(), "double");
    }

    #[test]
    fn test_builder_preserves_write_order() {
        let mut builder = ScalarBuilder::new();
        builder.add_string("a");
        builder.add_int(7);
        builder.add_bool(false);

        assert_eq!(builder.len(), 3);
        assert_eq!(builder.values()[0], Scalar::String("a".into()));
        assert_eq!(builder.values()[1], Scalar::Int(7));
        assert_eq!(builder.into_values()[2], Scalar::Bool(false));
    }
}
