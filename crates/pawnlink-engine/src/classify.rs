//! Marshaling-kind classification
//!
//! Maps a managed parameter's declared type name to one of the seven
//! supported marshaling kinds. Classification is a fixed lookup over
//! exactly seven accepted spellings — not pattern inference. Any other
//! type name is unclassifiable and disqualifies the whole callback.

/// The closed set of supported parameter shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarshalKind {
    /// 32-bit signed integer, by value
    Int,
    /// Single-precision float, by value (raw cell bit pattern)
    Float,
    /// Boolean, by value (nonzero cell ⇒ true)
    Bool,
    /// Indirect string
    String,
    /// Indirect integer array with a companion length parameter
    IntArray,
    /// Indirect float array with a companion length parameter
    FloatArray,
    /// Indirect boolean array with a companion length parameter
    BoolArray,
}

impl MarshalKind {
    /// Classify a managed type name, or `None` for anything outside the
    /// seven accepted spellings. Case-sensitive.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "System.Int32" => Some(MarshalKind::Int),
            "System.Single" => Some(MarshalKind::Float),
            "System.Boolean" => Some(MarshalKind::Bool),
            "System.String" => Some(MarshalKind::String),
            "System.Int32[]" => Some(MarshalKind::IntArray),
            "System.Single[]" => Some(MarshalKind::FloatArray),
            "System.Boolean[]" => Some(MarshalKind::BoolArray),
            _ => None,
        }
    }

    /// True for the three array kinds, which require a companion length
    /// parameter.
    pub const fn is_array(self) -> bool {
        matches!(
            self,
            MarshalKind::IntArray | MarshalKind::FloatArray | MarshalKind::BoolArray
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_seven_spellings() {
        assert_eq!(MarshalKind::from_type_name("System.Int32"), Some(MarshalKind::Int));
        assert_eq!(MarshalKind::from_type_name("System.Single"), Some(MarshalKind::Float));
        assert_eq!(MarshalKind::from_type_name("System.Boolean"), Some(MarshalKind::Bool));
        assert_eq!(MarshalKind::from_type_name("System.String"), Some(MarshalKind::String));
        assert_eq!(
            MarshalKind::from_type_name("System.Int32[]"),
            Some(MarshalKind::IntArray)
        );
        assert_eq!(
            MarshalKind::from_type_name("System.Single[]"),
            Some(MarshalKind::FloatArray)
        );
        assert_eq!(
            MarshalKind::from_type_name("System.Boolean[]"),
            Some(MarshalKind::BoolArray)
        );
    }

    #[test]
    fn test_unclassifiable() {
        assert_eq!(MarshalKind::from_type_name("System.Int64"), None);
        assert_eq!(MarshalKind::from_type_name("System.Object"), None);
        assert_eq!(MarshalKind::from_type_name("System.String[]"), None);
        assert_eq!(MarshalKind::from_type_name(""), None);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(MarshalKind::from_type_name("system.int32"), None);
        assert_eq!(MarshalKind::from_type_name("SYSTEM.INT32"), None);
    }

    #[test]
    fn test_array_kinds() {
        assert!(MarshalKind::IntArray.is_array());
        assert!(MarshalKind::FloatArray.is_array());
        assert!(MarshalKind::BoolArray.is_array());
        assert!(!MarshalKind::Int.is_array());
        assert!(!MarshalKind::String.is_array());
    }
}
