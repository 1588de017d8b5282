use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::errors::{Error, Result};

/// Wrappers that mark a value type as nullable.
const NULLABLE_WRAPPERS: &[&str] = &["System.Nullable<", "Nullable<"];

/// Built-in value types, by runtime name and language alias. A trailing `?`
/// only wraps these; on anything else it is a nullable-reference annotation.
const BUILTIN_VALUE_TYPES: &[&str] = &[
    "bool", "byte", "sbyte", "char", "short", "ushort", "int", "uint", "long", "ulong",
    "nint", "nuint", "float", "double", "decimal",
    "System.Boolean", "System.Byte", "System.SByte", "System.Char", "System.Int16",
    "System.UInt16", "System.Int32", "System.UInt32", "System.Int64", "System.UInt64",
    "System.IntPtr", "System.UIntPtr", "System.Single", "System.Double", "System.Decimal",
    "System.DateTime", "System.DateTimeOffset", "System.TimeSpan", "System.Guid",
];

/// A declared parameter or return type.
///
/// `Nullable` is the nullable-wrapper around a value type (`int?`,
/// `Nullable<int>`). Reference types that merely allow null are plain
/// `Named` types, so a parameter is only considered nullable when it is
/// declared through the wrapper.
///
/// In text form, `T?` is the wrapper only for built-in value types: `string?`
/// reads as `string`. Enums and user structs are wrapped by spelling out
/// `Nullable<T>`, which always wraps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeRef {
    Named(String),
    Nullable(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn nullable(inner: TypeRef) -> Self {
        Self::Nullable(Box::new(inner))
    }

    /// The wrapped type of a nullable wrapper, `None` for anything else
    pub fn underlying(&self) -> Option<&TypeRef> {
        match self {
            Self::Nullable(inner) => Some(inner),
            Self::Named(_) => None,
        }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }

    /// Name of the innermost named type
    pub fn base_name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Nullable(inner) => inner.base_name(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::Nullable(inner) if is_builtin_value_type(inner) => write!(f, "{inner}?"),
            Self::Nullable(inner) => write!(f, "Nullable<{inner}>"),
        }
    }
}

impl FromStr for TypeRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_type_name(s, "type name is empty"));
        }

        if let Some(inner) = trimmed.strip_suffix('?') {
            if inner.trim_end().ends_with('?') {
                return Err(Error::invalid_type_name(s, "nullable wrappers cannot nest"));
            }
            let inner_type = inner.parse::<TypeRef>()?;
            return if is_builtin_value_type(&inner_type) {
                wrap_nullable(s, inner_type)
            } else {
                Ok(inner_type)
            };
        }

        // `Nullable<int>[]` is an array, only a closing `>` ends the wrapper
        for wrapper in NULLABLE_WRAPPERS {
            let inner = trimmed
                .strip_prefix(wrapper)
                .and_then(|rest| rest.strip_suffix('>'))
                .filter(|inner| brackets_balanced(inner));
            if let Some(inner) = inner {
                return wrap_nullable(s, inner.parse()?);
            }
        }

        if !brackets_balanced(trimmed) {
            return Err(Error::invalid_type_name(s, "unbalanced brackets"));
        }

        Ok(Self::Named(trimmed.to_string()))
    }
}

fn is_builtin_value_type(ty: &TypeRef) -> bool {
    matches!(ty, TypeRef::Named(name) if BUILTIN_VALUE_TYPES.contains(&name.as_str()))
}

fn wrap_nullable(original: &str, inner: TypeRef) -> Result<TypeRef> {
    match inner {
        TypeRef::Nullable(_) => Err(Error::invalid_type_name(
            original,
            "nullable wrappers cannot nest",
        )),
        named => Ok(TypeRef::nullable(named)),
    }
}

fn brackets_balanced(name: &str) -> bool {
    let mut stack = Vec::new();
    for c in name.chars() {
        match c {
            '<' | '[' => stack.push(c),
            '>' if stack.pop() != Some('<') => return false,
            ']' if stack.pop() != Some('[') => return false,
            _ => {}
        }
    }
    stack.is_empty()
}

impl TryFrom<String> for TypeRef {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.to_string()
    }
}

/// One declared parameter of one overload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Declared optional independently of any default value
    #[serde(default, rename = "optional")]
    pub is_optional: bool,
    /// `Some(Value::Null)` is a declared `null` default, `None` means no default
    #[serde(
        default,
        rename = "default",
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_value: Option<Value>,
}

fn deserialize_present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl ParameterInfo {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            is_optional: false,
            default_value: None,
        }
    }

    /// Declare a default value; a defaulted parameter is also optional
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self.is_optional = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    pub fn has_default_value(&self) -> bool {
        self.default_value.is_some()
    }
}

/// Where a public member comes from relative to the introspected type
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MemberOrigin {
    #[default]
    Declared,
    Inherited {
        from: String,
    },
    /// Members every type inherits from the universal base object
    UniversalRoot,
}

/// One callable overload: a name plus its ordered parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodSignature {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<ParameterInfo>,
    #[serde(default, rename = "returns", skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeRef>,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default, skip_deserializing)]
    pub origin: MemberOrigin,
}

impl MethodSignature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type: None,
            is_static: false,
            origin: MemberOrigin::Declared,
        }
    }

    pub fn with_parameter(mut self, parameter: ParameterInfo) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn returning(mut self, ty: TypeRef) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_origin(mut self, origin: MemberOrigin) -> Self {
        self.origin = origin;
        self
    }

    pub fn is_universal_root_member(&self) -> bool {
        self.origin == MemberOrigin::UniversalRoot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_named_type() {
        let ty: TypeRef = "System.String".parse().unwrap();
        assert_eq!(ty, TypeRef::named("System.String"));
        assert!(ty.underlying().is_none());
    }

    #[test]
    fn test_parse_nullable_forms() {
        let short: TypeRef = "int?".parse().unwrap();
        let long: TypeRef = "System.Nullable<int>".parse().unwrap();
        let bare: TypeRef = "Nullable< int >".parse().unwrap();

        assert_eq!(short, TypeRef::nullable(TypeRef::named("int")));
        assert_eq!(short, long);
        assert_eq!(short, bare);
        assert_eq!(short.underlying(), Some(&TypeRef::named("int")));
        assert_eq!(short.base_name(), "int");
    }

    #[test]
    fn test_question_mark_on_reference_type_is_an_annotation() {
        let short: TypeRef = "string?".parse().unwrap();
        let long: TypeRef = "System.String?".parse().unwrap();
        let custom: TypeRef = "Acme.Settings?".parse().unwrap();

        assert_eq!(short, TypeRef::named("string"));
        assert_eq!(long, TypeRef::named("System.String"));
        assert_eq!(custom, TypeRef::named("Acme.Settings"));
        assert!(!short.is_nullable());

        let guid: TypeRef = "System.Guid?".parse().unwrap();
        assert!(guid.is_nullable());
        let color: TypeRef = "Nullable<Acme.Color>".parse().unwrap();
        assert_eq!(color, TypeRef::nullable(TypeRef::named("Acme.Color")));
    }

    #[test]
    fn test_arrays_of_nullables_are_named() {
        let long: TypeRef = "System.Nullable<int>[]".parse().unwrap();
        let short: TypeRef = "int?[]".parse().unwrap();

        assert_eq!(long, TypeRef::named("System.Nullable<int>[]"));
        assert_eq!(short, TypeRef::named("int?[]"));
        assert!(!long.is_nullable());

        let nested: TypeRef = "Nullable<KeyValuePair<int, int>>".parse().unwrap();
        assert_eq!(
            nested,
            TypeRef::nullable(TypeRef::named("KeyValuePair<int, int>"))
        );
    }

    #[test]
    fn test_parse_generic_type_is_named() {
        let ty: TypeRef = "List<Dictionary<string, int>>".parse().unwrap();
        assert_eq!(ty, TypeRef::named("List<Dictionary<string, int>>"));
    }

    #[test]
    fn test_parse_rejects_bad_names() {
        assert!("".parse::<TypeRef>().is_err());
        assert!("   ".parse::<TypeRef>().is_err());
        assert!("int??".parse::<TypeRef>().is_err());
        assert!("string??".parse::<TypeRef>().is_err());
        assert!("Nullable<int?>".parse::<TypeRef>().is_err());
        assert!("List<int".parse::<TypeRef>().is_err());
        assert!("Nullable<int".parse::<TypeRef>().is_err());
        assert!("int[]]".parse::<TypeRef>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_text() {
        let ty = TypeRef::nullable(TypeRef::named("double"));
        assert_eq!(ty.to_string(), "double?");
        assert_eq!(ty.to_string().parse::<TypeRef>().unwrap(), ty);

        let color = TypeRef::nullable(TypeRef::named("Acme.Color"));
        assert_eq!(color.to_string(), "Nullable<Acme.Color>");
        assert_eq!(color.to_string().parse::<TypeRef>().unwrap(), color);
    }

    #[test]
    fn test_parameter_default_null_is_a_default() {
        let with_null: ParameterInfo =
            serde_json::from_value(json!({"name": "a", "type": "string", "default": null}))
                .unwrap();
        let without: ParameterInfo =
            serde_json::from_value(json!({"name": "a", "type": "string"})).unwrap();

        assert_eq!(with_null.default_value, Some(Value::Null));
        assert!(with_null.has_default_value());
        assert_eq!(without.default_value, None);
        assert!(!without.is_optional);
    }

    #[test]
    fn test_with_default_marks_optional() {
        let parameter = ParameterInfo::new("value", TypeRef::named("int")).with_default(-1);
        assert!(parameter.is_optional);
        assert_eq!(parameter.default_value, Some(json!(-1)));
    }

    #[test]
    fn test_method_origin_is_not_read_from_input() {
        let method: MethodSignature = serde_json::from_value(json!({
            "name": "Run",
            "origin": {"kind": "universal_root"}
        }))
        .unwrap();
        assert_eq!(method.origin, MemberOrigin::Declared);
        assert!(method.parameters.is_empty());
    }
}
