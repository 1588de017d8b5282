use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::TypeIntrospection;
use crate::core::{MemberOrigin, MethodSignature, ParameterInfo, TypeRef};

/// Name of the type every other type ultimately derives from
pub const UNIVERSAL_ROOT_TYPE: &str = "System.Object";

/// Public members every type inherits from the universal root
pub fn universal_root_methods() -> Vec<MethodSignature> {
    [
        MethodSignature::new("Equals")
            .with_parameter(ParameterInfo::new("obj", TypeRef::named(UNIVERSAL_ROOT_TYPE)))
            .returning(TypeRef::named("System.Boolean")),
        MethodSignature::new("GetHashCode").returning(TypeRef::named("System.Int32")),
        MethodSignature::new("GetType").returning(TypeRef::named("System.Type")),
        MethodSignature::new("ToString").returning(TypeRef::named("System.String")),
    ]
    .into_iter()
    .map(|method| method.with_origin(MemberOrigin::UniversalRoot))
    .collect()
}

fn default_true() -> bool {
    true
}

/// A named field; library constants are public static string fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    pub value: Value,
    #[serde(default = "default_true", rename = "static")]
    pub is_static: bool,
    #[serde(default = "default_true", rename = "public")]
    pub is_public: bool,
}

impl FieldDefinition {
    /// A public static field
    pub fn constant(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            is_static: true,
            is_public: true,
        }
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    pub fn instance(mut self) -> Self {
        self.is_static = false;
        self
    }

    fn public_static_string(&self) -> Option<&str> {
        if self.is_public && self.is_static {
            self.value.as_str()
        } else {
            None
        }
    }
}

/// A property, exposed to callers through its accessor methods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default = "default_true")]
    pub readable: bool,
    #[serde(default = "default_true")]
    pub writable: bool,
    #[serde(default, rename = "static")]
    pub is_static: bool,
}

impl PropertyDefinition {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            readable: true,
            writable: true,
            is_static: false,
        }
    }

    pub fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    /// `get_<Name>()` and `set_<Name>(value)`, as far as the property allows
    fn accessors(&self) -> Vec<MethodSignature> {
        let mut accessors = Vec::with_capacity(2);
        if self.readable {
            accessors.push(MethodSignature {
                is_static: self.is_static,
                ..MethodSignature::new(format!("get_{}", self.name)).returning(self.ty.clone())
            });
        }
        if self.writable {
            accessors.push(MethodSignature {
                is_static: self.is_static,
                ..MethodSignature::new(format!("set_{}", self.name))
                    .with_parameter(ParameterInfo::new("value", self.ty.clone()))
            });
        }
        accessors
    }
}

/// Declarative description of one type's public surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDefinition {
    /// Full name, `Namespace.Class`
    pub name: String,
    /// Full name of the base type, resolved by the manifest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
    #[serde(default)]
    pub properties: Vec<PropertyDefinition>,
    #[serde(default)]
    pub methods: Vec<MethodSignature>,
}

impl TypeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            fields: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_property(mut self, property: PropertyDefinition) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_method(mut self, method: MethodSignature) -> Self {
        self.methods.push(method);
        self
    }

    /// Class name without its namespace
    pub fn class_name(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map_or(self.name.as_str(), |(_, class)| class)
    }

    /// Property accessors followed by methods, in declaration order
    fn declared_members(&self) -> impl Iterator<Item = MethodSignature> + '_ {
        self.properties
            .iter()
            .flat_map(PropertyDefinition::accessors)
            .chain(self.methods.iter().cloned())
    }
}

impl TypeIntrospection for TypeDefinition {
    fn type_name(&self) -> &str {
        &self.name
    }

    fn public_methods(&self) -> Vec<MethodSignature> {
        ResolvedType::standalone(self).public_methods()
    }

    fn public_static_string_field(&self, name: &str) -> Option<String> {
        ResolvedType::standalone(self).public_static_string_field(name)
    }
}

/// A type together with its ancestor chain, nearest ancestor first
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedType<'a> {
    definition: &'a TypeDefinition,
    ancestors: Vec<&'a TypeDefinition>,
}

impl<'a> ResolvedType<'a> {
    pub fn standalone(definition: &'a TypeDefinition) -> Self {
        Self::with_ancestors(definition, Vec::new())
    }

    pub fn with_ancestors(
        definition: &'a TypeDefinition,
        ancestors: Vec<&'a TypeDefinition>,
    ) -> Self {
        Self {
            definition,
            ancestors,
        }
    }

    pub fn definition(&self) -> &'a TypeDefinition {
        self.definition
    }

    pub fn ancestors(&self) -> &[&'a TypeDefinition] {
        &self.ancestors
    }
}

/// Same name and same parameter types: the nearer declaration hides the other
fn same_signature(a: &MethodSignature, b: &MethodSignature) -> bool {
    a.name == b.name
        && a.parameters.len() == b.parameters.len()
        && a
            .parameters
            .iter()
            .zip(&b.parameters)
            .all(|(left, right)| left.ty == right.ty)
}

fn push_unhidden(methods: &mut Vec<MethodSignature>, method: MethodSignature) {
    if !methods.iter().any(|known| same_signature(known, &method)) {
        methods.push(method);
    }
}

impl TypeIntrospection for ResolvedType<'_> {
    fn type_name(&self) -> &str {
        &self.definition.name
    }

    fn public_methods(&self) -> Vec<MethodSignature> {
        let mut methods: Vec<MethodSignature> = self
            .definition
            .declared_members()
            .map(|method| method.with_origin(MemberOrigin::Declared))
            .collect();

        // Statics stay with the type that declares them
        for ancestor in &self.ancestors {
            for method in ancestor.declared_members().filter(|method| !method.is_static) {
                let origin = MemberOrigin::Inherited {
                    from: ancestor.name.clone(),
                };
                push_unhidden(&mut methods, method.with_origin(origin));
            }
        }

        for method in universal_root_methods() {
            push_unhidden(&mut methods, method);
        }

        methods
    }

    fn public_static_string_field(&self, name: &str) -> Option<String> {
        // Static fields of ancestors are not part of the lookup
        self.definition
            .fields
            .iter()
            .find(|field| field.name == name)
            .and_then(FieldDefinition::public_static_string)
            .map(str::to_string)
    }
}
