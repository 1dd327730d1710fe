//! Metadata sources and the bundled in-memory host.
//!
//! A [`MetadataSource`] is the only place member descriptors are produced.
//! Hosts can back it with native reflection, parsed debug symbols or compiled
//! metadata tables; [`InMemoryMetadata`] holds type definitions registered
//! through a builder API or loaded from a JSON metadata document.

use crate::access::{MemberAccess, TypeVisibility};
use crate::descriptor::{AnnotationKind, MemberDescriptor, MemberKind, TypeDescriptor, TypeName};
use crate::error::{MetadataFault, ReflectError, ReflectResult};
use crate::AccessCategory;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

// ── Member Scope ─────────────────────────────────────────────────────

/// Which declared members a snapshot includes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberScope {
    /// Include instance members.
    pub instance: bool,
    /// Include static members.
    pub statics: bool,
    /// Include members classified as public.
    pub public: bool,
    /// Include every member that is not public.
    pub non_public: bool,
    /// Include compiler-generated accessors (property getters, event add/remove).
    pub include_special_names: bool,
}

impl MemberScope {
    /// Instance and static public members only.
    pub fn public_only() -> Self {
        Self {
            non_public: false,
            ..Self::default()
        }
    }

    pub fn admits(&self, member: &MemberDescriptor) -> bool {
        let lifetime_ok = if member.is_static { self.statics } else { self.instance };
        let visibility_ok = if member.access_category() == AccessCategory::Public {
            self.public
        } else {
            self.non_public
        };
        lifetime_ok && visibility_ok && (self.include_special_names || !member.is_special_name)
    }
}

impl Default for MemberScope {
    fn default() -> Self {
        Self {
            instance: true,
            statics: true,
            public: true,
            non_public: true,
            include_special_names: false,
        }
    }
}

// ── Metadata Source ──────────────────────────────────────────────────

/// Capability that produces descriptors from a host's type metadata.
pub trait MetadataSource: Send + Sync {
    /// Describe the type itself.
    fn type_descriptor(&self, ty: &TypeName) -> ReflectResult<TypeDescriptor>;

    /// Snapshot the declared members of one kind, in declaration order.
    fn members(
        &self,
        ty: &TypeName,
        kind: MemberKind,
        scope: &MemberScope,
    ) -> ReflectResult<Vec<MemberDescriptor>>;

    /// Name of this source implementation.
    fn name(&self) -> &str;
}

// ── Definitions ──────────────────────────────────────────────────────

fn void_type() -> TypeName {
    TypeName::void()
}

/// A declared method.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDefinition {
    pub name: String,
    #[serde(default = "void_type")]
    pub return_type: TypeName,
    #[serde(default)]
    pub parameters: Vec<TypeName>,
    pub access: MemberAccess,
    #[serde(default)]
    pub is_virtual: bool,
    #[serde(default)]
    pub is_final: bool,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub annotations: Vec<AnnotationKind>,
}

impl MethodDefinition {
    /// A non-virtual instance method returning nothing.
    pub fn new(name: &str, access: MemberAccess) -> Self {
        Self {
            name: name.to_string(),
            return_type: TypeName::void(),
            parameters: Vec::new(),
            access,
            is_virtual: false,
            is_final: false,
            is_static: false,
            annotations: Vec::new(),
        }
    }

    pub fn returning(mut self, ty: TypeName) -> Self {
        self.return_type = ty;
        self
    }

    /// Append a parameter type.
    pub fn taking(mut self, ty: TypeName) -> Self {
        self.parameters.push(ty);
        self
    }

    pub fn overridable(mut self) -> Self {
        self.is_virtual = true;
        self
    }

    /// Virtual but sealed against further overriding.
    pub fn sealed(mut self) -> Self {
        self.is_virtual = true;
        self.is_final = true;
        self
    }

    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn annotated(mut self, kind: AnnotationKind) -> Self {
        self.annotations.push(kind);
        self
    }

    /// `Name(Param, ...)`, the identity of an overload.
    pub fn signature(&self) -> String {
        let params: Vec<String> = self.parameters.iter().map(|p| p.to_string()).collect();
        format!("{}({})", self.name, params.join(", "))
    }
}

/// Flags of a property's get or set accessor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessorDefinition {
    pub access: MemberAccess,
    #[serde(default)]
    pub is_virtual: bool,
    #[serde(default)]
    pub is_final: bool,
    #[serde(default)]
    pub is_static: bool,
}

impl AccessorDefinition {
    pub fn new(access: MemberAccess) -> Self {
        Self {
            access,
            is_virtual: false,
            is_final: false,
            is_static: false,
        }
    }

    pub fn overridable(mut self) -> Self {
        self.is_virtual = true;
        self
    }

    pub fn sealed(mut self) -> Self {
        self.is_virtual = true;
        self.is_final = true;
        self
    }

    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }
}

/// A declared property.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    pub name: String,
    pub property_type: TypeName,
    #[serde(default)]
    pub getter: Option<AccessorDefinition>,
    #[serde(default)]
    pub setter: Option<AccessorDefinition>,
    #[serde(default)]
    pub annotations: Vec<AnnotationKind>,
}

impl PropertyDefinition {
    pub fn new(name: &str, property_type: TypeName) -> Self {
        Self {
            name: name.to_string(),
            property_type,
            getter: None,
            setter: None,
            annotations: Vec::new(),
        }
    }

    pub fn with_getter(mut self, getter: AccessorDefinition) -> Self {
        self.getter = Some(getter);
        self
    }

    pub fn with_setter(mut self, setter: AccessorDefinition) -> Self {
        self.setter = Some(setter);
        self
    }

    /// Getter and setter sharing the same flags.
    pub fn with_accessors(self, accessor: AccessorDefinition) -> Self {
        self.with_getter(accessor.clone()).with_setter(accessor)
    }

    pub fn annotated(mut self, kind: AnnotationKind) -> Self {
        self.annotations.push(kind);
        self
    }

    /// The accessor whose flags describe the property: the getter, else the setter.
    fn resolving_accessor(&self, declaring_type: &TypeName) -> ReflectResult<&AccessorDefinition> {
        self.getter
            .as_ref()
            .or(self.setter.as_ref())
            .ok_or_else(|| {
                ReflectError::Metadata(MetadataFault::MissingAccessor {
                    declaring_type: declaring_type.to_string(),
                    property: self.name.clone(),
                })
            })
    }
}

/// A declared event; only its add/remove accessors surface as members.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDefinition {
    pub name: String,
    pub handler_type: TypeName,
    pub access: MemberAccess,
}

impl EventDefinition {
    pub fn new(name: &str, handler_type: TypeName, access: MemberAccess) -> Self {
        Self {
            name: name.to_string(),
            handler_type,
            access,
        }
    }
}

/// A declared type and its members.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDefinition {
    pub name: TypeName,
    pub visibility: TypeVisibility,
    #[serde(default)]
    pub methods: Vec<MethodDefinition>,
    #[serde(default)]
    pub properties: Vec<PropertyDefinition>,
    #[serde(default)]
    pub events: Vec<EventDefinition>,
}

impl TypeDefinition {
    pub fn new(name: TypeName, visibility: TypeVisibility) -> Self {
        Self {
            name,
            visibility,
            methods: Vec::new(),
            properties: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn with_method(mut self, method: MethodDefinition) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_property(mut self, property: PropertyDefinition) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_event(mut self, event: EventDefinition) -> Self {
        self.events.push(event);
        self
    }

    /// Methods are identified by name and parameter list, properties by name.
    fn validate(&self) -> ReflectResult<()> {
        let mut methods = HashSet::new();
        for method in &self.methods {
            if !methods.insert((method.name.as_str(), method.parameters.as_slice())) {
                return Err(self.duplicate(method.signature(), MemberKind::Method));
            }
        }
        let mut properties = HashSet::new();
        for property in &self.properties {
            if !properties.insert(property.name.as_str()) {
                return Err(self.duplicate(property.name.clone(), MemberKind::Property));
            }
        }
        Ok(())
    }

    fn duplicate(&self, member: String, kind: MemberKind) -> ReflectError {
        ReflectError::Metadata(MetadataFault::DuplicateMember {
            declaring_type: self.name.to_string(),
            member,
            kind: kind.to_string(),
        })
    }

    fn method_descriptors(&self) -> ReflectResult<Vec<MemberDescriptor>> {
        let mut out: Vec<MemberDescriptor> = self
            .methods
            .iter()
            .map(|m| MemberDescriptor {
                name: m.name.clone(),
                kind: MemberKind::Method,
                declaring_type: self.name.clone(),
                value_type: m.return_type.clone(),
                parameters: m.parameters.clone(),
                access: m.access,
                is_virtual: m.is_virtual,
                is_final: m.is_final,
                is_static: m.is_static,
                is_special_name: false,
                annotations: m.annotations.clone(),
            })
            .collect();

        for property in &self.properties {
            if let Some(getter) = &property.getter {
                out.push(self.accessor_method(
                    format!("get_{}", property.name),
                    property.property_type.clone(),
                    Vec::new(),
                    getter,
                ));
            }
            if let Some(setter) = &property.setter {
                out.push(self.accessor_method(
                    format!("set_{}", property.name),
                    TypeName::void(),
                    vec![property.property_type.clone()],
                    setter,
                ));
            }
        }

        for event in &self.events {
            let accessor = AccessorDefinition::new(event.access);
            for prefix in ["add_", "remove_"] {
                out.push(self.accessor_method(
                    format!("{}{}", prefix, event.name),
                    TypeName::void(),
                    vec![event.handler_type.clone()],
                    &accessor,
                ));
            }
        }

        Ok(out)
    }

    fn accessor_method(
        &self,
        name: String,
        value_type: TypeName,
        parameters: Vec<TypeName>,
        accessor: &AccessorDefinition,
    ) -> MemberDescriptor {
        MemberDescriptor {
            name,
            kind: MemberKind::Method,
            declaring_type: self.name.clone(),
            value_type,
            parameters,
            access: accessor.access,
            is_virtual: accessor.is_virtual,
            is_final: accessor.is_final,
            is_static: accessor.is_static,
            is_special_name: true,
            annotations: Vec::new(),
        }
    }

    fn property_descriptors(&self) -> ReflectResult<Vec<MemberDescriptor>> {
        self.properties
            .iter()
            .map(|p| {
                let accessor = p.resolving_accessor(&self.name)?;
                Ok(MemberDescriptor {
                    name: p.name.clone(),
                    kind: MemberKind::Property,
                    declaring_type: self.name.clone(),
                    value_type: p.property_type.clone(),
                    parameters: Vec::new(),
                    access: accessor.access,
                    is_virtual: accessor.is_virtual,
                    is_final: accessor.is_final,
                    is_static: accessor.is_static,
                    is_special_name: false,
                    annotations: p.annotations.clone(),
                })
            })
            .collect()
    }
}

// ── Metadata Document ────────────────────────────────────────────────

/// Serialized form of a set of type definitions.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MetadataDocument {
    pub types: Vec<TypeDefinition>,
}

// ── In-Memory Metadata ───────────────────────────────────────────────

/// Metadata source backed by registered type definitions.
#[derive(Clone, Debug, Default)]
pub struct InMemoryMetadata {
    types: HashMap<String, TypeDefinition>,
}

impl InMemoryMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new type definition. A type registered twice is a
    /// `DuplicateType` fault; use [`replace`](Self::replace) to overwrite.
    pub fn register(&mut self, definition: TypeDefinition) -> ReflectResult<()> {
        Self::check(&definition)?;
        let key = definition.name.to_string();
        if self.types.contains_key(&key) {
            return Err(ReflectError::Metadata(MetadataFault::DuplicateType(key)));
        }
        debug!(
            type_name = %definition.name,
            methods = definition.methods.len(),
            properties = definition.properties.len(),
            "Type definition registered"
        );
        self.types.insert(key, definition);
        Ok(())
    }

    /// Register a type definition, returning the one it replaced.
    pub fn replace(
        &mut self,
        definition: TypeDefinition,
    ) -> ReflectResult<Option<TypeDefinition>> {
        Self::check(&definition)?;
        let previous = self.types.insert(definition.name.to_string(), definition);
        if let Some(old) = &previous {
            debug!(type_name = %old.name, "Type definition replaced");
        }
        Ok(previous)
    }

    fn check(definition: &TypeDefinition) -> ReflectResult<()> {
        if definition.name.is_blank() {
            return Err(ReflectError::invalid_usage("type definition has an empty name"));
        }
        definition.validate()
    }

    pub fn with_type(mut self, definition: TypeDefinition) -> ReflectResult<Self> {
        self.register(definition)?;
        Ok(self)
    }

    /// Load every type of a JSON metadata document.
    pub fn from_json(json: &str) -> ReflectResult<Self> {
        let document: MetadataDocument = serde_json::from_str(json)?;
        let mut metadata = Self::new();
        for definition in document.types {
            metadata.register(definition)?;
        }
        Ok(metadata)
    }

    /// Serialize the registered types, sorted by name.
    pub fn to_json(&self) -> ReflectResult<String> {
        let mut types: Vec<TypeDefinition> = self.types.values().cloned().collect();
        types.sort_by_key(|t| t.name.to_string());
        Ok(serde_json::to_string_pretty(&MetadataDocument { types })?)
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    fn definition(&self, ty: &TypeName) -> ReflectResult<&TypeDefinition> {
        if ty.is_blank() {
            return Err(ReflectError::invalid_usage("no type name given"));
        }
        self.types
            .get(&ty.to_string())
            .ok_or_else(|| ReflectError::unknown_type(ty.to_string()))
    }
}

impl MetadataSource for InMemoryMetadata {
    fn type_descriptor(&self, ty: &TypeName) -> ReflectResult<TypeDescriptor> {
        let def = self.definition(ty)?;
        Ok(TypeDescriptor::new(def.name.clone(), def.visibility))
    }

    fn members(
        &self,
        ty: &TypeName,
        kind: MemberKind,
        scope: &MemberScope,
    ) -> ReflectResult<Vec<MemberDescriptor>> {
        let def = self.definition(ty)?;
        let all = match kind {
            MemberKind::Method => def.method_descriptors()?,
            MemberKind::Property => def.property_descriptors()?,
        };
        let declared = all.len();
        let members: Vec<MemberDescriptor> = all.into_iter().filter(|m| scope.admits(m)).collect();
        debug!(
            type_name = %ty,
            kind = %kind,
            declared,
            selected = members.len(),
            "Member snapshot captured"
        );
        Ok(members)
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}
