//! Shape descriptors for records.
//!
//! A shape lists the declared fields of a record (with their kinds, whether
//! they are required, and whether they are readonly) and says whether fields
//! outside that list are accepted.

use std::fmt::{self, Display};

use registrar_types::{FieldKind, FieldName};

// ============================================================================
// Field Definition
// ============================================================================

/// Whether a declared field has to be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    Required,
    Optional,
}

/// Definition of a declared record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name.
    pub name: FieldName,
    /// Type check applied to the value.
    pub kind: FieldKind,
    /// Whether the field must be present.
    pub presence: Presence,
    /// Whether the field may only be written at construction.
    pub readonly: bool,
}

impl FieldDef {
    /// Creates a required field definition.
    pub fn required(name: impl Into<FieldName>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            presence: Presence::Required,
            readonly: false,
        }
    }

    /// Creates an optional field definition.
    pub fn optional(name: impl Into<FieldName>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            presence: Presence::Optional,
            readonly: false,
        }
    }

    /// Makes this field readonly after construction.
    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }
}

// ============================================================================
// Shape
// ============================================================================

/// Declared structure of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    name: String,
    fields: Vec<FieldDef>,
    extensible: bool,
}

impl Shape {
    /// Creates a shape from its field definitions.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>, extensible: bool) -> Self {
        for (i, field) in fields.iter().enumerate() {
            debug_assert!(
                fields[..i].iter().all(|f| f.name != field.name),
                "field '{}' declared twice",
                field.name
            );
        }

        Self {
            name: name.into(),
            fields,
            extensible,
        }
    }

    /// Returns the shape name (used in logs and error context).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns all declared fields in declaration order.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Returns true if undeclared fields are carried through.
    pub fn is_extensible(&self) -> bool {
        self.extensible
    }

    /// Finds a declared field by name.
    pub fn find_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name.as_str() == name)
    }

    /// Returns true if the given name is a declared field.
    pub fn declares(&self, name: &str) -> bool {
        self.find_field(name).is_some()
    }

    /// Returns the required fields in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.is_required())
    }

    /// Returns the optional fields in declaration order.
    pub fn optional_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| !f.is_required())
    }

    /// Returns true if the given field is declared readonly.
    pub fn is_readonly(&self, name: &str) -> bool {
        self.find_field(name).is_some_and(|f| f.readonly)
    }

    /// Returns a copy of this shape with a different extensibility flag.
    pub fn with_extensible(mut self, extensible: bool) -> Self {
        self.extensible = extensible;
        self
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.name)?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            let readonly = if field.readonly { "readonly " } else { "" };
            let optional = if field.is_required() { "" } else { "?" };
            write!(f, " {readonly}{}{optional}: {}", field.name, field.kind)?;
        }
        if self.extensible {
            if !self.fields.is_empty() {
                write!(f, ",")?;
            }
            write!(f, " ..")?;
        }
        write!(f, " }}")
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for constructing shapes fluently.
#[derive(Debug)]
pub struct ShapeBuilder {
    name: String,
    fields: Vec<FieldDef>,
    extensible: bool,
}

impl ShapeBuilder {
    /// Creates a new builder for a closed shape.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            extensible: false,
        }
    }

    /// Adds a required field.
    pub fn required(mut self, name: impl Into<FieldName>, kind: FieldKind) -> Self {
        self.fields.push(FieldDef::required(name, kind));
        self
    }

    /// Adds an optional field.
    pub fn optional(mut self, name: impl Into<FieldName>, kind: FieldKind) -> Self {
        self.fields.push(FieldDef::optional(name, kind));
        self
    }

    /// Adds a required field that cannot change after construction.
    pub fn readonly(mut self, name: impl Into<FieldName>, kind: FieldKind) -> Self {
        self.fields.push(FieldDef::required(name, kind).readonly());
        self
    }

    /// Adds a prepared field definition.
    pub fn field(mut self, def: FieldDef) -> Self {
        self.fields.push(def);
        self
    }

    /// Sets whether undeclared fields are accepted.
    pub fn extensible(mut self, extensible: bool) -> Self {
        self.extensible = extensible;
        self
    }

    /// Builds the shape.
    pub fn build(self) -> Shape {
        Shape::new(self.name, self.fields, self.extensible)
    }
}
