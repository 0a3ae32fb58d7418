use super::{FieldIndex, ModelRef, RelationParams};
use compact_str::CompactString;
use surql_types::ScalarType;

/// What a declared property holds.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Scalar(ScalarType),
    Object,
    Array,
    /// Link to a record of another model
    Record(ModelRef),
    /// Graph traversal through an edge model
    Relation(RelationParams),
    /// Primary key
    Id,
}

/// Metadata for one declared property.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: CompactString,
    pub kind: FieldKind,
    pub shape: Option<Shape>,
    pub index: Option<FieldIndex>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<CompactString>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            shape: None,
            index: None,
        }
    }

    pub fn scalar(name: impl Into<CompactString>, ty: ScalarType) -> Self {
        Self::new(name, FieldKind::Scalar(ty))
    }

    pub fn object(name: impl Into<CompactString>, shape: Shape) -> Self {
        Self::new(name, FieldKind::Object).with_shape(shape)
    }

    /// Array field; `shape` describes each element when they are objects
    pub fn array(name: impl Into<CompactString>, shape: Option<Shape>) -> Self {
        let field = Self::new(name, FieldKind::Array);
        match shape {
            Some(shape) => field.with_shape(shape),
            None => field,
        }
    }

    pub fn record(name: impl Into<CompactString>, model: ModelRef) -> Self {
        Self::new(name, FieldKind::Record(model))
    }

    pub fn relation(name: impl Into<CompactString>, params: RelationParams) -> Self {
        Self::new(name, FieldKind::Relation(params))
    }

    pub fn id(name: impl Into<CompactString>) -> Self {
        Self::new(name, FieldKind::Id)
    }

    #[must_use]
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    #[must_use]
    pub fn with_index(mut self, index: FieldIndex) -> Self {
        self.index = Some(index);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_relation(&self) -> bool {
        matches!(self.kind, FieldKind::Relation(_))
    }

    pub fn relation_params(&self) -> Option<&RelationParams> {
        match &self.kind {
            FieldKind::Relation(params) => Some(params),
            _ => None,
        }
    }
}

/// Type of a nested member.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeType {
    Scalar(ScalarType),
    Object(Shape),
}

/// One member of a nested object.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeField {
    pub ty: ShapeType,
    pub required: bool,
}

impl ShapeField {
    pub fn is_object(&self) -> bool {
        matches!(self.ty, ShapeType::Object(_))
    }
}

/// Recursive structure of an object field, in declaration order.
///
/// ```
/// use surql_core::schema::Shape;
/// use surql_types::ScalarType;
///
/// let shape = Shape::new()
///     .field("title", ScalarType::String)
///     .optional("done", ScalarType::Bool)
///     .object("meta", Shape::new().field("views", ScalarType::Int));
/// assert!(shape.get("meta").unwrap().is_object());
/// assert!(!shape.get("done").unwrap().required);
/// assert_eq!(shape.resolve("meta.views").map(|f| f.required), Some(true));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shape {
    members: Vec<(CompactString, ShapeField)>,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(self, name: impl Into<CompactString>, ty: ScalarType) -> Self {
        self.member(name, ShapeType::Scalar(ty), true)
    }

    #[must_use]
    pub fn optional(self, name: impl Into<CompactString>, ty: ScalarType) -> Self {
        self.member(name, ShapeType::Scalar(ty), false)
    }

    #[must_use]
    pub fn object(self, name: impl Into<CompactString>, shape: Shape) -> Self {
        self.member(name, ShapeType::Object(shape), true)
    }

    #[must_use]
    pub fn member(mut self, name: impl Into<CompactString>, ty: ShapeType, required: bool) -> Self {
        let name = name.into();
        let field = ShapeField { ty, required };
        match self.members.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = field,
            None => self.members.push((name, field)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&ShapeField> {
        self.members.iter().find(|(n, _)| n == name).map(|(_, f)| f)
    }

    /// Follow a dotted path through nested objects.
    pub fn resolve(&self, path: &str) -> Option<&ShapeField> {
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };
        let field = self.get(head)?;
        match (rest, &field.ty) {
            (None, _) => Some(field),
            (Some(rest), ShapeType::Object(inner)) => inner.resolve(rest),
            (Some(_), ShapeType::Scalar(_)) => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ShapeField)> {
        self.members.iter().map(|(n, f)| (n.as_str(), f))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
