use super::ModelRef;
use compact_str::CompactString;
use surql_types::Direction;

/// Where a traversal ends after the edge hop.
#[derive(Debug, Clone, PartialEq)]
pub enum RelationTail {
    /// `<dir><target table>`
    Target { direction: Direction, model: ModelRef },
    /// Trailing selector appended after the edge, e.g. `.*` or `.out`
    Selector(CompactString),
    /// Stop at the edge
    None,
}

/// Graph traversal declared on a relation field.
///
/// ```
/// use surql_core::schema::{ModelRef, RelationParams, TableBuilder};
/// use surql_core::Model;
/// use surql_types::Direction;
///
/// struct Likes;
/// impl Model for Likes {
///     fn describe(_: &mut TableBuilder) {}
///     fn id(&self) -> &str { "" }
/// }
///
/// let params = RelationParams::new(Direction::In, ModelRef::of::<Likes>()).select(".*");
/// assert_eq!(params.dir_via, Direction::In);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RelationParams {
    pub dir_via: Direction,
    pub via: ModelRef,
    pub tail: RelationTail,
}

impl RelationParams {
    pub fn new(dir_via: Direction, via: ModelRef) -> Self {
        Self {
            dir_via,
            via,
            tail: RelationTail::None,
        }
    }

    /// Continue from the edge to a target model
    #[must_use]
    pub fn to(mut self, direction: Direction, model: ModelRef) -> Self {
        self.tail = RelationTail::Target { direction, model };
        self
    }

    /// End with a selector on the edge instead of a target
    #[must_use]
    pub fn select(mut self, selector: impl Into<CompactString>) -> Self {
        self.tail = RelationTail::Selector(selector.into());
        self
    }
}
