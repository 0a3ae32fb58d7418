//! Graph edge direction

/// Direction of a hop in a graph traversal
///
/// ```
/// use surql_types::Direction;
///
/// assert_eq!(Direction::Out.as_str(), "->");
/// assert_eq!(Direction::In.as_str(), "<-");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Outgoing edge: `->`
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "->"))]
    Out,
    /// Incoming edge: `<-`
    #[cfg_attr(feature = "serde", serde(rename = "<-"))]
    In,
}

impl Direction {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Direction::Out => "->",
            Direction::In => "<-",
        }
    }

    /// The opposite direction
    #[must_use]
    pub const fn reverse(&self) -> Self {
        match self {
            Direction::Out => Direction::In,
            Direction::In => Direction::Out,
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "->" => Some(Direction::Out),
            "<-" => Some(Direction::In),
            _ => None,
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction() {
        assert_eq!(Direction::parse("->"), Some(Direction::Out));
        assert_eq!(Direction::parse("<-"), Some(Direction::In));
        assert_eq!(Direction::parse("<->"), None);
        assert_eq!(Direction::Out.reverse(), Direction::In);
        assert_eq!(format!("{}{}", Direction::In, Direction::Out), "<-->");
    }
}
