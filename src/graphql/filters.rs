//! Ordering inputs for list queries

use async_graphql::Enum;

use crate::services::Direction;

/// Sort direction for list queries
#[derive(Enum, Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum SortDirection {
    /// Ascending order (A-Z, 1-9, oldest-newest)
    #[default]
    Asc,
    /// Descending order (Z-A, 9-1, newest-oldest)
    Desc,
}

impl From<SortDirection> for Direction {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Direction::Asc,
            SortDirection::Desc => Direction::Desc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        use async_graphql::{InputType, Value};

        assert_eq!(SortDirection::Asc.to_value(), Value::Enum(async_graphql::Name::new("ASC")));
        assert_eq!(SortDirection::Desc.to_value(), Value::Enum(async_graphql::Name::new("DESC")));
    }

    #[test]
    fn test_into_direction() {
        assert_eq!(Direction::from(SortDirection::default()), Direction::Asc);
        assert_eq!(Direction::from(SortDirection::Desc), Direction::Desc);
    }
}
