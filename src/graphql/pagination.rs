//! Offset pagination arguments for list queries

/// Default page size for `books`
pub const DEFAULT_LIMIT: i32 = 10;

/// Normalize `(offset, limit)` GraphQL arguments into slice bounds.
///
/// Negative values are clamped to 0, so a bad argument yields an empty page
/// rather than an error.
pub fn parse_pagination_args(offset: i32, limit: i32) -> (usize, usize) {
    let clamp = |v: i32| usize::try_from(v).unwrap_or(0);
    (clamp(offset), clamp(limit))
}
