//! Array-mutation symbol rewriting.
//!
//! `^` marks prepend and `$` marks append. After range expansion each
//! concrete path is rewritten once: `users^.name` becomes `users.0.name`,
//! `users$.name` becomes `users.-.name` where `-` is the append sentinel
//! segment understood by the document primitives. The symbols are mutually
//! exclusive per path; `^` wins when both are present.

/// Past-the-end sentinel segment: push on set, last element on delete.
pub const APPEND_SEGMENT: &str = "-";

/// Rewrite the first array-mutation symbol in `path`, if any.
pub fn rewrite(path: &str) -> String {
    if path.contains('^') {
        path.replacen('^', ".0", 1)
    } else if path.contains('$') {
        path.replacen('$', ".-", 1)
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepend_becomes_index_zero() {
        assert_eq!(rewrite("users^.name"), "users.0.name");
    }

    #[test]
    fn append_becomes_sentinel_segment() {
        assert_eq!(rewrite("users$.name"), "users.-.name");
        assert_eq!(rewrite("users$"), "users.-");
    }

    #[test]
    fn prepend_takes_precedence() {
        assert_eq!(rewrite("users^.tags$"), "users.0.tags$");
    }

    #[test]
    fn only_the_first_occurrence_is_rewritten() {
        assert_eq!(rewrite("a$.b$"), "a.-.b$");
    }

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(rewrite("users.0.name"), "users.0.name");
    }
}
