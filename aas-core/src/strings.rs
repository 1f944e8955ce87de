//! String helpers for names and slash-separated paths

/// Uppercase the first character (`conceptDescription` becomes `ConceptDescription`)
pub fn uppercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character (`IdShort` becomes `idShort`)
pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strip leading and trailing slashes
pub fn trim_slashes(s: &str) -> &str {
    s.trim_matches('/')
}

/// Split a slash-separated path into its non-empty segments
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// Join path segments with single slashes
pub fn join_path<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments
        .into_iter()
        .map(|s| trim_slashes(s.as_ref()).to_string())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_helpers() {
        assert_eq!(uppercase_first("conceptDescription"), "ConceptDescription");
        assert_eq!(lowercase_first("IdShort"), "idShort");
        assert_eq!(uppercase_first(""), "");
        assert_eq!(uppercase_first("ä"), "Ä");
    }

    #[test]
    fn test_path_helpers() {
        assert_eq!(trim_slashes("/aas/submodels/"), "aas/submodels");
        assert_eq!(split_path("/a//b/c/"), vec!["a", "b", "c"]);
        assert_eq!(join_path(["/aas/", "submodels", "", "/x"]), "aas/submodels/x");
    }
}
