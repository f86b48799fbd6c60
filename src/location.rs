//! Reconstruction of source-root and output directories from a file path.
//!
//! Paths are handled as strings split on the platform separator, matching the conventional
//! Maven/Gradle layout (`src/main/java`, `src/test/java`). Unconventional layouts fall back to
//! the file's own directory.

use std::path::MAIN_SEPARATOR;

/// Where a source file lives and where code generated from it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Source root the file belongs to, with a trailing separator
    pub source_dir: String,
    /// Directory containing the file, with a trailing separator
    pub output_dir: String,
}

impl SourceLocation {
    /// Computes the location of `path` using the platform separator.
    pub fn from_path(path: &str) -> Self {
        Self::with_separator(path, MAIN_SEPARATOR)
    }

    /// Computes the location of `path` using `sep` as the path separator.
    pub fn with_separator(path: &str, sep: char) -> Self {
        let output_dir = containing_dir(path, sep);
        let source_dir = source_root(path, sep).unwrap_or_else(|| output_dir.clone());
        Self {
            source_dir,
            output_dir,
        }
    }
}

/// Every segment but the last, each followed by `sep`.
fn containing_dir(path: &str, sep: char) -> String {
    let segments: Vec<&str> = path.split(sep).collect();
    let mut dir = String::with_capacity(path.len());
    for segment in &segments[..segments.len().saturating_sub(1)] {
        dir.push_str(segment);
        dir.push(sep);
    }
    dir
}

/// Prefix of `path` up to and including the main or test source marker.
fn source_root(path: &str, sep: char) -> Option<String> {
    let main_marker = format!("{sep}src{sep}main{sep}java{sep}");
    let test_marker = format!("{sep}src{sep}test{sep}java{sep}");

    [main_marker, test_marker].iter().find_map(|marker| {
        path.find(marker.as_str())
            .map(|idx| format!("{}{}", &path[..idx], marker))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_source_root() {
        let location = SourceLocation::with_separator(
            "/work/shop/src/main/java/com/acme/OrderResource.java",
            '/',
        );

        assert_eq!(location.source_dir, "/work/shop/src/main/java/");
        assert_eq!(location.output_dir, "/work/shop/src/main/java/com/acme/");
    }

    #[test]
    fn test_test_source_root() {
        let location =
            SourceLocation::with_separator("/work/shop/src/test/java/com/acme/FakeApi.java", '/');

        assert_eq!(location.source_dir, "/work/shop/src/test/java/");
    }

    #[test]
    fn test_unconventional_layout_falls_back_to_output_dir() {
        let location = SourceLocation::with_separator("/work/shop/sources/Api.java", '/');

        assert_eq!(location.output_dir, "/work/shop/sources/");
        assert_eq!(location.source_dir, location.output_dir);
    }

    #[test]
    fn test_src_without_java_marker_falls_back() {
        let location = SourceLocation::with_separator("/work/shop/src/main/kotlin/Api.java", '/');
        assert_eq!(location.source_dir, "/work/shop/src/main/kotlin/");
    }

    #[test]
    fn test_marker_found_after_similar_prefix() {
        let location =
            SourceLocation::with_separator("/home/srcs/shop/src/main/java/Api.java", '/');
        assert_eq!(location.source_dir, "/home/srcs/shop/src/main/java/");
    }

    #[test]
    fn test_windows_separator() {
        let location =
            SourceLocation::with_separator(r"C:\work\shop\src\main\java\com\Api.java", '\\');

        assert_eq!(location.source_dir, r"C:\work\shop\src\main\java\");
        assert_eq!(location.output_dir, r"C:\work\shop\src\main\java\com\");
    }

    #[test]
    fn test_bare_file_name() {
        let location = SourceLocation::with_separator("Api.java", '/');
        assert_eq!(location.output_dir, "");
        assert_eq!(location.source_dir, "");
    }
}
