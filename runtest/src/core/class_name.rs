//! Derive a fully-qualified class name from a test source path.

/// Path segment where the package hierarchy starts.
pub const ANCHOR: &str = "org";

/// Map a test source path to the class name the test runner expects.
///
/// Segments before the first `org` are dropped; `org` itself is kept. The last
/// segment is cut at its first `.`, then everything is joined with `.`.
///
/// A path without an `org` segment yields an empty name. The runner will then
/// fail to load the class; nothing here tries to recover.
pub fn derive_class_name(test_path: &str) -> String {
    let mut parts: Vec<&str> = test_path
        .split('/')
        .skip_while(|segment| *segment != ANCHOR)
        .collect();

    if let Some(last) = parts.last_mut() {
        *last = last.split('.').next().unwrap_or_default();
    }

    parts.join(".")
}
