//! Pure route-path resolution (string-only, no filesystem). Used by the
//! path-append hook to rebase relative links against the current directory.

/// Normalizes a `/`-delimited relative path: resolve `.` and `..` segments.
///
/// Splitting is naive — empty segments from doubled separators are kept, so
/// `a//b` stays `a//b`. A `..` with nothing left to pop is silently dropped
/// rather than treated as an error; downstream link rewriting relies on that.
///
/// # Examples
///
/// - `resolve_path("a/b/../c")` → `"a/c"`
/// - `resolve_path("a/./b")` → `"a/b"`
/// - `resolve_path("../a")` → `"a"`
/// - `resolve_path("")` → `""`
pub fn resolve_path(path: &str) -> String {
    let mut resolved: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            ".." => {
                resolved.pop();
            }
            "." => {}
            _ => resolved.push(segment),
        }
    }
    resolved.join("/")
}

/// Joins a directory onto a relative path and normalizes the result.
///
/// An empty `dir` resolves `rel` on its own; `dir` is expected to carry no
/// trailing separator.
pub fn append_resolved(dir: &str, rel: &str) -> String {
    if dir.is_empty() {
        resolve_path(rel)
    } else {
        resolve_path(&format!("{}/{}", dir, rel))
    }
}
