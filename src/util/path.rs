use std::path::{Path, PathBuf};

/// Prefix every listed path carries relative to the root
pub const LISTED_PREFIX: &str = "./";

/// Path of `path` relative to `root`, falling back to the path itself
pub fn relative_to(path: &Path, root: &Path) -> PathBuf {
    pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf())
}

/// Render a root-relative path the way the listing reports it: `./` for the
/// root itself, `./<rel>` otherwise, with a trailing `/` for directories.
/// Separators are always forward slashes.
pub fn to_listed(rel: &str, is_dir: bool) -> String {
    let rel = rel.replace('\\', "/");
    let rel = rel.trim_end_matches('/');
    if rel.is_empty() {
        return LISTED_PREFIX.to_string();
    }

    let mut listed = String::with_capacity(rel.len() + 3);
    listed.push_str(LISTED_PREFIX);
    listed.push_str(rel);
    if is_dir {
        listed.push('/');
    }
    listed
}

/// Strip the leading `./` from a listed path. The bare root (`.` or `./`)
/// normalizes to the empty string.
pub fn normalize_listed(raw: &str) -> &str {
    if raw == "." {
        return "";
    }
    raw.strip_prefix(LISTED_PREFIX).unwrap_or(raw)
}
