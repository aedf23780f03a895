//! Path helpers shared by the filter and the walker.

use std::path::{Component, Path};

/// Extension of a file name including the leading dot, or `""`.
///
/// Everything from the last `.` onwards counts, so `.bashrc` has the
/// extension `.bashrc` and `archive.tar.GZ` has `.GZ`.
pub fn extension_of(name: &str) -> &str {
    name.rfind('.').map(|i| &name[i..]).unwrap_or("")
}

/// Number of components of an absolute path, root and prefix included.
pub fn component_count(path: &Path) -> usize {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .count()
}

/// Depth of `absolute` relative to a fixed component-count baseline.
///
/// Paths that are not below the baseline (which only happens when a symlink
/// or odd normalization shortens the path) are reported as depth 0.
pub fn depth_from(baseline: usize, absolute: &Path) -> usize {
    component_count(absolute).saturating_sub(baseline)
}

/// Path of `path` relative to `base`, joined with `/` on every platform.
pub fn relative_slash_path(path: &Path, base: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
