use std::path::{Component, Path, PathBuf};

pub const USAGE: &str = "Incorrect number of arguments supplied. Usage: dirlist <path of folder>";

/// Lexically resolves `.` and `..` segments without touching the filesystem.
///
/// `..` directly under the root is dropped, leading `..` of a relative path
/// are kept, and a path that collapses to nothing becomes `.`.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
