use crate::resolver::USAGE;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListError {
    #[error("{}", USAGE)]
    Usage,
    #[error("cannot access '{}': {source}", .path.display())]
    PathAccess { path: PathBuf, source: io::Error },
}
