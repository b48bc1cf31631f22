pub mod schema;
pub mod seed;
pub mod settings;
pub mod storage;

use std::io;
use std::path::{Path, PathBuf};

pub use schema::SchemaManager;
pub use seed::SeedData;
pub use settings::{Backend, Database, Seed, Settings, Weather};
pub use storage::Storage;

/// Resolves `path` against the working directory.
pub fn normalize_path(path: impl AsRef<Path>) -> io::Result<PathBuf> {
    std::path::absolute(path)
}
