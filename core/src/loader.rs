//! Task loader
//!
//! Reads tasks serialized with [`Task::to_json`] from disk. Loaded tasks are
//! re-canonicalized; validation is left to the encoder configuration.

use crate::ir::Task;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Task loading errors
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for loading
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a single task from a JSON file
pub fn load_task<P: AsRef<Path>>(path: P) -> LoadResult<Task> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let task = Task::from_json(&contents).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        variables = task.num_variables(),
        operators = task.operators.len(),
        axioms = task.axioms.len(),
        "loaded task"
    );
    Ok(task)
}

/// Load every `*.json` task in a directory, sorted by file name
///
/// Files that fail to load are skipped with a warning.
pub fn load_tasks<P: AsRef<Path>>(dir: P) -> LoadResult<Vec<(PathBuf, Task)>> {
    let dir = dir.as_ref();
    let io_error = |source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut tasks = Vec::with_capacity(paths.len());
    for path in paths {
        match load_task(&path) {
            Ok(task) => tasks.push((path, task)),
            Err(e) => warn!(path = %path.display(), error = %e, "skipping task"),
        }
    }
    Ok(tasks)
}
