use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use relaygen_core::{TypeDescriptor, parse_descriptors};

/// Failure to turn an input path into descriptors.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{path}' is not a valid descriptor file: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no .json files found in '{0}'")]
    EmptyDirectory(PathBuf),

    #[error("no descriptors given")]
    NoDescriptors,
}

/// Load descriptors from every input in order.
///
/// `-` reads stdin; directories contribute their `.json` files sorted by path.
pub fn load_descriptors(inputs: &[PathBuf]) -> Result<Vec<TypeDescriptor>, LoadError> {
    let mut descriptors = Vec::new();
    for input in inputs {
        if input.as_os_str() == "-" {
            descriptors.extend(load_stdin()?);
        } else if input.is_dir() {
            descriptors.extend(load_directory(input)?);
        } else {
            descriptors.extend(load_file(input)?);
        }
    }

    if descriptors.is_empty() {
        return Err(LoadError::NoDescriptors);
    }
    tracing::debug!(count = descriptors.len(), "loaded descriptors");
    Ok(descriptors)
}

fn load_stdin() -> Result<Vec<TypeDescriptor>, LoadError> {
    let path = PathBuf::from("<stdin>");
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|source| LoadError::Read {
            path: path.clone(),
            source,
        })?;
    parse(&path, &buf)
}

fn load_file(path: &Path) -> Result<Vec<TypeDescriptor>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(path, &content)
}

fn load_directory(dir: &Path) -> Result<Vec<TypeDescriptor>, LoadError> {
    let read_error = |source| LoadError::Read {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(read_error)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"))
        .collect();

    if paths.is_empty() {
        return Err(LoadError::EmptyDirectory(dir.to_path_buf()));
    }

    // Sort for deterministic batch indices
    paths.sort();

    let mut descriptors = Vec::new();
    for path in paths {
        descriptors.extend(load_file(&path)?);
    }
    Ok(descriptors)
}

fn parse(path: &Path, content: &str) -> Result<Vec<TypeDescriptor>, LoadError> {
    parse_descriptors(content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
