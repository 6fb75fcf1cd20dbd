//! Host project manifest and the externalized-dependency policy.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{PlanError, Result};

/// Runtime dependencies declared by the host project's `package.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostManifest {
    pub path: PathBuf,
    /// Dependency name → version requirement
    pub dependencies: IndexMap<String, String>,
}

#[derive(Deserialize)]
struct RawManifest {
    #[serde(default)]
    dependencies: IndexMap<String, String>,
}

impl HostManifest {
    /// Read and parse the manifest at `path`.
    ///
    /// # Errors
    ///
    /// `ManifestNotFound` if the file does not exist, `MalformedManifest` if
    /// it is not JSON or `dependencies` is not an object of strings.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => PlanError::ManifestNotFound {
                path: path.to_path_buf(),
            },
            _ => PlanError::Io(err),
        })?;
        Self::parse(path, &content)
    }

    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self> {
        let path = path.into();
        let raw: RawManifest =
            serde_json::from_str(content).map_err(|err| PlanError::MalformedManifest {
                path: path.clone(),
                message: err.to_string(),
            })?;

        tracing::debug!(
            manifest = %path.display(),
            dependencies = raw.dependencies.len(),
            "loaded host manifest"
        );

        Ok(Self {
            path,
            dependencies: raw.dependencies,
        })
    }

    pub fn from_dependencies<I, K, V>(dependencies: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            path: PathBuf::new(),
            dependencies: dependencies
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Declared dependencies not on `allow_list`.
    pub fn externals<S: AsRef<str>>(&self, allow_list: &[S]) -> BTreeSet<String> {
        externals(self.dependencies.keys().map(String::as_str), allow_list)
    }
}

/// `declared − allow_list`.
///
/// Declared dependencies are provided by the runtime and left out of the
/// bundle, except the allow-listed ones, which must be inlined.
pub fn externals<'a, S: AsRef<str>>(
    declared: impl IntoIterator<Item = &'a str>,
    allow_list: &[S],
) -> BTreeSet<String> {
    let allowed: BTreeSet<&str> = allow_list.iter().map(AsRef::as_ref).collect();
    declared
        .into_iter()
        .filter(|name| !allowed.contains(name))
        .map(str::to_string)
        .collect()
}
