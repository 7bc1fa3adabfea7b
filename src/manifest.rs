use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use thiserror::Error;

use crate::shader::ShaderSources;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
    vertex: PathBuf,
    fragment: PathBuf,
    tess_control: Option<PathBuf>,
    tess_evaluation: Option<PathBuf>,
}

///
/// Reads shader sources named by a json5 manifest
///
/// Stage paths are resolved against the manifest's own directory. Stage text is passed on
/// unchanged.
///
pub struct ManifestLoader {}

impl ManifestLoader {
    pub fn new() -> Self {
        Self {}
    }

    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<ShaderSources, ManifestError> {
        let path = path.as_ref();
        let manifest_str =
            std::fs::read_to_string(path).map_err(|e| ManifestError::Input(path.into(), e))?;
        let sources = self.load_str(&manifest_str, manifest_dir(path), |p| {
            std::fs::read_to_string(p)
        })?;

        log::info!(
            "Read {} shader stages from {}",
            sources.stage_count(),
            path.display()
        );

        Ok(sources)
    }

    pub fn load_str<F>(
        &self,
        manifest: &str,
        base: &Path,
        read: F,
    ) -> Result<ShaderSources, ManifestError>
    where
        F: Fn(&Path) -> io::Result<String>,
    {
        let file = json5::from_str::<ManifestFile>(manifest).map_err(ManifestError::Format)?;

        let read_stage = |rel: &Path| {
            let full = base.join(rel);
            read(&full).map_err(|e| ManifestError::Input(full, e))
        };

        let sources = ShaderSources::new(
            read_stage(file.vertex.as_path())?,
            read_stage(file.fragment.as_path())?,
        );

        match (&file.tess_control, &file.tess_evaluation) {
            (Some(control), Some(evaluation)) => Ok(sources.with_tessellation(
                read_stage(control.as_path())?,
                read_stage(evaluation.as_path())?,
            )),
            (None, None) => Ok(sources),
            _ => Err(ManifestError::UnpairedTessellation),
        }
    }
}

/// A bare file name has an empty parent, which means the working directory.
fn manifest_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

impl Default for ManifestLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("could not read {}: {1}", .0.display())]
    Input(PathBuf, #[source] io::Error),
    #[error("invalid manifest: {0}")]
    Format(#[from] json5::Error),
    #[error("tess_control and tess_evaluation must be given together")]
    UnpairedTessellation,
}
