//! Release packaging: copy the artifacts listed in a TOML manifest into a distribution folder.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DistError {
    #[error("{action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("manifest: {0}")]
    Manifest(#[from] toml::de::Error),
    #[error("artifact source not found: {0}")]
    MissingSource(PathBuf),
    #[error("output folder {out} is inside artifact source {from}")]
    OutputInsideSource { from: PathBuf, out: PathBuf },
}

fn io_err<'a>(action: &'static str, path: &'a Path) -> impl FnOnce(std::io::Error) -> DistError + 'a {
    move |source| DistError::Io {
        action,
        path: path.to_path_buf(),
        source,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Artifact {
    /// Source file or directory, relative to the manifest.
    pub from: PathBuf,
    /// Destination inside the output folder.
    pub to: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    #[serde(default = "default_out")]
    pub out: PathBuf,
    #[serde(default, rename = "artifact")]
    pub artifacts: Vec<Artifact>,
}

fn default_out() -> PathBuf {
    PathBuf::from("dist")
}

impl Manifest {
    pub fn parse(content: &str) -> Result<Self, DistError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, DistError> {
        let content = fs::read_to_string(path).map_err(io_err("read", path))?;
        Self::parse(&content)
    }
}

/// One copied artifact and the number of files it contained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Copied {
    pub to: PathBuf,
    pub files: u64,
}

/// Copy every artifact into `out` (relative paths resolve against `base_dir`).
/// Stops at the first failure.
pub fn package(manifest: &Manifest, base_dir: &Path, out: &Path) -> Result<Vec<Copied>, DistError> {
    let out = base_dir.join(out);
    fs::create_dir_all(&out).map_err(io_err("create", &out))?;
    let out_real = fs::canonicalize(&out).map_err(io_err("resolve", &out))?;
    let mut copied = Vec::with_capacity(manifest.artifacts.len());
    for artifact in &manifest.artifacts {
        let from = base_dir.join(&artifact.from);
        if !from.exists() {
            return Err(DistError::MissingSource(from));
        }
        let from_real = fs::canonicalize(&from).map_err(io_err("resolve", &from))?;
        if from_real.is_dir() && out_real.starts_with(&from_real) {
            return Err(DistError::OutputInsideSource { from, out });
        }
        let to = out.join(&artifact.to);
        let files = copy_path(&from, &to)?;
        tracing::info!(from = %from.display(), to = %to.display(), files, "copied artifact");
        copied.push(Copied { to, files });
    }
    Ok(copied)
}

/// Copy a file or a directory tree; returns the number of files copied.
/// Symlinked directories below the top level are skipped.
pub fn copy_path(from: &Path, to: &Path) -> Result<u64, DistError> {
    if !from.exists() {
        return Err(DistError::MissingSource(from.to_path_buf()));
    }
    if from.is_dir() {
        fs::create_dir_all(to).map_err(io_err("create", to))?;
        let mut files = 0;
        for entry in fs::read_dir(from).map_err(io_err("read", from))? {
            let entry = entry.map_err(io_err("read", from))?;
            let path = entry.path();
            let kind = entry.file_type().map_err(io_err("stat", &path))?;
            if kind.is_symlink() && path.is_dir() {
                tracing::warn!(path = %path.display(), "skipping symlinked directory");
                continue;
            }
            files += copy_path(&path, &to.join(entry.file_name()))?;
        }
        Ok(files)
    } else {
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent).map_err(io_err("create", parent))?;
        }
        fs::copy(from, to).map_err(io_err("copy", from))?;
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_manifest_with_default_out() {
        let m = Manifest::parse(
            r#"
            [[artifact]]
            from = "target/release/led-configurator"
            to = "bin/led-configurator"
            "#,
        )
        .unwrap();
        assert_eq!(m.out, PathBuf::from("dist"));
        assert_eq!(m.artifacts.len(), 1);
        assert_eq!(m.artifacts[0].to, PathBuf::from("bin/led-configurator"));
    }

    #[test]
    fn shipped_manifest_only_references_repo_paths() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let m = Manifest::load(&root.join("dist.toml")).unwrap();
        assert!(!m.artifacts.is_empty());
        for artifact in m.artifacts.iter().filter(|a| !a.from.starts_with("target")) {
            assert!(root.join(&artifact.from).exists(), "{} is missing", artifact.from.display());
        }
    }

    #[test]
    fn rejects_malformed_manifest() {
        assert!(matches!(
            Manifest::parse("[[artifact]]\nfrom = 1"),
            Err(DistError::Manifest(_))
        ));
    }

    #[test]
    fn copies_files_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path();
        fs::write(base.join("server"), b"binary").unwrap();
        fs::create_dir_all(base.join("web/static")).unwrap();
        fs::write(base.join("web/index.html"), b"<html>").unwrap();
        fs::write(base.join("web/static/app.js"), b"js").unwrap();

        let manifest = Manifest {
            out: PathBuf::from("dist"),
            artifacts: vec![
                Artifact {
                    from: "server".into(),
                    to: "bin/server".into(),
                },
                Artifact {
                    from: "web".into(),
                    to: "public".into(),
                },
            ],
        };
        let copied = package(&manifest, base, &manifest.out).unwrap();
        assert_eq!(copied.iter().map(|c| c.files).sum::<u64>(), 3);
        assert_eq!(fs::read(base.join("dist/bin/server")).unwrap(), b"binary");
        assert_eq!(fs::read(base.join("dist/public/static/app.js")).unwrap(), b"js");
    }

    #[test]
    fn missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = Manifest {
            out: PathBuf::from("dist"),
            artifacts: vec![Artifact {
                from: "no-such-engine".into(),
                to: "engine".into(),
            }],
        };
        let err = package(&manifest, dir.path(), &manifest.out).unwrap_err();
        assert!(matches!(err, DistError::MissingSource(_)));
    }

    #[test]
    fn output_inside_source_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path();
        fs::create_dir_all(base.join("site")).unwrap();
        fs::write(base.join("site/index.html"), b"<html>").unwrap();
        let manifest = Manifest {
            out: PathBuf::from("site/dist"),
            artifacts: vec![Artifact {
                from: "site".into(),
                to: "web".into(),
            }],
        };
        let err = package(&manifest, base, &manifest.out).unwrap_err();
        assert!(matches!(err, DistError::OutputInsideSource { .. }));
        assert!(!base.join("site/dist/web").exists());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_are_not_followed() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path();
        fs::create_dir_all(base.join("web/assets")).unwrap();
        fs::write(base.join("web/assets/app.css"), b"css").unwrap();
        std::os::unix::fs::symlink(base.join("web"), base.join("web/assets/loop")).unwrap();
        let manifest = Manifest {
            out: PathBuf::from("dist"),
            artifacts: vec![Artifact {
                from: "web".into(),
                to: "public".into(),
            }],
        };
        let copied = package(&manifest, base, &manifest.out).unwrap();
        assert_eq!(copied[0].files, 1);
        assert!(!base.join("dist/public/assets/loop").exists());
    }
}
