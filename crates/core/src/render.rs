use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::{GlossaryError, Result};

const PANDOC_INSTALL_HINT: &str =
    "install Pandoc from https://pandoc.org/installing.html or point the renderer at its binary";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFormat {
    Docx,
    Odt,
    Html,
}

impl TargetFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "docx" | "word" => Some(TargetFormat::Docx),
            "odt" => Some(TargetFormat::Odt),
            "html" => Some(TargetFormat::Html),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetFormat::Docx => "docx",
            TargetFormat::Odt => "odt",
            TargetFormat::Html => "html",
        }
    }
}

pub trait DocumentRenderer {
    fn render(&self, markup: &str, format: TargetFormat) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone)]
pub struct PandocRenderer {
    binary: PathBuf,
}

impl Default for PandocRenderer {
    fn default() -> Self {
        Self::new("pandoc")
    }
}

impl PandocRenderer {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl DocumentRenderer for PandocRenderer {
    fn render(&self, markup: &str, format: TargetFormat) -> Result<Vec<u8>> {
        let mut child = Command::new(&self.binary)
            .args(["-f", "markdown", "-t", format.as_str(), "-o", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| match err.kind() {
                ErrorKind::NotFound => GlossaryError::RenderBackendMissing {
                    backend: self.binary.display().to_string(),
                    remediation: PANDOC_INSTALL_HINT.to_string(),
                },
                _ => GlossaryError::Io(err),
            })?;
        if let Some(mut stdin) = child.stdin.take() {
            // the exit status below reports why a renderer stopped reading
            if let Err(err) = stdin.write_all(markup.as_bytes()) {
                if err.kind() != ErrorKind::BrokenPipe {
                    return Err(err.into());
                }
            }
        }
        let output = child.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GlossaryError::ConversionFailed(format!(
                "{} exited with {}: {}",
                self.binary.display(),
                output.status,
                stderr.trim()
            )));
        }
        if output.stdout.is_empty() {
            return Err(GlossaryError::ConversionFailed(format!(
                "{} produced no output",
                self.binary.display()
            )));
        }
        Ok(output.stdout)
    }
}

pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(contents)?;
    temp.flush()?;
    temp.persist(path).map_err(|err| GlossaryError::Io(err.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn format_names_parse() {
        assert_eq!(TargetFormat::from_name("DOCX"), Some(TargetFormat::Docx));
        assert_eq!(TargetFormat::from_name("word"), Some(TargetFormat::Docx));
        assert_eq!(TargetFormat::from_name("pdf"), None);
    }

    #[test]
    fn missing_backend_is_reported_with_remediation() {
        let renderer = PandocRenderer::new("hortgloss-no-such-renderer");
        match renderer.render("# x", TargetFormat::Docx) {
            Err(GlossaryError::RenderBackendMissing { backend, remediation }) => {
                assert_eq!(backend, "hortgloss-no-such-renderer");
                assert!(remediation.contains("pandoc.org"));
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn failing_backend_is_a_conversion_error() {
        let renderer = PandocRenderer::new("false");
        let err = renderer.render("# x", TargetFormat::Docx).unwrap_err();
        assert!(matches!(err, GlossaryError::ConversionFailed(_)));
    }

    #[test]
    fn atomic_write_replaces_target() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.md");
        fs::write(&target, "old").unwrap();
        write_atomic(&target, b"new contents").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "new contents");
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }
}
