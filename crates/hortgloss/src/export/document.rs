use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use hortgloss_core::{write_atomic, DocumentRenderer, TargetFormat};
use tracing::info;

use super::{report_empty, require_input};

pub fn export_document(
    input: &Path,
    output: &Path,
    format: TargetFormat,
    renderer: &dyn DocumentRenderer,
) -> Result<bool> {
    require_input(input)?;
    let markup = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    if markup.trim().is_empty() {
        report_empty(&input.display().to_string());
        return Ok(false);
    }
    info!("converting {} to {}", input.display(), format.as_str());
    let artifact = renderer.render(&markup, format)?;
    write_atomic(output, &artifact)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!("wrote {}", output.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hortgloss_core::GlossaryError;
    use std::cell::RefCell;
    use tempfile::tempdir;

    struct Recording {
        seen: RefCell<Vec<(String, TargetFormat)>>,
    }

    impl DocumentRenderer for Recording {
        fn render(&self, markup: &str, format: TargetFormat) -> hortgloss_core::Result<Vec<u8>> {
            self.seen.borrow_mut().push((markup.to_string(), format));
            Ok(b"PK-fake-docx".to_vec())
        }
    }

    struct Missing;

    impl DocumentRenderer for Missing {
        fn render(&self, _: &str, _: TargetFormat) -> hortgloss_core::Result<Vec<u8>> {
            Err(GlossaryError::RenderBackendMissing {
                backend: "pandoc".to_string(),
                remediation: "install Pandoc".to_string(),
            })
        }
    }

    #[test]
    fn hands_markup_to_renderer_and_writes_artifact() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("review.md");
        let output = dir.path().join("review.docx");
        fs::write(&input, "# 標題\n").unwrap();
        let renderer = Recording {
            seen: RefCell::new(Vec::new()),
        };
        assert!(export_document(&input, &output, TargetFormat::Docx, &renderer).unwrap());
        assert_eq!(renderer.seen.borrow()[0], ("# 標題\n".to_string(), TargetFormat::Docx));
        assert_eq!(fs::read(&output).unwrap(), b"PK-fake-docx");
    }

    #[test]
    fn missing_backend_leaves_no_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("review.md");
        let output = dir.path().join("review.docx");
        fs::write(&input, "# 標題\n").unwrap();
        let err = export_document(&input, &output, TargetFormat::Docx, &Missing).unwrap_err();
        assert!(err.to_string().contains("install Pandoc"));
        assert!(!output.exists());
    }
}
