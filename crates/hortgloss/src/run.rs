use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use crate::config::{FilesConfig, GlossaryConfig, PipelineConfig};
use crate::{convert, export};

pub fn run_from_config(config: &GlossaryConfig) -> Result<()> {
    let lookup = config.stroke_table()?;
    let renderer = config.renderer();
    let format = config.target_format(None)?;
    run_pipeline(
        &config.files,
        &config.pipeline,
        |input, output| convert::fold_file(input, output, &config.columns, &lookup),
        |input, output| export::export_review(input, output, &config.review),
        |input, output| export::export_csv(input, output, &config.columns, config.csv.bom),
        |input, output| export::export_document(input, output, format, &renderer),
    )
}

fn run_pipeline<FFold, FReview, FUnfold, FDocument>(
    files: &FilesConfig,
    pipeline: &PipelineConfig,
    fold_fn: FFold,
    review_fn: FReview,
    unfold_fn: FUnfold,
    document_fn: FDocument,
) -> Result<()>
where
    FFold: Fn(&Path, &Path) -> Result<usize>,
    FReview: Fn(&Path, &Path) -> Result<usize>,
    FUnfold: Fn(&Path, &Path) -> Result<usize>,
    FDocument: Fn(&Path, &Path) -> Result<bool>,
{
    info!("step 1: fold {}", files.input_csv.display());
    if fold_fn(&files.input_csv, &files.canonical)? == 0 {
        warn!("fold produced no entries; later steps skipped");
        return Ok(());
    }
    info!("step 2: review document {}", files.review_md.display());
    let reviewed = review_fn(&files.canonical, &files.review_md)?;
    if pipeline.unfold {
        info!("step 3: unfold to {}", files.export_csv.display());
        unfold_fn(&files.canonical, &files.export_csv)?;
    }
    if pipeline.document && reviewed > 0 {
        info!("step 4: render {}", files.document.display());
        document_fn(&files.review_md, &files.document)?;
    }
    Ok(())
}
