mod canonical;
mod error;
mod fold;
mod legacy;
mod model;
mod multivalue;
mod normalize;
mod render;
mod review;
mod strokes;
mod tabular;
mod unfold;

pub use canonical::{from_canonical_str, load_canonical, to_canonical_string};
pub use error::{GlossaryError, LegacyDecodeError, Result, StrokeLookupError};
pub use fold::{fold, Folded};
pub use legacy::{
    discover_legacy_files, is_legacy_file, render_legacy_markdown, scrape_document, Decoded,
    LegacyBatch, LegacyRecord, LegacyScraper, SkippedFile, DEFAULT_FALLBACK_ENCODING,
    DEFAULT_PREFIX,
};
pub use model::{ColumnNames, Definition, Entry, TabularRow};
pub use multivalue::{decode as decode_multi, display as display_multi, encode as encode_multi};
pub use normalize::{clean_spaces, normalize};
pub use render::{write_atomic, DocumentRenderer, PandocRenderer, TargetFormat};
pub use review::{render_review, review_order, ReviewLabels};
pub use strokes::{stroke_key, FnLookup, StrokeLookup, StrokeTable};
pub use tabular::{read_rows, rows_to_bytes, write_rows};
pub use unfold::unfold;
