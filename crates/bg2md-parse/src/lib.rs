use bg2md_acquire::types::RawDocument;
use bg2md_model::{ParsedFields, PassageError, RenderOptions};

pub mod extract;
pub mod fields;
pub mod render;
pub mod segment;
pub mod transform;

use transform::Pipeline;

/// Convert a retrieved passage page into a Markdown document.
///
/// Either the whole document is produced or an error is returned; nothing
/// partial escapes.
pub fn convert(doc: &RawDocument, opts: &RenderOptions) -> Result<String, PassageError> {
    let fields = extract_fields(doc, opts)?;
    Ok(render::render(&fields, opts))
}

/// Parse a page and transform its passage and footnotes to Markdown, without
/// rendering the final document.
pub fn extract_fields(doc: &RawDocument, opts: &RenderOptions) -> Result<ParsedFields, PassageError> {
    tracing::info!(origin = %doc.describe_origin(), "Parsing passage page");
    let parsed = parse_lines(&doc.lines())?;
    Ok(transform_fields(parsed, opts))
}

/// Extractor, Segmenter and FieldCollector over raw page lines.
pub fn parse_lines(lines: &[&str]) -> Result<ParsedFields, PassageError> {
    let slice = extract::interesting_slice(lines, &extract::START_MARKER, &extract::END_MARKER);
    if slice.is_empty() {
        return Err(PassageError::NoContentFound);
    }

    let lump = segment::join_lump(&slice, &[&*segment::OPTION_TAG]);
    tracing::info!(lines = slice.len(), bytes = lump.len(), "Pass 1: interesting text");

    let working_lines = segment::split_working_lines(&lump)?;
    tracing::info!(working_lines = working_lines.len(), "Pass 2: working lines");

    fields::collect_fields(&working_lines)
}

/// Rewrite the passage body and each footnote into Markdown.
pub fn transform_fields(mut fields: ParsedFields, opts: &RenderOptions) -> ParsedFields {
    fields.passage = Pipeline::for_passage(opts).apply(&fields.passage);

    let footnote_pipeline = Pipeline::for_footnote();
    fields.footnotes = fields
        .footnotes
        .iter()
        .map(|f| footnote_pipeline.apply(f))
        .collect();

    fields
}
