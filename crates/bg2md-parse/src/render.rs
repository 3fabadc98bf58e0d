use bg2md_model::{letter_label, LetterCase, ParsedFields, RenderOptions};

/// Assemble the final Markdown document from transformed fields.
///
/// Sections always come in the same order: heading, passage, footnotes,
/// cross-references, copyright. A disabled or empty section leaves nothing
/// behind, not even its heading.
pub fn render(fields: &ParsedFields, opts: &RenderOptions) -> String {
    let mut out = format!("# {} ({})\n", fields.full_reference, fields.version);
    out.push_str(&fields.passage);
    out.push_str("\n\n");

    if opts.footnotes && !fields.footnotes.is_empty() {
        push_notes(&mut out, "Footnotes", &fields.footnotes, LetterCase::Lower);
    }
    if opts.crossrefs && !fields.crossrefs.is_empty() {
        push_notes(&mut out, "Crossrefs", &fields.crossrefs, LetterCase::Upper);
    }
    if opts.copyright {
        out.push_str(&fields.copyright);
    }

    out
}

fn push_notes(out: &mut String, title: &str, notes: &[String], case: LetterCase) {
    out.push_str(&format!("### {title}\n"));
    for (i, note) in notes.iter().enumerate() {
        out.push_str(&format!("[^{}]: {}\n", letter_label(i + 1, case), note));
    }
    out.push('\n');
}
