// Residual HTML to Markdown, as an ordered list of regex rewrites.
//
// Order matters: numbering and the Lord/woj rules read span and sup
// attributes, so they run before the generic span stripper; NBSP
// removal runs before `&nbsp;` replacement.

use bg2md_model::RenderOptions;
use regex::Regex;

/// One named substitution. A pattern that matches nothing is a no-op.
#[derive(Debug, Clone)]
pub struct Rewrite {
    pub label: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl Rewrite {
    /// `replacement` uses `${n}` group references.
    pub fn new(label: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            label,
            pattern: Regex::new(pattern).expect("rewrite: hardcoded regex is valid"),
            replacement,
        }
    }

    pub fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.replacement).into_owned()
    }
}

/// An ordered rewrite chain.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    rewrites: Vec<Rewrite>,
}

impl Pipeline {
    fn push(&mut self, label: &'static str, pattern: &str, replacement: &'static str) {
        self.rewrites.push(Rewrite::new(label, pattern, replacement));
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.rewrites.iter().map(|r| r.label).collect()
    }

    /// Run every rewrite in order, then trim.
    pub fn apply(&self, input: &str) -> String {
        let mut text = input.to_string();
        for rewrite in &self.rewrites {
            let next = rewrite.apply(&text);
            if next != text {
                tracing::trace!(rule = rewrite.label, bytes = next.len(), "Applied rewrite");
            }
            text = next;
        }
        text.trim().to_string()
    }

    /// Full chain for the passage body.
    pub fn for_passage(opts: &RenderOptions) -> Self {
        let mut p = Self::default();

        // Whitespace artifacts. U+00A0 first: the site uses it only for layout.
        p.push("nbsp-char", "\u{00A0}", "");
        p.push("nbsp-entity", "&nbsp;", " ");
        p.push("amp-entity", "&amp;", "&");

        p.add_punctuation();

        // Structural noise. The <h1> is absent for single-chapter books.
        p.push("h1", r"<h1.*?</h1>\s*", "");
        p.push("h2", r"<h2>.*?</h2>", "");
        p.push("hr", r"<hr />", "");

        p.add_numbering(opts);

        p.push("p-open", r"<p.*?>", "\n");
        p.push("p-close", r"</p>", "");
        p.add_emphasis();
        // Two trailing spaces: line break, not paragraph break.
        p.push("br", r"<br />", "  \n");

        if opts.headers {
            p.push("h3-open", r"<h3.*?>\s*", "\n\n## ");
        } else {
            p.push("h3-open", r"<h3.*?>\s*", "");
        }
        p.push("h3-close", r"</h3>", "");

        p.push(
            "small-caps-lord",
            r#"<span style="font-variant: small-caps" class="small-caps">Lord</span>"#,
            "LORD",
        );

        if opts.bold_words {
            p.push("woj", r#"<span class="woj">(.*?)</span>"#, "**${1}**");
        }

        if opts.footnotes {
            p.push("footnote-collapse", r"<sup data-fn='.*?>", "<sup>");
            p.push("footnote-marker", r"<sup>\[<a href.*?>(.*?)</a>\]</sup>", "[^${1}]");
        } else {
            p.push("footnote-remove", r"<sup data-fn.*?</sup>", "");
        }

        if opts.crossrefs {
            p.push(
                "crossref-marker",
                r"<sup class='crossreference'.*?See cross-reference (\w+).*?</sup>",
                "[^${1}]",
            );
        } else {
            p.push("crossref-remove", r"<sup class='crossreference'.*?</sup>", "");
        }

        p.add_links();

        p.push("div-footnotes", r#"<div class="footnotes">"#, "");
        p.push("div-poetry", r#"<div class="poetry.*?>"#, "");
        p.push("div-close", r"\s*</div>", "");

        p.add_spans();
        p
    }

    /// Reduced chain for one footnote entry: emphasis, links, spans.
    ///
    /// Like every pipeline, the result is trimmed, so a footnote never keeps
    /// leading or trailing whitespace from the page.
    pub fn for_footnote() -> Self {
        let mut p = Self::default();
        p.add_emphasis();
        p.add_links();
        p.add_spans();
        p
    }

    fn add_punctuation(&mut self) {
        self.push("double-quotes", "[\u{201C}\u{201D}]", "\"");
        self.push("single-quotes", "[\u{2018}\u{2019}]", "'");
        self.push("dashes", "[\u{2013}\u{2014}]", "--");
    }

    fn add_numbering(&mut self, opts: &RenderOptions) {
        const VERSENUM: &str = r#"<sup class="versenum">\s*(\d+(?:-\d+)?)\s*</sup>"#;
        const CHAPTERNUM: &str = r#"<span class="chapternum">\s*(\d+)\s*</span>"#;

        match (opts.numbering, opts.newline) {
            (false, _) => {
                self.push("versenum-remove", r#"<sup class="versenum">.*?</sup>"#, "");
                self.push("chapternum-remove", r#"<span class="chapternum">.*?</span>"#, "");
            }
            (true, false) => {
                self.push("versenum-inline", VERSENUM, "${1} ");
                // Verse 1 is implied at a chapter start.
                self.push("chapternum-inline", CHAPTERNUM, "${1}:1 ");
            }
            (true, true) => {
                self.push("versenum-heading", VERSENUM, "\n###### ${1} ");
                self.push("chapternum-heading", CHAPTERNUM, "\n##### Chapter ${1}\n###### 1 ");
            }
        }
    }

    fn add_emphasis(&mut self) {
        self.push("b", r"</?b>", "**");
        self.push("i", r"</?i>", "_");
    }

    fn add_links(&mut self) {
        self.push("a-open", r"<a .*?>", "[");
        self.push("a-close", r"</a>", "]");
    }

    fn add_spans(&mut self) {
        self.push("span-open", r"<span .*?>", "");
        self.push("span-close", r"</span>", "");
    }
}

/// Punctuation normalization on its own (curly quotes, dashes).
pub fn normalize_punctuation(text: &str) -> String {
    let mut p = Pipeline::default();
    p.add_punctuation();
    p.rewrites.iter().fold(text.to_string(), |t, r| r.apply(&t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passage(input: &str, opts: &RenderOptions) -> String {
        Pipeline::for_passage(opts).apply(input)
    }

    fn defaults() -> RenderOptions {
        RenderOptions::default()
    }

    #[test]
    fn test_verse_number_inline() {
        let input = "<p><span class=\"text Rom-7-20\"><sup class=\"versenum\">\u{00A0}20 </sup>Now if</span></p>";
        let out = passage(input, &defaults());
        assert_eq!(out, "20 Now if");
        assert!(!out.contains('\u{00A0}'));
    }

    #[test]
    fn test_verse_number_removed() {
        let opts = RenderOptions { numbering: false, ..defaults() };
        let input = "<p><span class=\"text Rom-7-20\"><sup class=\"versenum\">\u{00A0}20 </sup>Now if</span></p>";
        let out = passage(input, &opts);
        assert_eq!(out, "Now if");
        assert!(!out.contains("20"));
        assert!(!out.contains("versenum"));
    }

    #[test]
    fn test_verse_range() {
        let out = passage("<sup class=\"versenum\">5-8</sup>text", &defaults());
        assert_eq!(out, "5-8 text");
        let out = passage("<sup class=\"versenum\">10-12</sup>text", &defaults());
        assert_eq!(out, "10-12 text");
    }

    #[test]
    fn test_chapter_synthesizes_verse_one() {
        let input = "<p class=\"chapter-1\"><span class=\"text John-3-1\"><span class=\"chapternum\">3 </span>Now a man</span></p>";
        assert_eq!(passage(input, &defaults()), "3:1 Now a man");
    }

    #[test]
    fn test_newline_numbering() {
        let opts = RenderOptions { newline: true, ..defaults() };
        let input = "<span class=\"chapternum\">3 </span>Now a man <sup class=\"versenum\">2 </sup>came";
        assert_eq!(
            passage(input, &opts),
            "##### Chapter 3\n###### 1 Now a man \n###### 2 came"
        );
    }

    #[test]
    fn test_newline_ignored_without_numbering() {
        let opts = RenderOptions { newline: true, numbering: false, ..defaults() };
        let input = "<span class=\"chapternum\">3 </span>Now <sup class=\"versenum\">2 </sup>came";
        assert_eq!(passage(input, &opts), "Now came");
    }

    #[test]
    fn test_entities_and_punctuation() {
        let input = "<p>Salt&nbsp;&amp;\u{00A0}light \u{201C}Rabbi\u{201D} \u{2018}yes\u{2019} \u{2014} end\u{2013}</p>";
        assert_eq!(passage(input, &defaults()), "Salt &light \"Rabbi\" 'yes' -- end--");
    }

    #[test]
    fn test_punctuation_idempotent() {
        let input = "\u{201C}Go\u{201D} \u{2018}now\u{2019} \u{2014} \u{2013} \"x\" 'y' --";
        let once = normalize_punctuation(input);
        assert_eq!(normalize_punctuation(&once), once);
        assert_eq!(once, "\"Go\" 'now' -- -- \"x\" 'y' --");
    }

    #[test]
    fn test_structural_noise_removed() {
        let input = "<h1 class=\"x\">Title</h1> <h2>Book One</h2><hr /><p>text</p>";
        assert_eq!(passage(input, &defaults()), "text");
    }

    #[test]
    fn test_headers_toggle() {
        let input = "<h3><span class=\"text John-3-1\">Conversation with Nicodemus</span></h3><p class=\"chapter-1\">Now</p>";
        assert_eq!(passage(input, &defaults()), "## Conversation with Nicodemus\nNow");

        let opts = RenderOptions { headers: false, ..defaults() };
        assert_eq!(passage(input, &opts), "Conversation with Nicodemus\nNow");
    }

    #[test]
    fn test_emphasis_and_breaks() {
        let input = "<p><b>bold</b> <i>it</i><br />next</p>";
        assert_eq!(passage(input, &defaults()), "**bold** _it_  \nnext");
    }

    #[test]
    fn test_small_caps_lord() {
        let input = "<p>The <span style=\"font-variant: small-caps\" class=\"small-caps\">Lord</span> is</p>";
        assert_eq!(passage(input, &defaults()), "The LORD is");
    }

    #[test]
    fn test_words_of_jesus() {
        let input = "<p>Jesus said, <span class=\"woj\">Follow me.</span></p>";
        assert_eq!(passage(input, &defaults()), "Jesus said, Follow me.");

        let opts = RenderOptions { bold_words: true, ..defaults() };
        assert_eq!(passage(input, &opts), "Jesus said, **Follow me.**");
    }

    const FOOTNOTE_MARKER: &str = "Pharisee<sup data-fn='#fen-NET-26112a' class='footnote' data-link='[&lt;a href=&quot;#fen-NET-26112a&quot; title=&quot;See footnote a&quot;&gt;a&lt;/a&gt;]'>[<a href=\"#fen-NET-26112a\" title=\"See footnote a\">a</a>]</sup> named";

    #[test]
    fn test_footnote_marker() {
        assert_eq!(passage(FOOTNOTE_MARKER, &defaults()), "Pharisee[^a] named");
    }

    #[test]
    fn test_footnote_marker_removed() {
        let opts = RenderOptions { footnotes: false, ..defaults() };
        assert_eq!(passage(FOOTNOTE_MARKER, &opts), "Pharisee named");
    }

    const CROSSREF_MARKER: &str = "live<sup class='crossreference' data-cr='#cen-NIV-28102S' data-link='(&lt;a href=&quot;#cen-NIV-28102S&quot; title=&quot;See cross-reference S&quot;&gt;S&lt;/a&gt;)'>(<a href=\"#cen-NIV-28102S\" title=\"See cross-reference S\">S</a>)</sup> by";

    #[test]
    fn test_crossref_marker() {
        assert_eq!(passage(CROSSREF_MARKER, &defaults()), "live[^S] by");
    }

    #[test]
    fn test_crossref_marker_removed() {
        let opts = RenderOptions { crossrefs: false, ..defaults() };
        assert_eq!(passage(CROSSREF_MARKER, &opts), "live by");
    }

    #[test]
    fn test_links_divs_and_spans() {
        let input = "<div class=\"poetry top-1\"><p class=\"line\"><span class=\"text Ps-23-1\">See <a href=\"/x\">Ps 1</a></span>  </div></p>";
        assert_eq!(passage(input, &defaults()), "See [Ps 1]");
    }

    #[test]
    fn test_footnote_pipeline() {
        let fp = Pipeline::for_footnote();
        let input = "John 3:1 Or <i>a Pharisee</i>; see <a class=\"bibleref\" href=\"/p\">Acts 23:6</a> <span class=\"greek\">Φαρισαῖος</span>";
        assert_eq!(fp.apply(input), "John 3:1 Or _a Pharisee_; see [Acts 23:6] Φαρισαῖος");
    }

    #[test]
    fn test_footnote_pipeline_trims() {
        let fp = Pipeline::for_footnote();
        assert_eq!(fp.apply("  John 3:2 <b>Grk</b> by night.  "), "John 3:2 **Grk** by night.");
    }

    #[test]
    fn test_footnote_pipeline_skips_passage_rules() {
        let labels = Pipeline::for_footnote().labels();
        assert!(!labels.contains(&"versenum-inline"));
        assert!(!labels.contains(&"h3-open"));
        assert!(labels.contains(&"span-open"));
    }

    #[test]
    fn test_numbering_runs_before_span_strip() {
        let labels = Pipeline::for_passage(&defaults()).labels();
        let pos = |l: &str| labels.iter().position(|x| *x == l).unwrap();
        assert!(pos("nbsp-char") < pos("nbsp-entity"));
        assert!(pos("chapternum-inline") < pos("span-open"));
        assert!(pos("small-caps-lord") < pos("span-open"));
        assert!(pos("footnote-marker") < pos("a-open"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(passage("", &defaults()), "");
    }
}
