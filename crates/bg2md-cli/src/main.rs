use anyhow::Result;
use bg2md_acquire::Source;
use bg2md_model::{RenderOptions, DEFAULT_VERSION};
use clap::Parser;

/// Look up a Bible passage on BibleGateway and turn it into Markdown.
///
/// The result is printed and copied to the clipboard.
#[derive(Parser, Debug)]
#[command(name = "bg2md")]
#[command(about = "BibleGateway passage lookup and converter to Markdown")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Passage reference, e.g. "John 3:1-3" (words are joined, so quoting is optional)
    #[arg(required = true)]
    reference: Vec<String>,

    /// Make the words of Jesus bold
    #[arg(short = 'b', long = "boldwords")]
    bold_words: bool,

    /// Exclude copyright notice
    #[arg(short = 'c', long = "copyright")]
    no_copyright: bool,

    /// Exclude editorial headers
    #[arg(short = 'e', long = "headers")]
    no_headers: bool,

    /// Exclude footnotes
    #[arg(short = 'f', long = "footnotes")]
    no_footnotes: bool,

    /// Show information as I work
    #[arg(short = 'i', long = "info")]
    info: bool,

    /// Start chapters and verses on a new line with an H5 or H6 heading
    #[arg(short = 'l', long)]
    newline: bool,

    /// Exclude verse and chapter numbers
    #[arg(short = 'n', long = "numbering")]
    no_numbering: bool,

    /// Exclude cross-references
    #[arg(short = 'r', long = "crossrefs")]
    no_crossrefs: bool,

    /// Read HTML from FILENAME instead of a live lookup (reference is still required, but ignored)
    #[arg(short = 't', long = "test", value_name = "FILENAME")]
    test_file: Option<String>,

    /// Bible version to look up
    #[arg(short = 'v', long = "bible-version", default_value = DEFAULT_VERSION)]
    bible_version: String,

    /// Also save the fetched HTML to PATH, for later use with --test
    #[arg(long, value_name = "PATH")]
    save_html: Option<String>,

    /// Don't copy the result to the clipboard
    #[arg(long)]
    no_clipboard: bool,

    /// Print the extracted fields as JSON instead of Markdown
    #[arg(long)]
    fields: bool,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,
}

#[derive(Clone, Debug, PartialEq, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Cli {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            bold_words: self.bold_words,
            copyright: !self.no_copyright,
            headers: !self.no_headers,
            footnotes: !self.no_footnotes,
            numbering: !self.no_numbering,
            crossrefs: !self.no_crossrefs,
            newline: self.newline,
            version_code: self.bible_version.clone(),
            test_file: self.test_file.clone(),
        }
    }

    /// A test file in the options replaces the live lookup.
    fn source(&self, opts: &RenderOptions) -> Source {
        match &opts.test_file {
            Some(path) => Source::File(path.clone()),
            None => Source::Live {
                reference: self.reference.clone(),
                version: opts.version_code.clone(),
            },
        }
    }

    /// `--info` raises anything quieter than debug to debug.
    fn effective_log_level(&self) -> LogLevel {
        match self.log_level {
            LogLevel::Error | LogLevel::Warn | LogLevel::Info if self.info => LogLevel::Debug,
            ref level => level.clone(),
        }
    }
}

fn init_tracing(cli: &Cli) {
    let level = match cli.effective_log_level() {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    // stdout carries only the Markdown
    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => tracing::info!(bytes = text.len(), "Copied to clipboard"),
        Err(e) => tracing::warn!("Could not copy to clipboard: {e}"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let opts = cli.render_options();
    tracing::debug!(?opts, reference = ?cli.reference, "Starting lookup");

    let doc = bg2md_acquire::acquire(&cli.source(&opts)).await?;
    if let Some(path) = &cli.save_html {
        bg2md_acquire::output::cache_html(path, &doc.text)?;
    }

    if cli.fields {
        let fields = bg2md_parse::extract_fields(&doc, &opts)?;
        println!("{}", serde_json::to_string_pretty(&fields)?);
        return Ok(());
    }

    let markdown = bg2md_parse::convert(&doc, &opts)?;
    println!("{markdown}");

    if !cli.no_clipboard {
        copy_to_clipboard(&markdown);
    }

    Ok(())
}
