use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use ibarat_markup::{
    Document, MarkupOperation, Range, RenderCache, insert_markup, render_html, render_plain,
};
use khazanah_common::telemetry::{self, TelemetryConfig};
use khazanah_common::{Config, FiqhEntry, KhazanahError, OutputFormat};
use miette::Result;

#[derive(Parser)]
#[command(version, about = "Khazanah - ibarat markup tools for fiqh entries", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to config file (default: $CONFIG_DIR/khazanah/config.kdl)
    #[arg(long, global = true, env = "KHAZANAH_CONFIG")]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render ibarat text (stdin when no file is given)
    Render {
        /// Files of raw ibarat text
        files: Vec<PathBuf>,

        /// Output format: html, plain or json
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
    /// Insert markup at a selection and print the new text
    #[command(after_long_help = operations_help())]
    Insert {
        /// File of raw ibarat text (stdin when absent)
        file: Option<PathBuf>,

        /// Operation: reference, bold, italic or separator
        #[arg(long)]
        op: MarkupOperation,

        /// Selection start, in characters
        #[arg(long, default_value_t = 0)]
        start: usize,

        /// Selection end, in characters (default: start)
        #[arg(long)]
        end: Option<usize>,
    },
    /// Check an entry JSON file against the form rules
    Validate {
        /// Entry file
        entry: PathBuf,
    },
}

fn main() -> Result<()> {
    init_miette();

    let cli = Cli::parse();
    telemetry::init_tracing(TelemetryConfig::from_env("khazanah").verbose(cli.verbose));

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Render { files, format } => {
            render(&files, format.unwrap_or(config.format), &config)?;
        }
        Commands::Insert {
            file,
            op,
            start,
            end,
        } => {
            let range = Range::new(start, end.unwrap_or(start));
            insert(file.as_deref(), op, range)?;
        }
        Commands::Validate { entry } => {
            validate(&entry, &config)?;
        }
    }

    Ok(())
}

#[tracing::instrument(skip(config))]
fn render(files: &[PathBuf], format: OutputFormat, config: &Config) -> Result<()> {
    let mut cache = RenderCache::new(config.cache_capacity);
    for input in render_inputs(files) {
        let doc = cache.parse(&read_input(input)?);
        if let Some(path) = input
            && files.len() > 1
            && format != OutputFormat::Json
        {
            println!("==> {} <==", path.display());
        }
        print!("{}", format_document(&doc, format, config)?);
    }

    let stats = cache.stats();
    tracing::debug!(hits = stats.hits, misses = stats.misses, "render cache");
    Ok(())
}

/// Inputs to render in order. `None` reads stdin.
fn render_inputs(files: &[PathBuf]) -> Vec<Option<&Path>> {
    if files.is_empty() {
        return vec![None];
    }
    files.iter().map(|path| Some(path.as_path())).collect()
}

/// Operation names with the toolbar control each one stands for.
fn operations_help() -> String {
    let mut help = String::from("Operations:\n");
    for op in MarkupOperation::ALL {
        let literal = format!("{}{}", op.prefix(), op.suffix()).escape_debug().to_string();
        help.push_str(&format!(
            "  {:<10} {:<8} {literal}\n",
            op.name(),
            op.control_label()
        ));
    }
    help
}

fn format_document(doc: &Document, format: OutputFormat, config: &Config) -> Result<String> {
    Ok(match format {
        OutputFormat::Html => render_html(doc, &config.render),
        OutputFormat::Plain => render_plain(doc),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(doc).map_err(KhazanahError::from)?;
            json.push('\n');
            json
        }
    })
}

#[tracing::instrument]
fn insert(file: Option<&Path>, op: MarkupOperation, range: Range) -> Result<()> {
    let text = read_input(file)?;
    let inserted = insert_markup(&text, range, op).map_err(KhazanahError::from)?;

    print!("{}", inserted.text);
    if !inserted.text.ends_with('\n') {
        println!();
    }
    eprintln!("selection {}", inserted.selection);
    Ok(())
}

#[tracing::instrument(skip(config))]
fn validate(path: &Path, config: &Config) -> Result<()> {
    let source = read_input(Some(path))?;
    let entry: FiqhEntry = serde_json::from_str(&source).map_err(KhazanahError::from)?;

    println!("{} ({})", entry.title, entry.entry_type.as_str());
    for book in entry.sorted_source_books() {
        match &book.details {
            Some(details) => println!("  - {} ({details})", book.kitab_name),
            None => println!("  - {}", book.kitab_name),
        }
    }
    if !entry.musyawarah_source.is_empty() {
        println!("  musyawarah: {}", entry.musyawarah_source);
    }

    let doc = entry.ibarat_document();
    println!();
    print!("{}", format_document(&doc, OutputFormat::Plain, config)?);

    entry.validate().map_err(KhazanahError::from)?;
    println!();
    println!("✓ {} is valid", path.display());
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String, KhazanahError> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).map_err(|err| KhazanahError::io(path, err))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|err| KhazanahError::io("<stdin>", err))?;
            Ok(buf)
        }
    }
}

fn init_miette() {
    // Only fails if a hook is already installed.
    let _ = miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .with_cause_chain()
                .color(true)
                .context_lines(5)
                .tab_width(2)
                .break_words(true)
                .build(),
        )
    }));
    miette::set_panic_hook();
}
