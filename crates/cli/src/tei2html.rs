//! tei2html - Render TEI facsimile pages as positioned HTML overlays
//!
//! Reads an annotated TEI facsimile document and writes, for each page, the
//! OCR overlay markup with annotation highlights. Page and annotation front
//! matter for static-site generators can be written as JSON instead.

use clap::{ArgAction, Parser, ValueEnum};
use facsimile_core::api::{
    AnnotationFrontMatter, PageFrontMatter, PageNumbering, RenderOptions, RenderedPage,
    TagRecord, render_pages, render_pages_to_fp, tag_records,
};
use facsimile_core::{Facsimile, RenderParams};
use indexmap::IndexMap;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// What to write.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// Overlay markup for each page, in order (default)
    #[default]
    Html,
    /// Page front matter, overlay markup and skipped zones per page
    Json,
    /// Annotation front matter and tag records
    Annotations,
}

/// Render TEI facsimile pages as HTML overlays with annotation highlights.
#[derive(Parser, Debug)]
#[command(name = "tei2html")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TEI facsimile document
    file: PathBuf,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Type of output to generate
    #[arg(short = 't', long = "output-type", value_enum, default_value = "html")]
    output_type: OutputType,

    /// A comma or space separated list of pages to render (1-indexed)
    #[arg(long = "page-numbers")]
    page_numbers: Option<String>,

    /// Facsimile page carrying printed page 1; earlier pages become front matter
    #[arg(long = "page-one")]
    page_one: Option<u32>,

    /// Number of worker threads used to render pages
    #[arg(long)]
    threads: Option<usize>,

    /// Display size, in pixels, of the longer edge of a page
    #[arg(long = "reference-size", default_value = "1000.0")]
    reference_size: f64,

    /// Wrap text in Liquid raw tags
    #[arg(long = "liquid-raw", action = ArgAction::SetTrue)]
    liquid_raw: bool,
}

/// Parse a 1-indexed page list into 0-indexed page numbers.
fn parse_page_numbers(list: Option<&str>) -> Option<Vec<usize>> {
    let nums: Vec<usize> = list?
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.trim().parse::<usize>().ok())
        .map(|n| n.saturating_sub(1))
        .collect();
    if nums.is_empty() { None } else { Some(nums) }
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[derive(Serialize)]
struct SkippedZone {
    zone: String,
    error: String,
}

#[derive(Serialize)]
struct PageRecord {
    front_matter: Option<PageFrontMatter>,
    html: String,
    failures: Vec<SkippedZone>,
}

#[derive(Serialize)]
struct AnnotationRecords {
    annotations: Vec<AnnotationFrontMatter>,
    tags: IndexMap<String, TagRecord>,
}

fn page_record(
    doc: &Facsimile<'_>,
    page: RenderedPage,
    numbering: PageNumbering,
) -> facsimile_core::Result<PageRecord> {
    let front_matter = match PageFrontMatter::build(&doc.page(page.index)?, numbering) {
        Ok(fm) => Some(fm),
        Err(e) => {
            tracing::warn!(page = page.index, error = %e, "no front matter for page");
            None
        }
    };
    Ok(PageRecord {
        front_matter,
        html: page.html,
        failures: page
            .failures
            .into_iter()
            .map(|f| SkippedZone {
                zone: f.zone,
                error: f.error.to_string(),
            })
            .collect(),
    })
}

fn write_annotations<W: Write>(
    doc: &Facsimile<'_>,
    output: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut annotations = Vec::new();
    for note in doc.annotations() {
        match AnnotationFrontMatter::build(&note) {
            Ok(fm) => annotations.push(fm),
            Err(e) => {
                tracing::warn!(note = note.id().unwrap_or(""), error = %e, "skipping annotation");
            }
        }
    }
    let records = AnnotationRecords {
        annotations,
        tags: tag_records(doc),
    };
    serde_json::to_writer_pretty(&mut *output, &records)?;
    writeln!(output)?;
    Ok(())
}

fn process_file<W: Write>(args: &Args, output: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    let xml = fs::read_to_string(&args.file)?;
    let doc = Facsimile::parse(&xml)?;

    let options = RenderOptions {
        params: RenderParams::default()
            .with_reference_size(args.reference_size)
            .with_liquid_raw(args.liquid_raw),
        page_numbers: parse_page_numbers(args.page_numbers.as_deref()),
        threads: args.threads,
    };

    match args.output_type {
        OutputType::Html => render_pages_to_fp(&doc, output, &options)?,
        OutputType::Json => {
            let numbering = PageNumbering {
                page_one: args.page_one,
            };
            let records = render_pages(&doc, &options)?
                .into_iter()
                .map(|page| page_record(&doc, page, numbering))
                .collect::<facsimile_core::Result<Vec<_>>>()?;
            serde_json::to_writer_pretty(&mut *output, &records)?;
            writeln!(output)?;
        }
        OutputType::Annotations => write_annotations(&doc, output)?,
    }
    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.debug);

    if !args.file.exists() {
        eprintln!("Error: File not found: {}", args.file.display());
        std::process::exit(1);
    }

    // Open output file or use stdout
    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .map_err(|e| format!("Failed to create output file {}: {}", args.outfile, e))?;
        Box::new(BufWriter::new(file))
    };

    if let Err(e) = process_file(&args, &mut output) {
        eprintln!("Error processing {}: {}", args.file.display(), e);
        std::process::exit(1);
    }

    output.flush()?;

    Ok(())
}
