//! CLI for citegrep - Extract in-text academic citations from plain text documents.

use std::fmt;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use citegrep::{
    decode_text, load_document, merge_documents, render_json, render_text,
    split_into_sentences, CitationExtractor, DocumentError, PatternSet,
};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Extract in-text academic citations from plain text documents
#[derive(Parser)]
#[command(name = "citegrep")]
#[command(version)]
#[command(after_help = "\
Examples:
  citegrep extract paper.txt
  citegrep extract paper.txt notes.md --keyword enzyme
  citegrep extract paper.txt --json -o references.json
  cat paper.txt | citegrep extract -
  citegrep patterns")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract citations from one or more documents
    #[command(after_help = "\
Examples:
  citegrep extract paper.txt
  citegrep extract chapter1.txt chapter2.txt --keyword gene
  citegrep extract paper.txt --json
  echo 'See (Doe, 1999).' | citegrep extract -

Recognized citation styles: Surname, Year | Surname & Surname, Year |
Surname et al., Year, inline or parenthetical, plus grouped parentheticals
like (Smith, 2010; Jones et al., 2012).")]
    Extract {
        /// Input text files (use '-' for stdin)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Only report citations within one sentence of this keyword
        /// (whole-word, case-insensitive)
        #[arg(short, long)]
        keyword: Option<String>,

        /// Emit a JSON object {"references": [...]} instead of plain lines
        #[arg(long)]
        json: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show how a document is segmented into sentences
    Sentences {
        /// Input text file (use '-' for stdin)
        input: PathBuf,
    },

    /// List recognizer rules in priority order
    Patterns,
}

// ---------------------------------------------------------------------------
// AppError — semantic exit codes
// ---------------------------------------------------------------------------

enum AppError {
    /// Exit 10 — input file not found / unreadable
    InputFile(String),
    /// Exit 11 — unsupported file type
    UnsupportedFormat(String),
    /// Exit 12 — empty keyword
    Keyword,
    /// Exit 13 — cannot write output file
    OutputFile(String),
}

impl AppError {
    fn exit_code(&self) -> i32 {
        match self {
            AppError::InputFile(_) => 10,
            AppError::UnsupportedFormat(_) => 11,
            AppError::Keyword => 12,
            AppError::OutputFile(_) => 13,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InputFile(msg) => {
                write!(f, "{}\n  hint: verify the file path is correct", msg)
            }
            AppError::UnsupportedFormat(msg) => {
                write!(
                    f,
                    "{}\n  hint: only .txt, .text, and .md files are supported",
                    msg
                )
            }
            AppError::Keyword => {
                write!(
                    f,
                    "keyword must not be empty\n  hint: provide a search term, or omit --keyword to extract all citations"
                )
            }
            AppError::OutputFile(msg) => {
                write!(
                    f,
                    "{}\n  hint: check that the output directory exists and is writable",
                    msg
                )
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            files,
            keyword,
            json,
            output,
        } => {
            extract_command(&files, keyword.as_deref(), json, output.as_deref())?;
        }
        Commands::Sentences { input } => {
            sentences_command(&input)?;
        }
        Commands::Patterns => {
            patterns_command();
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Extract citations from one or more documents.
fn extract_command(
    files: &[PathBuf],
    keyword: Option<&str>,
    json: bool,
    output: Option<&Path>,
) -> Result<(), AppError> {
    // Reject a blank keyword before touching any file
    if let Some(kw) = keyword {
        if kw.trim().is_empty() {
            return Err(AppError::Keyword);
        }
    }

    // 1. Load every document (support '-' for stdin)
    let mut texts = Vec::new();
    for file in files {
        texts.push(read_input(file)?);
    }

    // 2. Merge while preserving sentence boundaries between documents
    let text = merge_documents(&texts);

    // 3. Run the pipeline, keyword-filtered or extract-all
    let extractor = CitationExtractor::new();
    let citations = match keyword {
        Some(kw) => extractor.extract_near_keyword(&text, kw),
        None => extractor.extract_all(&text),
    };

    // 4. Render
    let rendered = if json {
        let mut line = render_json(&citations);
        line.push('\n');
        line
    } else {
        render_text(&citations)
    };

    // 5. Write to file or stdout
    if let Some(output_path) = output {
        fs::write(output_path, &rendered).map_err(|e| {
            AppError::OutputFile(format!("'{}': {}", output_path.display(), e))
        })?;
        eprintln!(
            "extracted {} citation(s), wrote {}",
            citations.len(),
            output_path.display()
        );
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write!(handle, "{}", rendered).map_err(|e| {
            AppError::OutputFile(format!("stdout: {}", e))
        })?;
    }

    Ok(())
}

/// Print the sentence segmentation of a document, one sentence per line.
fn sentences_command(input: &Path) -> Result<(), AppError> {
    let text = read_input(input)?;
    for sentence in split_into_sentences(&text) {
        println!("{}", sentence);
    }
    Ok(())
}

/// List recognizer rule names in priority order.
fn patterns_command() {
    for name in PatternSet::new().rule_names() {
        println!("{}", name);
    }
}

// ---------------------------------------------------------------------------
// Input helpers
// ---------------------------------------------------------------------------

/// Reads one input: a supported text file, or stdin when the path is '-'.
fn read_input(path: &Path) -> Result<String, AppError> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .map_err(|e| AppError::InputFile(format!("failed to read from stdin: {}", e)))?;
        return Ok(decode_text(&buf));
    }

    load_document(path).map_err(|e| match e {
        DocumentError::UnsupportedFormat(_) => AppError::UnsupportedFormat(e.to_string()),
        DocumentError::Io(_) => AppError::InputFile(format!("'{}': {}", path.display(), e)),
    })
}
