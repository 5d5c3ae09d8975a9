//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use miette::NamedSource;
use runa_syntax::lexer::TokenKind;
use runa_syntax::{diagnostics, lexer, parser};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read source file contents.
///
/// ## Errors
///
/// Fails if the file cannot be accessed, exceeds [`MAX_SOURCE_SIZE`], or is
/// not valid UTF-8.
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata = fs::metadata(file_path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Tokenize a file and print one token per line.
pub fn tokens_file(file_path: &str, no_trivia: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source);
    tracing::debug!(count = tokens.len(), "lexed {}", file_path);

    for tok in &tokens {
        if no_trivia && (tok.kind.is_trivia() || tok.kind == TokenKind::Newline) {
            continue;
        }
        println!("{:>5}..{:<5} {:?} {:?}", tok.span.start, tok.span.end, tok.kind, tok.text(&source));
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse a file and print its syntax tree.
pub fn tree_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let root = parser::parse(&source);
    print!("{}", root.dump(&source));
    Ok(ExitCode::SUCCESS)
}

/// Report syntax diagnostics for a file.
///
/// Prints rendered reports to stderr and fails when any diagnostic is found.
pub fn check_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let root = parser::parse(&source);
    let diags = diagnostics::collect(&source, &root);

    if diags.is_empty() {
        println!("✓ No syntax issues in {}", file_path);
        return Ok(ExitCode::SUCCESS);
    }

    let count = diags.len();
    for diag in diags {
        let report = miette::Report::new(diag)
            .with_source_code(NamedSource::new(file_path, source.clone()));
        eprintln!("{:?}", report);
    }
    Err(CliError::failure(format!(
        "Found {} syntax issue{} in {}",
        count,
        if count == 1 { "" } else { "s" },
        file_path
    )))
}
