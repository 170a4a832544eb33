use anyhow::{bail, Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use codasyl_dbd::lexer::tokenize;
use codasyl_dbd::parser::Parser;
use codasyl_dbd::report::{write_report, write_tokens};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "dbd")]
#[command(about = "Parser for CODASYL-style schema and DML source", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize the input file and print tokens
    Lex {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Parse the input file and print records, sets, FIND and DML statements
    Parse {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output file path (defaults to stdout)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Fail if any FIND statement had to be skipped
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Lex { file } => lex_file(&file)?,
        Commands::Parse {
            file,
            output,
            strict,
        } => parse_file(&file, output.as_deref(), strict)?,
    }

    Ok(())
}

fn lex_file(path: &Path) -> Result<()> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("failed to read file '{}'", path.display()))?;

    let tokens = tokenize(&input);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_tokens(&mut out, &path.display().to_string(), &tokens)
        .context("failed to write tokens")?;

    Ok(())
}

fn parse_file(path: &Path, output: Option<&Path>, strict: bool) -> Result<()> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("failed to read file '{}'", path.display()))?;

    let mut parser = Parser::new(tokenize(&input));
    let schema = parser
        .parse_schema()
        .with_context(|| format!("failed to parse '{}'", path.display()))?;

    if let Some(output_path) = output {
        let file = File::create(output_path)
            .with_context(|| format!("failed to create '{}'", output_path.display()))?;
        let mut out = BufWriter::new(file);
        write_report(&mut out, &schema)
            .and_then(|()| out.flush())
            .with_context(|| format!("failed to write report to '{}'", output_path.display()))?;
        println!("Report written to: {}", output_path.display());
    } else {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_report(&mut out, &schema).context("failed to write report")?;
    }

    if strict && !schema.skipped_finds.is_empty() {
        bail!(
            "{} FIND statement(s) in '{}' did not match FIND <alias> RECORD IN <set> [SET]",
            schema.skipped_finds.len(),
            path.display()
        );
    }

    Ok(())
}
