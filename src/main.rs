use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use lscript::lexer::tokenize;
use lscript::parser::Parser;
use lscript::{source, SyntaxError};
use std::path::{Path, PathBuf};

#[derive(ClapParser)]
#[command(name = "lscript")]
#[command(about = "Front end for the lscript programming language", long_about = None)]
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
    /// Parse the input file and print the AST
    Parse {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the raw AST structure instead of the tree view
        #[arg(short, long)]
        debug: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Lex { file } => lex_file(&file)?,
        Commands::Parse { file, debug } => parse_file(&file, debug)?,
    }

    Ok(())
}

fn lex_file(path: &Path) -> Result<()> {
    let input = source::load(path)?;

    let tokens = tokenize(&input)
        .map_err(SyntaxError::from)
        .with_context(|| format!("failed to tokenize '{}'", path.display()))?;

    for token in &tokens {
        println!(
            "{}:{} {} {}",
            path.display(),
            token.line,
            token.kind.name(),
            token.lexeme
        );
    }

    println!("\nTotal tokens: {}", tokens.len());

    Ok(())
}

fn parse_file(path: &Path, debug: bool) -> Result<()> {
    let input = source::load(path)?;

    // Tokenize
    let tokens = tokenize(&input)
        .map_err(SyntaxError::from)
        .with_context(|| format!("failed to tokenize '{}'", path.display()))?;

    // Parse
    let mut parser = Parser::new(&tokens);
    let program = parser
        .parse_program()
        .map_err(SyntaxError::from)
        .with_context(|| format!("failed to parse '{}'", path.display()))?;

    if debug {
        println!("{program:#?}");
    } else {
        print!("{program}");
    }

    Ok(())
}
