use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use anyhow::{Context, Result};
use calc_front::{Parser as CalcParser, Scanner, SwitchLexer, TableLexer};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(name = "calc", about = "Scan and validate calculator programs")]
struct Cli {
    #[clap(short, long, global = true, help = "Debug logging")]
    verbose: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[clap(about = "Tokenize a file and report the time taken")]
    Scan {
        file: PathBuf,

        #[clap(short, long, value_enum, default_value_t = Backend::Both)]
        scanner: Backend,

        #[clap(short, long, help = "Print the token buffer")]
        tokens: bool,
    },

    #[clap(about = "Parse a file and report the first error")]
    Parse {
        file: PathBuf,

        #[clap(short, long, value_enum, default_value_t = Backend::Switch)]
        scanner: Backend,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Backend {
    Switch,
    Table,
    Both,
}

impl Backend {
    fn lexers<'a>(self, input: &'a [u8]) -> Vec<(&'static str, Box<dyn Scanner + 'a>)> {
        let switch = || -> (&'static str, Box<dyn Scanner + 'a>) {
            ("switch", Box::new(SwitchLexer::new(input)))
        };
        let table = || -> (&'static str, Box<dyn Scanner + 'a>) {
            ("table", Box::new(TableLexer::new(input)))
        };
        match self {
            Backend::Switch => vec![switch()],
            Backend::Table => vec![table()],
            Backend::Both => vec![switch(), table()],
        }
    }
}

/// Reads `path`, dropping one trailing newline.
fn load(path: &Path) -> Result<Vec<u8>> {
    let mut content =
        fs::read(path).with_context(|| format!("Error reading from \"{}\"", path.display()))?;
    if content.last() == Some(&b'\n') {
        content.pop();
    }
    debug!(path = %path.display(), len = content.len(), "loaded");
    Ok(content)
}

fn scan(input: &[u8], backend: Backend, print_tokens: bool) -> bool {
    let mut ok = true;
    for (name, mut lexer) in backend.lexers(input) {
        let started = Instant::now();
        if let Err(err) = lexer.scan() {
            println!("Error: {err}");
            ok = false;
            continue;
        }
        let elapsed = started.elapsed();
        if print_tokens {
            for token in lexer.tokens() {
                println!("{} [{}]", token.kind, token.text);
            }
        }
        println!("{name} scan: {:.6} seconds", elapsed.as_secs_f64());
    }
    ok
}

fn parse(input: &[u8], backend: Backend) -> bool {
    let mut ok = true;
    for (name, mut lexer) in backend.lexers(input) {
        let started = Instant::now();
        let result = CalcParser::new(&mut *lexer).parse();
        let elapsed = started.elapsed();
        if let Err(err) = result {
            println!("{}: {}, {}", err.error_type(), err.context(), err.description());
            ok = false;
        }
        println!("{name} parse: {:.6} seconds", elapsed.as_secs_f64());
    }
    ok
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let ok = match cli.command {
        Commands::Scan {
            file,
            scanner,
            tokens,
        } => scan(&load(&file)?, scanner, tokens),
        Commands::Parse { file, scanner } => parse(&load(&file)?, scanner),
    };

    info!(ok, "finished");
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
