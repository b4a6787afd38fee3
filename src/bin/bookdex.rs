//! Bookdex Binary
//!
//! Interactive library catalogue.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use bookdex::config::ColorMode;
use bookdex::shell::Shell;
use bookdex::{BookdexError, Buffer, Catalogue, Config};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

/// Bookdex
#[derive(Parser, Debug)]
#[command(name = "bookdex")]
#[command(about = "Library catalogue with per-attribute indexes")]
#[command(version)]
struct Args {
    /// Catalogue file to load and append to
    file: Option<PathBuf>,

    /// When to colour headings
    #[arg(long, value_enum, default_value = "auto")]
    color: Color,

    /// Command prompt
    #[arg(long, default_value = ">>> ")]
    prompt: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Color {
    Auto,
    Always,
    Never,
}

impl From<Color> for ColorMode {
    fn from(color: Color) -> Self {
        match color {
            Color::Auto => ColorMode::Auto,
            Color::Always => ColorMode::Always,
            Color::Never => ColorMode::Never,
        }
    }
}

fn main() {
    // Logs go to stderr; stdout belongs to the shell
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,bookdex=info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    tracing::debug!("Bookdex v{}", bookdex::VERSION);

    let mut builder = Config::builder()
        .color(args.color.into())
        .prompt(args.prompt);
    if let Some(file) = &args.file {
        builder = builder.catalogue_path(file);
    }
    let config = builder.build();

    if let Err(e) = run(config) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: Config) -> bookdex::Result<()> {
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let Some(path) = config.catalogue_path.clone() else {
        // No catalogue yet: ask for a file and start adding books to it
        write!(output, "File to store library catalogue in: ")?;
        output.flush()?;
        let Some(mut name) = Buffer::read_line(&mut input, config.initial_buffer_capacity)? else {
            return Ok(());
        };
        name.trim_line_ending();
        if name.is_empty() {
            return Err(BookdexError::Config("no catalogue file given".to_string()));
        }
        let path = PathBuf::from(name.to_string());
        let sink = BufWriter::new(File::create(&path)?);
        tracing::info!("Writing new catalogue to {}", path.display());

        let mut shell = Shell::new(Catalogue::new(), config, input, output, sink);
        return shell.add_books();
    };

    let mut catalogue = Catalogue::new();
    let report = catalogue.load(&path)?;
    tracing::info!(
        "Loaded {} books from {} ({} skipped)",
        report.loaded,
        path.display(),
        report.skipped
    );

    // Rewrite the file so it holds exactly the records that loaded
    catalogue.save(&path)?;
    let sink = BufWriter::new(OpenOptions::new().append(true).open(&path)?);

    let mut shell = Shell::new(catalogue, config, input, output, sink);
    shell.print_overview()?;
    shell.run()
}
