use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rustmatrix::{AppConfig, Coefficients, MatrixDocument, StudentPotential, row};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rustmatrix")]
#[command(about = "Validated in-memory matrix and potential scoring")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the potential of every row of a document
    Potential {
        #[arg(long)]
        input: PathBuf,
        /// Print the scores as a JSON object
        #[arg(long)]
        json: bool,
    },
    /// Print the rows of a document as a text table
    Render {
        #[arg(long)]
        input: PathBuf,
    },
    /// Score two students with identical notes
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::from_env().context("invalid environment configuration")?;
    init_tracing(&config);

    match cli.command {
        Command::Potential { input, json } => potential(&input, json),
        Command::Render { input } => render(&input, &config),
        Command::Demo => demo(),
    }
}

fn init_tracing(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load(input: &Path) -> Result<MatrixDocument> {
    MatrixDocument::from_path(input).with_context(|| format!("failed to load {}", input.display()))
}

fn potential(input: &Path, json: bool) -> Result<()> {
    let document = load(input)?;
    let table = document.build_table().context("failed to build table")?;
    info!(rows = table.row_count(), "table built");

    let scores = table
        .compute_potential(&document.coefficients)
        .context("failed to compute potential")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&scores.to_json())?);
    } else {
        print!("{}", scores);
    }
    Ok(())
}

fn render(input: &Path, config: &AppConfig) -> Result<()> {
    let document = load(input)?;
    let table = document.build_table().context("failed to build table")?;
    print!("{}", config.renderer().render(&table));
    Ok(())
}

fn demo() -> Result<()> {
    let mut students = StudentPotential::new();
    students.add_student_notes("student1", row([("red", 5), ("blue", 10), ("green", 15)]))?;
    students.add_student_notes("student2", row([("red", 5), ("blue", 10), ("green", 15)]))?;

    let coefficients = Coefficients::from([
        ("red".to_string(), 0.5),
        ("blue".to_string(), 0.5),
        ("green".to_string(), 1.0),
    ]);
    print!("{}", students.compute(&coefficients)?);
    Ok(())
}
