//! atdown CLI - AtCoder problem page to Markdown converter

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use colored::Colorize;

use atdown::{Converter, JsonFormat, Language};

#[derive(Parser)]
#[command(name = "atdown")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert AtCoder problem pages to clean Markdown", long_about = None)]
struct Cli {
    /// Input HTML file or problem URL
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (derived from the input name if omitted)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Language variant to extract
    #[arg(short, long, value_enum, default_value = "ja")]
    language: LanguageArg,

    /// Tolerate statements without sample blocks
    #[arg(long)]
    lenient: bool,

    /// Emit the parsed statement as JSON instead of Markdown
    #[arg(long)]
    json: bool,

    /// Print to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum LanguageArg {
    /// Japanese statement
    Ja,
    /// English statement
    En,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Ja => Language::Ja,
            LanguageArg::En => Language::En,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let html = if is_url(&cli.input) {
        log::debug!("fetching {}", cli.input);
        fetch_url(&cli.input)?
    } else {
        fs::read_to_string(&cli.input)?
    };

    let mut converter = Converter::new().language(cli.language.into());
    if cli.lenient {
        converter = converter.lenient();
    }
    let extracted = converter.parse(&html)?;

    let output = if cli.json {
        extracted.to_json(JsonFormat::Pretty)?
    } else {
        extracted.to_markdown()?
    };

    if cli.stdout {
        println!("{}", output);
        return Ok(());
    }

    let path = match cli.output {
        Some(ref p) => p.clone(),
        None => default_output(&cli.input, cli.json),
    };
    fs::write(&path, &output)?;

    println!(
        "{} '{}' to '{}'",
        "Converted".green().bold(),
        cli.input,
        path.display()
    );
    println!("Language: {}", Language::from(cli.language));

    Ok(())
}

fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Fetch a problem page over HTTP(S). Network errors and non-success
/// statuses surface to the caller; no retries.
fn fetch_url(url: &str) -> Result<String, Box<dyn std::error::Error>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(format!("HTTP {} when fetching URL", status).into());
    }
    Ok(response.text()?)
}

/// Derive the output path from the input: the file name with the output
/// extension, or the last URL path segment.
fn default_output(input: &str, json: bool) -> PathBuf {
    let extension = if json { "json" } else { "md" };
    if is_url(input) {
        let tail = input
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default();
        let stem = if tail.is_empty() { "problem" } else { tail };
        PathBuf::from(format!("{}.{}", stem, extension))
    } else {
        Path::new(input).with_extension(extension)
    }
}
