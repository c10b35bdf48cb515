//! resumark CLI - resume text structuring tool

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use resumark::{segment, structure_hints, CleanupPreset, Document, JsonFormat, RenderOptions};

#[derive(Parser)]
#[command(name = "resumark")]
#[command(version)]
#[command(about = "Structure resume text into HTML, Markdown, and JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render structured HTML
    Html {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Document title rendered above the sections
        #[arg(long)]
        title: Option<String>,

        /// CSS class prefix for generated elements
        #[arg(long, default_value = "result-")]
        class_prefix: String,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,
    },

    /// Render canonical Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Include YAML frontmatter
        #[arg(short, long)]
        frontmatter: bool,

        /// Document title (frontmatter only)
        #[arg(long)]
        title: Option<String>,

        /// Markdown heading depth for section headings (1-6)
        #[arg(long, default_value = "2")]
        heading_level: u8,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,
    },

    /// Render emphasis-stripped plain text
    Text {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,
    },

    /// Render the structured document as JSON
    Json {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show structure information for a text
    Info {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

/// Text cleanup preset level.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CleanupLevel {
    /// Unicode normalization only
    Minimal,
    /// Normalization plus blank-line capping
    Standard,
    /// Maximum compaction
    Aggressive,
}

impl From<CleanupLevel> for CleanupPreset {
    fn from(level: CleanupLevel) -> Self {
        match level {
            CleanupLevel::Minimal => CleanupPreset::Minimal,
            CleanupLevel::Standard => CleanupPreset::Standard,
            CleanupLevel::Aggressive => CleanupPreset::Aggressive,
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Html {
            input,
            output,
            title,
            class_prefix,
            cleanup,
        } => cmd_html(
            &input,
            output.as_deref(),
            title,
            class_prefix,
            cleanup,
        ),
        Commands::Markdown {
            input,
            output,
            frontmatter,
            title,
            heading_level,
            cleanup,
        } => cmd_markdown(
            &input,
            output.as_deref(),
            frontmatter,
            title,
            heading_level,
            cleanup,
        ),
        Commands::Text {
            input,
            output,
            cleanup,
        } => cmd_text(&input, output.as_deref(), cleanup),
        Commands::Json {
            input,
            output,
            compact,
        } => cmd_json(&input, output.as_deref(), compact),
        Commands::Info { input } => cmd_info(&input),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Read input text from a file, or from stdin when the path is "-".
fn read_input(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let text = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)?
    };
    log::debug!("read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

fn write_output(
    content: &str,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_html(
    input: &Path,
    output: Option<&Path>,
    title: Option<String>,
    class_prefix: String,
    cleanup: Option<CleanupLevel>,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;

    let mut doc = Document::from_sections(segment(&text));
    doc.metadata.title = title;

    let mut options = RenderOptions::new().with_class_prefix(class_prefix);
    if let Some(level) = cleanup {
        options = options.with_cleanup_preset(level.into());
    }

    let html = resumark::render::to_html(&doc, &options)?;
    write_output(&html, output)
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    frontmatter: bool,
    title: Option<String>,
    heading_level: u8,
    cleanup: Option<CleanupLevel>,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;

    let mut doc = Document::from_sections(segment(&text));
    doc.metadata.title = title;

    let mut options = RenderOptions::new()
        .with_frontmatter(frontmatter)
        .with_heading_level(heading_level);
    if let Some(level) = cleanup {
        options = options.with_cleanup_preset(level.into());
    }

    let markdown = resumark::render::to_markdown(&doc, &options)?;
    write_output(&markdown, output)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    cleanup: Option<CleanupLevel>,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let doc = Document::from_sections(segment(&text));

    let mut options = RenderOptions::new();
    if let Some(level) = cleanup {
        options = options.with_cleanup_preset(level.into());
    }

    let rendered = resumark::render::to_text(&doc, &options)?;
    write_output(&rendered, output)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let doc = Document::from_sections(segment(&text));

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = resumark::render::to_json(&doc, format)?;
    write_output(&json, output)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let hints = structure_hints(&text);
    let doc = Document::from_sections(segment(&text));

    println!("{}", "Structure".green().bold());
    println!("  {} {}", "Sections:".dimmed(), doc.section_count());
    println!("  {} {}", "Blocks:".dimmed(), doc.block_count());
    println!();
    println!("{}", "Lines".green().bold());
    println!("  {} {}", "Headings:".dimmed(), hints.heading_lines);
    println!("  {} {}", "Subheadings:".dimmed(), hints.subheading_lines);
    println!("  {} {}", "Date ranges:".dimmed(), hints.meta_lines);
    println!("  {} {}", "Bullets:".dimmed(), hints.bullet_lines);
    println!("  {} {}", "Paragraphs:".dimmed(), hints.paragraph_lines);

    if !hints.any() {
        println!();
        println!(
            "{}",
            "No structure markers found; the plain view will serve this text better.".yellow()
        );
    }

    Ok(())
}
