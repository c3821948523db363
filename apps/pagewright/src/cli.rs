use clap::Parser;
use clap::ValueEnum;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width text
    Text,
    /// The composed layout tree as JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "pagewright")]
#[command(about = "Compose styled paragraphs from HTML", long_about = None)]
pub struct Cli {
    /// HTML file to read
    pub input: PathBuf,

    /// TOML style file applied on top of the starting registry
    #[arg(long, short = 's')]
    pub styles: Option<PathBuf>,

    /// Start from an empty registry instead of the stock defaults
    #[arg(long)]
    pub no_defaults: bool,

    /// Drop the stock utility classes before applying styles
    #[arg(long)]
    pub clear_class_styles: bool,

    /// Vertical padding of list markers, e.g. `4pt` or `2mm`
    #[arg(long)]
    pub list_padding: Option<String>,

    /// Character encoding label overriding detection
    #[arg(long)]
    pub charset: Option<String>,

    /// Directory that relative `img` sources are looked up in
    #[arg(long)]
    pub images: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Output width in columns (text format)
    #[arg(long, short = 'w', default_value_t = 80)]
    pub width: usize,

    /// Emphasise styled words with ANSI escapes (text format)
    #[arg(long)]
    pub ansi: bool,

    /// Log debug output to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
