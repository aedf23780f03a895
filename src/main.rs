//! CLI entry point for folder-scan

use std::io::IsTerminal;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use folder_scan::logging::{DEFAULT_LOG_LEVEL, init_logging};
use folder_scan::{
    Destination, Error, FilenameMode, KeywordSet, MaxDepth, OutputFormat, ScanConfig, Scanner,
    build_report, print_summary, save_report,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color on stderr based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stderr().is_terminal()
        }
    }
}

/// Filename keyword polarity
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ModeArg {
    /// Skip entries whose name contains a keyword
    #[default]
    Blacklist,
    /// Keep only entries whose name contains a keyword
    Whitelist,
}

impl From<ModeArg> for FilenameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Blacklist => FilenameMode::Blacklist,
            ModeArg::Whitelist => FilenameMode::Whitelist,
        }
    }
}

/// Report format
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum FormatArg {
    /// `@`-separated text, one entry per line
    #[default]
    Txt,
    /// Pretty-printed JSON array
    Json,
    /// Excel workbook
    Xlsx,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Txt => OutputFormat::Txt,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Xlsx => OutputFormat::Xlsx,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "folder-scan")]
#[command(about = "List the files and folders below a directory with their timestamps")]
#[command(version)]
struct Args {
    /// Directory to scan
    path: PathBuf,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level", default_value = "3")]
    level: NonZeroUsize,

    /// Traverse all subfolders (no depth limit)
    #[arg(short, long, conflicts_with = "level")]
    all: bool,

    /// Space-separated filename keywords, e.g. "draft old"
    #[arg(short = 'n', long = "name-keywords", value_name = "KEYWORDS", default_value = "")]
    name_keywords: String,

    /// Match filename keywords case-sensitively
    #[arg(long = "name-case-sensitive")]
    name_case_sensitive: bool,

    /// How filename keywords are applied
    #[arg(long = "mode", value_enum, default_value = "blacklist")]
    mode: ModeArg,

    /// Space-separated directory stop keywords, e.g. ".D .M"
    #[arg(short = 's', long = "stop-keywords", value_name = "KEYWORDS", default_value = "")]
    stop_keywords: String,

    /// Match stop keywords case-sensitively
    #[arg(long = "stop-case-sensitive")]
    stop_case_sensitive: bool,

    /// Space-separated file extensions to exclude, e.g. ".pdf .docx"
    #[arg(short = 'x', long = "exclude-types", value_name = "EXTENSIONS", default_value = "")]
    exclude_types: String,

    /// Match excluded extensions case-sensitively
    #[arg(long = "exclude-case-sensitive")]
    exclude_case_sensitive: bool,

    /// Report format
    #[arg(short = 'f', long = "format", value_enum, default_value = "txt")]
    format: FormatArg,

    /// Where to save the report ("-" for stdout; default: scan_results.<ext> inside PATH)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Do not print the completion summary
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Log filter, overridden by RUST_LOG (e.g. info, debug)
    #[arg(long = "log-level", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long = "log-json")]
    log_json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

impl Args {
    fn scan_config(&self) -> ScanConfig {
        let max_depth = if self.all {
            MaxDepth::Unlimited
        } else {
            MaxDepth::Levels(self.level)
        };

        ScanConfig::new(&self.path)
            .with_max_depth(max_depth)
            .with_stop_keywords(KeywordSet::parse(&self.stop_keywords, self.stop_case_sensitive))
            .with_exclude_extensions(KeywordSet::parse(
                &self.exclude_types,
                self.exclude_case_sensitive,
            ))
            .with_filename_keywords(
                KeywordSet::parse(&self.name_keywords, self.name_case_sensitive),
                self.mode.into(),
            )
    }
}

fn run(args: &Args) -> folder_scan::Result<()> {
    if args.path.as_os_str().is_empty() {
        return Err(Error::InvalidArgument("start directory must not be empty".to_string()));
    }
    if !args.path.exists() {
        return Err(Error::InvalidArgument(format!(
            "directory does not exist: {}",
            args.path.display()
        )));
    }
    if !args.path.is_dir() {
        return Err(Error::InvalidArgument(format!(
            "not a directory: {}",
            args.path.display()
        )));
    }

    let format: OutputFormat = args.format.into();
    let scanner = Scanner::new(args.scan_config());

    let started = Instant::now();
    let report = build_report(&scanner, format)?;
    let elapsed = started.elapsed();

    let destination = Destination::resolve(args.output.as_deref(), &args.path, format);
    save_report(&report, &destination)?;

    if !args.quiet {
        if let Err(e) = print_summary(
            &report.stats,
            elapsed,
            &destination.to_string(),
            should_use_color(args.color),
        ) {
            tracing::warn!(error = %e, "failed to print summary");
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(&args.log_level, args.log_json);

    if let Err(e) = run(&args) {
        eprintln!("folder-scan: {}", e);
        if e.is_permission_denied() {
            eprintln!("folder-scan: choose another location with --output <FILE>");
        }
        process::exit(1);
    }
}
