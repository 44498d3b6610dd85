use crate::config::Config;
use crate::error::CliError;
use clap::Parser;
use miette::IntoDiagnostic;
use relocate_core::{CandidateTag, DEFAULT_TARGET_ID, Resolution, ResolveOptions, Resolver};
use relocate_html::{Document, ParseOptions};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "relocate")]
#[command(version)]
#[command(after_help = "Examples:\n\n\
    To find the OK button of origin.html in changed.html:\n\
    $ relocate origin.html changed.html\n\n\
    To look up another element and only print the result:\n\
    $ relocate --no-write origin.html changed.html submit-button\n\n\
    To see how every candidate scored:\n\
    $ relocate -F json origin.html changed.html")]
#[command(
    about = "relocate finds the element of one HTML document that corresponds to an element of another, and prints its XPath.",
    long_about = None
)]
pub struct Cli {
    /// Original HTML document containing the element
    pub original: PathBuf,

    /// HTML document to search for the corresponding element
    pub target: PathBuf,

    /// ID of the element in the original document [default: make-everything-ok-button]
    pub target_id: Option<String>,

    /// Directory the result file is written to [default: Output]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the result without writing the result file
    #[arg(long, default_value_t = false)]
    pub no_write: bool,

    /// Tag family searched when the ID is missing from the target document
    #[arg(short, long, value_enum, default_value_t)]
    pub tag: TagFamily,

    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Fail on markup the HTML parser has to repair
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum TagFamily {
    /// Only `<a>` elements
    #[default]
    Anchor,
    /// Elements with the original element's tag name
    Original,
}

impl From<TagFamily> for CandidateTag {
    fn from(tag: TagFamily) -> Self {
        match tag {
            TagFamily::Anchor => CandidateTag::Anchor,
            TagFamily::Original => CandidateTag::Original,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// The XPath only
    #[default]
    Text,
    /// The full resolution report
    Json,
}

impl Cli {
    pub fn run(&self, config: &Config) -> miette::Result<()> {
        let original_path = check_file_exists(&self.original, "Original file")?;
        let target_path = check_file_exists(&self.target, "Sample file")?;

        let parse_options = ParseOptions {
            strict: self.strict,
        };
        let original = Document::load(original_path, parse_options)?;
        let target = Document::load(target_path, parse_options)?;

        let resolver = Resolver::new(self.resolve_options(config));
        tracing::info!(
            "Searching for element with ID `{}`",
            resolver.options().target_id
        );
        let resolution = resolver.resolve(&original, &target)?;

        if !self.no_write {
            let output_dir = self.output_dir.as_ref().unwrap_or(&config.output_dir);
            let written = write_result(output_dir, target_path, &resolution.xpath)?;
            tracing::info!("Result written to {}", written.display());
        }

        self.print(&resolution)
    }

    fn resolve_options(&self, config: &Config) -> ResolveOptions {
        ResolveOptions {
            target_id: self
                .target_id
                .clone()
                .or_else(|| config.target_id.clone())
                .unwrap_or_else(|| DEFAULT_TARGET_ID.to_string()),
            candidate_tag: self.tag.into(),
        }
    }

    fn print(&self, resolution: &Resolution) -> miette::Result<()> {
        let stdout = io::stdout();
        let mut handle = BufWriter::new(stdout.lock());

        match self.format {
            OutputFormat::Text => writeln!(handle, "{}", resolution.xpath).into_diagnostic()?,
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(resolution).into_diagnostic()?;
                writeln!(handle, "{}", json).into_diagnostic()?
            }
        }

        handle.flush().into_diagnostic()
    }
}

fn check_file_exists<'a>(path: &'a Path, hint: &'static str) -> Result<&'a Path, CliError> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(CliError::FileNotFound {
            hint,
            path: path.to_path_buf(),
        })
    }
}

/// `<output_dir>/<target file name without extension>.txt`
pub fn output_path(output_dir: &Path, target: &Path) -> PathBuf {
    let stem = target
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "result".to_string());
    output_dir.join(format!("{}.txt", stem))
}

fn write_result(output_dir: &Path, target: &Path, xpath: &str) -> Result<PathBuf, CliError> {
    let path = output_path(output_dir, target);

    fs::create_dir_all(output_dir).map_err(|source| CliError::Write {
        path: output_dir.to_path_buf(),
        source,
    })?;
    fs::write(&path, xpath).map_err(|source| CliError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
