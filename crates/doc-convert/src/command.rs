//! Converter backed by an external program (pdf2docx, LibreOffice, ...).

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, instrument, warn};

use crate::converter::Converter;
use crate::error::ConvertError;

/// `pdf2docx` CLI: writes exactly `{output}`.
pub const DEFAULT_PDF_TO_DOCX_COMMAND: &str = "pdf2docx convert {input} {output}";

/// LibreOffice writes `<outdir>/<input stem>.pdf`. A private profile per scratch dir lets
/// several instances run at once.
pub const DEFAULT_DOCX_TO_PDF_COMMAND: &str =
    "soffice --headless -env:UserInstallation=file://{outdir}/lo-profile --convert-to pdf --outdir {outdir} {input}";

const INPUT_PLACEHOLDER: &str = "{input}";
const OUTPUT_PLACEHOLDER: &str = "{output}";
const OUTDIR_PLACEHOLDER: &str = "{outdir}";

const DANGEROUS_CHARS: [char; 11] = [';', '|', '&', '$', '`', '(', ')', '<', '>', '\n', '\r'];

/// Max chars of converter stderr kept in errors and logs.
const STDERR_PREVIEW_CHARS: usize = 500;

/// Runs `program args...` with `{input}`, `{output}` and `{outdir}` substituted in each argument.
/// No shell is involved. The child is killed if the conversion future is dropped (e.g. on timeout).
#[derive(Debug, Clone)]
pub struct CommandConverter {
    program: String,
    args: Vec<String>,
}

impl CommandConverter {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Result<Self, ConvertError> {
        let program = program.into();
        if program.is_empty() {
            return Err(ConvertError::InvalidCommand("empty program".to_string()));
        }
        if program.chars().any(|c| DANGEROUS_CHARS.contains(&c)) {
            return Err(ConvertError::InvalidCommand(format!(
                "program contains shell metacharacters: {}",
                program
            )));
        }
        Ok(Self { program, args })
    }

    /// Parses a whitespace-separated template such as `pdf2docx convert {input} {output}`.
    /// The template must reference `{input}`.
    pub fn from_template(template: &str) -> Result<Self, ConvertError> {
        let mut parts = template.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| ConvertError::InvalidCommand("empty command".to_string()))?;
        let converter = Self::new(program, parts.collect())?;
        if !converter
            .args
            .iter()
            .any(|arg| arg.contains(INPUT_PLACEHOLDER))
        {
            return Err(ConvertError::InvalidCommand(format!(
                "missing {} placeholder: {}",
                INPUT_PLACEHOLDER, template
            )));
        }
        Ok(converter)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Resolves the program on `PATH` (or as given, when it is a path).
    pub fn locate(&self) -> Option<PathBuf> {
        which::which(&self.program).ok()
    }

    fn render_args(&self, input: &Path, output: &Path) -> Vec<String> {
        let input = input.display().to_string();
        let outdir = output
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| ".".to_string());
        let output = output.display().to_string();
        self.args
            .iter()
            .map(|arg| {
                arg.replace(INPUT_PLACEHOLDER, &input)
                    .replace(OUTPUT_PLACEHOLDER, &output)
                    .replace(OUTDIR_PLACEHOLDER, &outdir)
            })
            .collect()
    }
}

fn stderr_preview(stderr: &[u8]) -> String {
    String::from_utf8_lossy(stderr)
        .trim()
        .chars()
        .take(STDERR_PREVIEW_CHARS)
        .collect()
}

#[async_trait]
impl Converter for CommandConverter {
    #[instrument(skip(self), fields(program = %self.program))]
    async fn convert(&self, input: &Path, output: &Path) -> Result<(), ConvertError> {
        let args = self.render_args(input, output);
        debug!(args = ?args, "Starting converter process");

        let child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ConvertError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let result = child.wait_with_output().await?;
        if !result.status.success() {
            let stderr = stderr_preview(&result.stderr);
            warn!(code = ?result.status.code(), stderr = %stderr, "Converter process failed");
            return Err(ConvertError::Failed {
                program: self.program.clone(),
                code: result.status.code(),
                stderr,
            });
        }

        match tokio::fs::metadata(output).await {
            Ok(meta) if meta.is_file() => {
                debug!(bytes = meta.len(), "Converter process finished");
                Ok(())
            }
            _ => Err(ConvertError::MissingOutput(output.to_path_buf())),
        }
    }
}
