use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Purpose used when the caller does not supply one.
pub const DEFAULT_PURPOSE: &str = "stabilize and refactor";

/// A single file rewrite, built once per invocation after the file was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRequest {
    /// Path as given on the command line. Embedded in the prompt verbatim.
    pub file_path: String,
    /// Free-text description of the intended change.
    pub purpose: String,
    /// Full text of the file before the rewrite.
    pub original_content: String,
}

impl RewriteRequest {
    pub fn new(
        file_path: impl Into<String>,
        purpose: Option<String>,
        original_content: String,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            purpose: purpose.unwrap_or_else(|| DEFAULT_PURPOSE.to_string()),
            original_content,
        }
    }
}

/// The payload sent to a backend: fixed instructions plus the per-file message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// `None` when the instructions travel inside `user`.
    pub system: Option<String>,
    pub user: String,
}

/// How the instructions are laid out across the system and user messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    /// Instructions only in the system message.
    Split,
    /// A single user message with the instructions at the top, no system message.
    Inline,
}

/// Hosted text-generation API a rewrite is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    #[default]
    OpenAi,
    Gemini,
}

impl BackendKind {
    pub fn name(&self) -> &'static str {
        match self {
            BackendKind::OpenAi => "openai",
            BackendKind::Gemini => "gemini",
        }
    }

    /// Human-readable provider name for status messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            BackendKind::OpenAi => "OpenAI",
            BackendKind::Gemini => "Gemini",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            BackendKind::OpenAi => "gpt-4.1-mini",
            BackendKind::Gemini => "gemini-2.0-flash",
        }
    }

    /// Environment variable holding the backend's API key.
    pub fn credential_env(&self) -> &'static str {
        match self {
            BackendKind::OpenAi => "OPENAI_API_KEY",
            BackendKind::Gemini => "GEMINI_API_KEY",
        }
    }

    pub fn prompt_style(&self) -> PromptStyle {
        match self {
            BackendKind::OpenAi => PromptStyle::Split,
            BackendKind::Gemini => PromptStyle::Inline,
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(BackendKind::OpenAi),
            "gemini" => Ok(BackendKind::Gemini),
            other => Err(format!(
                "Unknown backend '{}'. Expected one of: openai, gemini",
                other
            )),
        }
    }
}

/// What a successful rewrite touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub file_path: PathBuf,
    /// `None` on a dry run, where nothing is written.
    pub backup_path: Option<PathBuf>,
    pub original_bytes: usize,
    pub rewritten_bytes: usize,
}
