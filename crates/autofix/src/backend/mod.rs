use autofix_core::rewrite::{BackendKind, Prompt};
use autofix_core::RewriteError;

mod gemini;
mod openai;

pub use gemini::GeminiBackend;
pub use openai::OpenAiBackend;

/// A hosted text-generation API: one prompt in, one completion out.
pub trait TextGenerationBackend {
    /// Provider name used in status messages.
    fn label(&self) -> &str;

    /// Send the prompt and return the raw completion text.
    ///
    /// Transport and API failures are reported as [`RewriteError::RemoteCall`].
    async fn generate(&self, prompt: &Prompt) -> Result<String, RewriteError>;
}

#[derive(Debug, Clone, clap::Args)]
pub struct BackendOptions {
    /// Text-generation backend: openai or gemini
    #[clap(long, env = "AUTOFIX_BACKEND", default_value = "openai")]
    pub backend: String,

    /// Model name [default: gpt-4.1-mini for openai, gemini-2.0-flash for gemini]
    #[clap(long, env = "AUTOFIX_MODEL")]
    pub model: Option<String>,

    /// API key [default: $OPENAI_API_KEY or $GEMINI_API_KEY, per backend]
    #[clap(long)]
    pub api_key: Option<String>,

    /// Base URL of an OpenAI-compatible endpoint
    #[clap(long, env = "OPENAI_BASE_URL")]
    pub base_url: Option<String>,
}

/// Fully resolved backend settings, passed explicitly into the backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub kind: BackendKind,
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl BackendOptions {
    /// Fill in per-backend defaults. The credential falls back to the
    /// backend's environment variable, looked up through `env`.
    pub fn resolve(
        self,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<BackendConfig, RewriteError> {
        let kind: BackendKind = self.backend.parse().map_err(RewriteError::Configuration)?;

        Ok(BackendConfig {
            kind,
            model: self
                .model
                .unwrap_or_else(|| kind.default_model().to_string()),
            api_key: self.api_key.or_else(|| env(kind.credential_env())),
            base_url: self.base_url,
        })
    }
}

/// The backend selected by configuration.
pub enum Backend {
    OpenAi(OpenAiBackend),
    Gemini(GeminiBackend),
}

impl Backend {
    pub fn from_config(config: &BackendConfig) -> Result<Self, RewriteError> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                RewriteError::Configuration(format!(
                    "{} is not set",
                    config.kind.credential_env()
                ))
            })?;

        log::debug!("Using {} backend with model {}", config.kind, config.model);

        match config.kind {
            BackendKind::OpenAi => Ok(Backend::OpenAi(OpenAiBackend::new(
                api_key,
                &config.model,
                config.base_url.as_deref(),
            )?)),
            BackendKind::Gemini => {
                if config.base_url.is_some() {
                    log::warn!("--base-url only applies to the openai backend, ignoring it");
                }
                Ok(Backend::Gemini(GeminiBackend::new(api_key, &config.model)?))
            }
        }
    }
}

impl TextGenerationBackend for Backend {
    fn label(&self) -> &str {
        match self {
            Backend::OpenAi(backend) => backend.label(),
            Backend::Gemini(backend) => backend.label(),
        }
    }

    async fn generate(&self, prompt: &Prompt) -> Result<String, RewriteError> {
        match self {
            Backend::OpenAi(backend) => backend.generate(prompt).await,
            Backend::Gemini(backend) => backend.generate(prompt).await,
        }
    }
}
