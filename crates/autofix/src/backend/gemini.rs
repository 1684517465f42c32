use autofix_core::rewrite::{BackendKind, Prompt};
use autofix_core::RewriteError;
use rig::client::CompletionClient;
use rig::completion::Prompt as _;
use rig::providers::gemini;

use super::TextGenerationBackend;

/// Google Gemini `generateContent` endpoint.
pub struct GeminiBackend {
    client: gemini::Client,
    model: String,
}

impl GeminiBackend {
    pub fn new(api_key: &str, model: &str) -> Result<Self, RewriteError> {
        let client = gemini::Client::builder()
            .api_key(api_key)
            .build()
            .map_err(|e| {
                RewriteError::Configuration(format!("Failed to create Gemini client: {}", e))
            })?;

        Ok(Self {
            client,
            model: model.to_string(),
        })
    }
}

impl TextGenerationBackend for GeminiBackend {
    fn label(&self) -> &str {
        BackendKind::Gemini.display_name()
    }

    async fn generate(&self, prompt: &Prompt) -> Result<String, RewriteError> {
        let mut builder = self.client.agent(&self.model).temperature(0.0);
        if let Some(system) = &prompt.system {
            builder = builder.preamble(system);
        }
        let agent = builder.build();

        agent
            .prompt(&prompt.user)
            .await
            .map_err(|e| RewriteError::RemoteCall(format!("Gemini request failed: {}", e)))
    }
}
