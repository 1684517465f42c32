use autofix_core::rewrite::{BackendKind, Prompt};
use autofix_core::RewriteError;
use rig::client::CompletionClient;
use rig::completion::Prompt as _;
use rig::providers::openai;

use super::TextGenerationBackend;

/// OpenAI-compatible chat completions endpoint.
pub struct OpenAiBackend {
    client: openai::Client,
    model: String,
}

impl OpenAiBackend {
    pub fn new(api_key: &str, model: &str, base_url: Option<&str>) -> Result<Self, RewriteError> {
        let builder = openai::Client::builder().api_key(api_key);
        let builder = match base_url {
            Some(url) => builder.base_url(url),
            None => builder,
        };

        let client = builder.build().map_err(|e| {
            RewriteError::Configuration(format!("Failed to create OpenAI client: {}", e))
        })?;

        Ok(Self {
            client,
            model: model.to_string(),
        })
    }
}

impl TextGenerationBackend for OpenAiBackend {
    fn label(&self) -> &str {
        BackendKind::OpenAi.display_name()
    }

    async fn generate(&self, prompt: &Prompt) -> Result<String, RewriteError> {
        // Compatible gateways speak chat completions, not the responses API.
        let mut builder = self
            .client
            .clone()
            .completions_api()
            .agent(&self.model)
            .temperature(0.0);
        if let Some(system) = &prompt.system {
            builder = builder.preamble(system);
        }
        let agent = builder.build();

        agent
            .prompt(&prompt.user)
            .await
            .map_err(|e| RewriteError::RemoteCall(format!("OpenAI request failed: {}", e)))
    }
}
