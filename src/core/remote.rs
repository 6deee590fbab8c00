use crate::domain::model::{ClinicParameters, EstimateResult};
use crate::utils::error::{Result, TimesaverError};
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

const SYSTEM_INSTRUCTION: &str = "You are a helpful healthcare AI assistant.";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Chat-completion client for remote estimates. Constructed explicitly and
/// handed to the resolver; there is no process-wide client handle. One request
/// per resolution, no retry, no response caching.
#[derive(Debug, Clone)]
pub struct RemoteInsights {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl RemoteInsights {
    pub fn new(
        api_base: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Reads the credential once. A missing or empty key disables the remote
    /// path for the lifetime of the process.
    pub fn from_env(api_base: &str, model: &str) -> Option<Self> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(|key| Self::new(api_base, key, model))
    }

    fn prompt(params: &ClinicParameters) -> String {
        format!(
            "You are a helpful assistant. Given a clinic with {} clinicians, each seeing {} patients per week,\n\
             and spending {} hours per week on administrative tasks, estimate:\n\
             1. Time saved per clinician per week if AI is applied (in hours, decimal allowed)\n\
             2. Total admin time saved for the whole clinic per week\n\
             3. Suggest a small personalized tip to save time\n\n\
             Return the results in JSON format with keys: time_saved_per_week, total_time_saved, tip",
            params.clinician_count, params.patients_per_week, params.admin_hours_per_week
        )
    }

    /// Fetches and strictly decodes a remote estimate. Any failure along the
    /// way (transport, non-2xx, envelope shape, non-JSON completion, missing
    /// or mistyped keys) surfaces as a single error for the resolver to
    /// downgrade into the fallback path.
    pub async fn fetch_estimate(&self, params: &ClinicParameters) -> Result<EstimateResult> {
        let prompt = Self::prompt(params);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
        };

        let endpoint = format!("{}/chat/completions", self.api_base.trim_end_matches('/'));
        tracing::debug!("Requesting chat completion from: {}", endpoint);

        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| TimesaverError::RemoteError {
                message: "completion contained no choices".to_string(),
            })?;

        let estimate: EstimateResult = serde_json::from_str(content)?;
        Ok(estimate)
    }
}
