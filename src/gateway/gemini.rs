use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::{ContentGenerator, MagicBundle};
use crate::config::GeminiConfig;
use crate::error::GatewayError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const MAGIC_PROMPT: &str = r#"
Create a "Magic Session" for a preschool Spanish learning app.
Generate NEW content for these categories:
1. 3 Syllables (simple CV).
2. 3 Words (simple 3-5 letters).
3. 2 Stories (short 3-word sentences).
4. 1 New Sticker (distinct emoji and name).

Answer ONLY with JSON shaped like:
{"syllables": [Item], "words": [Item], "stories": [Item],
 "newSticker": {"id": string, "emoji": string, "name": string}}
where Item is
{"id": string, "text": string, "phonetic": string, "prompt": string,
 "constructionParts": [string], "emoji": string}.
For 'constructionParts', break the word/sentence into UPPERCASE letters,
using " " between words.
"#;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

pub struct GeminiGenerator {
    api_key: Option<String>,
    url: String,
    client: Option<Client>,
}

impl GeminiGenerator {
    pub fn from_config(config: &GeminiConfig) -> Self {
        let client = match Client::builder().timeout(REQUEST_TIMEOUT).build() {
            Ok(c) => Some(c),
            Err(err) => {
                log::error!("No se pudo crear el cliente HTTP: {err}");
                None
            }
        };
        Self {
            api_key: config
                .api_key
                .clone()
                .filter(|k| !k.trim().is_empty()),
            url: endpoint_url(&config.endpoint, &config.model),
            client,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.client.is_some()
    }

    fn try_generate(&self) -> Result<MagicBundle, GatewayError> {
        let key = self.api_key.as_deref().ok_or(GatewayError::MissingKey)?;
        let client = self.client.as_ref().ok_or(GatewayError::MissingKey)?;

        let payload = build_request();
        let response = client
            .post(&self.url)
            .header("x-goog-api-key", key)
            .json(&payload)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }
        parse_response(&body)
    }
}

impl ContentGenerator for GeminiGenerator {
    fn generate(&self) -> Option<MagicBundle> {
        match self.try_generate() {
            Ok(bundle) => Some(bundle),
            Err(GatewayError::MissingKey) => {
                log::warn!("Falta API_KEY. Modo sin conexión.");
                None
            }
            Err(err) => {
                log::error!("Falló la generación mágica: {err}");
                None
            }
        }
    }
}

fn endpoint_url(endpoint: &str, model: &str) -> String {
    format!(
        "{}/{}:generateContent",
        endpoint.trim().trim_end_matches('/'),
        model.trim()
    )
}

fn build_request() -> GenerateRequest {
    GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: Some(MAGIC_PROMPT.to_string()),
            }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
        },
    }
}

/// Extrae el lote del cuerpo de `generateContent`.
fn parse_response(body: &str) -> Result<MagicBundle, GatewayError> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| GatewayError::Malformed(format!("JSON externo: {e}")))?;

    let text = response
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .find_map(|p| p.text)
        .ok_or_else(|| GatewayError::Malformed("respuesta sin texto".into()))?;

    serde_json::from_str(strip_code_fence(&text))
        .map_err(|e| GatewayError::Malformed(format!("JSON del lote: {e}")))
}

// A veces el modelo envuelve el JSON en ```json ... ```
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    match trimmed.strip_prefix("```") {
        Some(rest) => {
            let rest = rest.strip_prefix("json").unwrap_or(rest);
            rest.strip_suffix("```").unwrap_or(rest).trim()
        }
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(inner: &str) -> String {
        serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": inner }] } }]
        })
        .to_string()
    }

    #[test]
    fn parses_bundle_from_candidate_text() {
        let inner = r#"{
            "syllables": [{"id": "pe", "text": "PE", "phonetic": "pe", "prompt": "La sílaba PE", "constructionParts": ["P", "E"]}],
            "words": [],
            "stories": [],
            "newSticker": {"id": "x", "emoji": "🐙", "name": "Pulpo"}
        }"#;
        let bundle = parse_response(&wrap(inner)).expect("bundle ok");
        assert_eq!(bundle.syllables.len(), 1);
        assert_eq!(bundle.syllables[0].letter_parts(), vec!["P", "E"]);
        assert_eq!(bundle.new_sticker.name, "Pulpo");
    }

    #[test]
    fn fenced_json_is_accepted() {
        let inner = "```json\n{\"newSticker\": {\"emoji\": \"🐙\", \"name\": \"Pulpo\"}}\n```";
        let bundle = parse_response(&wrap(inner)).expect("bundle ok");
        assert!(bundle.words.is_empty());
        assert_eq!(bundle.new_sticker.emoji, "🐙");
    }

    #[test]
    fn empty_candidates_are_malformed() {
        let err = parse_response(r#"{"candidates": []}"#).unwrap_err();
        assert!(matches!(err, GatewayError::Malformed(_)));
    }

    #[test]
    fn endpoint_url_normalizes_trailing_slash() {
        assert_eq!(
            endpoint_url("https://example.test/v1beta/models/", "modelo"),
            "https://example.test/v1beta/models/modelo:generateContent"
        );
    }

    #[test]
    fn missing_key_degrades_to_unavailable() {
        let generator = GeminiGenerator::from_config(&GeminiConfig::default());
        assert!(!generator.is_configured());
        assert!(generator.generate().is_none());
    }
}
