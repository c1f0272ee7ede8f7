use futures_util::future;
use reqwest::header::CONTENT_TYPE;
use serde_json::json;

use crate::error::ProbeError;
use crate::session::HttpSession;
use crate::verdict::Verdict;

/// Path appended verbatim to the configured base URL.
pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Top-level response key whose presence marks an official deployment.
pub const FINGERPRINT_FIELD: &str = "system_fingerprint";

/// Prompt carried by every probe (asks for a ten-character joke).
const PROBE_PROMPT: &str = "写一个10个字的笑话";

/// Fixed seed, so a genuinely deterministic backend would answer reproducibly.
const PROBE_SEED: u64 = 1;

/// One validation attempt against an endpoint.
#[derive(Debug, Clone)]
pub struct ProbeRequest {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub probes: u64,
}

impl ProbeRequest {
    /// Full URL probed: the base concatenated with the fixed completions path.
    ///
    /// The base is used exactly as supplied, with no trailing-slash
    /// normalization; an unusable URL surfaces as a transport failure.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH)
    }
}

/// Outcome of one validation attempt.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    pub verdict: Verdict,
    /// Per-probe fingerprint presence, in request-issue order.
    pub fingerprints: Vec<bool>,
}

/// Parsed projection of one probe response.
#[derive(Debug, Clone, Copy)]
struct ProbeResponse {
    has_fingerprint: bool,
}

/// Issue the configured number of identical probes concurrently and classify
/// the pattern of fingerprint presence across the responses.
///
/// The join is all-or-nothing: if any probe fails, the whole attempt fails
/// and no partial report is produced. Nothing is cached; invoking this twice
/// performs two full sets of fresh requests.
pub async fn run_probe(
    session: &HttpSession,
    request: &ProbeRequest,
) -> Result<ProbeReport, ProbeError> {
    let url = request.endpoint();
    let payload = build_probe_payload(&request.model);

    let probes = (0..request.probes).map(|_| send_probe(session, &url, &request.api_key, &payload));
    let responses = future::try_join_all(probes).await?;

    let fingerprints: Vec<bool> = responses
        .into_iter()
        .map(|response| response.has_fingerprint)
        .collect();
    let verdict = Verdict::classify(&fingerprints);

    tracing::debug!("fingerprint presence per probe: {fingerprints:?}");

    Ok(ProbeReport {
        verdict,
        fingerprints,
    })
}

async fn send_probe(
    session: &HttpSession,
    url: &str,
    api_key: &str,
    payload: &serde_json::Value,
) -> Result<ProbeResponse, ProbeError> {
    let response = session
        .client()
        .post(url)
        .header(CONTENT_TYPE, "application/json")
        .bearer_auth(api_key)
        .json(payload)
        .send()
        .await?
        .error_for_status()?;

    let body: serde_json::Value = response.json().await?;
    let has_fingerprint = body
        .as_object()
        .map_or(false, |object| object.contains_key(FINGERPRINT_FIELD));

    Ok(ProbeResponse { has_fingerprint })
}

fn build_probe_payload(model_id: &str) -> serde_json::Value {
    json!({
        "messages": [
            {
                "role": "user",
                "content": PROBE_PROMPT,
            }
        ],
        "seed": PROBE_SEED,
        "model": model_id,
    })
}
