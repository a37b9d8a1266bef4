//! Wire contract with the JerseyKraft backend.
//!
//! Three operations, one request each: roster CSV import (multipart), logo
//! generation (JSON), and checkout (JSON). Responses are decoded against the
//! expected shape only after an explicit status check, so a failed request is
//! always a typed [`BackendError`] and never an optimistic field access.

use crate::cli::PaymentMethod;
use crate::domain::models::{BuyerDetails, DesignState, HexColor};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

#[derive(thiserror::Error, Debug)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Serialize)]
pub struct LogoRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterImportResult {
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoResult {
    pub logo_url: String,
    pub suggested_positions: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResult {
    pub amount: f64,
    pub order_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DesignPayload {
    pub front_color: HexColor,
    pub back_color: HexColor,
    pub accents: Vec<HexColor>,
    pub text_elements: Vec<serde_json::Value>,
    pub logo_elements: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderPayload {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub shipping_address: String,
    pub team_id: Option<String>,
    pub template_id: Option<String>,
    pub design: DesignPayload,
    pub quantity: u32,
    pub method: PaymentMethod,
}

impl OrderPayload {
    /// Builds the checkout payload from the current design selection.
    ///
    /// Quantity goes through the submission clamp, the single accent becomes
    /// the ordered accents sequence, and a generated logo (when present)
    /// becomes one logo layer descriptor.
    pub fn assemble(
        design: &DesignState,
        buyer: &BuyerDetails,
        method: PaymentMethod,
        team_id: Option<String>,
        template_id: Option<String>,
        logo: Option<&LogoResult>,
    ) -> Self {
        let logo_elements = logo
            .map(|l| {
                vec![serde_json::json!({
                    "logo_url": l.logo_url,
                    "positions": l.suggested_positions,
                })]
            })
            .unwrap_or_default();

        Self {
            customer_name: buyer.name.clone(),
            customer_email: buyer.email.clone(),
            customer_phone: buyer.phone.clone(),
            shipping_address: buyer.shipping_address.clone(),
            team_id,
            template_id,
            design: DesignPayload {
                front_color: design.front,
                back_color: design.back,
                accents: vec![design.accent],
                text_elements: Vec::new(),
                logo_elements,
            },
            quantity: design.order_quantity(),
            method,
        }
    }
}

pub struct Backend {
    config: BackendConfig,
}

impl Backend {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }

    pub fn import_roster(
        &self,
        team_name: &str,
        sport: &str,
        file_name: &str,
        csv: Vec<u8>,
    ) -> Result<RosterImportResult, BackendError> {
        let part = reqwest::blocking::multipart::Part::bytes(csv)
            .file_name(file_name.to_string())
            .mime_str("text/csv")?;
        let form = reqwest::blocking::multipart::Form::new()
            .text("team_name", team_name.to_string())
            .text("sport", sport.to_string())
            .part("csv", part);
        let resp = self
            .client()?
            .post(self.endpoint("/api/team/import"))
            .multipart(form)
            .send()?;
        decode(resp)
    }

    pub fn generate_logo(&self, prompt: &str) -> Result<LogoResult, BackendError> {
        let resp = self
            .client()?
            .post(self.endpoint("/api/ai/logo"))
            .json(&LogoRequest {
                prompt: prompt.to_string(),
            })
            .send()?;
        decode(resp)
    }

    pub fn place_order(&self, payload: &OrderPayload) -> Result<OrderResult, BackendError> {
        let resp = self
            .client()?
            .post(self.endpoint("/api/checkout"))
            .json(payload)
            .send()?;
        decode(resp)
    }

    fn client(&self) -> Result<reqwest::blocking::Client, BackendError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(self.config.timeout_ms))
            .build()?;
        Ok(client)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

fn decode<T: DeserializeOwned>(resp: reqwest::blocking::Response) -> Result<T, BackendError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().unwrap_or_default();
        return Err(BackendError::Status {
            status: status.as_u16(),
            body: snippet(&body),
        });
    }
    let text = resp.text()?;
    serde_json::from_str(&text).map_err(|source| BackendError::Decode { source })
}

fn snippet(body: &str) -> String {
    body.trim().chars().take(200).collect()
}
