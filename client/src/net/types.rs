//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Inbound types accept the
//! aliases older backend builds emit so a schema drift degrades into defaults
//! instead of a failed decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Minimal authenticated-user record cached client-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "IdentityWire")]
pub struct Identity {
    pub email: String,
    pub display_name: String,
}

/// Inbound identity shape. Only `email` is strict; each name key is read on
/// its own so several of them, `null`, or a non-string value never fail the
/// decode.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdentityWire {
    email: String,
    #[serde(default)]
    display_name: Option<serde_json::Value>,
    #[serde(default)]
    full_name: Option<serde_json::Value>,
    #[serde(default)]
    name: Option<serde_json::Value>,
}

impl From<IdentityWire> for Identity {
    fn from(wire: IdentityWire) -> Self {
        let display_name = [wire.display_name, wire.full_name, wire.name]
            .into_iter()
            .flatten()
            .find_map(|value| value.as_str().map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned))
            .unwrap_or_default();
        Self { email: wire.email, display_name }
    }
}

impl Identity {
    /// Name shown in page chrome; falls back to the email address.
    pub fn label(&self) -> &str {
        if self.display_name.trim().is_empty() { &self.email } else { &self.display_name }
    }
}

/// `POST /auth/login` response body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    pub user: Identity,
}

/// `GET /user/balance` response body.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct BalanceResponse {
    pub balance: f64,
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// A wallet ledger entry as listed on the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_amount_lenient")]
    pub amount: f64,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub status: Option<String>,
    pub timestamp: String,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub receiver: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// `POST /auth/login` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/register` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// `POST /wallet/fund` request body.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundRequest {
    #[serde(serialize_with = "serialize_amount")]
    pub amount: f64,
    pub payment_method: String,
}

/// `POST /wallet/transfer` request body.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    #[serde(serialize_with = "serialize_amount")]
    pub amount: f64,
    pub recipient_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// `POST /wallet/withdraw` request body.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawRequest {
    #[serde(serialize_with = "serialize_amount")]
    pub amount: f64,
    pub payment_method: String,
}

/// Whole amounts go out as JSON integers; the backend rejects `100.0` for
/// integer-typed columns.
#[allow(clippy::trivially_copy_pass_by_ref, clippy::cast_possible_truncation)]
fn serialize_amount<S>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if amount.fract() == 0.0 && amount.abs() < 9_007_199_254_740_992.0 {
        serializer.serialize_i64(*amount as i64)
    } else {
        serializer.serialize_f64(*amount)
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

fn deserialize_amount_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n.as_f64().ok_or_else(|| D::Error::custom("amount out of range")),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid amount string {s:?}"))),
        other => Err(D::Error::custom(format!("expected numeric amount, got {other}"))),
    }
}
