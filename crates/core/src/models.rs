use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

/// Credential material that must never be logged or persisted in clear.
///
/// Serializes as the bare string so it can travel inside a request body,
/// but `Debug` only ever prints a redaction marker.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the raw value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

// ---------------------------------------------------------------------------
// Dealer cycle
// ---------------------------------------------------------------------------

/// Request to run one dealer analysis cycle server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleRequest {
    pub user_id: Uuid,
    pub coins: Vec<String>,
    pub settings: CycleSettings,
    /// Only present when server-side execution is requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_key: Option<Secret>,
    /// Required to decrypt `encrypted_key`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_password: Option<Secret>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleSettings {
    pub interval_ms: u64,
    pub max_positions: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub max_leverage: Decimal,
}

/// Decisions produced by a dealer cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleResponse {
    pub success: bool,
    pub decisions: Vec<CycleDecision>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleDecision {
    pub coin: String,
    pub action: String,
    pub confidence: f64,
    pub reason: String,
}

// ---------------------------------------------------------------------------
// Portfolio sync
// ---------------------------------------------------------------------------

/// Request to store a portfolio snapshot for history tracking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSyncRequest {
    pub user_id: Uuid,
    pub portfolio: PortfolioSnapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    pub positions: Vec<PortfolioPosition>,
    /// Epoch milliseconds on the wire.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPosition {
    pub coin: String,
    pub side: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub size: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub entry_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub unrealized_pnl: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncResponse {
    pub success: bool,
}

// ---------------------------------------------------------------------------
// Usage tracking
// ---------------------------------------------------------------------------

/// A billable event reported for monetization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageEvent {
    pub user_id: Uuid,
    pub event: UsageEventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageEventKind {
    Cycle,
    Trade,
    AiCall,
}

/// Usage counters for the current billing period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSnapshot {
    pub cycles: u64,
    pub trades: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageResponse {
    pub success: bool,
    pub current_usage: UsageSnapshot,
}
