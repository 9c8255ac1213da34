use crate::models::*;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Edge Functions
// ---------------------------------------------------------------------------

/// The server-side functions the dealer backend exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeFunction {
    DealerCycle,
    SyncPortfolio,
    UsageTracking,
}

impl EdgeFunction {
    /// Deployed function name (the path segment under `/functions/v1/`).
    pub fn slug(&self) -> &'static str {
        match self {
            EdgeFunction::DealerCycle => "dealer-cycle",
            EdgeFunction::SyncPortfolio => "sync-portfolio",
            EdgeFunction::UsageTracking => "usage-tracking",
        }
    }
}

impl fmt::Display for EdgeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Errors that can occur when invoking an edge function.
#[derive(Debug, thiserror::Error)]
pub enum EdgeFunctionError {
    #[error("{0} edge function not implemented")]
    NotImplemented(EdgeFunction),
}

/// A backend able to serve the dealer edge functions.
#[async_trait]
pub trait EdgeFunctions: Send + Sync {
    /// Run dealer analysis for the requested coins and return decisions.
    /// Execution of those decisions stays with the caller.
    async fn run_cycle(&self, request: &CycleRequest) -> Result<CycleResponse, EdgeFunctionError>;

    /// Store a portfolio snapshot for historical reporting.
    async fn sync_portfolio(
        &self,
        request: &PortfolioSyncRequest,
    ) -> Result<SyncResponse, EdgeFunctionError>;

    /// Record a usage event and return the updated counters.
    async fn track_usage(&self, request: &UsageEvent) -> Result<UsageResponse, EdgeFunctionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_matches_wire_name() {
        for function in [
            EdgeFunction::DealerCycle,
            EdgeFunction::SyncPortfolio,
            EdgeFunction::UsageTracking,
        ] {
            let json = serde_json::to_value(function).unwrap();
            assert_eq!(json, function.slug());
        }
    }

    #[test]
    fn test_not_implemented_message() {
        let err = EdgeFunctionError::NotImplemented(EdgeFunction::SyncPortfolio);
        assert_eq!(err.to_string(), "sync-portfolio edge function not implemented");
    }
}
