//! Supabase-hosted edge functions.
//!
//! None of the handlers exist server-side yet. [`UnimplementedEdgeFunctions`]
//! stands in for them and rejects every call up front, so callers can code
//! against [`EdgeFunctions`] today and tell "not available" apart from real
//! failures once the functions are deployed.

use async_trait::async_trait;
use dealer_core::*;
use tracing::debug;

/// Edge-function backend whose every call fails with `NotImplemented`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedEdgeFunctions;

impl UnimplementedEdgeFunctions {
    pub fn new() -> Self {
        Self
    }

    fn reject(function: EdgeFunction) -> EdgeFunctionError {
        debug!(function = %function, "Edge function called before it was implemented");
        EdgeFunctionError::NotImplemented(function)
    }
}

#[async_trait]
impl EdgeFunctions for UnimplementedEdgeFunctions {
    async fn run_cycle(&self, _request: &CycleRequest) -> Result<CycleResponse, EdgeFunctionError> {
        Err(Self::reject(EdgeFunction::DealerCycle))
    }

    async fn sync_portfolio(
        &self,
        _request: &PortfolioSyncRequest,
    ) -> Result<SyncResponse, EdgeFunctionError> {
        Err(Self::reject(EdgeFunction::SyncPortfolio))
    }

    async fn track_usage(&self, _request: &UsageEvent) -> Result<UsageResponse, EdgeFunctionError> {
        Err(Self::reject(EdgeFunction::UsageTracking))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn backend() -> Box<dyn EdgeFunctions> {
        Box::new(UnimplementedEdgeFunctions::new())
    }

    #[tokio::test]
    async fn test_run_cycle_not_implemented() {
        let request = CycleRequest {
            user_id: Uuid::new_v4(),
            coins: vec!["BTC".to_string()],
            settings: CycleSettings {
                interval_ms: 30_000,
                max_positions: 2,
                max_leverage: dec!(3),
            },
            encrypted_key: Some(Secret::new("enc")),
            execution_password: Some(Secret::new("pw")),
        };

        let err = backend().run_cycle(&request).await.unwrap_err();
        assert!(matches!(
            err,
            EdgeFunctionError::NotImplemented(EdgeFunction::DealerCycle)
        ));
        assert!(err.to_string().contains("not implemented"));
    }

    #[tokio::test]
    async fn test_sync_portfolio_not_implemented() {
        let request = PortfolioSyncRequest {
            user_id: Uuid::new_v4(),
            portfolio: PortfolioSnapshot {
                balance: dec!(0),
                positions: Vec::new(),
                timestamp: Utc::now(),
            },
        };

        let err = backend().sync_portfolio(&request).await.unwrap_err();
        assert!(err.to_string().contains("sync-portfolio"));
        assert!(err.to_string().contains("not implemented"));
    }

    #[tokio::test]
    async fn test_track_usage_not_implemented() {
        for kind in [UsageEventKind::Cycle, UsageEventKind::Trade, UsageEventKind::AiCall] {
            let event = UsageEvent {
                user_id: Uuid::new_v4(),
                event: kind,
                metadata: None,
            };
            let err = backend().track_usage(&event).await.unwrap_err();
            assert_eq!(err.to_string(), "usage-tracking edge function not implemented");
        }
    }
}
