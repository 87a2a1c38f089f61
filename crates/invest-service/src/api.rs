//! HTTP surface exposing the call assembler.
//!
//! Consumers fetch the strategy catalog and request assembled call lists;
//! signing and submission stay on their side of the boundary.

use alloy_primitives::{Address, U256};
use axum::{
	extract::State,
	http::StatusCode,
	response::Json,
	routing::{get, post},
	Router,
};
use invest_core::{InvestError, Investor};
use invest_types::{Call, ChainId, StrategyId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[derive(Clone)]
struct AppState {
	investor: Arc<Investor>,
}

pub async fn start_http_server(investor: Arc<Investor>, port: u16) -> anyhow::Result<()> {
	let app = Router::new()
		.route("/health", get(health))
		.route("/api/v1/strategies", get(list_strategies))
		.route("/api/v1/invest", post(invest))
		.with_state(AppState { investor })
		.layer(TraceLayer::new_for_http())
		.layer(CorsLayer::permissive());

	let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

	info!("API server listening on port {}", port);

	axum::serve(listener, app).await?;

	Ok(())
}

async fn health() -> StatusCode {
	StatusCode::OK
}

/// Strategy catalog listing for the consuming frontend.
async fn list_strategies() -> Json<serde_json::Value> {
	let entries: Vec<serde_json::Value> = invest_registry::catalog()
		.iter()
		.map(|d| {
			serde_json::json!({
				"id": d.id,
				"title": d.title,
				"protocol": d.protocol.name,
				"chain_id": d.chain_id,
				"apy": d.apy,
				"risk_level": d.risk_level,
				"tokens": d.tokens.iter().map(|t| t.name).collect::<Vec<_>>(),
			})
		})
		.collect();

	Json(serde_json::json!({ "strategies": entries }))
}

#[derive(Debug, Deserialize)]
struct InvestRequest {
	strategy: StrategyId,
	chain_id: ChainId,
	/// Amount in the asset's smallest unit.
	amount: U256,
	user: Address,
	#[serde(default)]
	asset: Option<Address>,
}

#[derive(Debug, Serialize)]
struct InvestResponse {
	calls: Vec<Call>,
	fee: U256,
	net: U256,
}

async fn invest(
	State(state): State<AppState>,
	Json(request): Json<InvestRequest>,
) -> Result<Json<InvestResponse>, (StatusCode, String)> {
	let split = state.investor.fees().split(request.amount);

	let calls = state
		.investor
		.invest(
			request.strategy,
			request.chain_id,
			request.amount,
			request.user,
			request.asset,
		)
		.await
		.map_err(|e| match e {
			InvestError::StrategyUnavailableOnChain { .. } => {
				(StatusCode::NOT_FOUND, e.to_string())
			}
			InvestError::Strategy(_) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
		})?;

	Ok(Json(InvestResponse {
		calls,
		fee: split.fee,
		net: split.net,
	}))
}
