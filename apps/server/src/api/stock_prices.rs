use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::Json;
use serde::Serialize;

use stockpulse_core::{ClientIdentity, RequestedSymbols, StockData, StockPricesRequest};

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

use super::ClientAddr;

#[derive(Serialize)]
pub struct StockPricesResponse {
    #[serde(rename = "stockData")]
    stock_data: StockData,
}

/// GET /api/stock-prices?stock=SYM[&stock=SYM2][&like=true]
///
/// `stock` may appear once or twice; `like=true` (exact string) requests a
/// like, deduplicated per client address. The query is parsed as raw ordered
/// pairs because axum's `Query` cannot express the repeated-key form.
pub async fn get_stock_prices(
    State(state): State<Arc<AppState>>,
    ClientAddr(address): ClientAddr,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<StockPricesResponse>> {
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(query.as_deref().unwrap_or(""))
            .map_err(|e| ApiError::BadRequest(format!("Malformed query string: {}", e)))?;

    let stocks = pairs
        .iter()
        .filter(|(key, _)| key == "stock")
        .map(|(_, value)| value.as_str());
    let like = pairs
        .iter()
        .any(|(key, value)| key == "like" && value == "true");

    let symbols = RequestedSymbols::parse(stocks)?;
    let request = StockPricesRequest {
        symbols,
        like,
        client: ClientIdentity::from_address(&address),
    };

    let stock_data = state.stock_service.get_stock_prices(request).await?;
    Ok(Json(StockPricesResponse { stock_data }))
}
