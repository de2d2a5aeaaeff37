use axum::{
  extract::{Query, State},
  Json,
};

use crate::{
  error::AppError,
  market::{
      model::{ChartParams, PricePoint},
      service::MarketService,
  },
};

// Relay the price series for one coin
pub async fn get_coin_data(
  State(service): State<MarketService>,
  Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<PricePoint>>, AppError> {
  let params = ChartParams::from_pairs(&pairs);
  let prices = service.get_market_chart(&params).await?;
  Ok(Json(prices))
}
