//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::{Local, NaiveDateTime};
use rand::{SeedableRng, rngs::StdRng};

use super::AppState;
use super::types::{DashboardQuery, ErrorResponse, MarketplaceQuery, QuoteQuery, SeriesQuery};
use crate::dashboard::{self, DashboardView};
use crate::location::{LocationRecord, resolve};
use crate::market::{MarketplaceListing, OrderSummary, quote_order, synthesize_listings};
use crate::series::{EnergySample, SeriesGenerator};
use crate::session::Session;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error(status: StatusCode, message: impl ToString) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

/// RNG for one request: the query seed, else the configured seed, else OS
/// entropy.
fn request_rng(state: &AppState, seed: Option<u64>) -> StdRng {
    match seed.or(state.config.series.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// `GET /location/{postal_code}` → 200 + `LocationRecord`
///
/// Unknown codes return the default record, never 404.
pub async fn get_location(Path(postal_code): Path<String>) -> Json<LocationRecord> {
    Json(resolve(&postal_code))
}

/// `GET /energy-series?hours=N` → 200 + `Vec<EnergySample>`
/// `GET /energy-series?hours=0` → 400 + `ErrorResponse` (also above `MAX_SERIES_HOURS`)
pub async fn get_energy_series(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SeriesQuery>,
) -> Result<Json<Vec<EnergySample>>, ApiError> {
    let hours = query.hours.unwrap_or(state.config.series.hours);

    let generator = SeriesGenerator::from_config(&state.config.series);
    let mut rng = request_rng(&state, query.seed);
    let samples = generator
        .generate(hours, now(), &mut rng)
        .map_err(|e| error(StatusCode::BAD_REQUEST, e))?;
    tracing::debug!(hours, "served energy series");
    Ok(Json(samples))
}

/// `GET /marketplace?postal_code=X` → 200 + `Vec<MarketplaceListing>`
pub async fn get_marketplace(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MarketplaceQuery>,
) -> Json<Vec<MarketplaceListing>> {
    let postal_code = query
        .postal_code
        .unwrap_or_else(|| state.config.session.postal_code.clone());
    let mut rng = request_rng(&state, query.seed);
    Json(synthesize_listings(&resolve(&postal_code), &mut rng))
}

/// `GET /quote?postal_code=X&amount=N` → 200 + `OrderSummary`
/// `GET /quote?amount=0` → 400 + `ErrorResponse`
pub async fn get_quote(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QuoteQuery>,
) -> Result<Json<OrderSummary>, ApiError> {
    let postal_code = query
        .postal_code
        .unwrap_or_else(|| state.config.session.postal_code.clone());
    let amount = query.amount.unwrap_or(state.config.market.default_order_kwh);
    quote_order(amount, &resolve(&postal_code), &state.config.market)
        .map(Json)
        .map_err(|e| error(StatusCode::BAD_REQUEST, e))
}

/// `GET /dashboard?user_type=T&postal_code=X` → 200 + `DashboardView`
///
/// Builds a fresh session from configuration, applies the query overrides,
/// and renders it.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardView>, ApiError> {
    let mut session = Session::from_config(&state.config.session);
    if let Some(user_type) = query.user_type {
        session = session.with_user_type(user_type);
    }
    if let Some(ref postal_code) = query.postal_code {
        session = session.with_postal_code(postal_code);
    }
    if query.logged_in == Some(false) {
        session = session.logout();
    }

    let mut rng = request_rng(&state, query.seed);
    dashboard::render(&session, &state.config, now(), &mut rng)
        .map(Json)
        .map_err(|e| {
            tracing::error!(error = %e, "dashboard render failed");
            error(StatusCode::INTERNAL_SERVER_ERROR, e)
        })
}
