//! Report API handlers
//!
//! All endpoints query SeaORM entities directly and aggregate in
//! memory; result sets are bounded by the catalog size (hotels, rooms)
//! rather than traffic.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::domain::reservation::ReservationStatus;
use crate::domain::{DomainError, UserRole};
use crate::infrastructure::database::entities::{
    client as client_entity, hotel as hotel_entity, reservation as reservation_entity,
    room as room_entity, room_type as room_type_entity,
};
use crate::interfaces::http::common::{domain_error_response, ApiResponse};
use crate::interfaces::http::middleware::AuthenticatedUser;

use super::dto::*;

/// Report handler state
#[derive(Clone)]
pub struct ReportState {
    pub db: DatabaseConnection,
}

/// Nights of `[check_in, check_out)` that fall inside `[from, to)`.
fn overlap_nights(check_in: NaiveDate, check_out: NaiveDate, from: NaiveDate, to: NaiveDate) -> i64 {
    let start = check_in.max(from);
    let end = check_out.min(to);
    (end - start).num_days().max(0)
}

fn period(params: &ReportParams) -> (NaiveDate, NaiveDate) {
    let to = params.to.unwrap_or_else(|| Utc::now().date_naive());
    let from = params.from.unwrap_or(to - Duration::days(30));
    (from, to)
}

fn storage_err<T>(e: sea_orm::DbErr) -> (StatusCode, Json<ApiResponse<T>>) {
    domain_error_response(DomainError::Storage(e.to_string()))
}

async fn load_hotels(
    db: &DatabaseConnection,
    hotel_id: Option<&str>,
) -> Result<Vec<hotel_entity::Model>, sea_orm::DbErr> {
    let mut query = hotel_entity::Entity::find();
    if let Some(id) = hotel_id {
        query = query.filter(hotel_entity::Column::TaxId.eq(id));
    }
    query.all(db).await
}

fn require_reporting_role<T>(
    user: &AuthenticatedUser,
) -> Result<(), (StatusCode, Json<ApiResponse<T>>)> {
    user.require_role(&[UserRole::Company, UserRole::Admin])
        .map_err(domain_error_response)
}

/// Occupancy per hotel over a period
#[utoipa::path(
    get,
    path = "/api/v1/reports/occupancy",
    tag = "Reports",
    security(("bearer_auth" = [])),
    params(ReportParams),
    responses(
        (status = 200, description = "Occupancy report", body = ApiResponse<Vec<OccupancyRow>>)
    )
)]
pub async fn occupancy_report(
    State(state): State<ReportState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(params): Query<ReportParams>,
) -> Result<Json<ApiResponse<Vec<OccupancyRow>>>, (StatusCode, Json<ApiResponse<Vec<OccupancyRow>>>)>
{
    require_reporting_role(&user)?;
    let (from, to) = period(&params);
    if to <= from {
        return Err(domain_error_response(DomainError::Validation(
            "'to' must be after 'from'".into(),
        )));
    }
    let period_nights = (to - from).num_days();
    let db = &state.db;

    let hotels = load_hotels(db, params.hotel_id.as_deref())
        .await
        .map_err(storage_err)?;
    let rooms = room_entity::Entity::find()
        .all(db)
        .await
        .map_err(storage_err)?;
    let reservations = reservation_entity::Entity::find()
        .filter(reservation_entity::Column::Status.eq(ReservationStatus::Confirmed.as_str()))
        .filter(reservation_entity::Column::CheckIn.lt(to))
        .filter(reservation_entity::Column::CheckOut.gt(from))
        .all(db)
        .await
        .map_err(storage_err)?;

    let room_hotel: HashMap<i32, &str> = rooms
        .iter()
        .map(|r| (r.id, r.hotel_id.as_str()))
        .collect();

    let mut rows = Vec::with_capacity(hotels.len());
    for hotel in &hotels {
        let room_count = rooms
            .iter()
            .filter(|r| r.hotel_id == hotel.tax_id && r.is_active)
            .count() as u64;

        let booked_nights: i64 = reservations
            .iter()
            .filter(|res| room_hotel.get(&res.room_id) == Some(&hotel.tax_id.as_str()))
            .map(|res| overlap_nights(res.check_in, res.check_out, from, to))
            .sum();

        let capacity = room_count as i64 * period_nights;
        let occupancy_rate = if capacity > 0 {
            booked_nights as f64 / capacity as f64
        } else {
            0.0
        };

        rows.push(OccupancyRow {
            hotel_id: hotel.tax_id.clone(),
            hotel_name: hotel.name.clone(),
            rooms: room_count,
            period_nights,
            booked_nights,
            occupancy_rate,
        });
    }

    Ok(Json(ApiResponse::success(rows)))
}

/// Revenue per hotel over a period
#[utoipa::path(
    get,
    path = "/api/v1/reports/revenue",
    tag = "Reports",
    security(("bearer_auth" = [])),
    params(ReportParams),
    responses(
        (status = 200, description = "Revenue report", body = ApiResponse<Vec<RevenueRow>>)
    )
)]
pub async fn revenue_report(
    State(state): State<ReportState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(params): Query<ReportParams>,
) -> Result<Json<ApiResponse<Vec<RevenueRow>>>, (StatusCode, Json<ApiResponse<Vec<RevenueRow>>>)> {
    require_reporting_role(&user)?;
    let (from, to) = period(&params);
    let db = &state.db;

    let hotels = load_hotels(db, params.hotel_id.as_deref())
        .await
        .map_err(storage_err)?;
    let rooms = room_entity::Entity::find()
        .all(db)
        .await
        .map_err(storage_err)?;
    let room_types = room_type_entity::Entity::find()
        .all(db)
        .await
        .map_err(storage_err)?;
    let reservations = reservation_entity::Entity::find()
        .filter(reservation_entity::Column::Status.eq(ReservationStatus::Confirmed.as_str()))
        .filter(reservation_entity::Column::CheckIn.lt(to))
        .filter(reservation_entity::Column::CheckOut.gt(from))
        .all(db)
        .await
        .map_err(storage_err)?;

    let rate_by_type: HashMap<i32, i64> = room_types
        .iter()
        .map(|t| (t.id, t.nightly_rate_cents))
        .collect();
    let rooms_by_id: HashMap<i32, &room_entity::Model> =
        rooms.iter().map(|r| (r.id, r)).collect();

    let mut rows = Vec::with_capacity(hotels.len());
    for hotel in &hotels {
        let mut count = 0u64;
        let mut nights = 0i64;
        let mut revenue = 0i64;

        for res in &reservations {
            let Some(room) = rooms_by_id.get(&res.room_id) else {
                continue;
            };
            if room.hotel_id != hotel.tax_id {
                continue;
            }
            let n = overlap_nights(res.check_in, res.check_out, from, to);
            if n == 0 {
                continue;
            }
            count += 1;
            nights += n;
            revenue += n * rate_by_type.get(&room.room_type_id).copied().unwrap_or(0);
        }

        rows.push(RevenueRow {
            hotel_id: hotel.tax_id.clone(),
            hotel_name: hotel.name.clone(),
            reservations: count,
            nights,
            revenue_cents: revenue,
        });
    }

    Ok(Json(ApiResponse::success(rows)))
}

/// Reservation counts by status
#[utoipa::path(
    get,
    path = "/api/v1/reports/reservations",
    tag = "Reports",
    security(("bearer_auth" = [])),
    params(ReportParams),
    responses(
        (status = 200, description = "Status breakdown", body = ApiResponse<ReservationStatusReport>)
    )
)]
pub async fn reservation_status_report(
    State(state): State<ReportState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(params): Query<ReportParams>,
) -> Result<
    Json<ApiResponse<ReservationStatusReport>>,
    (StatusCode, Json<ApiResponse<ReservationStatusReport>>),
> {
    require_reporting_role(&user)?;
    let db = &state.db;

    let hotel_rooms: Option<Vec<i32>> = match &params.hotel_id {
        Some(hotel_id) => Some(
            room_entity::Entity::find()
                .filter(room_entity::Column::HotelId.eq(hotel_id))
                .all(db)
                .await
                .map_err(storage_err)?
                .into_iter()
                .map(|r| r.id)
                .collect(),
        ),
        None => None,
    };

    let reservations = reservation_entity::Entity::find()
        .all(db)
        .await
        .map_err(storage_err)?;

    let mut confirmed = 0u64;
    let mut cancelled = 0u64;
    let mut completed = 0u64;
    for res in &reservations {
        if let Some(rooms) = &hotel_rooms {
            if !rooms.contains(&res.room_id) {
                continue;
            }
        }
        match ReservationStatus::from_str(&res.status) {
            ReservationStatus::Confirmed => confirmed += 1,
            ReservationStatus::Cancelled => cancelled += 1,
            ReservationStatus::Completed => completed += 1,
        }
    }

    Ok(Json(ApiResponse::success(ReservationStatusReport {
        hotel_id: params.hotel_id,
        confirmed,
        cancelled,
        completed,
    })))
}

/// Client booking activity, most active first
#[utoipa::path(
    get,
    path = "/api/v1/reports/clients",
    tag = "Reports",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Client activity", body = ApiResponse<Vec<ClientActivityRow>>)
    )
)]
pub async fn client_activity_report(
    State(state): State<ReportState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<
    Json<ApiResponse<Vec<ClientActivityRow>>>,
    (StatusCode, Json<ApiResponse<Vec<ClientActivityRow>>>),
> {
    require_reporting_role(&user)?;
    let db = &state.db;

    let clients = client_entity::Entity::find()
        .all(db)
        .await
        .map_err(storage_err)?;
    let reservations = reservation_entity::Entity::find()
        .all(db)
        .await
        .map_err(storage_err)?;

    let mut rows: Vec<ClientActivityRow> = clients
        .into_iter()
        .map(|c| {
            let theirs: Vec<_> = reservations
                .iter()
                .filter(|r| r.client_id == c.id)
                .collect();
            let nights = theirs
                .iter()
                .map(|r| (r.check_out - r.check_in).num_days())
                .sum();
            ClientActivityRow {
                client_id: c.id,
                name: format!("{} {}", c.first_name, c.last_name),
                email: c.email,
                reservations: theirs.len() as u64,
                nights,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.reservations.cmp(&a.reservations));

    Ok(Json(ApiResponse::success(rows)))
}

/// Per-hotel summary
#[utoipa::path(
    get,
    path = "/api/v1/reports/summary/hotels",
    tag = "Reports",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Hotel summaries", body = ApiResponse<Vec<HotelSummaryRow>>)
    )
)]
pub async fn hotel_summary_report(
    State(state): State<ReportState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<
    Json<ApiResponse<Vec<HotelSummaryRow>>>,
    (StatusCode, Json<ApiResponse<Vec<HotelSummaryRow>>>),
> {
    require_reporting_role(&user)?;
    let db = &state.db;

    let hotels = hotel_entity::Entity::find()
        .all(db)
        .await
        .map_err(storage_err)?;
    let rooms = room_entity::Entity::find()
        .all(db)
        .await
        .map_err(storage_err)?;
    let confirmed = reservation_entity::Entity::find()
        .filter(reservation_entity::Column::Status.eq(ReservationStatus::Confirmed.as_str()))
        .all(db)
        .await
        .map_err(storage_err)?;

    let room_hotel: HashMap<i32, &str> = rooms
        .iter()
        .map(|r| (r.id, r.hotel_id.as_str()))
        .collect();

    let rows = hotels
        .into_iter()
        .map(|hotel| {
            let hotel_rooms: Vec<_> = rooms
                .iter()
                .filter(|r| r.hotel_id == hotel.tax_id)
                .collect();
            let confirmed_count = confirmed
                .iter()
                .filter(|res| room_hotel.get(&res.room_id) == Some(&hotel.tax_id.as_str()))
                .count() as u64;
            HotelSummaryRow {
                hotel_id: hotel.tax_id,
                hotel_name: hotel.name,
                rooms_total: hotel_rooms.len() as u64,
                rooms_active: hotel_rooms.iter().filter(|r| r.is_active).count() as u64,
                confirmed_reservations: confirmed_count,
            }
        })
        .collect();

    Ok(Json(ApiResponse::success(rows)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn overlap_nights_clamps_to_period() {
        // Fully inside
        assert_eq!(
            overlap_nights(d(2024, 6, 2), d(2024, 6, 4), d(2024, 6, 1), d(2024, 6, 30)),
            2
        );
        // Straddles the start
        assert_eq!(
            overlap_nights(d(2024, 5, 28), d(2024, 6, 3), d(2024, 6, 1), d(2024, 6, 30)),
            2
        );
        // Straddles the end
        assert_eq!(
            overlap_nights(d(2024, 6, 28), d(2024, 7, 5), d(2024, 6, 1), d(2024, 6, 30)),
            2
        );
        // Disjoint
        assert_eq!(
            overlap_nights(d(2024, 7, 1), d(2024, 7, 5), d(2024, 6, 1), d(2024, 6, 30)),
            0
        );
    }
}
