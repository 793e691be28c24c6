//! Outage endpoints: the current-outages listing and source lookup.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use chrono::SecondsFormat;
use outage_api_core::ids::SourceKey;
use outage_api_core::models::{Address, Outage, Source, SourceRef};
use serde::Serialize;

use crate::db::{OutageRepo, SourceRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Outage response. Event timestamps travel as RFC 3339 strings; the
/// repository record keeps the `DateTime` values as the authoritative form.
#[derive(Serialize)]
pub struct OutageResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    pub event_start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_stop: Option<String>,
    pub address: Address,
}

impl From<Outage> for OutageResponse {
    fn from(o: Outage) -> Self {
        Self {
            id: o.id,
            incident_id: o.incident_id,
            service: o.service,
            organization: o.organization,
            description: o.description,
            event: o.event,
            event_start: o.event_start.to_rfc3339_opts(SecondsFormat::Secs, true),
            event_stop: o
                .event_stop
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true)),
            address: o.address,
        }
    }
}

/// Source response
#[derive(Serialize)]
pub struct SourceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_message: Option<String>,
    pub source: SourceRef,
}

impl From<Source> for SourceResponse {
    fn from(s: Source) -> Self {
        Self {
            created_at: s
                .created_at
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true)),
            raw_message: s.raw_message,
            source: s.source,
        }
    }
}

/// GET /v1/api/outages - today's shutdown outages, earliest first
async fn list_outages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<OutageResponse>>, ApiError> {
    let outages = OutageRepo::new(&state.pool).list_today().await?;
    Ok(Json(outages.into_iter().map(OutageResponse::from).collect()))
}

/// GET /v1/api/outages/{message_id}/source - the message behind an outage
///
/// The path parameter is a composite `chat:message:row` id; it is parsed
/// before any data access, so malformed ids never reach the pool.
async fn get_source(
    State(state): State<Arc<AppState>>,
    Path(message_id): Path<String>,
) -> Result<Json<SourceResponse>, ApiError> {
    let key = SourceKey::parse(&message_id)?;
    let source = SourceRepo::new(&state.pool)
        .get(&key.chat_id, &key.message_id)
        .await?;
    Ok(Json(SourceResponse::from(source)))
}

/// Outage routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/v1/api/outages", get(list_outages))
        .route("/v1/api/outages/{message_id}/source", get(get_source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn outage_at(hour: u32) -> Outage {
        Outage {
            id: "100:200:5".to_owned(),
            incident_id: Some("inc-1".to_owned()),
            service: None,
            organization: None,
            description: None,
            event: Some("shutdown".to_owned()),
            event_start: Utc.with_ymd_and_hms(2024, 1, 15, hour, 0, 0).unwrap(),
            event_stop: None,
            address: Address::default(),
        }
    }

    #[test]
    fn event_start_formats_with_z_suffix() {
        let response = OutageResponse::from(outage_at(0));
        assert_eq!(response.event_start, "2024-01-15T00:00:00Z");
        assert_eq!(response.event_stop, None);
    }

    #[test]
    fn event_stop_formats_when_present() {
        let mut outage = outage_at(7);
        outage.event_stop = Some(Utc.with_ymd_and_hms(2024, 1, 15, 11, 30, 0).unwrap());

        let response = OutageResponse::from(outage);
        assert_eq!(response.event_stop.as_deref(), Some("2024-01-15T11:30:00Z"));
    }

    #[test]
    fn conversion_preserves_repository_order() {
        // The repository returns rows ordered by event start ascending; the
        // response mapping must not reorder them.
        let responses: Vec<OutageResponse> = vec![outage_at(7), outage_at(9), outage_at(11)]
            .into_iter()
            .map(OutageResponse::from)
            .collect();

        let starts: Vec<&str> = responses.iter().map(|r| r.event_start.as_str()).collect();
        assert_eq!(
            starts,
            vec![
                "2024-01-15T07:00:00Z",
                "2024-01-15T09:00:00Z",
                "2024-01-15T11:00:00Z",
            ]
        );
    }

    #[test]
    fn source_created_at_is_optional() {
        let source = Source {
            created_at: None,
            raw_message: Some("text".to_owned()),
            source: SourceRef {
                channel: "https://t.me/c/100".to_owned(),
                ..SourceRef::default()
            },
        };

        let response = SourceResponse::from(source);
        assert_eq!(response.created_at, None);
        assert_eq!(response.raw_message.as_deref(), Some("text"));
    }

    #[test]
    fn absent_optionals_are_omitted_from_json() {
        let value = serde_json::to_value(OutageResponse::from(outage_at(9))).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("service"));
        assert!(!obj.contains_key("event_stop"));
        assert_eq!(obj["event"], "shutdown");
    }
}
