//! Outage repository: the "today onward" shutdown listing.

use outage_api_core::models::{Address, Outage};
use outage_api_core::text;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::DbError;

/// Joins the address-extraction, transcription, and message tables on the
/// composite (chat_id, message_id) key. The composite outage id is encoded
/// in SQL; `service` lives inside the message context document.
const LIST_TODAY: &str = r#"
SELECT
    a.chat_id::text || ':' || a.message_id::text || ':' || a.id::text AS id,
    m.incident_id::text AS incident_id,
    m.context->>'supplier' AS service,
    t.organization,
    t.description,
    t.event,
    t.event_start,
    t.event_stop,
    a.region_kladr AS region_code,
    a.region_type,
    a.region_name,
    a.city_kladr AS city_code,
    COALESCE(a.city_name, a.city_original) AS city_name,
    a.city_type,
    a.street_kladr AS street_code,
    COALESCE(a.street_name, a.street_original) AS street_name,
    COALESCE(a.street_type, a.street_type_raw) AS street_type,
    a.house_numbers,
    a.house_ranges
FROM incident_address a
JOIN telegram_message_transcribes t
    ON a.message_id = t.id AND a.chat_id = t.chat_id
JOIN telegram_messages m
    ON t.id = m.id AND t.chat_id = m.chat_id
WHERE t.event = 'shutdown'
  AND t.event_start >= date_trunc('day', current_date)
ORDER BY t.event_start
"#;

/// Outage repository
pub struct OutageRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> OutageRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List shutdown outages starting today or later, earliest first.
    ///
    /// An empty match set is `Ok(vec![])`, not an error.
    pub async fn list_today(&self) -> Result<Vec<Outage>, DbError> {
        let rows = sqlx::query(LIST_TODAY).fetch_all(self.pool).await?;
        rows.iter().map(outage_from_row).collect()
    }
}

fn outage_from_row(row: &PgRow) -> Result<Outage, DbError> {
    let raw = RawAddress {
        region_code: row.try_get("region_code")?,
        region_type: row.try_get("region_type")?,
        region_name: row.try_get("region_name")?,
        city_code: row.try_get("city_code")?,
        city_name: row.try_get("city_name")?,
        city_type: row.try_get("city_type")?,
        street_code: row.try_get("street_code")?,
        street_name: row.try_get("street_name")?,
        street_type: row.try_get("street_type")?,
        house_numbers: row.try_get("house_numbers")?,
        house_ranges: row.try_get("house_ranges")?,
    };

    Ok(Outage {
        id: row.try_get("id")?,
        incident_id: row.try_get("incident_id")?,
        service: row.try_get("service")?,
        organization: row.try_get("organization")?,
        description: row.try_get("description")?,
        event: row.try_get("event")?,
        event_start: row.try_get("event_start")?,
        event_stop: row.try_get("event_stop")?,
        address: raw.into_address(),
    })
}

/// Address columns exactly as stored, before blank normalization and
/// multi-value splitting.
struct RawAddress {
    region_code: Option<String>,
    region_type: Option<String>,
    region_name: Option<String>,
    city_code: Option<String>,
    city_name: Option<String>,
    city_type: Option<String>,
    street_code: Option<String>,
    street_name: Option<String>,
    street_type: Option<String>,
    house_numbers: Option<String>,
    house_ranges: Option<String>,
}

impl RawAddress {
    /// Apply the mapping-boundary rules: blank strings become absent, house
    /// numbers split on `,` untrimmed, house ranges split on `;` with one
    /// trailing `-` stripped per entry.
    fn into_address(self) -> Address {
        Address {
            region_code: text::normalize_blank(self.region_code),
            region_type: text::normalize_blank(self.region_type),
            region_name: text::normalize_blank(self.region_name),
            city_code: text::normalize_blank(self.city_code),
            city_name: text::normalize_blank(self.city_name),
            city_type: text::normalize_blank(self.city_type),
            street_code: text::normalize_blank(self.street_code),
            street_name: text::normalize_blank(self.street_name),
            street_type: text::normalize_blank(self.street_type),
            house_numbers: text::normalize_blank(self.house_numbers)
                .map(|s| text::split_house_numbers(&s)),
            house_ranges: text::normalize_blank(self.house_ranges)
                .map(|s| text::split_house_ranges(&s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(house_numbers: Option<&str>, house_ranges: Option<&str>) -> RawAddress {
        RawAddress {
            region_code: None,
            region_type: None,
            region_name: None,
            city_code: None,
            city_name: Some(String::new()),
            city_type: None,
            street_code: None,
            street_name: Some("Lenina".to_owned()),
            street_type: Some("ul".to_owned()),
            house_numbers: house_numbers.map(str::to_owned),
            house_ranges: house_ranges.map(str::to_owned),
        }
    }

    #[test]
    fn blank_columns_map_to_absent() {
        let address = raw(None, None).into_address();
        assert_eq!(address.city_name, None);
        assert_eq!(address.street_name.as_deref(), Some("Lenina"));
    }

    #[test]
    fn house_numbers_split_untrimmed() {
        let address = raw(Some("1, 2,3"), None).into_address();
        assert_eq!(
            address.house_numbers,
            Some(vec!["1".to_owned(), " 2".to_owned(), "3".to_owned()])
        );
    }

    #[test]
    fn house_ranges_drop_trailing_dash() {
        let address = raw(None, Some("12-;34-56")).into_address();
        assert_eq!(
            address.house_ranges,
            Some(vec!["12".to_owned(), "34-56".to_owned()])
        );
    }

    #[test]
    fn blank_house_columns_stay_absent() {
        let address = raw(Some(""), Some("")).into_address();
        assert_eq!(address.house_numbers, None);
        assert_eq!(address.house_ranges, None);
    }

    // Integration tests - run with DATABASE_URL set
    // cargo test -p outage-api-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_today_is_ordered_ascending() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");

        let outages = OutageRepo::new(&pool).list_today().await.expect("query");
        for pair in outages.windows(2) {
            assert!(pair[0].event_start <= pair[1].event_start);
        }
    }
}
