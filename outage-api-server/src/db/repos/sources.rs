//! Source repository: the original message behind an outage record.

use chrono::{DateTime, Utc};
use outage_api_core::links;
use outage_api_core::models::{Source, SourceRef};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::DbError;

/// Identifiers are compared as text so opaque, non-numeric ids pass through
/// to the store instead of failing at bind time.
const GET_SOURCE: &str = r#"
SELECT
    date AS created_at,
    text AS raw_message,
    chat_id::text AS chat_id,
    from_id::text AS from_id,
    from_name
FROM telegram_messages
WHERE chat_id::text = $1 AND id::text = $2
"#;

/// Source repository
pub struct SourceRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SourceRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the single message identified by (chat id, message id).
    ///
    /// Zero rows is the distinct `DbError::NotFound`, never an empty
    /// success.
    pub async fn get(&self, chat_id: &str, message_id: &str) -> Result<Source, DbError> {
        let row = sqlx::query(GET_SOURCE)
            .bind(chat_id)
            .bind(message_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "source",
                id: format!("{chat_id}:{message_id}"),
            })?;

        source_from_row(&row, message_id)
    }
}

fn source_from_row(row: &PgRow, message_id: &str) -> Result<Source, DbError> {
    let created_at: Option<DateTime<Utc>> = row.try_get("created_at")?;
    let raw_message: Option<String> = row.try_get("raw_message")?;
    let chat_id: Option<String> = row.try_get("chat_id")?;
    let from_id: Option<String> = row.try_get("from_id")?;
    let from_name: Option<String> = row.try_get("from_name")?;

    Ok(Source {
        created_at,
        raw_message,
        source: build_source_ref(chat_id, from_id, from_name, message_id),
    })
}

/// Derive the locator fields. The channel URL is always constructed from
/// the chat id; sender fields only when their columns are non-null. The
/// message URL uses the message id as supplied in the request, not the
/// row's own id.
fn build_source_ref(
    chat_id: Option<String>,
    from_id: Option<String>,
    from_name: Option<String>,
    message_id: &str,
) -> SourceRef {
    SourceRef {
        channel: links::channel_url(chat_id.as_deref().unwrap_or_default()),
        sender_uri: from_id.as_deref().map(links::sender_uri),
        sender_name: from_name,
        source_uri: chat_id
            .as_deref()
            .map(|chat| links::message_url(chat, message_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_and_message_urls_from_ids() {
        let source_ref = build_source_ref(Some("100".to_owned()), None, None, "200");
        assert_eq!(source_ref.channel, "https://t.me/c/100");
        assert_eq!(
            source_ref.source_uri.as_deref(),
            Some("https://t.me/c/100/200")
        );
        assert_eq!(source_ref.sender_uri, None);
        assert_eq!(source_ref.sender_name, None);
    }

    #[test]
    fn sender_fields_only_when_present() {
        let source_ref = build_source_ref(
            Some("100".to_owned()),
            Some("42".to_owned()),
            Some("Gorsvet".to_owned()),
            "200",
        );
        assert_eq!(source_ref.sender_uri.as_deref(), Some("tg://user?id=42"));
        assert_eq!(source_ref.sender_name.as_deref(), Some("Gorsvet"));
    }

    #[test]
    fn channel_built_even_without_chat_id() {
        let source_ref = build_source_ref(None, None, None, "200");
        assert_eq!(source_ref.channel, "https://t.me/c/");
        assert_eq!(source_ref.source_uri, None);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn missing_row_is_not_found() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");

        let err = SourceRepo::new(&pool)
            .get("no-such-chat", "no-such-message")
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
