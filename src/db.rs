#[cfg(feature = "ssr")]
mod db_impl {
    use crate::models::review::{NewReview, Review};
    use leptos::logging::log;
    use rusqlite::{Connection, Error};
    use std::sync::Arc;
    use tokio::sync::Mutex;


    // Database connection for the reviews table, shared across Actix
    // workers behind a tokio mutex (same handle the API handlers lock).
    #[derive(Debug)]
    pub struct Database {
        conn: Arc<Mutex<Connection>>,
    }

    impl Database {
        pub fn new(db_path: &str) -> Result<Self, Error> {
            let conn = Connection::open(db_path)?;
            log!("[DB] Opened database at {}", db_path);
            Ok(Database {
                conn: Arc::new(Mutex::new(conn)),
            })
        }

        pub async fn create_schema(&self) -> Result<(), Error> {
            let conn = self.conn.lock().await;
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS reviews (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    rating INTEGER NOT NULL,
                    body TEXT NOT NULL,
                    created_at TEXT NOT NULL
                );",
            )?;
            log!("[DB] Schema ready");
            Ok(())
        }

        // Insert a validated submission; the server assigns id and timestamp
        pub async fn insert_review(&self, review: &NewReview) -> Result<Review, Error> {
            let id = uuid::Uuid::new_v4().to_string();
            let created_at = chrono::Utc::now().to_rfc3339();

            let conn = self.conn.lock().await;
            conn.execute(
                "INSERT INTO reviews (id, name, rating, body, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![id, review.name, review.rating as i64, review.text, created_at],
            )?;
            log!("[DB] Inserted review {} by {}", id, review.name);

            Ok(Review {
                id: Some(id),
                name: review.name.clone(),
                rating: review.rating,
                text: review.text.clone(),
                created_at: Some(created_at),
            })
        }

        // Newest first, capped at 100 rows. rowid breaks ties for reviews
        // landing in the same timestamp.
        pub async fn list_reviews(&self) -> Result<Vec<Review>, Error> {
            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare(
                "SELECT id, name, rating, body, created_at
                 FROM reviews
                 ORDER BY created_at DESC, rowid DESC
                 LIMIT 100",
            )?;

            let rows = stmt.query_map([], |row| {
                Ok(Review {
                    id: Some(row.get(0)?),
                    name: row.get(1)?,
                    rating: row.get::<_, i64>(2)? as u8,
                    text: row.get(3)?,
                    created_at: Some(row.get(4)?),
                })
            })?;

            let mut reviews = Vec::new();
            for row in rows {
                reviews.push(row?);
            }
            log!("[DB] Listed {} reviews", reviews.len());
            Ok(reviews)
        }
    }
}

#[cfg(feature = "ssr")]
pub use db_impl::Database;
