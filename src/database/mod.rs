pub mod scores;
pub mod users;

#[cfg(test)]
pub mod memory;

pub use scores::*;
pub use users::*;

use crate::utils::error::AppError;
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::{Client, Collection, Database};
use std::error::Error;

pub const USERS_COLLECTION: &str = "users";
pub const SCORES_COLLECTION: &str = "quizscores";

const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    /// Connects, verifies the server answers and declares the indexes the
    /// services rely on. `fallback_db` is used when the URI names no database.
    pub async fn connect(uri: &str, fallback_db: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(2);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));
        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let db_name = client_options
            .default_database
            .clone()
            .unwrap_or_else(|| fallback_db.to_string());

        let client = Client::with_options(client_options)?;
        let db = client.database(&db_name);

        // Test connection
        db.list_collection_names().await?;
        log::info!("📊 Using database: {}", db_name);

        let mongodb = Self { client, db };
        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// The unique index on `users.email` is what actually prevents two
    /// concurrent signups with the same email, so failing to create it is fatal.
    async fn ensure_indexes(&self) -> Result<(), Box<dyn Error>> {
        use mongodb::bson::doc;
        use mongodb::options::IndexOptions;
        use mongodb::IndexModel;

        log::info!("🔧 Creating database indexes...");

        let users = self.collection::<mongodb::bson::Document>(USERS_COLLECTION);

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        users.create_index(email_index).await?;
        log::info!("   ✅ Index ready: users(email) unique");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// Closes the connection pool. Call after the HTTP server has stopped.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

pub(crate) fn is_duplicate_key(err: &MongoError) -> bool {
    matches!(
        *err.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}

/// Separates "database is unreachable" from every other driver failure.
pub(crate) fn classify_error(err: MongoError) -> AppError {
    match *err.kind {
        ErrorKind::Io(_)
        | ErrorKind::ServerSelection { .. }
        | ErrorKind::ConnectionPoolCleared { .. } => AppError::StoreUnavailable(err.to_string()),
        _ => AppError::DatabaseError(err.to_string()),
    }
}
