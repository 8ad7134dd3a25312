use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::http::error::{ApiError, ApiResult};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable. The single SQLite connection sits behind a mutex:
/// handlers reach it only through [`AppState::with_db`], which serializes
/// every read-modify-append on the blocking thread pool.
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<DbPool>>,
    /// Loaded configuration (locale, conflict policy, timeouts).
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(pool: DbPool, config: Config) -> Self {
        Self {
            db: Arc::new(Mutex::new(pool)),
            config: Arc::new(config),
        }
    }

    /// Run database work with exclusive access to the connection.
    pub async fn with_db<F, T>(&self, func: F) -> ApiResult<T>
    where
        F: FnOnce(&mut DbPool) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = Arc::clone(&self.db);

        tokio::task::spawn_blocking(move || {
            let mut pool = db
                .lock()
                .map_err(|_| AppError::Other("database connection lock poisoned".into()))?;
            func(&mut pool)
        })
        .await
        .map_err(|e| ApiError::Internal(format!("Database task failed: {e}")))?
        .map_err(ApiError::from)
    }
}
