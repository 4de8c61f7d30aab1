use sea_orm::DatabaseConnection;

/// Shared handler state. Handlers borrow a session from `db` per request.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}
