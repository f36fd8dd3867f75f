use crate::db::OrmConn;

#[derive(Clone)]
pub struct AppState {
    pub orm: OrmConn,
    /// User that owns favorites when the request names none.
    pub default_user_id: i32,
}
