/// Returns true when `e` is SQLite rejecting an insert on a UNIQUE or
/// PRIMARY KEY constraint.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation()
}
