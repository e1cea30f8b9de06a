use crate::server::error::AppError;

/// Parses a player id taken from a path segment.
///
/// # Arguments
/// - `value` - The raw path segment
///
/// # Returns
/// - `Ok(i64)` - A strictly positive id
/// - `Err(AppError::BadRequest)` - The segment is not an integer or is not positive
pub fn parse_player_id(value: &str) -> Result<i64, AppError> {
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        Ok(id) => Err(AppError::BadRequest(format!(
            "Player id must be positive, got {}",
            id
        ))),
        Err(e) => Err(AppError::BadRequest(format!(
            "Invalid player id '{}': {}",
            value, e
        ))),
    }
}
