use crate::error::AppError;

/// Parses a record id from a path segment.
///
/// Path ids arrive as strings so that a malformed value surfaces as a 400 with
/// the resource named in the message rather than a framework rejection.
///
/// # Arguments
/// - `value` - The raw path segment
/// - `resource` - Resource name used in the error message ("event", "team", ...)
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::BadRequest)` - Value is not a valid id
pub fn parse_id(value: &str, resource: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("Invalid {} ID", resource)))
}
