use crate::error::AppError;

/// Parses a single path identity, rejecting garbage with a 400.
pub fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {raw}")))
}

/// Parses the `{id}-{associatedId}` path segment used by the association
/// routes.
pub fn parse_id_pair(raw: &str) -> Result<(i32, i32), AppError> {
    let (left, right) = raw
        .split_once('-')
        .ok_or_else(|| AppError::BadRequest(format!("invalid id pair: {raw}")))?;
    Ok((parse_id(left)?, parse_id(right)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_pairs() {
        assert_eq!(parse_id_pair("10-20").unwrap(), (10, 20));
        assert_eq!(parse_id_pair("1-2").unwrap(), (1, 2));
    }

    #[test]
    fn rejects_malformed_pairs() {
        assert!(parse_id_pair("10").is_err());
        assert!(parse_id_pair("ten-20").is_err());
        assert!(parse_id_pair("-").is_err());
        assert!(parse_id("abc").is_err());
    }
}
