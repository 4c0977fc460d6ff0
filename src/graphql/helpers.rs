use crate::errors::{AppError, AppResult};

/// Helper to turn a GraphQL `Int` into an index, rejecting negatives
pub fn to_index(value: i32, field: &str) -> AppResult<usize> {
    usize::try_from(value)
        .map_err(|_| AppError::ValidationError(format!("{} must not be negative", field)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_index_accepts_zero_and_positive() {
        assert_eq!(to_index(0, "option").unwrap(), 0);
        assert_eq!(to_index(3, "option").unwrap(), 3);
    }

    #[test]
    fn to_index_rejects_negative() {
        assert!(matches!(
            to_index(-1, "option"),
            Err(AppError::ValidationError(_))
        ));
    }
}
