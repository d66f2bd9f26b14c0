use thiserror::Error;

/// Closed classification of backing-store failures, produced once at the
/// store boundary. Handlers and services switch over these variants instead
/// of matching backend-specific code strings at every call site.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Permission denied by the backing store")]
    PermissionDenied,
    #[error("Backing store unavailable")]
    Unavailable,
    #[error("Missing or invalid store credentials")]
    Unauthenticated,
    #[error("Invalid request: {0}")]
    InvalidArgument(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Record not found")]
    NotFound,
    #[error("Store error: {0}")]
    Unclassified(String),
}

impl StoreError {
    /// Stable snake_case tag for API bodies and status mapping.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::PermissionDenied => "permission_denied",
            StoreError::Unavailable => "unavailable",
            StoreError::Unauthenticated => "unauthenticated",
            StoreError::InvalidArgument(_) => "invalid_argument",
            StoreError::Network(_) => "network_error",
            StoreError::NotFound => "not_found",
            StoreError::Unclassified(_) => "unclassified",
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => StoreError::Unavailable,
            sqlx::Error::Io(e) => StoreError::Network(e.to_string()),
            sqlx::Error::Configuration(e) => StoreError::InvalidArgument(e.to_string()),
            sqlx::Error::ColumnNotFound(column) => {
                StoreError::InvalidArgument(format!("unknown column: {column}"))
            }
            sqlx::Error::Database(e) => {
                // SQLite primary result codes: 5 = BUSY, 6 = LOCKED,
                // 8 = READONLY, 23 = AUTH.
                match e.code().as_deref() {
                    Some("8") => StoreError::PermissionDenied,
                    Some("23") => StoreError::Unauthenticated,
                    Some("5") | Some("6") => StoreError::Unavailable,
                    _ => StoreError::Unclassified(e.to_string()),
                }
            }
            other => StoreError::Unclassified(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_classifies_as_not_found() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::NotFound));
        assert_eq!(err.kind(), "not_found");
    }

    #[test]
    fn test_pool_exhaustion_classifies_as_unavailable() {
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolTimedOut),
            StoreError::Unavailable
        ));
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolClosed),
            StoreError::Unavailable
        ));
    }

    #[test]
    fn test_io_errors_classify_as_network() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        let err = StoreError::from(sqlx::Error::Io(io));
        assert!(matches!(err, StoreError::Network(_)));
        assert_eq!(err.kind(), "network_error");
    }

    #[test]
    fn test_kind_tags_are_stable() {
        assert_eq!(StoreError::PermissionDenied.kind(), "permission_denied");
        assert_eq!(StoreError::Unavailable.kind(), "unavailable");
        assert_eq!(StoreError::Unauthenticated.kind(), "unauthenticated");
        assert_eq!(
            StoreError::InvalidArgument("bad".to_string()).kind(),
            "invalid_argument"
        );
        assert_eq!(StoreError::NotFound.kind(), "not_found");
        assert_eq!(
            StoreError::Unclassified("other".to_string()).kind(),
            "unclassified"
        );
    }
}
