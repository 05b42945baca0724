//! Query error types
//!
//! The engine itself never fails. These errors come from turning user text
//! (CLI arguments, JSON requests) into a `Query`.
//!
//! Error codes:
//! - CLINIC_QUERY_INVALID_FILTER (REJECT)
//! - CLINIC_QUERY_INVALID_DATE (REJECT)
//! - CLINIC_QUERY_INVALID_RANGE (REJECT)
//! - CLINIC_QUERY_INVALID_SORT (REJECT)
//! - CLINIC_QUERY_INVALID_REQUEST (REJECT)

use std::fmt;

/// Severity levels for query errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Caller input rejected
    Reject,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
        }
    }
}

/// Query error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorCode {
    /// Filter text is not `field=value`
    InvalidFilter,
    /// Date text is not `YYYY-MM-DD`
    InvalidDate,
    /// Range bounds are inconsistent or incomplete
    InvalidRange,
    /// Sort text is not `field[:asc|desc]`
    InvalidSort,
    /// Structured request is malformed
    InvalidRequest,
}

impl QueryErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            QueryErrorCode::InvalidFilter => "CLINIC_QUERY_INVALID_FILTER",
            QueryErrorCode::InvalidDate => "CLINIC_QUERY_INVALID_DATE",
            QueryErrorCode::InvalidRange => "CLINIC_QUERY_INVALID_RANGE",
            QueryErrorCode::InvalidSort => "CLINIC_QUERY_INVALID_SORT",
            QueryErrorCode::InvalidRequest => "CLINIC_QUERY_INVALID_REQUEST",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Reject
    }
}

impl fmt::Display for QueryErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Query error with context
#[derive(Debug, Clone)]
pub struct QueryError {
    code: QueryErrorCode,
    message: String,
    field: Option<String>,
}

impl QueryError {
    /// Create an invalid filter error
    pub fn invalid_filter(text: impl Into<String>) -> Self {
        let t = text.into();
        Self {
            code: QueryErrorCode::InvalidFilter,
            message: format!("Filter '{}' must look like field=value", t),
            field: None,
        }
    }

    /// Create an invalid date error
    pub fn invalid_date(text: impl Into<String>) -> Self {
        let t = text.into();
        Self {
            code: QueryErrorCode::InvalidDate,
            message: format!("Date '{}' must look like YYYY-MM-DD", t),
            field: None,
        }
    }

    /// Create an invalid range error
    pub fn invalid_range(reason: impl Into<String>) -> Self {
        Self {
            code: QueryErrorCode::InvalidRange,
            message: reason.into(),
            field: None,
        }
    }

    /// Create an invalid sort error
    pub fn invalid_sort(text: impl Into<String>) -> Self {
        let t = text.into();
        Self {
            code: QueryErrorCode::InvalidSort,
            message: format!("Sort '{}' must look like field, field:asc or field:desc", t),
            field: None,
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self {
            code: QueryErrorCode::InvalidRequest,
            message: reason.into(),
            field: None,
        }
    }

    /// Attaches the offending field name
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Returns the error code
    pub fn code(&self) -> QueryErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the field name if applicable
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )?;
        if let Some(field) = &self.field {
            write!(f, " (field '{}')", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for QueryError {}

/// Result type for query construction
pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(
            QueryErrorCode::InvalidFilter.code(),
            "CLINIC_QUERY_INVALID_FILTER"
        );
        assert_eq!(QueryErrorCode::InvalidDate.code(), "CLINIC_QUERY_INVALID_DATE");
        assert_eq!(
            QueryErrorCode::InvalidRange.code(),
            "CLINIC_QUERY_INVALID_RANGE"
        );
        assert_eq!(QueryErrorCode::InvalidSort.code(), "CLINIC_QUERY_INVALID_SORT");
    }

    #[test]
    fn test_error_display() {
        let err = QueryError::invalid_date("06/10/2025").with_field("date");
        let display = format!("{}", err);
        assert!(display.contains("REJECT"));
        assert!(display.contains("CLINIC_QUERY_INVALID_DATE"));
        assert!(display.contains("06/10/2025"));
        assert!(display.contains("field 'date'"));
        assert_eq!(err.field(), Some("date"));
    }
}
