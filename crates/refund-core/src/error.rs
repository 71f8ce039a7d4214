use thiserror::Error;

/// A rejected submission. The `Display` text is returned to the form verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid request body")]
    InvalidBody,

    #[error("Subgroup is required")]
    MissingSubgroup,

    #[error("Applicant name is required")]
    MissingName,

    #[error("Bank name is required")]
    MissingBankName,

    #[error("Account number is required")]
    MissingAccountNumber,

    #[error("Invalid account number format. Use numbers only")]
    InvalidAccountNumber,

    #[error("Invalid subgroup selected")]
    UnknownSubgroup { id: String },
}

#[derive(Debug, Error)]
pub enum RefundError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Slack configuration missing")]
    MissingToken,

    #[error("No valid subgroups configured")]
    NoGroups,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The reason is for logs only; clients see the generic message.
    #[error("Failed to send Slack message")]
    Delivery { reason: String },
}

impl RefundError {
    /// Short error code string used in structured logs.
    pub fn code(&self) -> &'static str {
        match self {
            RefundError::Config(_) => "CONFIG_ERROR",
            RefundError::MissingToken => "MISSING_TOKEN",
            RefundError::NoGroups => "NO_GROUPS",
            RefundError::Validation(_) => "INVALID_INPUT",
            RefundError::Delivery { .. } => "DELIVERY_FAILED",
        }
    }

    /// The subgroup id the applicant picked, when that was the rejected field.
    pub fn rejected_subgroup(&self) -> Option<&str> {
        match self {
            RefundError::Validation(ValidationError::UnknownSubgroup { id }) => Some(id),
            _ => None,
        }
    }

    /// True when the caller sent something we can't accept (HTTP 400).
    /// Everything else is a server-side failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, RefundError::Validation(_))
    }

    /// Text safe to show in the form. Internal details never leave the server.
    pub fn user_message(&self) -> String {
        match self {
            RefundError::Config(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RefundError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_client_errors() {
        let err = RefundError::from(ValidationError::InvalidAccountNumber);
        assert!(err.is_client_error());
        assert_eq!(err.code(), "INVALID_INPUT");
        assert_eq!(
            err.user_message(),
            "Invalid account number format. Use numbers only"
        );
    }

    #[test]
    fn delivery_reason_is_hidden_from_users() {
        let err = RefundError::Delivery {
            reason: "channel_not_found".to_string(),
        };
        assert!(!err.is_client_error());
        assert_eq!(err.user_message(), "Failed to send Slack message");
    }

    #[test]
    fn config_load_errors_use_generic_message() {
        let err = RefundError::Config("bad toml".to_string());
        assert_eq!(err.user_message(), "Internal server error");
    }

    #[test]
    fn rejected_subgroup_is_exposed_for_logging() {
        let err = RefundError::from(ValidationError::UnknownSubgroup {
            id: "devops".to_string(),
        });
        assert_eq!(err.rejected_subgroup(), Some("devops"));
        assert_eq!(err.to_string(), "Invalid subgroup selected");

        let err = RefundError::from(ValidationError::MissingName);
        assert_eq!(err.rejected_subgroup(), None);
        assert_eq!(RefundError::NoGroups.rejected_subgroup(), None);
    }

    #[test]
    fn config_problems_keep_their_message() {
        assert_eq!(
            RefundError::MissingToken.user_message(),
            "Slack configuration missing"
        );
        assert_eq!(
            RefundError::NoGroups.user_message(),
            "No valid subgroups configured"
        );
    }
}
