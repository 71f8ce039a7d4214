//! Submission checks. Rules run in a fixed order and the first failure wins.

use crate::error::{RefundError, ValidationError};
use crate::groups::GroupDirectory;
use crate::types::{RefundRequest, ValidatedRequest};

/// Hyphens and any whitespace may group account digits; the form page
/// strips the same set (`[-\s]`).
fn is_separator(c: char) -> bool {
    c == '-' || c.is_whitespace()
}

/// Drop separator characters from an account number.
pub fn strip_separators(account_number: &str) -> String {
    account_number.chars().filter(|c| !is_separator(*c)).collect()
}

/// True when the account number is one or more ASCII digits once separators
/// are removed.
pub fn is_valid_account_number(account_number: &str) -> bool {
    let digits = strip_separators(account_number.trim());
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Field-level checks that need no configuration.
pub fn check_fields(req: &RefundRequest) -> Result<(), ValidationError> {
    if req.subgroup.trim().is_empty() {
        return Err(ValidationError::MissingSubgroup);
    }
    if req.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    if req.bank_name.trim().is_empty() {
        return Err(ValidationError::MissingBankName);
    }
    if req.account_number.trim().is_empty() {
        return Err(ValidationError::MissingAccountNumber);
    }
    if !is_valid_account_number(&req.account_number) {
        return Err(ValidationError::InvalidAccountNumber);
    }
    Ok(())
}

/// Validate a submission and resolve its group.
///
/// An empty directory is a deployment problem, not the applicant's fault, so
/// it is reported as [`RefundError::NoGroups`] rather than a validation error.
pub fn validate(
    req: &RefundRequest,
    groups: &GroupDirectory,
) -> Result<ValidatedRequest, RefundError> {
    check_fields(req)?;

    if groups.is_empty() {
        return Err(RefundError::NoGroups);
    }
    let group = groups.resolve(req.subgroup.trim())?;

    let memo = req
        .memo
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(String::from);

    Ok(ValidatedRequest {
        group: group.clone(),
        name: req.name.trim().to_string(),
        bank_name: req.bank_name.trim().to_string(),
        account_number: req.account_number.trim().to_string(),
        memo,
    })
}
