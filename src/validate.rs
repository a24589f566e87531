//! Shape checks on raw input. These run before any store is touched and never
//! mutate anything; composite checks stop at the first failing rule.

use crate::error::LibraryError;
use crate::models::Role;

/// Minimum trimmed length for every free-text field.
const MIN_TEXT_LEN: usize = 1;
/// Smallest number of copies an `add` may carry.
const MIN_AMOUNT: i64 = 1;

fn is_valid_text(value: &str) -> bool {
    value.trim().chars().count() >= MIN_TEXT_LEN
}

pub fn is_valid_role(role: &str) -> bool {
    role.parse::<Role>().is_ok()
}

pub fn is_valid_name(name: &str) -> bool {
    is_valid_text(name)
}

pub fn is_valid_password(password: &str) -> bool {
    is_valid_text(password)
}

pub fn is_valid_book_name(name: &str) -> bool {
    is_valid_text(name)
}

pub fn is_valid_author(author: &str) -> bool {
    is_valid_text(author)
}

pub fn is_valid_amount(amount: i64) -> bool {
    amount >= MIN_AMOUNT
}

/// Role is checked before the credentials so a bad role is reported even when
/// the name is also blank.
pub fn validate_registration(role: &str, name: &str, password: &str) -> Result<Role, LibraryError> {
    let role = role.parse::<Role>().map_err(|()| LibraryError::InvalidRole)?;
    if !is_valid_name(name) || !is_valid_password(password) {
        return Err(LibraryError::InvalidParameters);
    }
    Ok(role)
}

pub fn validate_login(name: &str, password: &str) -> Result<(), LibraryError> {
    if !is_valid_name(name) || !is_valid_password(password) {
        return Err(LibraryError::InvalidParameters);
    }
    Ok(())
}

pub fn validate_book_operation(name: &str, author: &str) -> Result<(), LibraryError> {
    if !is_valid_book_name(name) || !is_valid_author(author) {
        return Err(LibraryError::InvalidParameters);
    }
    Ok(())
}

/// Returns the amount as an unsigned copy count once it is known positive.
pub fn validate_add_book(name: &str, author: &str, amount: i64) -> Result<u64, LibraryError> {
    validate_book_operation(name, author)?;
    if !is_valid_amount(amount) {
        return Err(LibraryError::AmountMustBePositive);
    }
    u64::try_from(amount).map_err(|_| LibraryError::AmountMustBePositive)
}
