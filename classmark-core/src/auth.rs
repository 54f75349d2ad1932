//! Local password rules checked before the setup request is built.

use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("The password must be at least {} characters long.", MIN_PASSWORD_LEN)]
    TooShort,
    #[error("The passwords do not match.")]
    Mismatch,
}

/// Validate a new shared password and its confirmation.
///
/// # Errors
///
/// Returns an error when the password is shorter than the minimum or the
/// confirmation differs.
pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), PasswordError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordError::TooShort);
    }
    if password != confirm {
        return Err(PasswordError::Mismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_matching_password_of_minimum_length() {
        assert_eq!(validate_new_password("abcd", "abcd"), Ok(()));
    }

    #[test]
    fn rejects_short_passwords() {
        assert_eq!(
            validate_new_password("abc", "abc"),
            Err(PasswordError::TooShort)
        );
    }

    #[test]
    fn rejects_mismatched_confirmation() {
        assert_eq!(
            validate_new_password("abcd", "abce"),
            Err(PasswordError::Mismatch)
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(validate_new_password("비밀번호", "비밀번호"), Ok(()));
    }
}
