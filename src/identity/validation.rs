use super::Error;
use regex::Regex;

pub const MAX_USERNAME_CHARS: usize = 64;
pub const MAX_PASSWORD_BYTES: usize = 1024;

#[must_use]
pub fn valid_username(username: &str) -> bool {
    // 1-64 characters, no whitespace, control characters or ':' (Basic auth separator)
    Regex::new(r"^[^\s\p{Cc}:]{1,64}$").is_ok_and(|re| re.is_match(username))
}

#[must_use]
pub fn valid_password(password: &str) -> bool {
    !password.is_empty() && password.len() <= MAX_PASSWORD_BYTES
}

/// # Errors
/// Returns `BadRequest` naming the first invalid field.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), Error> {
    if !valid_username(username) {
        return Err(Error::BadRequest("Invalid username"));
    }

    if !valid_password(password) {
        return Err(Error::BadRequest("Invalid password"));
    }

    Ok(())
}
