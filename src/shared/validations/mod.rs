/// Password policy for operator accounts.
///
/// At least 8 characters with one lowercase letter, one uppercase letter,
/// one digit and one special character.
pub fn validate_password_strength(password: &str) -> Result<(), String> {
    let long_enough = password.chars().count() >= 8;
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());

    if long_enough && has_lowercase && has_uppercase && has_digit && has_special {
        Ok(())
    } else {
        Err(
            "Password must be at least 8 characters with uppercase, lowercase, number and special character"
                .to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_strong_password() {
        assert!(validate_password_strength("Admin@123").is_ok());
        assert!(validate_password_strength("Sekur3!pass").is_ok());
    }

    #[test]
    fn test_rejects_weak_passwords() {
        // too short
        assert!(validate_password_strength("Ab@1").is_err());
        // no uppercase
        assert!(validate_password_strength("admin@123").is_err());
        // no lowercase
        assert!(validate_password_strength("ADMIN@123").is_err());
        // no digit
        assert!(validate_password_strength("Admin@abc").is_err());
        // no special character
        assert!(validate_password_strength("Admin1234").is_err());
    }
}
