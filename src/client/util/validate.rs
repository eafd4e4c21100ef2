use validator::ValidateEmail;

/// Whether `email`, ignoring surrounding whitespace, is a valid address
pub fn is_valid_email(email: &str) -> bool {
    email.trim().validate_email()
}
