use crate::client::util::validate::is_valid_email;

/// Demo customer session
///
/// Signing in only records the email address; there is no credential check.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub email: Option<String>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SignInError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter your password")]
    MissingPassword,
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        self.email.is_some()
    }

    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<(), SignInError> {
        if !is_valid_email(email) {
            return Err(SignInError::InvalidEmail);
        }
        if password.is_empty() {
            return Err(SignInError::MissingPassword);
        }

        self.email = Some(email.trim().to_string());
        Ok(())
    }

    pub fn sign_out(&mut self) {
        self.email = None;
    }
}
