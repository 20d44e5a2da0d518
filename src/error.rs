use thiserror::Error;

// Display strings double as the notification texts shown to the user, so
// they are written for the page, not for a log file.

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("activities request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("activities payload could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum SignupError {
    // Server rejected the signup; the payload detail is its reason.
    #[error("{0}")]
    Rejected(String),
    #[error("Failed to sign up. Please try again.")]
    Network(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum UnregisterError {
    #[error("{0}")]
    Rejected(String),
    #[error("Failed to unregister. Please try again.")]
    Network(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error("required element #{0} is missing from the page")]
    Missing(&'static str),
    #[error("element #{0} is not the expected control type")]
    WrongType(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_mutations_display_the_server_detail() {
        let err = SignupError::Rejected("Activity is full".to_string());
        assert_eq!(err.to_string(), "Activity is full");

        let err = UnregisterError::Rejected("Participant not found".to_string());
        assert_eq!(err.to_string(), "Participant not found");
    }

    #[test]
    fn page_errors_name_the_offending_id() {
        assert_eq!(
            PageError::Missing("activities-list").to_string(),
            "required element #activities-list is missing from the page"
        );
        assert_eq!(
            PageError::WrongType("activity").to_string(),
            "element #activity is not the expected control type"
        );
    }
}
