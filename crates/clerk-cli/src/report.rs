use clerk_api::ClerkError;

/// Format a failed command for stderr.
///
/// API errors keep the `Error [status]: message` line followed by one
/// indented line per detail. Everything else is `Error: message`.
#[must_use]
pub fn render_error(error: &anyhow::Error) -> String {
    match error.downcast_ref::<ClerkError>() {
        Some(ClerkError::Api {
            status,
            message,
            errors,
        }) => {
            let details: String = errors
                .iter()
                .map(|detail| format!("\n  - {detail}"))
                .collect();
            format!("Error [{status}]: {message}{details}")
        }
        Some(other) => format!("Error: {other}"),
        None => format!("Error: {error:#}"),
    }
}

#[cfg(test)]
mod tests {
    use clerk_api::ClerkError;
    use pretty_assertions::assert_eq;

    use super::render_error;

    #[test]
    fn api_error_lists_details() {
        let error = anyhow::Error::from(ClerkError::Api {
            status: 422,
            message: "Invalid request".into(),
            errors: vec!["email_address is invalid".into(), "role is required".into()],
        });
        assert_eq!(
            render_error(&error),
            "Error [422]: Invalid request\n  - email_address is invalid\n  - role is required"
        );
    }

    #[test]
    fn api_error_without_details_is_one_line() {
        let error = anyhow::Error::from(ClerkError::Api {
            status: 404,
            message: "not found".into(),
            errors: Vec::new(),
        });
        assert_eq!(render_error(&error), "Error [404]: not found");
    }

    #[test]
    fn network_error_reports_status_zero() {
        let error = anyhow::Error::from(ClerkError::Api {
            status: 0,
            message: "Network error: connection refused".into(),
            errors: Vec::new(),
        });
        assert_eq!(render_error(&error), "Error [0]: Network error: connection refused");
    }

    #[test]
    fn validation_error_is_plain() {
        let error = anyhow::Error::from(ClerkError::Validation(
            "invalid JSON for --public: EOF while parsing".into(),
        ));
        assert_eq!(
            render_error(&error),
            "Error: invalid JSON for --public: EOF while parsing"
        );
    }

    #[test]
    fn other_errors_are_plain() {
        let error = anyhow::anyhow!("At least one of --name or --slug must be provided");
        assert_eq!(
            render_error(&error),
            "Error: At least one of --name or --slug must be provided"
        );
    }
}
