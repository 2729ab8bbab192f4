use sg_app::{AuthError, GateError};

/// Centralized error mapping for commands.
/// 命令层统一错误映射。
pub fn map_err(err: GateError) -> String {
    match err {
        GateError::Auth(AuthError::EmptyToken) => "Enter your sign-in code to continue.".to_string(),
        GateError::Auth(AuthError::Persist(_)) => {
            "We couldn't save your sign-in on this device. Please try again.".to_string()
        }
        GateError::Navigation(e) => format!("Unable to open the next screen: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sg_core::ports::StorageError;

    #[test]
    fn auth_failures_map_to_user_messages() {
        assert_eq!(
            map_err(GateError::Auth(AuthError::EmptyToken)),
            "Enter your sign-in code to continue."
        );
        let persist = map_err(GateError::Auth(AuthError::Persist(StorageError::Unavailable(
            "disk full".to_string(),
        ))));
        assert!(persist.contains("couldn't save"));
        assert!(!persist.contains("disk full"));
    }
}
