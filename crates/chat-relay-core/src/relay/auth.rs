use subtle::ConstantTimeEq;

use chat_relay_types::{RelayError, RelayMode};

use super::RelayPolicy;

fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Password gate. Open mode lets everything through.
pub fn check_access(policy: &RelayPolicy, supplied: Option<&str>) -> Result<(), RelayError> {
    if policy.mode == RelayMode::Open {
        return Ok(());
    }

    let expected = match policy.access_password.as_deref() {
        Some(p) if !p.is_empty() => p,
        _ => {
            tracing::error!("Relay is gated but no access password is configured; denying request");
            return Err(RelayError::Unauthorized);
        },
    };

    if supplied.is_some_and(|s| constant_time_compare(s, expected)) {
        Ok(())
    } else {
        tracing::debug!("Rejected request with wrong or missing password");
        Err(RelayError::Unauthorized)
    }
}
