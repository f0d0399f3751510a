use std::fmt;

use super::error::CredentialError;

/// Prefix every key issued by the upstream provider starts with.
pub const KEY_PREFIX: &str = "AI";

/// Number of leading characters kept when a key is shown redacted.
const REDACTED_VISIBLE: usize = 4;

/// The user's API key for the generation service.
///
/// `Debug` and `Display` never print the full value; call [`Credential::expose`]
/// at the one place the raw key has to leave the process.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    value: String,
}

impl Credential {
    /// Builds a credential from user input, enforcing [`validate`].
    pub fn parse(candidate: &str) -> Result<Self, CredentialError> {
        validate(candidate)?;
        Ok(Self {
            value: candidate.to_string(),
        })
    }

    /// Rehydrates a previously persisted key. Stored values are trusted; an
    /// empty entry counts as no credential at all.
    pub fn from_stored(raw: impl Into<String>) -> Option<Self> {
        let value = raw.into();
        if value.is_empty() {
            return None;
        }
        Some(Self { value })
    }

    pub fn expose(&self) -> &str {
        &self.value
    }

    pub fn redacted(&self) -> String {
        let visible: String = self.value.chars().take(REDACTED_VISIBLE).collect();
        format!("{visible}…")
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&self.redacted()).finish()
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

/// Client-side sanity check of a candidate key. Passing it does not mean the
/// provider will accept the key.
pub fn validate(candidate: &str) -> Result<(), CredentialError> {
    if candidate.trim().is_empty() {
        return Err(CredentialError::Empty);
    }
    if !candidate.starts_with(KEY_PREFIX) {
        return Err(CredentialError::InvalidFormat);
    }
    Ok(())
}
