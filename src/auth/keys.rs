use secrecy::{ExposeSecret, SecretString};

/// Environment variable holding the affiliate public key.
pub const PUBLIC_KEY_VAR: &str = "SHAPESHIFT_PUBLIC_KEY";
/// Environment variable holding the affiliate private key.
pub const PRIVATE_KEY_VAR: &str = "SHAPESHIFT_PRIVATE_KEY";

/// An affiliate's public and private API keys.
///
/// The public key is attached to shift and send-amount requests that do not
/// already carry one. The private key only ever appears in the path of the
/// transaction listing endpoints and is kept out of `Debug` output.
#[derive(Clone)]
pub struct AffiliateKeys {
    /// The public key, sent as `apiKey` in request bodies.
    pub public_key: String,
    private_key: SecretString,
}

impl AffiliateKeys {
    /// Create keys from a public and private key pair.
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: SecretString::from(private_key.into()),
        }
    }

    /// Get the private key.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_private_key(&self) -> &str {
        self.private_key.expose_secret()
    }

    /// Read keys from `SHAPESHIFT_PUBLIC_KEY` and `SHAPESHIFT_PRIVATE_KEY`.
    ///
    /// Returns `None` if either variable is unset.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars(PUBLIC_KEY_VAR, PRIVATE_KEY_VAR)
    }

    /// Read keys from custom environment variable names.
    ///
    /// Returns `None` if either variable is unset or empty.
    pub fn try_from_env_vars(public_var: &str, private_var: &str) -> Option<Self> {
        let public_key = std::env::var(public_var).ok().filter(|key| !key.is_empty())?;
        let private_key = std::env::var(private_var).ok().filter(|key| !key.is_empty())?;
        Some(Self::new(public_key, private_key))
    }
}

impl std::fmt::Debug for AffiliateKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AffiliateKeys")
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}
