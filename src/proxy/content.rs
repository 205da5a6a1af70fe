// Secured content and the proxy that gates access to it

/// Errors raised when access is refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("access denied: user is not authenticated")]
    NotAuthenticated,
}

/// Shared interface of the real content and its proxy
pub trait ContentAccess {
    fn access(&mut self) -> Result<String, AccessError>;
}

/// The real object behind the proxy
///
/// Stands in for something costly to set up, which is why the proxy
/// defers building it.
#[derive(Default)]
pub struct SecuredContent;

impl SecuredContent {
    pub fn new() -> Self {
        Self
    }
}

impl ContentAccess for SecuredContent {
    fn access(&mut self) -> Result<String, AccessError> {
        Ok("secured content granted".to_string())
    }
}

/// Gatekeeper in front of SecuredContent
///
/// Holds the signed-in user, if any, and the lazily built real object.
#[derive(Default)]
pub struct ContentProxy {
    user: Option<String>,
    inner: Option<SecuredContent>,
}

impl ContentProxy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, user: impl Into<String>) {
        self.user = Some(user.into());
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Whether the real content has been built yet
    pub fn instantiated(&self) -> bool {
        self.inner.is_some()
    }
}

impl ContentAccess for ContentProxy {
    fn access(&mut self) -> Result<String, AccessError> {
        if self.user.is_none() {
            return Err(AccessError::NotAuthenticated);
        }

        let content = self.inner.get_or_insert_with(SecuredContent::new);
        content.access()
    }
}
