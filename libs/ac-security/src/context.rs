use secrecy::SecretString;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Supplier account used when the caller does not assert one.
pub const DEFAULT_SUPPLIER_ACCOUNT: &str = "0";

/// `SecurityContext` carries the identity and request-scoped state of one inbound call.
///
/// Built from the caller's credentials (see [`crate::headers`]) and passed down to
/// every collaborator call made on the caller's behalf.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SecurityContext {
    /// Principal name of the caller.
    user: String,
    /// Owner/tenant account the caller acts in. Stamped on every authorization
    /// request as the supplier account.
    supplier_account: String,
    /// Request correlation id used in diagnostic logs.
    request_id: String,
    /// Original bearer token for PDP forwarding. Never serialized/persisted.
    #[serde(skip)]
    bearer_token: Option<SecretString>,
    /// Cancelled by the caller when the request is abandoned. In-flight
    /// collaborator calls race against it.
    #[serde(skip)]
    cancellation: CancellationToken,
}

impl SecurityContext {
    /// Create a new `SecurityContext` builder
    #[must_use]
    pub fn builder() -> SecurityContextBuilder {
        SecurityContextBuilder::default()
    }

    /// Create an anonymous `SecurityContext`: no principal, default supplier account
    /// and a freshly generated request id.
    #[must_use]
    pub fn anonymous() -> Self {
        SecurityContextBuilder::default().build()
    }

    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    #[must_use]
    pub fn supplier_account(&self) -> &str {
        &self.supplier_account
    }

    #[must_use]
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Get the original bearer token (for PDP forwarding).
    #[must_use]
    pub fn bearer_token(&self) -> Option<&SecretString> {
        self.bearer_token.as_ref()
    }

    #[must_use]
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }
}

/// Generate a request id for calls that arrive without one.
#[must_use]
pub fn new_request_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[derive(Default)]
pub struct SecurityContextBuilder {
    user: Option<String>,
    supplier_account: Option<String>,
    request_id: Option<String>,
    bearer_token: Option<SecretString>,
    cancellation: Option<CancellationToken>,
}

impl SecurityContextBuilder {
    #[must_use]
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    #[must_use]
    pub fn supplier_account(mut self, supplier_account: impl Into<String>) -> Self {
        self.supplier_account = Some(supplier_account.into());
        self
    }

    #[must_use]
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    #[must_use]
    pub fn bearer_token(mut self, token: impl Into<SecretString>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Attach the caller's cancellation token. Without one the context gets a
    /// token nobody else holds, so it is never cancelled.
    #[must_use]
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    #[must_use]
    pub fn build(self) -> SecurityContext {
        SecurityContext {
            user: self.user.unwrap_or_default(),
            supplier_account: self
                .supplier_account
                .unwrap_or_else(|| DEFAULT_SUPPLIER_ACCOUNT.to_owned()),
            request_id: self.request_id.unwrap_or_else(new_request_id),
            bearer_token: self.bearer_token,
            cancellation: self.cancellation.unwrap_or_default(),
        }
    }
}
