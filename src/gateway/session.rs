//! Session layer for gateway backends
//!
//! A [`PaySession`] is the per-connection context a caller obtains from a
//! backend before running lifecycle operations. It resolves presented
//! [`Account`]s to their vault records through the session's
//! [`AccountResolver`] and mints transaction identifiers that are unique
//! within the owning backend instance.
//!
//! Sessions are owned exclusively by the caller that started them and are not
//! internally locked; a single session is meant to be driven from one logical
//! flow at a time. Connection-scoped resources (e.g. a gateway session token)
//! are held for the session's lifetime and released when it is dropped, on
//! every exit path.

use crate::types::{Account, ActualAccountData, TransactionId, TransactionKind};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Credential collaborator interface
///
/// Backends that talk to a real processor obtain an opaque authorization
/// header value from this trait. The core never parses the returned string.
pub trait Credentials: Send + Sync + fmt::Debug {
    /// The value to send in the request's authorization header
    fn authorization_header(&self) -> String;
}

/// Request-scoped account resolution interface
///
/// Supplied by the caller when starting a session; maps an account identity
/// vector to its current vault record. Returning `None` means the account is
/// unknown to the session, which backends surface as an unknown-account error
/// before any instrument validation runs.
pub trait AccountResolver: Send + Sync {
    fn resolve(&self, account: &Account) -> Option<ActualAccountData>;
}

/// A resolver with no entries; every lookup misses
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyResolver;

impl AccountResolver for EmptyResolver {
    fn resolve(&self, _account: &Account) -> Option<ActualAccountData> {
        None
    }
}

/// Request-scoped data handed to a backend when starting a session
#[derive(Clone)]
pub struct SessionContext {
    resolver: Arc<dyn AccountResolver>,
}

impl SessionContext {
    pub fn new(resolver: Arc<dyn AccountResolver>) -> Self {
        SessionContext { resolver }
    }

    /// Resolve an account through the context's resolver
    pub fn resolve(&self, account: &Account) -> Option<ActualAccountData> {
        self.resolver.resolve(account)
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext").finish_non_exhaustive()
    }
}

/// Connection parameters for starting a session
///
/// Backends validate the parts they need and fail session start with a
/// configuration error when something required is malformed or missing. The
/// mock backend needs none of these; a real gateway client would require
/// credentials and an endpoint.
#[derive(Debug, Clone, Default)]
pub struct ConnectionParams {
    pub endpoint: Option<String>,
    pub credentials: Option<Arc<dyn Credentials>>,
    /// Free-form backend-specific parameters
    pub extra: HashMap<String, String>,
}

impl ConnectionParams {
    /// The opaque authorization header value, when credentials are present
    pub fn authorization_header(&self) -> Option<String> {
        self.credentials.as_ref().map(|c| c.authorization_header())
    }
}

/// Per-connection operation context
///
/// Created by a backend's `start_session`; resolves accounts and mints
/// transaction identifiers. The identifier counter is shared with the owning
/// backend instance, so ids stay unique across all of its sessions.
#[derive(Debug)]
pub struct PaySession {
    processor: String,
    context: SessionContext,
    connect_token: Option<String>,
    next_id: Arc<AtomicU64>,
}

impl PaySession {
    /// Create a session
    ///
    /// Backends call this from `start_session`; `next_id` is the backend's
    /// shared identifier counter and `connect_token` any connection-scoped
    /// token the backend acquired for this session.
    pub fn new(
        processor: impl Into<String>,
        context: SessionContext,
        connect_token: Option<String>,
        next_id: Arc<AtomicU64>,
    ) -> Self {
        PaySession {
            processor: processor.into(),
            context,
            connect_token,
            next_id,
        }
    }

    /// Name of the backend this session belongs to
    pub fn processor(&self) -> &str {
        &self.processor
    }

    /// Connection-scoped token acquired at session start, if any
    pub fn connect_token(&self) -> Option<&str> {
        self.connect_token.as_deref()
    }

    /// Resolve an account to its current vault record
    ///
    /// Returns `None` when the session's context has no record for the
    /// account.
    pub fn fetch_account_data(&self, account: &Account) -> Option<ActualAccountData> {
        self.context.resolve(account)
    }

    /// Mint a transaction identifier
    ///
    /// Identifiers are unique within the owning backend instance and carry
    /// the operation kind's tag; uniqueness is the only contract, not
    /// ordering.
    pub fn generate_transaction_id(&self, kind: TransactionKind) -> TransactionId {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        TransactionId(format!("{}-{}-{}", self.processor, kind.tag(), n))
    }
}

impl Drop for PaySession {
    fn drop(&mut self) {
        // Connection-scoped resources go with the session, error paths included.
        tracing::debug!(processor = %self.processor, "pay session closed");
    }
}
