use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::types::Tenant;

/// Namespace (and token) of the record every fresh process starts with
pub const SEED_NAMESPACE: &str = "tenant-internal";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("{0}")]
    Validation(String),
    #[error("Tenant already exists: {0}")]
    AlreadyExists(String),
    #[error("Tenant not found: {0}")]
    NotFound(String),
}

/// In-memory, insertion-ordered registry of tenants.
///
/// Cloning yields another handle to the same collection. Every operation takes
/// the lock once and finishes its check-then-act sequence before releasing it,
/// so concurrent requests never observe a half-applied mutation.
#[derive(Debug, Clone, Default)]
pub struct TenantRegistry {
    tenants: Arc<Mutex<Vec<Tenant>>>,
}

impl TenantRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tenants(tenants: Vec<Tenant>) -> Self {
        Self {
            tenants: Arc::new(Mutex::new(tenants)),
        }
    }

    /// Registry holding the single default tenant used at process start
    pub fn seeded() -> Self {
        Self::with_tenants(vec![Tenant::new(SEED_NAMESPACE, SEED_NAMESPACE)])
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Tenant>> {
        // A panic elsewhere cannot leave the Vec half-written; keep serving.
        self.tenants.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of all tenants in insertion order
    pub fn list(&self) -> Vec<Tenant> {
        self.lock().clone()
    }

    pub fn get(&self, namespace: &str) -> Option<Tenant> {
        self.lock().iter().find(|t| t.namespace == namespace).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn namespaces(&self) -> Vec<String> {
        self.lock().iter().map(|t| t.namespace.clone()).collect()
    }

    /// Append a new tenant.
    ///
    /// Empty `namespace` or `token` is rejected before the uniqueness check;
    /// callers map absent fields to the empty string.
    pub fn create(&self, namespace: &str, token: &str) -> Result<Tenant, RegistryError> {
        if namespace.is_empty() || token.is_empty() {
            return Err(RegistryError::Validation(
                "namespace and token required".to_string(),
            ));
        }

        let mut tenants = self.lock();
        if tenants.iter().any(|t| t.namespace == namespace) {
            return Err(RegistryError::AlreadyExists(namespace.to_string()));
        }

        let tenant = Tenant::new(namespace, token);
        tenants.push(tenant.clone());
        tracing::info!(namespace, "Added tenant");
        Ok(tenant)
    }

    /// Replace the token of an existing tenant, keeping its position
    pub fn update_token(&self, namespace: &str, token: &str) -> Result<Tenant, RegistryError> {
        if token.is_empty() {
            return Err(RegistryError::Validation("token required".to_string()));
        }

        let mut tenants = self.lock();
        let tenant = tenants
            .iter_mut()
            .find(|t| t.namespace == namespace)
            .ok_or_else(|| RegistryError::NotFound(namespace.to_string()))?;

        tenant.token = token.to_string();
        tracing::info!(namespace, "Updated tenant");
        Ok(tenant.clone())
    }

    /// Remove a tenant, returning its namespace
    pub fn delete(&self, namespace: &str) -> Result<String, RegistryError> {
        let mut tenants = self.lock();
        let initial_len = tenants.len();
        tenants.retain(|t| t.namespace != namespace);

        if tenants.len() == initial_len {
            return Err(RegistryError::NotFound(namespace.to_string()));
        }

        tracing::info!(namespace, "Removed tenant");
        Ok(namespace.to_string())
    }

    /// Swap in a whole new collection. Not routed; used by tests and bootstrap.
    pub fn replace_all(&self, tenants: Vec<Tenant>) {
        *self.lock() = tenants;
    }
}
