pub mod tenant_registry;

pub use tenant_registry::{RegistryError, TenantRegistry};
