// Registry lookup layer
// - error.rs: Registry error types
// - npm.rs: npm registry implementation

pub mod error;
pub mod npm;

pub use error::RegistryError;
pub use npm::NpmRegistry;

/// Capability for resolving the latest published version of a package.
///
/// The orchestrator holds this as a trait object so alternate registries can
/// be added without touching the update flow, and so tests can inject stubs.
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches the version string the registry currently publishes as
    /// "latest" for `package_name`.
    async fn latest_version(&self, package_name: &str) -> Result<String, RegistryError>;
}
