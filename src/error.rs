//! Typed errors for registry validation and recommendation lookups.
//!
//! Loader-side failures (missing files, malformed CSVs) stay on `anyhow`
//! with context; these are the errors the library contract exposes.

use thiserror::Error;

/// Static data-integrity failures, checked once when the symptom registry
/// is built. A registry that fails here never reaches the scoring engine.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A compound target whose threshold cannot be scored: a minimum of
    /// zero or below, an inverted preferred range, or a terpene target
    /// that is not minimum-kind.
    #[error("profile '{profile}': malformed target for '{compound}': {reason}")]
    MalformedCompoundTarget {
        profile: String,
        compound: String,
        reason: String,
    },

    /// A profile references a compound id absent from the reference table.
    #[error("profile '{profile}' references unknown compound '{compound}'")]
    UnknownCompound { profile: String, compound: String },
}

/// Errors surfaced by the ranking service.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// The requested symptom key has no registered profile. Surfaced
    /// explicitly rather than defaulting to some other profile.
    #[error("no symptom profile registered for '{0}'")]
    ProfileNotFound(String),
}
