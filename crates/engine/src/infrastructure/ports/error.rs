//! Error types for port operations.

/// Registry lookup errors with context for debugging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The lookup key names no record - includes entity type and name.
    #[error("{entity_type} not registered: {name}")]
    NotRegistered {
        entity_type: &'static str,
        name: String,
    },

    /// The registry is not initialised yet or failed internally.
    #[error("Registry unavailable in {operation}: {message}")]
    Unavailable {
        operation: &'static str,
        message: String,
    },
}

impl RegistryError {
    /// Create a NotRegistered error with entity type and name context.
    pub fn not_registered(entity_type: &'static str, name: impl ToString) -> Self {
        Self::NotRegistered {
            entity_type,
            name: name.to_string(),
        }
    }

    /// Create an Unavailable error with operation context.
    pub fn unavailable(operation: &'static str, message: impl ToString) -> Self {
        Self::Unavailable {
            operation,
            message: message.to_string(),
        }
    }

    /// Check if this is a NotRegistered error.
    pub fn is_not_registered(&self) -> bool {
        matches!(self, Self::NotRegistered { .. })
    }
}

/// Errors from settings storage.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Settings document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
