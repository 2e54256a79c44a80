use serde::{Deserialize, Serialize};

/// A single finding from one comparison run.
///
/// Exactly one variant per record. `Difference` is the only variant that
/// represents a genuine value mismatch; the message variants carry run
/// narration (`Info`), structural anomalies (`Warning`), and comparison
/// failures (`Error`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    /// Progress or context note, not an actionable finding.
    Info { message: String },
    /// A structural anomaly (count mismatch, missing or unresolved symbol)
    /// that is not itself a property-value comparison.
    Warning { message: String },
    /// A failure to complete a comparison (unknown type, missing resource).
    Error { message: String },
    /// A genuine value mismatch between two corresponding fields.
    ///
    /// Carries both path labels and both stringified values; `kind` is the
    /// comparison-rule label ("Bool", "Enum", "Numeric/float", ...).
    Difference {
        path_a: String,
        path_b: String,
        kind: String,
        value_a: String,
        value_b: String,
    },
}

impl Record {
    /// Returns `true` for the `Difference` variant.
    pub fn is_difference(&self) -> bool {
        matches!(self, Record::Difference { .. })
    }

    /// Returns `true` for the `Warning` variant.
    pub fn is_warning(&self) -> bool {
        matches!(self, Record::Warning { .. })
    }

    /// Returns `true` for the `Error` variant.
    pub fn is_error(&self) -> bool {
        matches!(self, Record::Error { .. })
    }

    /// Returns `true` for the `Info` variant.
    pub fn is_info(&self) -> bool {
        matches!(self, Record::Info { .. })
    }

    /// The message of a message-carrying variant, `None` for `Difference`.
    pub fn message(&self) -> Option<&str> {
        match self {
            Record::Info { message }
            | Record::Warning { message }
            | Record::Error { message } => Some(message),
            Record::Difference { .. } => None,
        }
    }
}
