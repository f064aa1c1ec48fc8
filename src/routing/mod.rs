//! Coordinator seam.
//!
//! Understanding a free-form message is delegated to an injected
//! [`IntentClassifier`]; the [`Coordinator`] only acts on the classified
//! [`Intent`], dispatching searches to the matching category specialist.

pub mod coordinator;
pub mod remote;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::FilterCriteria;
use crate::error::Result;

pub use coordinator::{Coordinator, CoordinatorReply};
pub use remote::RemoteClassifier;

/// Classified meaning of one user message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    /// Rental request with extracted criteria for one category
    Search { criteria: FilterCriteria },
    /// Greeting or small talk
    Greeting,
    /// Category could not be determined
    Ambiguous,
    /// Request spans several categories or asks for "anything"
    MultiCategory,
    /// Not about vehicle, accommodation or item rentals
    OutOfScope,
}

/// Capability that turns a message into an [`Intent`]
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    async fn classify(&self, message: &str) -> Result<Intent>;

    /// Get classifier name for logging
    fn name(&self) -> &str;
}
