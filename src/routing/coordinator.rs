use serde::Serialize;
use std::sync::Arc;

use crate::core::SearchResponse;
use crate::engine::FilterEngine;
use crate::error::Result;
use crate::routing::{Intent, IntentClassifier};

pub const GREETING_PROMPT: &str =
    "Please tell me what you are looking for: a vehicle, accommodation or item to rent.";

pub const CLARIFY_PROMPT: &str = "Are you looking for a vehicle, accommodation or item to rent?";

pub const SINGLE_CATEGORY_PROMPT: &str =
    "I can search one category at a time. Which matters most to you: a vehicle, accommodation or an item?";

pub const OUT_OF_SCOPE_PROMPT: &str =
    "Sorry, I can only help with renting vehicles, accommodation or items.";

/// What the coordinator hands back for one message
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoordinatorReply {
    /// A specialist ran the search
    Results { response: SearchResponse },
    /// No search ran; the user should answer this prompt
    Prompt { message: String },
}

impl CoordinatorReply {
    fn prompt(message: &str) -> Self {
        CoordinatorReply::Prompt {
            message: message.to_string(),
        }
    }
}

/// Routes classified messages to the category specialists
pub struct Coordinator {
    engine: Arc<FilterEngine>,
    classifier: Arc<dyn IntentClassifier>,
}

impl Coordinator {
    pub fn new(engine: Arc<FilterEngine>, classifier: Arc<dyn IntentClassifier>) -> Self {
        Self { engine, classifier }
    }

    /// Classify `message` and either search or answer with a prompt
    pub async fn handle(&self, message: &str) -> Result<CoordinatorReply> {
        let intent = self.classifier.classify(message).await?;
        tracing::debug!("{} classified message as {:?}", self.classifier.name(), intent);

        self.dispatch(intent).await
    }

    /// Act on an already classified intent
    pub async fn dispatch(&self, intent: Intent) -> Result<CoordinatorReply> {
        let reply = match intent {
            Intent::Search { criteria } => CoordinatorReply::Results {
                response: self.engine.search(&criteria).await?,
            },
            Intent::Greeting => CoordinatorReply::prompt(GREETING_PROMPT),
            Intent::Ambiguous => CoordinatorReply::prompt(CLARIFY_PROMPT),
            Intent::MultiCategory => CoordinatorReply::prompt(SINGLE_CATEGORY_PROMPT),
            Intent::OutOfScope => CoordinatorReply::prompt(OUT_OF_SCOPE_PROMPT),
        };

        Ok(reply)
    }
}
