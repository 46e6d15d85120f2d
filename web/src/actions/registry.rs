use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use super::claim::ClaimAction;
use super::create::CreateAction;
use crate::error::AppError;
use crate::responses::{
    ActionCompleteResponse, ActionGetResponse, ActionPostRequest, ActionPostResponse,
    ActionSubmitRequest,
};
use crate::state::AppState;

/// One user-facing operation: a card to render, an unsigned payload to sign, and the relay of
/// the signed result.
#[async_trait]
pub trait Action: Send + Sync {
    fn path(&self) -> &'static str;

    async fn metadata(
        &self,
        state: &AppState,
        params: HashMap<String, String>,
    ) -> Result<ActionGetResponse, AppError>;

    async fn execute(
        &self,
        state: &AppState,
        request: ActionPostRequest,
        params: HashMap<String, String>,
    ) -> Result<ActionPostResponse, AppError>;

    /// `signed_txn` is the decoded `request.signed_transaction`.
    async fn complete(
        &self,
        state: &AppState,
        request: ActionSubmitRequest,
        signed_txn: Vec<u8>,
        params: HashMap<String, String>,
    ) -> Result<ActionCompleteResponse, AppError>;
}

pub struct ActionRegistry {
    actions: HashMap<&'static str, Arc<dyn Action>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            actions: HashMap::new(),
        };
        registry.register(Arc::new(CreateAction));
        registry.register(Arc::new(ClaimAction));
        registry
    }

    fn register(&mut self, action: Arc<dyn Action>) {
        self.actions.insert(action.path(), action);
    }

    pub fn get(&self, path: &str) -> Result<Arc<dyn Action>, AppError> {
        self.actions
            .get(path)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Unknown action '{path}'")))
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
