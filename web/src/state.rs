use redpacket_sdk::{AccountAddress, LastCreatorStore, NodeApi, RedPacketViews};
use std::sync::Arc;

use crate::actions::ActionRegistry;

#[derive(Clone)]
pub struct AppState {
    pub node: Arc<dyn NodeApi>,
    pub module: AccountAddress,
    pub base_url: String,
    pub store: Arc<LastCreatorStore>,
    pub actions: Arc<ActionRegistry>,
}

impl AppState {
    pub fn new(
        node: Arc<dyn NodeApi>,
        module: AccountAddress,
        base_url: String,
        store: LastCreatorStore,
    ) -> Self {
        Self {
            node,
            module,
            base_url,
            store: Arc::new(store),
            actions: Arc::new(ActionRegistry::new()),
        }
    }

    pub fn views(&self) -> RedPacketViews<'_, dyn NodeApi> {
        RedPacketViews::new(self.node.as_ref(), self.module)
    }
}
