use std::sync::Arc;

use paygate::application::gateway::Gateway;
use paygate::config::GatewayConfig;
use paygate::domain::customer::CustomerRequest;
use paygate::infrastructure::in_memory::InMemoryRemoteClient;

/// Builds a gateway over a fresh in-memory remote client.
///
/// The returned client handle shares state with the one inside the gateway,
/// so tests can inspect the remote call counter.
pub fn gateway() -> (Gateway, InMemoryRemoteClient) {
    let client = InMemoryRemoteClient::new();
    let config =
        GatewayConfig::new("sandbox", "merchant_id", "public_key", "private_key").unwrap();
    (Gateway::new(config, Arc::new(client.clone())), client)
}

#[allow(dead_code)]
pub fn customer(id: &str) -> CustomerRequest {
    CustomerRequest {
        id: Some(id.to_string()),
        ..Default::default()
    }
}
