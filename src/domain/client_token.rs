use serde::{Deserialize, Serialize};

/// An opaque token handed to browser/mobile clients so they can initialize
/// their side of the remote SDK. Generated fresh per request; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientToken {
    pub value: String,
}
