use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Initiator {
    pub nqn: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddInitiatorParams {
    pub host_nqn: String,
}
