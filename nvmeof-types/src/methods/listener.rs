use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listener {
    pub host_name: String,
    pub traddr: String,
    pub trsvcid: u16,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateListenerParams {
    pub host_name: String,
    pub traddr: String,
    pub trsvcid: u16,
}
