use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subsystem {
    pub nqn: String,
    pub serial_number: String,
    pub model_number: String,
    pub max_namespaces: u32,
    pub namespace_count: u32,
    pub enable_ha: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSubsystemParams {
    pub nqn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_namespaces: Option<u32>,
    pub enable_ha: bool,
}
