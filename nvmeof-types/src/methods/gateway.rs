use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gateway {
    pub name: String,
    pub group: String,
    pub addr: String,
    pub port: u16,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spdk_version: Option<String>,
}
