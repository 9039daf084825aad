use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Namespace {
    pub nsid: u32,
    pub uuid: Uuid,
    pub rbd_image_name: String,
    pub rbd_pool: String,
    pub rbd_image_size: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateNamespaceParams {
    pub rbd_image_name: String,
    pub rbd_pool: String,
    pub size: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EditNamespaceParams {
    pub rbd_image_size: u64,
}
