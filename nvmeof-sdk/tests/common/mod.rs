use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use nvmeof_sdk::{
    gateway::Gateway,
    initiator::{AddInitiatorParams, Initiator},
    listener::{CreateListenerParams, Listener},
    namespace::{CreateNamespaceParams, EditNamespaceParams, Namespace},
    subsystem::{CreateSubsystemParams, Subsystem},
    Client, MAX_NAMESPACE,
};
use serde::Deserialize;
use tokio::{
    net::TcpListener,
    sync::{oneshot, RwLock},
};
use uuid::Uuid;

/// Spawn an in-process mock gateway and hand back a client pointed at it.
pub async fn setup() -> Client {
    let (port_tx, port_rx) = oneshot::channel();

    tokio::spawn(async move {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        port_tx.send(port).unwrap();
        axum::serve(listener, app()).await.unwrap();
    });

    let port = port_rx.await.unwrap();
    Client::new(format!("http://127.0.0.1:{port}/api/nvmeof"))
}

#[derive(Clone)]
struct SubsystemEntry {
    subsystem: Subsystem,
    initiators: Vec<Initiator>,
    listeners: Vec<Listener>,
    namespaces: Vec<Namespace>,
    next_nsid: u32,
}

type Gw = Arc<RwLock<HashMap<String, SubsystemEntry>>>;

fn app() -> Router {
    let gw: Gw = Arc::new(RwLock::new(HashMap::new()));
    let api = Router::new()
        .route("/gateway", get(list_gateways))
        .route("/subsystem", get(list_subsystems).post(create_subsystem))
        .route(
            "/subsystem/{nqn}",
            get(get_subsystem).delete(delete_subsystem),
        )
        .route(
            "/subsystem/{nqn}/host",
            get(list_initiators).post(add_initiator),
        )
        .route("/subsystem/{nqn}/host/{host_nqn}", delete(remove_initiator))
        .route(
            "/subsystem/{nqn}/listener",
            get(list_listeners).post(create_listener),
        )
        .route(
            "/subsystem/{nqn}/listener/{host_name}/{traddr}",
            delete(delete_listener),
        )
        .route(
            "/subsystem/{nqn}/namespace",
            get(list_namespaces).post(create_namespace),
        )
        .route(
            "/subsystem/{nqn}/namespace/{nsid}",
            get(get_namespace).patch(update_namespace).delete(delete_namespace),
        )
        .with_state(gw);
    Router::new().nest("/api/nvmeof", api)
}

// Subsystem views always carry the live namespace count.
fn view(entry: &SubsystemEntry) -> Subsystem {
    let mut subsystem = entry.subsystem.clone();
    subsystem.namespace_count = entry.namespaces.len() as u32;
    subsystem
}

async fn list_gateways() -> Json<Vec<Gateway>> {
    Json(vec![Gateway {
        name: "gw-node-1".to_string(),
        group: "default".to_string(),
        addr: "127.0.0.1".to_string(),
        port: 4420,
        version: "1.2.5".to_string(),
        spdk_version: Some("24.01".to_string()),
    }])
}

async fn list_subsystems(State(gw): State<Gw>) -> Json<Vec<Subsystem>> {
    let gw = gw.read().await;
    Json(gw.values().map(view).collect())
}

async fn get_subsystem(
    State(gw): State<Gw>,
    Path(nqn): Path<String>,
) -> Result<Json<Subsystem>, StatusCode> {
    let gw = gw.read().await;
    gw.get(&nqn)
        .map(|entry| Json(view(entry)))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_subsystem(
    State(gw): State<Gw>,
    Json(params): Json<CreateSubsystemParams>,
) -> Result<(StatusCode, Json<Subsystem>), StatusCode> {
    let mut gw = gw.write().await;
    if gw.contains_key(&params.nqn) {
        return Err(StatusCode::BAD_REQUEST);
    }
    let subsystem = Subsystem {
        nqn: params.nqn.clone(),
        serial_number: format!("SPDK{:011}", gw.len() + 1),
        model_number: "SPDK bdev Controller".to_string(),
        max_namespaces: params.max_namespaces.unwrap_or(MAX_NAMESPACE),
        namespace_count: 0,
        enable_ha: params.enable_ha,
    };
    gw.insert(
        params.nqn,
        SubsystemEntry {
            subsystem: subsystem.clone(),
            initiators: Vec::new(),
            listeners: Vec::new(),
            namespaces: Vec::new(),
            next_nsid: 1,
        },
    );
    Ok((StatusCode::CREATED, Json(subsystem)))
}

async fn delete_subsystem(State(gw): State<Gw>, Path(nqn): Path<String>) -> StatusCode {
    let mut gw = gw.write().await;
    match gw.remove(&nqn) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}

async fn list_initiators(
    State(gw): State<Gw>,
    Path(nqn): Path<String>,
) -> Result<Json<Vec<Initiator>>, StatusCode> {
    let gw = gw.read().await;
    gw.get(&nqn)
        .map(|entry| Json(entry.initiators.clone()))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn add_initiator(
    State(gw): State<Gw>,
    Path(nqn): Path<String>,
    Json(params): Json<AddInitiatorParams>,
) -> Result<StatusCode, StatusCode> {
    let mut gw = gw.write().await;
    let entry = gw.get_mut(&nqn).ok_or(StatusCode::NOT_FOUND)?;
    entry.initiators.push(Initiator {
        nqn: params.host_nqn,
    });
    Ok(StatusCode::CREATED)
}

async fn remove_initiator(
    State(gw): State<Gw>,
    Path((nqn, host_nqn)): Path<(String, String)>,
) -> StatusCode {
    let mut gw = gw.write().await;
    let Some(entry) = gw.get_mut(&nqn) else {
        return StatusCode::NOT_FOUND;
    };
    let before = entry.initiators.len();
    entry.initiators.retain(|initiator| initiator.nqn != host_nqn);
    if entry.initiators.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn list_listeners(
    State(gw): State<Gw>,
    Path(nqn): Path<String>,
) -> Result<Json<Vec<Listener>>, StatusCode> {
    let gw = gw.read().await;
    gw.get(&nqn)
        .map(|entry| Json(entry.listeners.clone()))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_listener(
    State(gw): State<Gw>,
    Path(nqn): Path<String>,
    Json(params): Json<CreateListenerParams>,
) -> Result<StatusCode, StatusCode> {
    let mut gw = gw.write().await;
    let entry = gw.get_mut(&nqn).ok_or(StatusCode::NOT_FOUND)?;
    entry.listeners.push(Listener {
        host_name: params.host_name,
        traddr: params.traddr,
        trsvcid: params.trsvcid,
    });
    Ok(StatusCode::CREATED)
}

#[derive(Deserialize)]
struct DeleteListenerQuery {
    trsvcid: u16,
}

async fn delete_listener(
    State(gw): State<Gw>,
    Path((nqn, host_name, traddr)): Path<(String, String, String)>,
    Query(query): Query<DeleteListenerQuery>,
) -> StatusCode {
    let mut gw = gw.write().await;
    let Some(entry) = gw.get_mut(&nqn) else {
        return StatusCode::NOT_FOUND;
    };
    let before = entry.listeners.len();
    entry.listeners.retain(|listener| {
        listener.host_name != host_name
            || listener.traddr != traddr
            || listener.trsvcid != query.trsvcid
    });
    if entry.listeners.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn list_namespaces(
    State(gw): State<Gw>,
    Path(nqn): Path<String>,
) -> Result<Json<Vec<Namespace>>, StatusCode> {
    let gw = gw.read().await;
    gw.get(&nqn)
        .map(|entry| Json(entry.namespaces.clone()))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn get_namespace(
    State(gw): State<Gw>,
    Path((nqn, nsid)): Path<(String, u32)>,
) -> Result<Json<Namespace>, StatusCode> {
    let gw = gw.read().await;
    let entry = gw.get(&nqn).ok_or(StatusCode::NOT_FOUND)?;
    entry
        .namespaces
        .iter()
        .find(|ns| ns.nsid == nsid)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_namespace(
    State(gw): State<Gw>,
    Path(nqn): Path<String>,
    Json(params): Json<CreateNamespaceParams>,
) -> Result<(StatusCode, Json<Namespace>), StatusCode> {
    let mut gw = gw.write().await;
    let entry = gw.get_mut(&nqn).ok_or(StatusCode::NOT_FOUND)?;
    if entry.namespaces.len() as u32 >= entry.subsystem.max_namespaces {
        return Err(StatusCode::BAD_REQUEST);
    }
    let namespace = Namespace {
        nsid: entry.next_nsid,
        uuid: Uuid::new_v4(),
        rbd_image_name: params.rbd_image_name,
        rbd_pool: params.rbd_pool,
        rbd_image_size: params.size,
    };
    entry.next_nsid += 1;
    entry.namespaces.push(namespace.clone());
    Ok((StatusCode::CREATED, Json(namespace)))
}

async fn update_namespace(
    State(gw): State<Gw>,
    Path((nqn, nsid)): Path<(String, u32)>,
    Json(params): Json<EditNamespaceParams>,
) -> Result<Json<Namespace>, StatusCode> {
    let mut gw = gw.write().await;
    let entry = gw.get_mut(&nqn).ok_or(StatusCode::NOT_FOUND)?;
    let namespace = entry
        .namespaces
        .iter_mut()
        .find(|ns| ns.nsid == nsid)
        .ok_or(StatusCode::NOT_FOUND)?;
    namespace.rbd_image_size = params.rbd_image_size;
    Ok(Json(namespace.clone()))
}

async fn delete_namespace(
    State(gw): State<Gw>,
    Path((nqn, nsid)): Path<(String, u32)>,
) -> StatusCode {
    let mut gw = gw.write().await;
    let Some(entry) = gw.get_mut(&nqn) else {
        return StatusCode::NOT_FOUND;
    };
    let before = entry.namespaces.len();
    entry.namespaces.retain(|ns| ns.nsid != nsid);
    if entry.namespaces.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}
