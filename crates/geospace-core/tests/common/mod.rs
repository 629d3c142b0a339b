#![allow(dead_code)]

use async_trait::async_trait;
use geospace_core::common::DbStats;
use geospace_core::prelude::*;
use geospace_core::text::fold_key;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// The bundled sample dataset, parsed fresh (no cache side effects).
pub fn sample_store() -> MemoryStore {
    let places = geospace_core::loader::load_raw_json(MemoryStore::default_dataset_path())
        .expect("sample dataset should parse");
    MemoryStore::new(places)
}

pub fn sample_space(config: GeoSpaceConfig) -> GeoSpace<MemoryStore> {
    GeoSpace::with_road(
        Arc::new(sample_store()),
        config,
        Arc::new(DisabledRoadDistance),
    )
}

/// Store decorator that stalls lookups for one folded name.
pub struct DelayedStore<S> {
    inner: S,
    slow_name: String,
    delay: Duration,
}

impl<S> DelayedStore<S> {
    pub fn new(inner: S, slow_name: &str, delay: Duration) -> Self {
        DelayedStore {
            inner,
            slow_name: fold_key(slow_name),
            delay,
        }
    }
}

#[async_trait]
impl<S: PlaceStore> PlaceStore for DelayedStore<S> {
    async fn lookup_by_name_or_alias(&self, query: &PlaceQuery) -> Result<Place> {
        if fold_key(&query.name) == self.slow_name {
            tokio::time::sleep(self.delay).await;
        }
        self.inner.lookup_by_name_or_alias(query).await
    }

    async fn query_bounding_box(&self, bbox: &BoundingBox) -> Result<Vec<Place>> {
        self.inner.query_bounding_box(bbox).await
    }

    async fn countries(&self) -> Result<Vec<String>> {
        self.inner.countries().await
    }

    async fn stats(&self) -> Result<DbStats> {
        self.inner.stats().await
    }
}

/// Store whose backend is always down.
pub struct BrokenStore;

#[async_trait]
impl PlaceStore for BrokenStore {
    async fn lookup_by_name_or_alias(&self, _query: &PlaceQuery) -> Result<Place> {
        Err(GeoError::Storage("connection refused".into()))
    }

    async fn query_bounding_box(&self, _bbox: &BoundingBox) -> Result<Vec<Place>> {
        Err(GeoError::Storage("connection refused".into()))
    }

    async fn countries(&self) -> Result<Vec<String>> {
        Err(GeoError::Storage("connection refused".into()))
    }

    async fn stats(&self) -> Result<DbStats> {
        Err(GeoError::Storage("connection refused".into()))
    }
}

pub fn http_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

/// Spawns a fake routing upstream answering every connection with
/// `response` after `delay`. Returns its base URL.
pub async fn fake_upstream(response: String, delay: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let addr = listener.local_addr().expect("address should exist");

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let response = response.clone();
            tokio::spawn(async move {
                let mut buffer = [0_u8; 4096];
                let _ = socket.read(&mut buffer).await;
                tokio::time::sleep(delay).await;
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{addr}")
}

/// A base URL nothing listens on.
pub async fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let addr = listener.local_addr().expect("address should exist");
    drop(listener);
    format!("http://{addr}")
}
