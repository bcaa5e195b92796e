//! Realtime Database REST backend.
//!
//! Speaks the Realtime Database REST protocol: the JSON tree is
//! addressed as `{base_url}/{path}.json`, with `GET` for reads, `PUT`
//! for full-replace writes, and `DELETE` for removal. An ID token can
//! be attached as the `auth` query parameter.
//!
//! Change subscriptions are implemented by polling: the watch task
//! re-reads the path at a fixed interval and emits only when the value
//! changed. Intermediate states between two polls are coalesced, which
//! the store contract permits.

use super::{push_key, RemoteStore, Snapshot, StoreError, StoreWatch};
use recetario_types::StorePath;
use serde_json::Value;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::warn;

/// Default interval between watch polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// [`RemoteStore`] backend over the Realtime Database REST protocol.
///
/// Cloning is cheap; clones share the underlying HTTP connection pool.
///
/// # Example
///
/// ```no_run
/// use recetario_store::RestStore;
/// use std::time::Duration;
///
/// let store = RestStore::new("https://recetasapp-default-rtdb.firebaseio.com")
///     .with_poll_interval(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct RestStore {
    http: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
    poll_interval: Duration,
}

impl RestStore {
    /// Creates a backend for the database at `base_url`.
    ///
    /// A trailing slash on `base_url` is ignored.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            auth_token: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Attaches an ID token sent as the `auth` query parameter.
    #[must_use]
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Sets the interval between watch polls.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Returns the REST endpoint for a path.
    fn url_for(&self, path: &StorePath) -> String {
        format!("{}/{}.json", self.base_url, path)
    }

    fn request(&self, method: reqwest::Method, path: &StorePath) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, self.url_for(path));
        if let Some(token) = &self.auth_token {
            builder = builder.query(&[("auth", token)]);
        }
        builder
    }

    async fn expect_success(
        response: reqwest::Response,
        path: &StorePath,
    ) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(StoreError::status(status.as_u16(), path.to_string()))
        }
    }
}

impl RemoteStore for RestStore {
    async fn read(&self, path: &StorePath) -> Result<Snapshot, StoreError> {
        let response = self.request(reqwest::Method::GET, path).send().await?;
        let response = Self::expect_success(response, path).await?;

        // The protocol answers `null` for absent paths; Snapshot::of
        // normalizes that to absence.
        let value: Value = response.json().await?;
        Ok(Snapshot::of(value))
    }

    async fn write(&self, path: &StorePath, value: Value) -> Result<(), StoreError> {
        let response = self
            .request(reqwest::Method::PUT, path)
            .json(&value)
            .send()
            .await?;
        Self::expect_success(response, path).await?;
        Ok(())
    }

    async fn delete(&self, path: &StorePath) -> Result<(), StoreError> {
        let response = self.request(reqwest::Method::DELETE, path).send().await?;
        Self::expect_success(response, path).await?;
        Ok(())
    }

    async fn push_key(&self, _path: &StorePath) -> Result<String, StoreError> {
        // Keys are minted client-side, exactly like the SDKs do, so
        // the key exists before the write that fills it.
        Ok(push_key())
    }

    /// Opens a polling subscription on `path`.
    ///
    /// Must be called within a tokio runtime. Poll failures are logged
    /// and retried at the next tick; the watch survives transient
    /// faults.
    fn watch(&self, path: &StorePath) -> StoreWatch {
        let (tx, rx) = mpsc::unbounded_channel();
        let store = self.clone();
        let path = path.clone();
        let interval = self.poll_interval;

        let poller = tokio::spawn(async move {
            let mut last: Option<Snapshot> = None;
            loop {
                match store.read(&path).await {
                    Ok(snapshot) => {
                        if last.as_ref() != Some(&snapshot) {
                            if tx.send(snapshot.clone()).is_err() {
                                break;
                            }
                            last = Some(snapshot);
                        }
                    }
                    Err(e) => {
                        warn!(path = %path, error = %e, "watch poll failed");
                    }
                }
                tokio::time::sleep(interval).await;
            }
        });

        StoreWatch::new(rx, move || poller.abort())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_appends_json_suffix() {
        let store = RestStore::new("https://db.example.com");
        let path = StorePath::root("customRecipes").child("u1").child("r1");
        assert_eq!(
            store.url_for(&path),
            "https://db.example.com/customRecipes/u1/r1.json"
        );
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let store = RestStore::new("https://db.example.com/");
        let path = StorePath::root("customRecipes");
        assert_eq!(
            store.url_for(&path),
            "https://db.example.com/customRecipes.json"
        );
    }

    #[test]
    fn builders_set_fields() {
        let store = RestStore::new("https://db.example.com")
            .with_auth_token("tok")
            .with_poll_interval(Duration::from_millis(250));
        assert_eq!(store.auth_token.as_deref(), Some("tok"));
        assert_eq!(store.poll_interval, Duration::from_millis(250));
    }
}
