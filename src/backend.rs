//! Data access for the REST backend: request descriptors, an injectable HTTP
//! client, an explicit query cache, and the load/mutate hook pair the pages
//! are built on. Cache invalidation is an explicit call after a successful
//! mutation; there is no hidden library state.

use futures::future::LocalBoxFuture;
use leptos::logging::error;
use leptos::*;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// The wire shape of one backend call: method, url, query parameters, and an
/// optional JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub params: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestDescriptor {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            params: Vec::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn param_value(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Url with the percent-encoded query string appended.
    pub fn url_with_query(&self) -> String {
        if self.params.is_empty() {
            return self.url.clone();
        }
        let query = self
            .params
            .iter()
            .map(|(name, value)| {
                format!("{}={}", urlencoding::encode(name), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.url, query)
    }
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status {status}")]
    Status { status: u16 },
    #[error("malformed response: {0}")]
    Decode(String),
}

type SendFn = dyn Fn(RequestDescriptor) -> LocalBoxFuture<'static, Result<Value, ApiError>>;

/// The sender behind every backend call. Production uses [`ApiClient::over_http`];
/// tests inject a recording stub through [`ApiClient::new`].
#[derive(Clone)]
pub struct ApiClient {
    send_fn: Rc<SendFn>,
}

impl ApiClient {
    pub fn new<F>(send_fn: F) -> Self
    where
        F: Fn(RequestDescriptor) -> LocalBoxFuture<'static, Result<Value, ApiError>> + 'static,
    {
        Self {
            send_fn: Rc::new(send_fn),
        }
    }

    /// gloo-net sender. 2xx responses parse as JSON (empty bodies become
    /// null); anything else is a status error.
    pub fn over_http() -> Self {
        Self::new(|descriptor: RequestDescriptor| {
            Box::pin(async move {
                let url = descriptor.url_with_query();
                let builder = match descriptor.method {
                    Method::Get => gloo_net::http::Request::get(&url),
                    Method::Post => gloo_net::http::Request::post(&url),
                    Method::Put => gloo_net::http::Request::put(&url),
                    Method::Delete => gloo_net::http::Request::delete(&url),
                };
                let response = match &descriptor.body {
                    Some(body) => builder
                        .json(body)
                        .map_err(|err| ApiError::Network(err.to_string()))?
                        .send()
                        .await,
                    None => builder.send().await,
                }
                .map_err(|err| ApiError::Network(err.to_string()))?;
                if !response.ok() {
                    return Err(ApiError::Status {
                        status: response.status(),
                    });
                }
                let text = response
                    .text()
                    .await
                    .map_err(|err| ApiError::Network(err.to_string()))?;
                if text.is_empty() {
                    return Ok(Value::Null);
                }
                serde_json::from_str(&text).map_err(|err| ApiError::Decode(err.to_string()))
            })
        })
    }

    pub async fn send(&self, descriptor: RequestDescriptor) -> Result<Value, ApiError> {
        (self.send_fn)(descriptor).await
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
struct QueryState {
    data: Option<Value>,
    error: Option<ApiError>,
}

#[derive(Clone)]
struct CacheEntry {
    state: RwSignal<QueryState>,
    descriptor: Rc<RefCell<Option<RequestDescriptor>>>,
    in_flight: Rc<Cell<bool>>,
}

/// Explicit key -> state map. Each entry remembers the descriptor it was
/// registered with so an invalidation can re-issue the same GET. Entry
/// signals are created under the owner that built the cache (the app root),
/// so they outlive the page that first asked for the key.
#[derive(Clone, Default)]
pub struct QueryCache {
    entries: Rc<RefCell<HashMap<String, CacheEntry>>>,
    owner: Option<Owner>,
}

impl QueryCache {
    fn at_current_owner() -> Self {
        Self {
            entries: Rc::default(),
            owner: Owner::current(),
        }
    }

    fn create_state(&self) -> RwSignal<QueryState> {
        match self.owner {
            Some(owner) => try_with_owner(owner, || create_rw_signal(QueryState::default()))
                .unwrap_or_else(|_| create_rw_signal(QueryState::default())),
            None => create_rw_signal(QueryState::default()),
        }
    }

    fn entry(&self, key: &str) -> CacheEntry {
        if let Some(entry) = self.entries.borrow().get(key) {
            return entry.clone();
        }
        let entry = CacheEntry {
            state: self.create_state(),
            descriptor: Rc::new(RefCell::new(None)),
            in_flight: Rc::new(Cell::new(false)),
        };
        self.entries
            .borrow_mut()
            .insert(key.to_string(), entry.clone());
        entry
    }

    fn lookup(&self, key: &str) -> Option<CacheEntry> {
        self.entries.borrow().get(key).cloned()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryStatus {
    Loading,
    Ready,
}

/// One query's view of the cache: typed data, last error, and status.
pub struct BackendQuery<T: 'static> {
    pub data: Signal<Option<T>>,
    pub error: Signal<Option<ApiError>>,
    pub status: Signal<QueryStatus>,
}

impl<T> Clone for BackendQuery<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for BackendQuery<T> {}

/// Client plus cache; the unit pages receive by injection.
#[derive(Clone)]
pub struct Backend {
    client: ApiClient,
    cache: QueryCache,
}

impl Backend {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            cache: QueryCache::at_current_owner(),
        }
    }

    pub fn over_http() -> Self {
        Self::new(ApiClient::over_http())
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Re-issues the GET registered under `key`, if any. No-op for keys that
    /// were never queried.
    pub fn invalidate(&self, key: &str) {
        if let Some(entry) = self.cache.lookup(key) {
            self.refetch(key.to_string(), entry);
        }
    }

    fn refetch(&self, key: String, entry: CacheEntry) {
        // the server renders the loading state; fetching happens after
        // hydration
        if !cfg!(target_arch = "wasm32") {
            return;
        }
        // in-flight requests are deduped per key
        if entry.in_flight.get() {
            return;
        }
        let Some(descriptor) = entry.descriptor.borrow().clone() else {
            return;
        };
        entry.in_flight.set(true);
        let client = self.client.clone();
        spawn_local(async move {
            let result = client.send(descriptor).await;
            entry.in_flight.set(false);
            match result {
                Ok(value) => {
                    entry.state.try_update(|state| {
                        state.data = Some(value);
                        state.error = None;
                    });
                }
                Err(err) => {
                    error!("[backend] GET {key} failed: {err}");
                    // keep any stale data; a page that never loaded stays in
                    // its loading state
                    entry.state.try_update(|state| state.error = Some(err));
                }
            }
        });
    }
}

/// Registers `descriptor` under `cache_key`, starts (or joins) the fetch, and
/// returns the typed signals. A decode failure is treated like a transport
/// failure: logged, data stays absent.
pub fn use_backend<T>(
    backend: &Backend,
    cache_key: &str,
    descriptor: RequestDescriptor,
) -> BackendQuery<T>
where
    T: DeserializeOwned + 'static,
{
    let entry = backend.cache.entry(cache_key);
    *entry.descriptor.borrow_mut() = Some(descriptor);
    backend.refetch(cache_key.to_string(), entry.clone());

    let key = cache_key.to_string();
    let state = entry.state;
    let data = Signal::derive(move || {
        state.with(|s| {
            let value = s.data.as_ref()?;
            match serde_json::from_value::<T>(value.clone()) {
                Ok(typed) => Some(typed),
                Err(err) => {
                    error!("[backend] GET {key} returned an unexpected shape: {err}");
                    None
                }
            }
        })
    });
    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    let status = Signal::derive(move || {
        state.with(|s| {
            if s.data.is_some() {
                QueryStatus::Ready
            } else {
                QueryStatus::Loading
            }
        })
    });
    BackendQuery {
        data,
        error,
        status,
    }
}

/// Handle returned by [`use_backend_mutation`].
pub struct Mutation<R: 'static> {
    run: Rc<dyn Fn(R)>,
    pub is_success: ReadSignal<bool>,
    pub response: ReadSignal<Option<Value>>,
}

impl<R> Clone for Mutation<R> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
            is_success: self.is_success,
            response: self.response,
        }
    }
}

impl<R> Mutation<R> {
    pub fn mutate(&self, record: R) {
        (self.run)(record);
    }
}

/// Builds a mutation: `to_descriptor` maps the record to a request; on
/// success the response is stored, `on_success` runs, the given cache keys
/// are invalidated, and `is_success` is raised. Failures are logged and
/// change nothing.
pub fn use_backend_mutation<R, D, S>(
    backend: &Backend,
    to_descriptor: D,
    invalidate_keys: Vec<String>,
    on_success: S,
) -> Mutation<R>
where
    R: 'static,
    D: Fn(&R) -> RequestDescriptor + 'static,
    S: Fn(&Value) + 'static,
{
    let (is_success, set_is_success) = create_signal(false);
    let (response, set_response) = create_signal(None::<Value>);
    let backend = backend.clone();
    let on_success = Rc::new(on_success);
    let run = Rc::new(move |record: R| {
        let descriptor = to_descriptor(&record);
        let backend = backend.clone();
        let keys = invalidate_keys.clone();
        let on_success = Rc::clone(&on_success);
        spawn_local(async move {
            match backend.client().send(descriptor).await {
                Ok(value) => {
                    set_response.try_set(Some(value.clone()));
                    on_success(&value);
                    for key in &keys {
                        backend.invalidate(key);
                    }
                    set_is_success.try_set(true);
                }
                Err(err) => {
                    error!("[backend] mutation failed: {err}");
                }
            }
        });
    });
    Mutation {
        run,
        is_success,
        response,
    }
}
