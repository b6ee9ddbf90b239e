use std::fmt::Display;
use std::future::Future;

use dioxus::prelude::*;
use types::ListEnvelope;

type Fetched<T> = Result<ListEnvelope<T>, String>;

/// A remote record collection with loading and error signals.
///
/// Listing views read a snapshot through [`RecordProvider::records`]; while
/// the first fetch is in flight, or after it failed, the snapshot is empty.
pub struct RecordProvider<T: 'static> {
    resource: Resource<Fetched<T>>,
    generation: Signal<u32>,
}

impl<T: 'static> Clone for RecordProvider<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for RecordProvider<T> {}

impl<T: Clone + 'static> RecordProvider<T> {
    pub fn records(&self) -> Vec<T> {
        match &*self.resource.read() {
            Some(Ok(envelope)) => envelope.data.clone(),
            _ => Vec::new(),
        }
    }

    /// The upstream's own record count, before any client-side filtering.
    pub fn total(&self) -> usize {
        match &*self.resource.read() {
            Some(Ok(envelope)) => envelope.total,
            _ => 0,
        }
    }

    /// True until the first response (or failure) arrives.
    pub fn is_loading(&self) -> bool {
        self.resource.read().is_none()
    }

    /// True while any fetch, including a refetch, is in flight.
    pub fn is_fetching(&self) -> bool {
        !self.resource.finished()
    }

    pub fn is_error(&self) -> bool {
        matches!(&*self.resource.read(), Some(Err(_)))
    }

    pub fn error(&self) -> Option<String> {
        match &*self.resource.read() {
            Some(Err(message)) => Some(message.clone()),
            _ => None,
        }
    }

    /// Fetch again, bypassing any server-side cache.
    pub fn refetch(&self) {
        let mut generation = self.generation;
        *generation.write() += 1;
    }
}

/// Bind a record provider to a fetch function.
///
/// `fetch` receives `true` for every fetch after the first, so explicit
/// refetches skip the server's cache.
pub fn use_records<T, E, F, Fut>(fetch: F) -> RecordProvider<T>
where
    T: 'static,
    E: Display + 'static,
    F: Fn(bool) -> Fut + 'static,
    Fut: Future<Output = Result<ListEnvelope<T>, E>> + 'static,
{
    let generation = use_signal(|| 0u32);

    let resource = use_resource(move || {
        let refresh = generation() > 0;
        let pending = fetch(refresh);

        async move {
            pending.await.map_err(|error| {
                let message = error.to_string();
                tracing::warn!(%message, refresh, "record fetch failed");
                message
            })
        }
    });

    RecordProvider {
        resource,
        generation,
    }
}
