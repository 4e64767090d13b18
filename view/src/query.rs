//! Single-entry query cache with a stale time.
//!
//! Data younger than the stale time is served without calling the query
//! function. A failed fetch is never cached and leaves the previous data in
//! place. Callers pass `now` explicitly so staleness is testable without
//! sleeping.

use std::future::Future;
use std::time::{Duration, Instant};

use tracing::debug;

struct Entry<T> {
    data: T,
    fetched_at: Instant,
}

pub struct QueryCache<T> {
    stale_time: Duration,
    entry: Option<Entry<T>>,
}

impl<T> QueryCache<T> {
    pub fn new(stale_time: Duration) -> Self {
        Self {
            stale_time,
            entry: None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.entry.as_ref().map(|e| &e.data)
    }

    /// True when there is no data or the data is at least `stale_time` old.
    pub fn is_stale(&self, now: Instant) -> bool {
        match &self.entry {
            Some(entry) => now.saturating_duration_since(entry.fetched_at) >= self.stale_time,
            None => true,
        }
    }

    /// Return cached data if fresh, otherwise run `query_fn` and cache its
    /// result.
    pub async fn fetch<F, Fut, E>(&mut self, now: Instant, query_fn: F) -> Result<&T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let stale_time = self.stale_time;
        let entry = match self.entry.take() {
            Some(entry) if now.saturating_duration_since(entry.fetched_at) < stale_time => {
                debug!("serving cached query data");
                self.entry.insert(entry)
            }
            previous => {
                debug!("query data missing or stale, fetching");
                match query_fn().await {
                    Ok(data) => self.entry.insert(Entry {
                        data,
                        fetched_at: now,
                    }),
                    Err(e) => {
                        self.entry = previous;
                        return Err(e);
                    }
                }
            }
        };
        Ok(&entry.data)
    }
}
