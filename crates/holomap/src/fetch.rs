use std::sync::{Arc, Mutex};

use holo_api::{Location, LocationClient};
use tracing::error;

/// Progress of the one-time background location fetch.
#[derive(Debug)]
pub enum FetchStatus {
    InFlight,
    Done(Arc<Vec<Location>>),
    Failed(String),
    /// The result has been handed to the frame loop.
    Consumed,
}

/// One outstanding location-list request per session.
///
/// The request runs on a worker thread; the frame loop polls `try_take`
/// every frame and builds markers exactly once when the result lands. There
/// is no retry and no cancellation; a failed fetch is logged and leaves the
/// registry empty.
pub struct LocationFetch {
    status: Arc<Mutex<FetchStatus>>,
}

impl LocationFetch {
    pub fn spawn(client: Arc<LocationClient>) -> Self {
        let status = Arc::new(Mutex::new(FetchStatus::InFlight));
        let worker_status = status.clone();
        std::thread::spawn(move || {
            let outcome = match client.get_locations() {
                Ok(list) => FetchStatus::Done(list),
                Err(e) => {
                    error!(error = %e, "location fetch failed");
                    FetchStatus::Failed(e.to_string())
                }
            };
            *worker_status.lock().unwrap() = outcome;
        });
        Self { status }
    }

    /// Takes the finished result, once. Returns `None` while the request is
    /// still in flight and after the result has been consumed.
    pub fn try_take(&self) -> Option<Result<Arc<Vec<Location>>, String>> {
        let mut guard = self.status.lock().unwrap();
        match &*guard {
            FetchStatus::InFlight | FetchStatus::Consumed => None,
            FetchStatus::Done(_) | FetchStatus::Failed(_) => {
                match std::mem::replace(&mut *guard, FetchStatus::Consumed) {
                    FetchStatus::Done(list) => Some(Ok(list)),
                    FetchStatus::Failed(message) => Some(Err(message)),
                    FetchStatus::InFlight | FetchStatus::Consumed => unreachable!(),
                }
            }
        }
    }
}
