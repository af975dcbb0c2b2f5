use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{debug, info};
use url::Url;

use crate::{ApiError, Location, Polygon};

pub(crate) type HttpClient = ureq::Agent;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Read-once client for the location data service.
///
/// `get_locations` hits the service at most once per session; the result is
/// cached and every later call (including the per-id lookup) is served from
/// the cache. Polygon fetches are not cached, they are detail data requested
/// on demand.
pub struct LocationClient {
    agent: HttpClient,
    /// Base url of the dataset root. Must end with a `/` so relative joins
    /// land under it (e.g. `https://host/datasets/`).
    base: Url,
    locations: Mutex<Option<Arc<Vec<Location>>>>,
}

impl LocationClient {
    pub fn new(base: Url) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
            base,
            locations: Mutex::new(None),
        }
    }

    /// A client whose session cache is already populated. Used for offline
    /// datasets loaded from disk; no request is ever made for the list.
    pub fn with_locations(base: Url, locations: Vec<Location>) -> Self {
        let client = Self::new(base);
        *client.locations.lock().unwrap() = Some(Arc::new(locations));
        client
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(path)?)
    }

    /// All locations, fetched once and cached for the session.
    pub fn get_locations(&self) -> Result<Arc<Vec<Location>>, ApiError> {
        if let Some(cached) = self.locations.lock().unwrap().as_ref() {
            return Ok(cached.clone());
        }
        let url = self.endpoint("locations.json")?;
        debug!(%url, "fetching location list");
        let list: Vec<Location> = self
            .agent
            .request_url("GET", &url)
            .call()
            .map_err(Box::new)?
            .into_json()?;
        info!(count = list.len(), "location list loaded");
        let list = Arc::new(list);
        *self.locations.lock().unwrap() = Some(list.clone());
        Ok(list)
    }

    /// Summary lookup for one location, served from the cached list.
    pub fn get_location(&self, id: &str) -> Result<Location, ApiError> {
        self.get_locations()?
            .iter()
            .find(|loc| loc.id == id)
            .cloned()
            .ok_or_else(|| ApiError::UnknownId(id.to_string()))
    }

    /// Detail outline for one location. Single-attempt, never cached.
    pub fn get_polygon(&self, id: &str) -> Result<Polygon, ApiError> {
        let url = self.endpoint(&format!("polygons/{id}.json"))?;
        debug!(%url, "fetching polygon");
        let polygon = self
            .agent
            .request_url("GET", &url)
            .call()
            .map_err(Box::new)?
            .into_json()?;
        Ok(polygon)
    }
}
