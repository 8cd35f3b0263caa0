use iced::widget::image;
use log::{debug, warn};
use lru::LruCache;
use pulsecore::math::mercator::TileCoords;
use std::hash::Hash;
use std::num::NonZeroUsize;

/// OpenStreetMap raster tiles, `{z}/{x}/{y}.png`.
pub const TILE_SERVER: &str = "https://tile.openstreetmap.org";
const USER_AGENT: &str = concat!("PulseQuest-Explorer/", env!("CARGO_PKG_VERSION"));

pub const TILE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(300) {
    Some(capacity) => capacity,
    None => panic!("tile cache capacity must be non-zero"),
};
pub const PHOTO_CAPACITY: NonZeroUsize = match NonZeroUsize::new(48) {
    Some(capacity) => capacity,
    None => panic!("photo cache capacity must be non-zero"),
};

pub fn tile_url(coords: TileCoords) -> String {
    format!("{}/{}/{}/{}.png", TILE_SERVER, coords.z, coords.x, coords.y)
}

#[derive(Debug, Clone)]
enum Slot {
    Pending,
    Ready(image::Handle),
    Failed,
}

/// Downloaded images keyed by tile or URL. Failed downloads are remembered
/// and not retried for the session.
pub struct ImageCache<K: Hash + Eq> {
    slots: LruCache<K, Slot>,
}

impl<K: Hash + Eq + Clone> ImageCache<K> {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            slots: LruCache::new(capacity),
        }
    }

    /// Marks `key` as in flight. Returns `false` when it is already pending,
    /// loaded or failed; those are only refreshed in recency.
    pub fn begin(&mut self, key: K) -> bool {
        if self.slots.contains(&key) {
            self.slots.promote(&key);
            return false;
        }
        self.slots.put(key, Slot::Pending);
        true
    }

    pub fn finish(&mut self, key: K, handle: Option<image::Handle>) {
        let slot = match handle {
            Some(handle) => Slot::Ready(handle),
            None => Slot::Failed,
        };
        self.slots.put(key, slot);
    }

    pub fn ready(&self, key: &K) -> Option<&image::Handle> {
        match self.slots.peek(key) {
            Some(Slot::Ready(handle)) => Some(handle),
            _ => None,
        }
    }
}

pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|err| {
            warn!("falling back to default HTTP client: {}", err);
            reqwest::Client::new()
        })
}

async fn download(client: &reqwest::Client, url: &str) -> reqwest::Result<Vec<u8>> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.bytes().await?.to_vec())
}

/// Fetches one image. Failures are logged and leave the slot empty.
pub async fn fetch_image(client: reqwest::Client, url: String) -> Option<image::Handle> {
    match download(&client, &url).await {
        Ok(bytes) => {
            debug!("fetched {} ({} bytes)", url, bytes.len());
            Some(image::Handle::from_bytes(bytes))
        }
        Err(err) => {
            warn!("failed to fetch {}: {}", url, err);
            None
        }
    }
}
