/// Browser-like request identity for the catalog API
///
/// The catalog rejects requests that do not look like its own web client, so
/// every request carries a random device id plus a fixed set of browser headers.
use rand::{distributions::Alphanumeric, rngs::StdRng, Rng, SeedableRng};
use std::sync::Mutex;

pub const DEVICE_ID_LENGTH: usize = 22;

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Random alphanumeric device id drawn from `rng`
pub fn generate_device_id<R: Rng>(rng: &mut R) -> String {
    (0..DEVICE_ID_LENGTH)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

/// Full header set for one catalog request
pub fn catalog_headers(device_id: &str) -> Vec<(String, String)> {
    [
        ("Host", "apis.justwatch.com"),
        ("sec-ch-ua-platform", "\"macOS\""),
        ("sec-ch-ua", "\"Chromium\";v=\"131\", \"Not A(Brand\";v=\"24\""),
        ("sec-ch-ua-mobile", "?0"),
        ("App-Version", "3.13.0-web-web"),
        ("DEVICE-ID", device_id),
        ("accept", "*/*"),
        ("content-type", "application/json"),
        ("User-Agent", USER_AGENT),
        ("Origin", "https://www.justwatch.com"),
        ("Referer", "https://www.justwatch.com/"),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value.to_string()))
    .collect()
}

/// Owns the random source used for device ids
pub struct IdentityGenerator {
    rng: Mutex<StdRng>,
}

impl IdentityGenerator {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic generator for tests and reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn device_id(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        generate_device_id(&mut *rng)
    }

    /// Fresh identity wrapped in the full header set
    pub fn headers(&self) -> Vec<(String, String)> {
        catalog_headers(&self.device_id())
    }
}

impl Default for IdentityGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}
