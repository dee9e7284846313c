use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

use hb_core::gateways::geocode::GeoCodingGateway;
use hb_entities::{address::AddressQuery, geo::MapPoint};

pub const DEFAULT_CACHE_CAPACITY: NonZeroUsize = NonZeroUsize::new(2500).unwrap();

/// Caching wrapper around a geocoding gateway.
///
/// Lookups are keyed by the normalized address. Only successful
/// resolutions are cached: a failed lookup is retried on the next
/// call. Cache hits never reach the inner gateway, so they are not
/// subject to its request throttling.
pub struct CachedGeocoder<G> {
    inner: G,
    cache: Mutex<LruCache<String, MapPoint>>,
}

impl<G> CachedGeocoder<G> {
    pub fn new(inner: G) -> Self {
        Self::with_capacity(inner, DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(inner: G, capacity: NonZeroUsize) -> Self {
        Self {
            inner,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }
}

impl<G> GeoCodingGateway for CachedGeocoder<G>
where
    G: GeoCodingGateway,
{
    fn resolve_address_lat_lng(&self, addr: &AddressQuery) -> Option<MapPoint> {
        let key = addr.normalized();
        if let Some(pos) = self.cache.lock().get(&key) {
            log::debug!("Using cached location {pos} for '{addr}'");
            return Some(*pos);
        }
        let pos = self.inner.resolve_address_lat_lng(addr)?;
        self.cache.lock().put(key, pos);
        Some(pos)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct CountingGateway {
        position: Option<MapPoint>,
        requests: Cell<usize>,
    }

    impl CountingGateway {
        fn new(position: Option<MapPoint>) -> Self {
            Self {
                position,
                requests: Cell::new(0),
            }
        }
    }

    impl GeoCodingGateway for CountingGateway {
        fn resolve_address_lat_lng(&self, _addr: &AddressQuery) -> Option<MapPoint> {
            self.requests.set(self.requests.get() + 1);
            self.position
        }
    }

    fn query(s: &str) -> AddressQuery {
        s.parse().unwrap()
    }

    #[test]
    fn repeated_lookup_hits_the_cache() {
        let pos = MapPoint::from_lat_lng_deg(38.8977, -77.0365);
        let geo = CachedGeocoder::new(CountingGateway::new(Some(pos)));
        let addr = query("1600 Pennsylvania Ave NW, Washington, DC");

        assert_eq!(Some(pos), geo.resolve_address_lat_lng(&addr));
        assert_eq!(Some(pos), geo.resolve_address_lat_lng(&addr));
        assert_eq!(1, geo.inner.requests.get());
    }

    #[test]
    fn lookup_is_case_and_whitespace_insensitive() {
        let pos = MapPoint::from_lat_lng_deg(51.5237, -0.1586);
        let geo = CachedGeocoder::new(CountingGateway::new(Some(pos)));

        assert_eq!(
            Some(pos),
            geo.resolve_address_lat_lng(&query("221B Baker Street, London"))
        );
        assert_eq!(
            Some(pos),
            geo.resolve_address_lat_lng(&query("  221b BAKER street, london  "))
        );
        assert_eq!(1, geo.inner.requests.get());
    }

    #[test]
    fn failed_lookups_are_not_cached() {
        let geo = CachedGeocoder::new(CountingGateway::new(None));
        let addr = query("Atlantis");

        assert_eq!(None, geo.resolve_address_lat_lng(&addr));
        assert_eq!(None, geo.resolve_address_lat_lng(&addr));
        assert_eq!(2, geo.inner.requests.get());
    }

    #[test]
    fn capacity_bounds_the_cache() {
        let pos = MapPoint::from_lat_lng_deg(1.0, 2.0);
        let geo = CachedGeocoder::with_capacity(
            CountingGateway::new(Some(pos)),
            NonZeroUsize::new(1).unwrap(),
        );

        geo.resolve_address_lat_lng(&query("first"));
        geo.resolve_address_lat_lng(&query("second"));
        // "first" has been evicted and must be resolved again.
        geo.resolve_address_lat_lng(&query("first"));
        assert_eq!(3, geo.inner.requests.get());
    }
}
