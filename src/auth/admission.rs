//! Sliding-window admission control for mutating routes.
//!
//! Flow Overview:
//! 1) Resolve the per-window ceiling for the normalized route.
//! 2) Evict timestamps that have fallen out of the trailing window.
//! 3) Deny at the ceiling without recording, otherwise record and admit.
//!
//! Denied attempts never consume budget; only admitted requests do. The
//! whole read-evict-check-append runs as one critical section so two
//! concurrent callers cannot both observe the same free slot.

use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

/// Trailing window over which request budgets are counted.
pub const WINDOW: Duration = Duration::from_secs(60);

/// Ceiling applied to routes without an explicit entry in [`RouteLimits`].
pub const DEFAULT_CEILING: u32 = 100;

/// Identity of one client on one route. Recomputed per request; the route
/// part is normalized to `METHOD:lowercased-path` so header casing and path
/// casing cannot split a client's budget across keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    client: String,
    route: String,
}

impl RouteKey {
    #[must_use]
    pub fn new(client: &str, method: &str, path: &str) -> Self {
        Self {
            client: client.to_string(),
            route: normalize_route(method, path),
        }
    }

    pub(crate) fn route(&self) -> &str {
        &self.route
    }
}

/// Normalize a method + path pair into the route identity used by both the
/// admission log and the limits table.
#[must_use]
pub fn normalize_route(method: &str, path: &str) -> String {
    format!("{}:{}", method.to_uppercase(), path.to_lowercase())
}

/// Immutable per-route ceilings, consulted read-only on every check.
///
/// Write-heavy routes get tighter ceilings than read-heavy ones; routes not
/// listed here fall back to a generous default.
#[derive(Debug, Clone)]
pub struct RouteLimits {
    ceilings: HashMap<String, u32>,
    default_ceiling: u32,
}

impl RouteLimits {
    #[must_use]
    pub fn new(default_ceiling: u32) -> Self {
        Self {
            ceilings: HashMap::new(),
            default_ceiling,
        }
    }

    /// The stock table: login is the most abuse-prone route, log creation is
    /// the chattiest legitimate one, and the entity mutations sit in between.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_CEILING)
            .with_route("POST", "/auth/login", 5)
            .with_route("POST", "/api/notes", 20)
            .with_route("PUT", "/api/notes", 20)
            .with_route("DELETE", "/api/notes", 10)
            .with_route("POST", "/api/logs", 30)
            .with_route("POST", "/api/domains", 10)
            .with_route("PUT", "/api/domains", 10)
            .with_route("DELETE", "/api/domains", 10)
            .with_route("POST", "/api/tags", 10)
            .with_route("PUT", "/api/tags", 10)
            .with_route("DELETE", "/api/tags", 10)
    }

    #[must_use]
    pub fn with_route(mut self, method: &str, path: &str, ceiling: u32) -> Self {
        self.ceilings.insert(normalize_route(method, path), ceiling);
        self
    }

    #[must_use]
    pub fn ceiling(&self, route: &str) -> u32 {
        self.ceilings
            .get(route)
            .copied()
            .unwrap_or(self.default_ceiling)
    }
}

impl Default for RouteLimits {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Process-wide sliding-window rate limiter keyed by (client, route).
///
/// Owns the request log exclusively; callers only see the boolean verdict.
/// Eviction on every check keeps the log bounded by `ceiling * keys`.
#[derive(Debug)]
pub struct AdmissionController {
    limits: RouteLimits,
    window: Duration,
    log: Mutex<HashMap<RouteKey, VecDeque<Instant>>>,
}

impl AdmissionController {
    #[must_use]
    pub fn new(limits: RouteLimits) -> Self {
        Self::with_window(limits, WINDOW)
    }

    #[must_use]
    pub fn with_window(limits: RouteLimits, window: Duration) -> Self {
        Self {
            limits,
            window,
            log: Mutex::new(HashMap::new()),
        }
    }

    /// Check and consume budget for one request. Returns `false` when the
    /// client has exhausted the route's ceiling within the trailing window.
    #[must_use]
    pub fn allow(&self, client_id: &str, method: &str, path: &str) -> bool {
        self.allow_at(RouteKey::new(client_id, method, path), Instant::now())
    }

    // Clock-injected variant so tests can pin `now`.
    fn allow_at(&self, key: RouteKey, now: Instant) -> bool {
        let ceiling = self.limits.ceiling(key.route());

        let mut log = self.log.lock();
        let timestamps = log.entry(key).or_default();

        while let Some(front) = timestamps.front() {
            if now.duration_since(*front) > self.window {
                timestamps.pop_front();
            } else {
                break;
            }
        }

        if timestamps.len() >= ceiling as usize {
            return false;
        }

        timestamps.push_back(now);
        true
    }
}

impl Default for AdmissionController {
    fn default() -> Self {
        Self::new(RouteLimits::with_defaults())
    }
}
