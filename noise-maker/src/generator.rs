use chrono::{DateTime, Utc};
use rand::{Rng, seq::IndexedRandom};

const METHODS: [(&str, u8); 4] = [("GET", 6), ("POST", 2), ("PUT", 1), ("DELETE", 1)];
const PATHS: [(&str, u8); 6] = [
    ("/", 10),
    ("/login", 10),
    ("/api/users", 50),
    ("/api/orders", 30),
    ("/admin", 5),
    ("/splash", 20),
];
const STATUS: [(u16, u8); 6] = [
    (200, 50),
    (201, 10),
    (301, 10),
    (403, 10),
    (404, 50),
    (500, 5),
];
const NOISE: [(&str, u8); 5] = [
    ("not a log line at all", 10),
    ("healthcheck /ping", 10),
    ("=== rotated ===", 5),
    ("WARN disk usage above 80%", 10),
    ("2024-99-99 99:99 +00:00: GET /broken: 200", 5),
];

pub fn generate_log_line<R: Rng + ?Sized>(rng: &mut R, timestamp: DateTime<Utc>) -> String {
    let ts = timestamp.format("%Y-%m-%d %H:%M %:z");
    let method = METHODS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let path = PATHS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let status = STATUS.choose_weighted(rng, |(_, w)| *w).unwrap().0;

    format!("{ts}: {method} {path}: {status}")
}

pub fn generate_noise_line<R: Rng + ?Sized>(rng: &mut R) -> String {
    NOISE.choose_weighted(rng, |(_, w)| *w).unwrap().0.to_string()
}
