/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER so the
/// web presentation layer can round-trip IDs without loss):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms, collision-free at classroom scale)
///
/// Used for person, chart and constraint IDs; table and seat IDs are
/// chart-local sequence numbers instead.
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snowflake_id_is_js_safe() {
        // 2^53 - 1 is Number.MAX_SAFE_INTEGER
        const MAX_SAFE: i64 = (1i64 << 53) - 1;
        for _ in 0..1000 {
            let id = snowflake_id();
            assert!(id > 0);
            assert!(id <= MAX_SAFE);
        }
    }

    #[test]
    fn test_snowflake_id_monotonic_across_millis() {
        let a = snowflake_id();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = snowflake_id();
        assert!(b > a);
    }
}
