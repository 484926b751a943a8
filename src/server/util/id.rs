use chrono::{DateTime, Utc};
use rand::Rng;

const ORDER_ID_PREFIX: &str = "ORD";
const SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// `ORD-<unix millis>-<9 base-36 chars>`. Uniqueness is probabilistic and never re-checked.
pub(crate) fn generate_order_id(now: &DateTime<Utc>) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{}-{}-{}", ORDER_ID_PREFIX, now.timestamp_millis(), suffix)
}
