use chrono::Utc;
use rand::Rng;

use crate::models::event::EventId;

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// `event_<unix millis>_<9 random base-36 chars>`.
///
/// Collision resistant for practical purposes, not cryptographically unique.
pub fn generate_event_id() -> EventId {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    EventId::from(format!("event_{}_{}", Utc::now().timestamp_millis(), suffix))
}
