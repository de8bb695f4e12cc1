use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// `session-<unix millis>-<9 base36 chars>`.
pub fn new_session_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect();
    format!("session-{millis}-{suffix}")
}

#[test]
fn test_session_id_shape() {
    let id = new_session_id();
    let parts: Vec<&str> = id.split('-').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "session");
    assert!(parts[1].parse::<u128>().is_ok());
    assert_eq!(parts[2].len(), SUFFIX_LEN);
    assert!(parts[2].bytes().all(|b| SUFFIX_ALPHABET.contains(&b)));
    assert_ne!(new_session_id(), id);
}
