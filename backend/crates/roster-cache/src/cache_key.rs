/// Prefix shared by every roster cache key
pub const CACHE_KEY_PREFIX: &str = "cardData_";

/// Cache key for a board's merged roster
pub fn cache_key(board_id: &str) -> String {
    format!("{CACHE_KEY_PREFIX}{board_id}")
}
