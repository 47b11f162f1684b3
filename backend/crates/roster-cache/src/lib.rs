pub mod cache_gateway;
pub mod cache_key;
pub mod cache_store;
pub mod error;
pub mod keyed_locks;
pub mod memory_cache_store;
pub mod sqlite_cache_store;


pub use cache_gateway::CacheGateway;
pub use cache_key::{CACHE_KEY_PREFIX, cache_key};
pub use cache_store::CacheStore;
pub use error::{CacheError, Result};
pub use keyed_locks::{KeyGuard, KeyedLocks};
pub use memory_cache_store::MemoryCacheStore;
pub use sqlite_cache_store::SqliteCacheStore;
