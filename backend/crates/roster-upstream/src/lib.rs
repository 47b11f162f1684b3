pub mod board_client;
pub mod error;
pub mod identity_client;

pub use board_client::{BoardClient, CardSource};
pub use error::{Result as UpstreamResult, UpstreamError};
pub use identity_client::{IdentityClient, IdentityLookup};
