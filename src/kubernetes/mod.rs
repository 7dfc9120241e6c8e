mod client;
mod discovery;
mod object;

pub use client::{build_client, list_all};
pub use discovery::{DiscoveredGroup, ResourceType, discover};
pub use object::ObjectRecord;
