pub mod identity_provider;
pub mod memory_collection;
pub mod memory_store;

pub use identity_provider::MemoryIdentityProvider;
pub use memory_collection::MemoryCollection;
pub use memory_store::MemoryStore;
