pub mod config;
pub mod tokens;

mod file_store;
pub use file_store::FileTokenStore;

mod memory;
pub use memory::MemoryTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageTokenStore;

pub use config::ClientConfig;
pub use tokens::{TokenStore, TOKEN_KEY};
