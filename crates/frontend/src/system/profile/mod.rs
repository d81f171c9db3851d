pub mod storage;

pub use storage::LocalStorageProfileStore;
