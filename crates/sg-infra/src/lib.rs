pub mod profile;
pub mod storage;

pub use profile::HttpProfileLookup;
pub use storage::FileSessionStorage;
