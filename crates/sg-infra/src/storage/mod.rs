mod file_session_storage;

pub use file_session_storage::FileSessionStorage;
