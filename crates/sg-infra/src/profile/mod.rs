mod http_profile_lookup;

pub use http_profile_lookup::{HttpProfileLookup, PROFILE_PATH};
