mod system_dialer;

pub use system_dialer::SystemDialer;
