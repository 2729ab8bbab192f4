pub mod navigation;
pub mod telephony;

pub use navigation::HistoryNavigator;
pub use telephony::SystemDialer;
