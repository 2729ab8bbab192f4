mod history_navigator;

pub use history_navigator::HistoryNavigator;
