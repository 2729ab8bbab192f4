//! In-process navigation host.
//!
//! Keeps the screen stack a mobile host would own. `replace` swaps the top
//! entry, so the stack never grows past one screen after the first
//! navigation and "back" has nothing gated to return to.

use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tracing::info;

use sg_core::gate::ScreenId;
use sg_core::ports::NavigationPort;

#[derive(Default)]
struct History {
    stack: Vec<ScreenId>,
    replacements: usize,
}

#[derive(Default)]
pub struct HistoryNavigator {
    history: Mutex<History>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Screen stack, bottom first.
    pub fn history(&self) -> Vec<ScreenId> {
        self.history
            .lock()
            .map(|h| h.stack.clone())
            .unwrap_or_default()
    }

    pub fn current(&self) -> Option<ScreenId> {
        self.history
            .lock()
            .ok()
            .and_then(|h| h.stack.last().copied())
    }

    /// Number of `replace` calls served so far.
    pub fn replacements(&self) -> usize {
        self.history
            .lock()
            .map(|h| h.replacements)
            .unwrap_or_default()
    }
}

#[async_trait]
impl NavigationPort for HistoryNavigator {
    async fn replace(&self, screen: ScreenId) -> Result<()> {
        {
            let mut history = self
                .history
                .lock()
                .map_err(|_| anyhow!("navigation stack lock poisoned"))?;
            match history.stack.last_mut() {
                Some(top) => *top = screen,
                None => history.stack.push(screen),
            }
            history.replacements += 1;
        }

        info!(screen = %screen, "screen replaced");
        Ok(())
    }
}
