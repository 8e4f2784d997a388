use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub const DEFAULT_TICK: Duration = Duration::from_secs(2);

/// Repeating timer bound to its owner's lifetime. Must be started inside a tokio runtime.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// First tick fires one full `period` after start.
    pub fn start<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // interval yields immediately once
            interval.tick().await;
            loop {
                interval.tick().await;
                on_tick();
            }
        });
        tracing::debug!(?period, "Ticker started");

        Self {
            period,
            handle: Some(handle),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("Ticker stopped");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Accent {
    Orange,
    Green,
    Blue,
    Red,
}

pub const HEADLINE_TITLES: [&str; 9] = [
    "Play", "Goal", "Swim", "Run", "Shoot", "Dunk", "Score", "Win", "Hit",
];
pub const HEADLINE_ACCENTS: [Accent; 4] = [Accent::Orange, Accent::Green, Accent::Blue, Accent::Red];

/// The rotating word on the welcome screen. Title and accent cycle independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Headline {
    title_index: usize,
    accent_index: usize,
}

impl Headline {
    pub fn title(&self) -> &'static str {
        HEADLINE_TITLES[self.title_index]
    }

    pub fn accent(&self) -> Accent {
        HEADLINE_ACCENTS[self.accent_index]
    }

    pub fn advanced(self) -> Self {
        Self {
            title_index: (self.title_index + 1) % HEADLINE_TITLES.len(),
            accent_index: (self.accent_index + 1) % HEADLINE_ACCENTS.len(),
        }
    }

    /// Starts rotating from `self` every `period`. Rotation stops when the result is dropped.
    pub fn mount(self, period: Duration) -> MountedHeadline {
        let (tx, rx) = watch::channel(self);
        let ticker = Ticker::start(period, move || {
            tx.send_modify(|h| *h = h.advanced());
        });
        MountedHeadline { ticker, rx }
    }
}

pub struct MountedHeadline {
    ticker: Ticker,
    rx: watch::Receiver<Headline>,
}

impl MountedHeadline {
    pub fn current(&self) -> Headline {
        *self.rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Headline> {
        self.rx.clone()
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn unmount(mut self) -> Headline {
        self.ticker.stop();
        self.current()
    }
}
