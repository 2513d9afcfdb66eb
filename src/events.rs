//! Application-wide signal bus
//!
//! Components broadcast named, payload-less signals here. The shell drains
//! the bus once per frame. `showSample` is emitted by the sidebar guide button
//! and currently has no subscriber, so draining it only logs it.

use std::collections::VecDeque;

/// Named signal broadcast by a component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Sidebar guide button was clicked
    ShowSample,
}

impl Signal {
    /// Wire name of the signal
    pub fn name(self) -> &'static str {
        match self {
            Signal::ShowSample => "showSample",
        }
    }
}

/// FIFO of signals broadcast since the last drain
#[derive(Debug, Default)]
pub struct SignalBus {
    pending: VecDeque<Signal>,
}

impl SignalBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a signal for delivery
    pub fn broadcast(&mut self, signal: Signal) {
        tracing::debug!(signal = signal.name(), "Signal broadcast");
        self.pending.push_back(signal);
    }

    /// Take every pending signal in broadcast order
    pub fn drain(&mut self) -> Vec<Signal> {
        self.pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_name() {
        assert_eq!(Signal::ShowSample.name(), "showSample");
    }

    #[test]
    fn test_drain_returns_signals_in_order_and_empties_bus() {
        let mut bus = SignalBus::new();
        bus.broadcast(Signal::ShowSample);
        bus.broadcast(Signal::ShowSample);

        assert_eq!(bus.drain(), vec![Signal::ShowSample, Signal::ShowSample]);
        assert!(bus.is_empty());
        assert!(bus.drain().is_empty());
    }
}
