use super::FightSignal;

/// Trait for per-fight state that reacts to fight signals.
pub trait SignalHandler {
    /// Handle a single signal
    fn handle_signal(&mut self, signal: &FightSignal);

    /// Handle multiple signals, in order (default: iterate and call handle_signal)
    fn handle_signals(&mut self, signals: &[FightSignal]) {
        for signal in signals {
            self.handle_signal(signal);
        }
    }
}
