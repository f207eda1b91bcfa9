use std::sync::mpsc::{self, Receiver, RecvError, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};

/// Interval of the game countdown
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Unified event type consumed by the app runner
#[derive(Clone, Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    /// One countdown second elapsed, tagged with the generation of the timer that sent it
    Tick(u64),
}

/// Source of app events (keyboard, resize, timer ticks)
pub trait EventSource: Send + 'static {
    /// Block until the next event arrives.
    fn recv(&self) -> Result<AppEvent, RecvError>;
    /// Block for up to `timeout` waiting for an event.
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError>;
    /// Handle for producers (the game timer) feeding the same queue.
    fn sender(&self) -> Sender<AppEvent>;
}

/// Production event source using crossterm
pub struct CrosstermEventSource {
    tx: Sender<AppEvent>,
    rx: Receiver<AppEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let input_tx = tx.clone();

        thread::spawn(move || loop {
            let evt = match event::read() {
                Ok(CtEvent::Key(key)) if key.kind != KeyEventKind::Release => AppEvent::Key(key),
                Ok(CtEvent::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(_) => break,
            };

            if input_tx.send(evt).is_err() {
                break;
            }
        });

        Self { tx, rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for CrosstermEventSource {
    fn recv(&self) -> Result<AppEvent, RecvError> {
        self.rx.recv()
    }

    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

/// Test event source: events are pushed through `sender()`
pub struct TestEventSource {
    tx: Sender<AppEvent>,
    rx: Receiver<AppEvent>,
}

impl TestEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }
}

impl Default for TestEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for TestEventSource {
    fn recv(&self) -> Result<AppEvent, RecvError> {
        self.rx.recv()
    }

    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

/// Repeating countdown ticker owned by a running game.
///
/// Dropping the timer cancels it and joins its thread, so no tick is sent
/// after the drop returns. Ticks already queued carry the old generation.
#[derive(Debug)]
pub struct GameTimer {
    generation: u64,
    cancel: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl GameTimer {
    pub fn start(tx: Sender<AppEvent>, interval: Duration, generation: u64) -> Self {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || loop {
            match cancel_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => {
                    if tx.send(AppEvent::Tick(generation)).is_err() {
                        break;
                    }
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        Self {
            generation,
            cancel: Some(cancel_tx),
            handle: Some(handle),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cancel(&mut self) {
        // disconnecting wakes the thread immediately
        self.cancel.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for GameTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Runner that advances the application one event at a time
pub struct Runner<E: EventSource> {
    event_source: E,
    poll_interval: Duration,
}

impl<E: EventSource> Runner<E> {
    pub fn new(event_source: E, poll_interval: Duration) -> Self {
        Self {
            event_source,
            poll_interval,
        }
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.event_source.sender()
    }

    /// Blocks up to the poll interval; None when nothing arrived
    pub fn step(&self) -> Option<AppEvent> {
        match self.event_source.recv_timeout(self.poll_interval) {
            Ok(ev) => Some(ev),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Blocks until the next event
    pub fn wait(&self) -> Option<AppEvent> {
        self.event_source.recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn step_returns_none_on_timeout() {
        let runner = Runner::new(TestEventSource::new(), Duration::from_millis(1));
        assert!(runner.step().is_none());
    }

    #[test]
    fn step_passes_through_events() {
        let runner = Runner::new(TestEventSource::new(), Duration::from_millis(10));
        runner.sender().send(AppEvent::Resize).unwrap();

        match runner.step() {
            Some(AppEvent::Resize) => {}
            other => panic!("expected Resize event, got {other:?}"),
        }
    }

    #[test]
    fn key_events_keep_their_payload() {
        let runner = Runner::new(TestEventSource::new(), Duration::from_millis(10));
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        runner.sender().send(AppEvent::Key(key)).unwrap();

        match runner.wait() {
            Some(AppEvent::Key(received)) => assert_eq!(received.code, KeyCode::Char('a')),
            other => panic!("expected Key event, got {other:?}"),
        }
    }

    #[test]
    fn timer_sends_tagged_ticks() {
        let (tx, rx) = mpsc::channel();
        let timer = GameTimer::start(tx, Duration::from_millis(5), 7);
        assert_eq!(timer.generation(), 7);

        match rx.recv_timeout(Duration::from_secs(2)) {
            Ok(AppEvent::Tick(generation)) => assert_eq!(generation, 7),
            other => panic!("expected Tick, got {other:?}"),
        }
    }

    #[test]
    fn dropped_timer_stops_ticking() {
        let (tx, rx) = mpsc::channel();
        let timer = GameTimer::start(tx, Duration::from_millis(5), 1);
        drop(timer);

        // drain anything sent before the drop, then nothing more may arrive
        while rx.try_recv().is_ok() {}
        thread::sleep(Duration::from_millis(30));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn cancel_is_idempotent() {
        let (tx, _rx) = mpsc::channel();
        let mut timer = GameTimer::start(tx, Duration::from_millis(5), 1);
        timer.cancel();
        timer.cancel();
    }
}
