//! Forwarding navigation keys from the OS to the UI.
//!
//! The platform-specific part (asking the OS which window has focus and
//! whether a key is held) sits behind [`KeyboardProbe`]. This module owns
//! the polling loop: focus gating, per-key debouncing and shutdown.
//!
//! # Example
//!
//! ```rust,no_run
//! use paradigm_launcher::keys::{
//!     spawn_key_forwarder, KeyForwarderConfig, KeyboardProbe, NavKey, WindowHandle, WindowId,
//! };
//! use tokio::sync::mpsc;
//!
//! struct NoKeys;
//!
//! impl KeyboardProbe for NoKeys {
//!     fn foreground_window(&self) -> Option<WindowId> {
//!         None
//!     }
//!     fn is_key_down(&self, _key: NavKey) -> bool {
//!         false
//!     }
//! }
//!
//! # async fn run() {
//! let window = WindowHandle::new();
//! window.set(WindowId(42));
//!
//! let (tx, mut rx) = mpsc::unbounded_channel();
//! let forwarder = spawn_key_forwarder(NoKeys, window, tx, KeyForwarderConfig::default());
//!
//! if let Some(key) = rx.recv().await {
//!     println!("{}: {}", NavKey::EVENT_NAME, key);
//! }
//! forwarder.shutdown().await;
//! # }
//! ```

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use strum::IntoEnumIterator;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{sleep, Instant};

/// A navigation key forwarded to the UI.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display, strum::IntoStaticStr,
)]
pub enum NavKey {
    /// Up arrow, moves the selection up.
    ArrowUp,
    /// Down arrow, moves the selection down.
    ArrowDown,
    /// Enter, launches the selection.
    Enter,
    /// Escape, backs out of the current view.
    Escape,
}

impl NavKey {
    /// UI event name the key is delivered under.
    pub const EVENT_NAME: &'static str = "keydown";
}

/// Opaque identity of a top-level window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u64);

/// The application window's identity, written once and read from anywhere.
///
/// Clones share the same slot. Only the first [`set`](Self::set) takes
/// effect.
#[derive(Debug, Clone, Default)]
pub struct WindowHandle {
    slot: Arc<OnceLock<WindowId>>,
}

impl WindowHandle {
    /// An unset handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the window identity. Returns `false` if it was already set.
    pub fn set(&self, id: WindowId) -> bool {
        let accepted = self.slot.set(id).is_ok();
        if accepted {
            tracing::debug!(window = id.0, "Set main window handle");
        }
        accepted
    }

    /// The recorded identity, if any.
    pub fn get(&self) -> Option<WindowId> {
        self.slot.get().copied()
    }
}

/// OS queries the forwarder depends on.
pub trait KeyboardProbe: Send + 'static {
    /// The window that currently has input focus.
    fn foreground_window(&self) -> Option<WindowId>;

    /// Whether `key` is currently held down.
    fn is_key_down(&self, key: NavKey) -> bool;
}

/// Timing of the polling loop.
#[derive(Debug, Clone)]
pub struct KeyForwarderConfig {
    /// Pause between polls while focused.
    ///
    /// Default: 10 ms
    pub poll_interval: Duration,

    /// Pause between polls while another window has focus.
    ///
    /// Default: 100 ms
    pub unfocused_interval: Duration,

    /// Minimum gap between two events for the same key, also the pause
    /// after each event.
    ///
    /// Default: 150 ms
    pub debounce: Duration,
}

impl Default for KeyForwarderConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(10),
            unfocused_interval: Duration::from_millis(100),
            debounce: Duration::from_millis(150),
        }
    }
}

/// Handle to a running forwarder task. Dropping it stops the task.
#[derive(Debug)]
pub struct KeyForwarder {
    stop: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl KeyForwarder {
    /// Stop the task and wait for it to finish.
    pub async fn shutdown(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Err(e) = (&mut self.task).await {
            tracing::warn!(error = %e, "Key forwarder task failed");
        }
    }

    /// Whether the task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Start polling `probe` and forward key presses to `sink`.
///
/// Keys are only forwarded while the window recorded in `window` has
/// focus. The task ends on [`KeyForwarder::shutdown`], when the handle is
/// dropped, or when `sink` is closed. Must be called within a Tokio
/// runtime.
pub fn spawn_key_forwarder<P: KeyboardProbe>(
    probe: P,
    window: WindowHandle,
    sink: mpsc::UnboundedSender<NavKey>,
    config: KeyForwarderConfig,
) -> KeyForwarder {
    let (stop, stopped) = oneshot::channel();
    let task = tokio::spawn(run(probe, window, sink, config, stopped));
    KeyForwarder {
        stop: Some(stop),
        task,
    }
}

async fn run<P: KeyboardProbe>(
    probe: P,
    window: WindowHandle,
    sink: mpsc::UnboundedSender<NavKey>,
    config: KeyForwarderConfig,
    mut stopped: oneshot::Receiver<()>,
) {
    let mut last_press: HashMap<NavKey, Instant> = HashMap::new();

    loop {
        let focused = match (probe.foreground_window(), window.get()) {
            (Some(current), Some(ours)) => current == ours,
            _ => false,
        };

        let mut pause = config.unfocused_interval;
        if focused {
            pause = config.poll_interval;
            for key in NavKey::iter() {
                let now = Instant::now();
                let debounced = last_press
                    .get(&key)
                    .is_some_and(|last| now.duration_since(*last) <= config.debounce);
                if debounced || !probe.is_key_down(key) {
                    continue;
                }

                tracing::trace!(%key, "Forwarding key");
                if sink.send(key).is_err() {
                    tracing::debug!("Key event receiver closed");
                    return;
                }
                last_press.insert(key, now);

                tokio::select! {
                    _ = &mut stopped => return,
                    _ = sleep(config.debounce) => {}
                }
            }
        }

        tokio::select! {
            _ = &mut stopped => return,
            _ = sleep(pause) => {}
        }
    }
}
