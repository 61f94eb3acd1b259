//! Status-message sinks.
//!
//! Every transition that has something to tell the table ("Olga takes 3
//! cards.", "Play an attack, or pass.") goes through a [`Notifier`]. The
//! game also keeps the latest message as its status text.

use std::sync::mpsc::Sender;

use tracing::info;

pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Logs each message at info level under the `durak::status` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, message: &str) {
        info!(target: "durak::status", "{message}");
    }
}

/// Forwards messages to a channel, e.g. a UI thread. A hung-up receiver
/// is not an error.
impl Notifier for Sender<String> {
    fn notify(&mut self, message: &str) {
        let _ = self.send(message.to_string());
    }
}
