//! Best-effort home position lookup.
//!
//! The engine requests a fix once per mission start and polls the returned
//! channel with `try_recv` on later ticks. No tick ever blocks on the fix;
//! if the channel closes without delivering, the configured default home
//! stays in effect.

use std::sync::mpsc;

use gcs_core::types::GeoCoordinate;

/// One-shot device location source.
///
/// `request` must return immediately. Implementations that do real work
/// should hand the sender to a background thread.
pub trait HomeLocator: Send {
    fn request(&mut self) -> mpsc::Receiver<GeoCoordinate>;
}

/// Locator for deployments without a position source. The channel never
/// delivers, so the engine keeps the configured default home.
pub struct NoLocator;

impl HomeLocator for NoLocator {
    fn request(&mut self) -> mpsc::Receiver<GeoCoordinate> {
        let (_tx, rx) = mpsc::channel();
        rx
    }
}

/// Locator that always reports a fixed position, for tests and demos.
pub struct FixedLocator(pub GeoCoordinate);

impl HomeLocator for FixedLocator {
    fn request(&mut self) -> mpsc::Receiver<GeoCoordinate> {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(self.0);
        rx
    }
}
