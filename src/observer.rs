//! Defines the `Observer` trait, the capability set through which observables
//! deliver their notifications.

use std::{error::Error, sync::Arc};

/// Receives notifications from an observable stream.
///
/// A well-behaved stream calls `next` zero or more times, followed by at most
/// one terminal notification: either `complete` or `error`.
pub trait Observer {
    /// The type of items this observer accepts through `next`.
    type NextFnType;

    /// Handles a value emitted by the stream.
    fn next(&mut self, _: Self::NextFnType);

    /// Handles the completion of the stream.
    fn complete(&mut self);

    /// Handles an error signaled by the stream.
    fn error(&mut self, _: Arc<dyn Error + Send + Sync>);
}
