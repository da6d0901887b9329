//! `sync-take` is a small observable library built around a single operator:
//! [`take_sync`], which mirrors only the values a source emits synchronously
//! while it is being subscribed to, then immediately signals completion.
//!
//! Anything the source schedules for later, whether on a `Tokio` task, an OS
//! thread or a timer, is never delivered downstream. The source itself keeps
//! running until the caller unsubscribes through the returned [`Subscription`],
//! so resource cleanup stays under caller control even after completion.
//!
//! # Example
//!
//! ```no_run
//! use sync_take::subscribe::{Subscriber, Subscription, SubscriptionHandle, UnsubscribeLogic};
//! use sync_take::{Observable, ObservableExt, Observer, Subscribeable};
//!
//! let source = Observable::new(|mut subscriber: Subscriber<_>| {
//!     // These two reach the subscriber because they are emitted before
//!     // the subscribe call returns.
//!     subscriber.next("you");
//!     subscriber.next("and you");
//!
//!     Subscription::new(UnsubscribeLogic::Nil, SubscriptionHandle::Nil)
//! });
//!
//! let observer = Subscriber::new(
//!     |v| println!("Emitted {}", v),
//!     |_observable_error| {},
//!     || println!("Completed"),
//! );
//!
//! // Prints "you", "and you" and then "Completed".
//! source.take_sync().subscribe(observer);
//! ```
//!
//! [`take_sync`]: trait.ObservableExt.html#method.take_sync
//! [`Subscription`]: subscribe/struct.Subscription.html

mod observable;
pub mod observer;
mod subscription;

pub use observable::{Observable, ObservableExt};
pub use observer::Observer;
pub use subscription::subscribe::{Subscribeable, Unsubscribeable};

/// Subscription-layer types: `Subscriber`, `Subscription`, `SubscriptionHandle`
/// and `UnsubscribeLogic`.
pub mod subscribe {
    pub use crate::subscription::subscribe::*;
}
