//! The `observable` module provides the cold `Observable` type and the
//! `take_sync` operator that bounds it to its synchronous emissions.

use std::sync::{Arc, Mutex};

use crate::observer::Observer;
use crate::subscription::subscribe::{Subscribeable, Subscriber, Subscription};

/// The `Observable` struct represents a source of values that can be observed.
///
/// Observables are cold: nothing runs until `subscribe` is called, and every
/// `subscribe` call re-runs the subscribe function with its own `Subscriber`,
/// so concurrent subscriptions are fully isolated from one another.
///
/// # Example: basic synchronous `Observable`
///
/// This simple `Observable` emits values and completes. It returns an empty
/// `Subscription`, making it unable to be unsubscribed from. Because it does
/// not use async or threads, it blocks the current thread until it completes
/// emission.
///
/// ```no_run
/// use sync_take::subscribe::{Subscriber, Subscription, SubscriptionHandle, UnsubscribeLogic};
/// use sync_take::{Observable, Observer, Subscribeable};
///
/// // Create a custom observable that emits values from 1 to 10.
/// let mut emit_10_observable = Observable::new(|mut subscriber| {
///     let mut i = 1;
///
///     while i <= 10 {
///         // Emit the value to the subscriber.
///         subscriber.next(i);
///         i += 1;
///     }
///     // Signal completion to the subscriber.
///     subscriber.complete();
///
///     // Return the empty subscription.
///     Subscription::new(UnsubscribeLogic::Nil, SubscriptionHandle::Nil)
/// });
///
/// // Create the Subscriber with a mandatory `next` function, and `error`
/// // and `complete` functions.
/// let observer = Subscriber::new(
///     |v| println!("Emitted {}", v),
///     |_observable_error| {},
///     || println!("Completed"),
/// );
///
/// // Observables are cold: if you comment out the line below, no emissions
/// // will occur.
/// emit_10_observable.subscribe(observer);
/// ```
///
/// # Example: `Observable` with error handling
///
/// Emits a value and a completion signal upon success, and signals errors to
/// the attached `Observer` otherwise. Errors are wrapped in an `Arc` before
/// being passed to the observer's `error` function.
///
/// ```no_run
/// use std::{io, sync::Arc};
///
/// use sync_take::subscribe::*;
/// use sync_take::{Observable, Observer, Subscribeable};
///
/// // Creates an `Observable<i32>` that processes user input.
/// pub fn get_number() -> Observable<i32> {
///     Observable::new(|mut observer| {
///         let mut input = String::new();
///
///         println!("Please enter an integer:");
///
///         if let Err(e) = io::stdin().read_line(&mut input) {
///             // Send input error to the observer.
///             observer.error(Arc::new(e));
///             return Subscription::new(UnsubscribeLogic::Nil, SubscriptionHandle::Nil);
///         }
///
///         match input.trim().parse::<i32>() {
///             // Send parsing error to the observer.
///             Err(e) => observer.error(Arc::new(e)),
///             // Emit the parsed value to the observer.
///             Ok(num) => observer.next(num),
///         }
///
///         // Signal completion if there are no errors.
///         // Note: `complete` does not affect the outcome if `error` was
///         // called before it.
///         observer.complete();
///
///         Subscription::new(UnsubscribeLogic::Nil, SubscriptionHandle::Nil)
///     })
/// }
///
/// let observer = Subscriber::new(
///     |input| println!("You entered: {}", input),
///     |e| eprintln!("{}", e),
///     || println!("User input handled"),
/// );
///
/// let mut observable = get_number();
/// observable.subscribe(observer);
/// ```
pub struct Observable<T> {
    subscribe_fn: Box<dyn FnMut(Subscriber<T>) -> Subscription + Send + Sync>,
}

impl<T> Observable<T> {
    /// Creates a new `Observable` with the provided subscribe function.
    ///
    /// The subscribe function (`sf`) defines the behavior of the `Observable`
    /// when subscribed: it manages the delivery of values to the `Subscriber`
    /// and returns a `Subscription` that enables unsubscribing and can be used
    /// for awaiting `Tokio` tasks or joining OS threads when the `Observable`
    /// is asynchronous.
    pub fn new(sf: impl FnMut(Subscriber<T>) -> Subscription + Send + Sync + 'static) -> Self {
        Observable {
            subscribe_fn: Box::new(sf),
        }
    }
}

/// The `ObservableExt` trait provides the operator surface of this crate.
///
/// It is implemented for every `Subscribeable`, so the operator can be applied
/// to any observable source, including one that is itself the output of a
/// previous application.
pub trait ObservableExt<T: 'static>: Subscribeable<ObsType = T> {
    /// Mirrors the values the source emits synchronously during subscription,
    /// then completes.
    ///
    /// Subscribing to the returned observable subscribes to the source and
    /// forwards every `next` and `error` notification produced before the
    /// source's subscribe call returns, unfiltered and in order. As soon as
    /// that call returns, the downstream subscriber receives `complete`,
    /// regardless of whether the source is still open. The completion signal
    /// is attempted unconditionally; if the source already completed or
    /// errored on its own, the subscriber's terminal-state guard makes the
    /// extra signal a no-op, so downstream never observes more than one
    /// terminal notification.
    ///
    /// Values the source emits after its subscribe call has returned, e.g.
    /// from a spawned task or thread, are never delivered downstream. The
    /// source is not unsubscribed from automatically: it keeps running, and
    /// whatever resources it holds stay open, until the caller cancels via
    /// the returned `Subscription`.
    ///
    /// ```no_run
    /// use sync_take::subscribe::{Subscriber, Subscription, SubscriptionHandle, UnsubscribeLogic};
    /// use sync_take::{Observable, ObservableExt, Observer, Subscribeable};
    ///
    /// let source = Observable::new(|mut subscriber: Subscriber<_>| {
    ///     subscriber.next("you");
    ///     subscriber.next("and you");
    ///
    ///     let jh = std::thread::spawn(move || {
    ///         std::thread::sleep(std::time::Duration::from_millis(50));
    ///         // Emitted after subscribe returned, never seen downstream.
    ///         subscriber.next("but not you");
    ///     });
    ///
    ///     Subscription::new(UnsubscribeLogic::Nil, SubscriptionHandle::JoinThread(jh))
    /// });
    ///
    /// let observer = Subscriber::new(
    ///     |v| println!("Emitted {}", v),
    ///     |_observable_error| {},
    ///     || println!("Completed"),
    /// );
    ///
    /// // Prints "you", "and you", "Completed"; the subscription can still be
    /// // used to join or unsubscribe the source.
    /// let subscription = source.take_sync().subscribe(observer);
    /// ```
    fn take_sync(mut self) -> Observable<T>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Observable::new(move |o| {
            let o_shared = Arc::new(Mutex::new(o));
            let o_cloned_e = Arc::clone(&o_shared);
            let o_cloned_c = Arc::clone(&o_shared);
            let o_forced = Arc::clone(&o_shared);

            let u = Subscriber::new(
                move |v| {
                    o_shared.lock().unwrap().next(v);
                },
                move |observable_error| {
                    o_cloned_e.lock().unwrap().error(observable_error);
                },
                move || {
                    o_cloned_c.lock().unwrap().complete();
                },
            );

            // Whatever the source emits inside this call is forwarded as it
            // happens; everything it schedules for later runs against a
            // subscriber that is terminated below.
            let subscription = self.subscribe(u);

            o_forced.lock().unwrap().complete();

            // The upstream subscription is handed back untouched so the caller
            // can stop the source even though downstream already completed.
            subscription
        })
    }
}

impl<T: 'static> Subscribeable for Observable<T> {
    type ObsType = T;

    fn subscribe(&mut self, v: Subscriber<Self::ObsType>) -> Subscription {
        (self.subscribe_fn)(v)
    }
}

impl<O, T: 'static> ObservableExt<T> for O where O: Subscribeable<ObsType = T> {}
