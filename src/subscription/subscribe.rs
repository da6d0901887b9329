use std::{
    any::Any,
    error::Error,
    future::Future,
    pin::Pin,
    sync::Arc,
    thread::JoinHandle as ThreadJoinHandle,
};

use tokio::runtime;
use tokio::task::JoinHandle;

use crate::observer::Observer;

/// A trait for types that can be subscribed to, allowing consumers to receive
/// values emitted by an observable stream.
pub trait Subscribeable {
    /// The type of items emitted by the observable stream.
    type ObsType;

    /// Subscribes to the observable stream and specifies how to handle emitted
    /// values.
    ///
    /// The `Subscriber` parameter defines the behavior for processing values
    /// emitted by the observable stream. The implementation of this method
    /// should establish the subscription and manage the delivery of values to
    /// the subscriber.
    ///
    /// The returned `Subscription` allows the subscriber to manage the
    /// subscription, such as unsubscribing or awaiting the source.
    fn subscribe(&mut self, s: Subscriber<Self::ObsType>) -> Subscription;
}

/// A trait for types that can be unsubscribed, allowing the clean release of
/// resources associated with a subscription. This trait is typically used to
/// signal the observable to stop emitting values.
pub trait Unsubscribeable {
    /// Unsubscribes from a subscription and releases associated resources.
    ///
    /// This method is called to gracefully terminate the subscription and
    /// release any resources held by it, such as closing connections, stopping
    /// timers, or deallocating memory.
    ///
    /// It can also serve as a signal to notify the observable that it should
    /// stop emitting values. This is particularly relevant for asynchronous
    /// and/or multithreaded observables that outlive the completion of their
    /// downstream subscribers.
    ///
    /// The `Subscription` instance that this method is called on is consumed,
    /// making it unusable after the `unsubscribe` operation.
    fn unsubscribe(self);
}

type NextFn<T> = Box<dyn FnMut(T) + Send>;
type CompleteFn = Box<dyn FnMut() + Send + Sync>;
type ErrorFn = Box<dyn FnMut(Arc<dyn Error + Send + Sync>) + Send + Sync>;

/// A type that acts as an observer, allowing users to handle emitted values,
/// errors, and completion when subscribing to an `Observable`.
///
/// Users can create a `Subscriber` instance using the `new` method and provide
/// custom functions to handle the `next`, `error`, and `complete` events.
///
/// A `Subscriber` enforces the at-most-one terminal notification rule itself:
/// once it has observed `complete` or `error`, every subsequent notification,
/// including further `next` calls, is ignored. Operators rely on this guard
/// instead of tracking terminal state on their own.
pub struct Subscriber<NextFnType> {
    next_fn: NextFn<NextFnType>,
    complete_fn: Option<CompleteFn>,
    error_fn: Option<ErrorFn>,
    completed: bool,
    errored: bool,
}

impl<NextFnType> Subscriber<NextFnType> {
    /// Creates a new `Subscriber` instance with custom handling functions for
    /// emitted values, errors, and completion.
    pub fn new(
        next_fn: impl FnMut(NextFnType) + 'static + Send,
        error_fn: impl FnMut(Arc<dyn Error + Send + Sync>) + 'static + Send + Sync,
        complete_fn: impl FnMut() + 'static + Send + Sync,
    ) -> Self {
        Subscriber {
            next_fn: Box::new(next_fn),
            complete_fn: Some(Box::new(complete_fn)),
            error_fn: Some(Box::new(error_fn)),
            completed: false,
            errored: false,
        }
    }

    /// Create a new Subscriber with the provided `next` function.
    ///
    /// The `next` closure is called when the observable emits a new item. It
    /// takes a parameter of type `NextFnType`, which is an item emitted by the
    /// observable.
    pub fn on_next(next_fn: impl FnMut(NextFnType) + 'static + Send) -> Self {
        Subscriber {
            next_fn: Box::new(next_fn),
            complete_fn: None,
            error_fn: None,
            completed: false,
            errored: false,
        }
    }

    /// Set the completion function for the Subscriber.
    ///
    /// The provided closure will be called when the observable completes its
    /// emission sequence.
    pub fn on_complete(&mut self, complete_fn: impl FnMut() + 'static + Send + Sync) {
        self.complete_fn = Some(Box::new(complete_fn));
    }

    /// Set the error-handling function for the Subscriber.
    ///
    /// The provided closure will be called when the observable encounters an
    /// error during its emission sequence. It takes an `Arc` wrapping a trait
    /// object that implements the `Error`, `Send`, and `Sync` traits as its
    /// parameter.
    pub fn on_error(
        &mut self,
        error_fn: impl FnMut(Arc<dyn Error + Send + Sync>) + 'static + Send + Sync,
    ) {
        self.error_fn = Some(Box::new(error_fn));
    }

    /// Returns `true` if this subscriber has already observed a terminal
    /// notification, either `complete` or `error`.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.completed || self.errored
    }
}

impl<T> Observer for Subscriber<T> {
    type NextFnType = T;

    fn next(&mut self, v: Self::NextFnType) {
        // Values emitted after a terminal notification are dropped. This is
        // what keeps emissions scheduled for later, e.g. on a task or thread,
        // from reaching a subscriber that was already completed.
        if self.completed || self.errored {
            return;
        }
        (self.next_fn)(v);
    }

    fn complete(&mut self) {
        if self.completed || self.errored {
            return;
        }
        self.completed = true;
        if let Some(cfn) = &mut self.complete_fn {
            (cfn)();
        }
    }

    fn error(&mut self, observable_error: Arc<dyn Error + Send + Sync>) {
        if self.completed || self.errored {
            return;
        }
        self.errored = true;
        if let Some(efn) = &mut self.error_fn {
            (efn)(observable_error);
        }
    }
}

/// Enumeration representing different types of handles used by `Subscription`
/// to await asynchronous tasks or threads.
pub enum SubscriptionHandle {
    /// No specific handle for task or thread awaiting.
    Nil,

    /// Holds a join handle for awaiting an asynchronous observable using a
    /// `Tokio` task.
    JoinTask(JoinHandle<()>),

    /// Holds a join handle for awaiting an asynchronous observable using an
    /// OS thread.
    JoinThread(ThreadJoinHandle<()>),
}

/// Represents a subscription to an observable, allowing control over the
/// subscription.
///
/// When an observable is subscribed to, it returns a `Subscription` instance.
/// This subscription owns the live connection to the source: it can be used
/// for unsubscription and resource cleanup, and for awaiting asynchronous
/// observables that use `Tokio` tasks or OS threads.
///
/// The connection stays live until `unsubscribe` is called, even if the
/// downstream subscriber has already received a terminal notification. An
/// operator that completes its output early, such as `take_sync`, hands this
/// handle back to the caller precisely so the caller can still stop the
/// source afterwards.
pub struct Subscription {
    pub(crate) unsubscribe_logic: UnsubscribeLogic,
    pub(crate) subscription_future: SubscriptionHandle,
    pub(crate) runtime_handle: Result<runtime::Handle, runtime::TryCurrentError>,
}

impl Subscription {
    /// Creates a new Subscription instance with the specified unsubscribe
    /// logic and subscription handle.
    ///
    /// The `unsubscribe_logic` parameter defines the logic to execute upon
    /// unsubscribing from the observable. See [`UnsubscribeLogic`] for more
    /// details on available unsubscribe strategies.
    ///
    /// The `subscription_future` parameter holds a handle for awaiting
    /// asynchronous tasks or threads associated with the subscription. See
    /// [`SubscriptionHandle`] for details on the types of handles.
    ///
    /// [`UnsubscribeLogic`]: enum.UnsubscribeLogic.html
    /// [`SubscriptionHandle`]: enum.SubscriptionHandle.html
    #[must_use]
    pub fn new(
        unsubscribe_logic: UnsubscribeLogic,
        subscription_future: SubscriptionHandle,
    ) -> Self {
        let runtime_handle = tokio::runtime::Handle::try_current();
        Subscription {
            unsubscribe_logic,
            subscription_future,
            runtime_handle,
        }
    }

    /// Awaits the completion of the asynchronous task or thread associated
    /// with this subscription.
    ///
    /// If the observable uses asynchronous `Tokio` tasks, this method will
    /// await the completion of the task. If the observable uses OS threads, it
    /// will await the completion of the thread.
    ///
    /// # Errors
    ///
    /// Returns an error if joining a thread or awaiting a task used by the
    /// observable fails.
    pub async fn join_concurrent(self) -> Result<(), Box<dyn Any + Send>> {
        match self.subscription_future {
            SubscriptionHandle::JoinTask(task_handle) => {
                let r = task_handle.await;
                r.map_err(|e| Box::new(e) as Box<dyn Any + Send>)
            }
            SubscriptionHandle::JoinThread(thread_handle) => thread_handle.join(),
            SubscriptionHandle::Nil => Ok(()),
        }
    }

    /// Awaits the completion of the asynchronous OS thread associated with
    /// this subscription.
    ///
    /// This method is used to await the completion of an asynchronous
    /// observable that uses an OS thread for its processing. It will block the
    /// current thread until the observable, using an OS thread, has completed
    /// its task.
    ///
    /// This method is useful when using the library without `Tokio` in a
    /// project, as it allows for awaiting completion without relying on
    /// asynchronous constructs.
    ///
    /// # Errors
    ///
    /// Returns an error if joining a thread used by the observable fails.
    ///
    /// # Panics
    ///
    /// If this method is used to await a `Tokio` task, it will panic.
    ///
    /// To await `Tokio` tasks without causing a panic, use the
    /// `join_concurrent().await` method instead.
    pub fn join(self) -> Result<(), Box<dyn Any + Send>> {
        match self.subscription_future {
            SubscriptionHandle::JoinThread(thread_handle) => thread_handle.join(),
            SubscriptionHandle::Nil => Ok(()),
            SubscriptionHandle::JoinTask(_) => {
                panic!("Handle should be OS thread handle but it is Tokio task handle instead. When working with Tokio, use `join_concurrent().await` to await the completion of observables.")
            }
        }
    }
}

impl Unsubscribeable for Subscription {
    fn unsubscribe(self) {
        self.unsubscribe_logic.unsubscribe(self.runtime_handle);
    }
}

/// Enumerates various unsubscribe logic options for a subscription.
pub enum UnsubscribeLogic {
    /// No specific unsubscribe logic.
    Nil,

    /// If one subscription depends on another. Wrapped subscription's
    /// unsubscribe will be called upon unsubscribing.
    Wrapped(Box<Subscription>),

    /// Unsubscribe logic defined by a function.
    Logic(Box<dyn FnOnce() + Send>),

    /// Asynchronous unsubscribe logic represented by a future. Use if you need
    /// to spawn `Tokio` tasks or `.await` as a part of the unsubscribe logic.
    Future(Pin<Box<dyn Future<Output = ()> + Send>>),
}

impl UnsubscribeLogic {
    fn unsubscribe(
        mut self,
        runtime_handle: Result<runtime::Handle, runtime::TryCurrentError>,
    ) -> Self {
        match self {
            UnsubscribeLogic::Nil => (),
            UnsubscribeLogic::Logic(fnc) => {
                fnc();
                self = Self::Nil;
            }
            UnsubscribeLogic::Wrapped(subscription) => {
                subscription.unsubscribe();
                self = Self::Nil;
            }
            UnsubscribeLogic::Future(future) => {
                match runtime_handle {
                    Ok(handle) => {
                        handle.spawn(async {
                            future.await;
                        });
                    }
                    e @ Err(_) => {
                        e.expect(
                            "Observable that uses Tokio tasks is called outside of Tokio runtime",
                        );
                    }
                }
                self = Self::Nil;
            }
        }
        self
    }
}
