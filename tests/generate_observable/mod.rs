use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use sync_take::subscribe::{Subscriber, Subscription, SubscriptionHandle, UnsubscribeLogic};
use sync_take::{Observable, Observer};

/// Emits the given values synchronously during subscription, then keeps
/// emitting `deferred` from a spawned OS thread until unsubscribed or until
/// `end` deferred emissions have happened. The number of deferred emissions
/// that actually ran is reported through `last_emit_assert`.
pub fn generate_sync_prefix_observable(
    sync_values: Vec<&'static str>,
    deferred: &'static str,
    end: u32,
    last_emit_assert: impl FnMut(u32) + Send + Sync + 'static,
) -> Observable<&'static str> {
    let last_emit_assert = Arc::new(Mutex::new(last_emit_assert));

    Observable::new(move |mut o: Subscriber<_>| {
        for v in sync_values.iter().copied() {
            o.next(v);
        }

        let done = Arc::new(Mutex::new(false));
        let done_c = Arc::clone(&done);
        let (tx, rx) = std::sync::mpsc::channel();

        std::thread::spawn(move || {
            if let Ok(i) = rx.recv() {
                *done_c.lock().unwrap() = i;
            }
        });

        let last_emit_assert = Arc::clone(&last_emit_assert);
        let jh = std::thread::spawn(move || {
            // Make sure the subscribe call has returned before the first
            // deferred emission, so these emissions are genuinely late.
            std::thread::sleep(Duration::from_millis(10));

            let mut last_emit = 0;

            for i in 0..end {
                if *done.lock().unwrap() == true {
                    break;
                }
                last_emit = i;
                o.next(deferred);
                // Important. Put an await point after each emit.
                std::thread::sleep(Duration::from_millis(1));
            }
            o.complete();
            last_emit_assert.lock().unwrap()(last_emit);
        });

        Subscription::new(
            UnsubscribeLogic::Logic(Box::new(move || {
                if let Err(_) = tx.send(true) {
                    eprintln!("receiver dropped");
                }
            })),
            SubscriptionHandle::JoinThread(jh),
        )
    })
}

/// Tokio flavor of the generator above: the synchronous prefix is pushed
/// during subscription and a spawned task keeps emitting `deferred` until it
/// receives the unsubscribe signal or `end` emissions have happened. Uses
/// `UnsubscribeLogic::Future` so the signal is sent from the runtime and
/// `SubscriptionHandle::JoinTask` so the task can be awaited.
pub fn generate_sync_prefix_observable_async(
    sync_values: Vec<&'static str>,
    deferred: &'static str,
    end: u32,
) -> Observable<&'static str> {
    Observable::new(move |mut o: Subscriber<_>| {
        for v in sync_values.iter().copied() {
            o.next(v);
        }

        let done = Arc::new(Mutex::new(false));
        let done_c = Arc::clone(&done);
        let (tx, mut rx) = tokio::sync::mpsc::channel(10);

        tokio::task::spawn(async move {
            if let Some(i) = rx.recv().await {
                *done_c.lock().unwrap() = i;
            }
        });

        let jh = tokio::task::spawn(async move {
            // Make sure the subscribe call has returned before the first
            // deferred emission, so these emissions are genuinely late.
            tokio::time::sleep(Duration::from_millis(10)).await;

            for _ in 0..end {
                if *done.lock().unwrap() == true {
                    break;
                }
                o.next(deferred);
                // Important. Put an await point after each emit.
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
            o.complete();
        });

        Subscription::new(
            UnsubscribeLogic::Future(Box::pin(async move {
                if tx.send(true).await.is_err() {
                    eprintln!("receiver dropped");
                }
            })),
            SubscriptionHandle::JoinTask(jh),
        )
    })
}
