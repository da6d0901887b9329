//! A long-running source keeps emitting from an OS thread after `take_sync`
//! has already completed the downstream subscriber. The subscriber observes
//! only the synchronous prefix; the source itself keeps holding its thread
//! until the caller unsubscribes through the returned `Subscription`.
//!
//! To run this demo, execute `cargo run --example unsubscribe_after_complete`.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use sync_take::subscribe::{
    Subscriber, Subscription, SubscriptionHandle, UnsubscribeLogic, Unsubscribeable,
};
use sync_take::{Observable, ObservableExt, Observer, Subscribeable};

const UNSUBSCRIBE_SIGNAL: bool = true;

fn main() {
    // Create a custom observable that emits values in a separate thread.
    let source = Observable::new(|mut o: Subscriber<_>| {
        // This one is synchronous, so it reaches the subscriber.
        o.next(0);

        let done = Arc::new(Mutex::new(false));
        let done_c = Arc::clone(&done);
        let (tx, rx) = std::sync::mpsc::channel();

        // Spawn a thread to await a signal sent from the unsubscribe logic.
        std::thread::spawn(move || {
            if let Ok(UNSUBSCRIBE_SIGNAL) = rx.recv() {
                *done_c.lock().unwrap() = UNSUBSCRIBE_SIGNAL;
            }
        });

        // Launch a thread for the Observable's processing and store its handle.
        let join_handle = std::thread::spawn(move || {
            for i in 1..=10000 {
                // If an unsubscribe signal is received, stop emitting.
                if *done.lock().unwrap() == UNSUBSCRIBE_SIGNAL {
                    println!("source stopped after {} deferred emissions", i - 1);
                    break;
                }
                // Emitted after subscribe returned, so never seen downstream.
                o.next(i);
                std::thread::sleep(Duration::from_millis(1));
            }
            o.complete();
        });

        Subscription::new(
            UnsubscribeLogic::Logic(Box::new(move || {
                if tx.send(UNSUBSCRIBE_SIGNAL).is_err() {
                    println!("Receiver dropped.");
                }
            })),
            SubscriptionHandle::JoinThread(join_handle),
        )
    });

    let observer = Subscriber::new(
        |v| println!("Emitted {}", v),
        |_observable_error| {},
        || println!("Completed"),
    );

    // Prints "Emitted 0" and "Completed"; the source thread keeps running.
    let subscription = source.take_sync().subscribe(observer);

    // Let the source emit into the void for a bit.
    std::thread::sleep(Duration::from_millis(50));

    // Downstream completed long ago, but the connection to the source is
    // still live. Cancel it to release the thread.
    subscription.unsubscribe();

    std::thread::sleep(Duration::from_millis(50));
    println!("Demo done");
}
