//! A source that emits two values during subscription and schedules a third
//! one on a separate thread. `take_sync` forwards the first two, completes,
//! and the deferred value is silently dropped.
//!
//! To run this demo, execute `cargo run --example basic_take_sync`.

use std::time::Duration;

use sync_take::subscribe::{Subscriber, Subscription, SubscriptionHandle, UnsubscribeLogic};
use sync_take::{Observable, ObservableExt, Observer, Subscribeable};

fn main() {
    let source = Observable::new(|mut subscriber: Subscriber<_>| {
        // Emitted before the subscribe call returns, so they get through.
        subscriber.next("you");
        subscriber.next("and you");

        // Launch a thread for the deferred emission and store its handle.
        let join_handle = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(10));
            subscriber.next("but not you");
        });

        Subscription::new(
            UnsubscribeLogic::Nil,
            SubscriptionHandle::JoinThread(join_handle),
        )
    });

    // Create the `Subscriber` with a `next` function and a `complete` function.
    let mut observer = Subscriber::on_next(|v| println!("Emitted {}", v));
    observer.on_complete(|| println!("Completed"));

    // Prints "you", "and you" and "Completed" before this call returns.
    let subscription = source.take_sync().subscribe(observer);

    // The upstream handle still works after completion: wait for the source
    // thread to finish. Its late emission never shows up.
    if subscription.join().is_err() {
        eprintln!("source thread panicked");
    }

    println!("Demo done");
}
