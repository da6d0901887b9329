use std::sync::{Arc, Mutex};

use sync_take::subscribe::Subscriber;

pub fn register_emissions_subscriber<N: Send + 'static>() -> (
    Vec<impl FnOnce() -> Subscriber<N>>,
    Arc<Mutex<Vec<N>>>,
    Arc<Mutex<Vec<i32>>>,
    Arc<Mutex<Vec<String>>>,
) {
    let nexts: Vec<N> = Vec::with_capacity(5);
    let nexts = Arc::new(Mutex::new(nexts));
    let nexts_c = Arc::clone(&nexts);

    let completes: Vec<i32> = Vec::with_capacity(5);
    let completes = Arc::new(Mutex::new(completes));
    let completes_c = Arc::clone(&completes);

    let errors: Vec<String> = Vec::with_capacity(5);
    let errors = Arc::new(Mutex::new(errors));
    let errors_c = Arc::clone(&errors);

    let make_subscriber = vec![
        move || {
            Subscriber::new(
                move |n| {
                    // Track next() calls.
                    nexts_c.lock().unwrap().push(n);
                },
                move |e| {
                    // Track error() calls with the forwarded message.
                    errors_c.lock().unwrap().push(e.to_string());
                },
                move || {
                    // Track complete() calls.
                    completes_c.lock().unwrap().push(1);
                },
            )
        };
        10
    ];
    (make_subscriber, nexts, completes, errors)
}
