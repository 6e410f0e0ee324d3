use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex,
    },
};

/// A global event counter, see [counter!](crate::counter)
#[derive(Default)]
pub struct Counter {
    atomic: AtomicU64,
}

impl Counter {
    pub const fn new() -> Self {
        Self {
            atomic: AtomicU64::new(0),
        }
    }
    pub fn inc(&self) {
        self.atomic.fetch_add(1, Ordering::Relaxed); // Adding one is associative and commutative
    }
    pub fn value(&self) -> u64 {
        self.atomic.load(Ordering::Acquire)
    }
}

pub fn report_counters() {
    let Ok(counters) = __COUNTERS.lock() else {
        log::warn!("counter registry is poisoned, skipping report");
        return;
    };
    for (counter_name, counter) in counters.iter() {
        log::log!(target: "counter_report", log::Level::Info, "{}: {}", counter_name, counter.value())
    }
}

lazy_static::lazy_static! {
    pub static ref __COUNTERS: Mutex<BTreeMap<&'static str, Arc<Counter>>> = Mutex::new(BTreeMap::new());
}

pub fn insert_counter(descr: &'static str) -> Arc<Counter> {
    // A poisoned registry only means another thread panicked while inserting
    let mut counters = __COUNTERS.lock().unwrap_or_else(|e| e.into_inner());

    counters
        .entry(descr)
        .or_insert_with(|| Arc::new(Counter::new()))
        .clone()
}

/// Count how many times this line is reached.
///
/// Compiled to nothing unless the `counter` feature is enabled.
#[macro_export]
macro_rules! counter {
    ($descr:literal) => {
        if cfg!(feature = "counter") {
            use $crate::utils::counter::{insert_counter, lazy_static, Counter};
            lazy_static::lazy_static! {
                static ref COUNTER_REF: std::sync::Arc<Counter> = insert_counter($descr);
            }

            COUNTER_REF.inc();
        };
    };
}

pub use counter;
// Reexport for ease of use
pub use lazy_static;

#[cfg(test)]
mod tests {
    use super::{counter, insert_counter, __COUNTERS};

    #[test]
    fn counters_are_shared_by_name() {
        let a = insert_counter("test: shared");
        let b = insert_counter("test: shared");
        a.inc();
        b.inc();

        assert_eq!(a.value(), 2);
        assert_eq!(b.value(), 2);
    }

    #[test]
    fn counter_macro_only_registers_with_the_feature() {
        counter!("test: macro");
        let registered = __COUNTERS.lock().unwrap().contains_key("test: macro");
        assert_eq!(registered, cfg!(feature = "counter"));
    }
}
