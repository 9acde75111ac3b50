use arc_swap::ArcSwap;
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{error, warn};

/// Outcome of one fan-out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Listeners that returned normally.
    pub delivered: usize,
    /// Listeners that panicked; the remaining listeners still ran.
    pub faulted: usize,
}

impl DispatchReport {
    pub fn is_clean(&self) -> bool {
        self.faulted == 0
    }

    pub fn total(&self) -> usize {
        self.delivered + self.faulted
    }
}

/// Insertion-ordered listener list with copy-on-write snapshots.
///
/// `register`/`unregister` publish a new list; dispatch loads the list once
/// and walks that snapshot, so a fan-out in progress never observes a
/// concurrent mutation. The same listener may be registered more than once
/// and every occurrence is dispatched.
pub struct CallbackRegistry<L: ?Sized> {
    name: &'static str,
    entries: ArcSwap<Vec<Arc<L>>>,
}

impl<L: ?Sized> CallbackRegistry<L> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: ArcSwap::from_pointee(Vec::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Append a listener. `None` is rejected and logged.
    pub fn register(&self, listener: impl Into<Option<Arc<L>>>) -> bool {
        let Some(listener) = listener.into() else {
            warn!(registry = self.name, "register ignored null listener");
            return false;
        };
        self.entries.rcu(|current| {
            let mut next = Vec::with_capacity(current.len() + 1);
            next.extend(current.iter().cloned());
            next.push(listener.clone());
            next
        });
        true
    }

    /// Remove every entry that is the same allocation as `listener`.
    ///
    /// Returns how many entries were dropped; `None` and unknown listeners
    /// remove nothing.
    pub fn unregister(&self, listener: impl Into<Option<Arc<L>>>) -> usize {
        let Some(listener) = listener.into() else {
            return 0;
        };
        let mut removed = 0;
        self.entries.rcu(|current| {
            let next: Vec<Arc<L>> = current
                .iter()
                .filter(|entry| !Arc::ptr_eq(entry, &listener))
                .cloned()
                .collect();
            removed = current.len() - next.len();
            next
        });
        removed
    }

    pub fn clear(&self) {
        self.entries.store(Arc::new(Vec::new()));
    }

    pub fn len(&self) -> usize {
        self.entries.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.load().is_empty()
    }

    pub fn snapshot(&self) -> Arc<Vec<Arc<L>>> {
        self.entries.load_full()
    }

    /// Invoke `f` on every listener of the current snapshot, in order.
    pub fn for_each<F>(&self, mut f: F) -> DispatchReport
    where
        F: FnMut(&L),
    {
        let snapshot = self.snapshot();
        let mut report = DispatchReport::default();

        for listener in snapshot.iter() {
            match catch_unwind(AssertUnwindSafe(|| f(&**listener))) {
                Ok(()) => report.delivered += 1,
                Err(payload) => {
                    report.faulted += 1;
                    error!(
                        registry = self.name,
                        panic = %panic_message(payload.as_ref()),
                        "listener panicked during dispatch"
                    );
                }
            }
        }

        report
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
