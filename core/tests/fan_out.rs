mod common;

use appkit_core::api::{
    Application, ElementsCallback, LifecycleCallbacks, LifecycleEvent, LifecycleRegistry,
    MemoryLevel,
};
use common::{component, EventLog, NamedListener};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn lifecycle_fan_out_in_registration_order_and_after_unregister() {
    let app = Application::default();
    let log = EventLog::default();
    let listeners: Vec<Arc<NamedListener>> = ["l1", "l2", "l3"]
        .into_iter()
        .map(|name| NamedListener::new(name, &log))
        .collect();
    for l in &listeners {
        app.register_lifecycle_callbacks(l.clone() as Arc<dyn LifecycleCallbacks>);
    }

    let main = component("Main");
    app.on_component_start(&main);
    assert_eq!(
        log.entries(),
        vec!["l1:start:Main", "l2:start:Main", "l3:start:Main"]
    );

    log.clear();
    app.unregister_lifecycle_callbacks(listeners[1].clone() as Arc<dyn LifecycleCallbacks>);
    app.on_component_stop(&main);
    assert_eq!(log.entries(), vec!["l1:stop:Main", "l3:stop:Main"]);
}

#[test]
fn same_listener_in_both_registries_is_independent() {
    let app = Application::default();
    let log = EventLog::default();
    let shared = NamedListener::new("both", &log);

    app.register_lifecycle_callbacks(shared.clone() as Arc<dyn LifecycleCallbacks>);
    app.register_elements_callbacks(shared.clone() as Arc<dyn ElementsCallback>);
    app.unregister_lifecycle_callbacks(shared.clone() as Arc<dyn LifecycleCallbacks>);

    app.on_component_start(&component("Main"));
    app.on_memory_level(MemoryLevel::Low);
    assert_eq!(log.entries(), vec!["both:memory:low"]);
}

struct Counter(AtomicUsize);

impl LifecycleCallbacks for Counter {
    fn on_component_active(&self, _component: &appkit_core::api::ComponentRecord) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

#[test]
fn dispatch_while_registering_from_other_threads() {
    let registry = Arc::new(LifecycleRegistry::lifecycle());
    let stable = Arc::new(Counter(AtomicUsize::new(0)));
    registry.register(stable.clone() as Arc<dyn LifecycleCallbacks>);

    let done = AtomicBool::new(false);
    let record = component("Main");
    let rounds = 200;

    std::thread::scope(|scope| {
        scope.spawn(|| {
            while !done.load(Ordering::Acquire) {
                let churn: Arc<dyn LifecycleCallbacks> = Arc::new(Counter(AtomicUsize::new(0)));
                registry.register(churn.clone());
                registry.unregister(churn);
            }
        });

        for _ in 0..rounds {
            let report = registry.dispatch(&LifecycleEvent::Active(&record));
            assert!(report.is_clean());
            assert!(report.delivered >= 1);
        }
        done.store(true, Ordering::Release);
    });

    assert_eq!(stable.0.load(Ordering::Relaxed), rounds);
    assert_eq!(registry.len(), 1);
}
