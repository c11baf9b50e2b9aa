//! Kitchen-side order notification.
//!
//! [`KitchenNotifier`] keeps an ordered list of [`OrderObserver`]s and invokes
//! them on [`notify`](KitchenNotifier::notify). The system attaches a [`Chef`]
//! and injects the notifier into the order actor at startup, but the
//! interactive flow never triggers a notification; the wiring is kept as a
//! demonstration of the subscription seam.

use crate::model::Order;
use tracing::info;

/// A subscriber informed when an order is placed.
pub trait OrderObserver: Send + Sync {
    fn order_placed(&self, order: &Order);
}

/// The kitchen's chef. Reacts to placed orders by logging them.
pub struct Chef;

impl OrderObserver for Chef {
    fn order_placed(&self, order: &Order) {
        info!(
            order_id = %order.id,
            items = order.item_count(),
            total = order.total(),
            "Chef notified of placed order"
        );
    }
}

/// Ordered set of subscribers to order notifications.
#[derive(Default)]
pub struct KitchenNotifier {
    observers: Vec<Box<dyn OrderObserver>>,
}

impl KitchenNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber. Observers are notified in attachment order.
    pub fn attach(&mut self, observer: Box<dyn OrderObserver>) {
        self.observers.push(observer);
    }

    /// Invokes `order_placed` on every attached subscriber, in attachment order.
    pub fn notify(&self, order: &Order) {
        for observer in &self.observers {
            observer.order_placed(order);
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Recorder {
        tag: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl OrderObserver for Recorder {
        fn order_placed(&self, order: &Order) {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:{}", self.tag, order.id));
        }
    }

    #[test]
    fn notify_invokes_observers_in_attachment_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut notifier = KitchenNotifier::new();
        notifier.attach(Box::new(Recorder {
            tag: "first",
            log: log.clone(),
        }));
        notifier.attach(Box::new(Recorder {
            tag: "second",
            log: log.clone(),
        }));
        assert_eq!(notifier.observer_count(), 2);

        let order = Order::new("order_1");
        notifier.notify(&order);

        let entries = log.lock().unwrap();
        assert_eq!(entries.as_slice(), ["first:order_1", "second:order_1"]);
    }

    #[test]
    fn notify_with_no_observers_is_a_noop() {
        let notifier = KitchenNotifier::new();
        notifier.notify(&Order::new("order_1"));
    }
}
