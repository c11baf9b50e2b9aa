//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`MockClient`] to get a client backed by an expectation queue instead of
//! a real [`ResourceActor`](crate::framework::ResourceActor). Queue expectations
//! with [`MockClient::expect_create`], [`MockClient::expect_get`] or
//! [`MockClient::expect_action`], then call [`MockClient::verify`].

use crate::framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
///
/// This enum is used internally by `MockClient` to track what requests
/// are expected and what responses should be returned.
enum Expectation<T: Entity> {
    Get {
        #[allow(dead_code)]
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Action {
        #[allow(dead_code)]
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Order>::new();
/// mock.expect_create().return_ok("order_1".to_string());
/// mock.expect_get("order_1".to_string()).return_ok(Some(order));
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: Entity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Entity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut exps = expectations_clone.lock().unwrap();
                let expectation = exps.pop_front();
                drop(exps); // Release lock before async operations

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id: _, respond_to },
                        Some(Expectation::Get { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create {
                            params: _,
                            respond_to,
                        },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action {
                            id: _,
                            action: _,
                            respond_to,
                        },
                        Some(Expectation::Action { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T: Entity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: Entity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Entity> GetExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<T>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: Entity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Entity> CreateExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, id: T::Id) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Create { response: Ok(id) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Create {
            response: Err(error),
        });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: Entity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Entity> ActionExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: T::ActionResult) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Action {
            id: self.id,
            response: Ok(result),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Action {
            id: self.id,
            response: Err(error),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MenuItem, MenuItemKind, Order, OrderAction, OrderActionResult};

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        // Create mock with fluent expectation API
        let mut mock = MockClient::<Order>::new();

        // Set up expectations
        mock.expect_create().return_ok("order_1".to_string());
        mock.expect_action("order_1".to_string())
            .return_ok(OrderActionResult::Added { count: 1 });
        mock.expect_get("order_1".to_string())
            .return_ok(Some(Order::new("order_1")));

        let client = mock.client();

        // Execute operations
        let id = client.create(crate::model::OrderCreate {}).await.unwrap();
        assert_eq!(id, "order_1");

        let result = client
            .perform_action(
                id.clone(),
                OrderAction::AddItem(MenuItem::new(MenuItemKind::Pizza)),
            )
            .await
            .unwrap();
        assert_eq!(result, OrderActionResult::Added { count: 1 });

        let fetched = client.get(id).await.unwrap();
        assert!(fetched.unwrap().items.is_empty());

        // Verify all expectations were met
        mock.verify();
    }
}
