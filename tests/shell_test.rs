//! Scripted end-to-end sessions through the interactive shell.
//!
//! Each test feeds a whole session's worth of input through a `Cursor` and
//! asserts on the captured transcript.

use bistro::lifecycle::OrderSystem;
use bistro::shell::Shell;
use std::io::Cursor;

async fn run_session(script: &str) -> String {
    let system = OrderSystem::new();
    let mut out = Vec::new();
    {
        let mut shell = Shell::new(Cursor::new(script.to_string()), &mut out);
        shell
            .run(&system.order_client)
            .await
            .expect("shell session failed");
    }
    system.shutdown().await.expect("shutdown failed");
    String::from_utf8(out).expect("non-utf8 transcript")
}

#[tokio::test]
async fn pizza_and_pasta_paid_in_cash() {
    // Add pizza, add pasta, pay cash, exit
    let transcript = run_session("2\n1\n2\n2\n3\n1\n4\n").await;

    assert!(transcript.contains("Added Pizza to your order (1 item(s))."));
    assert!(transcript.contains("Added Pasta to your order (2 item(s))."));
    assert!(transcript.contains("Your total is $19.98."));
    assert!(transcript.contains("Paid $19.98 in cash."));
}

#[tokio::test]
async fn credit_card_payment() {
    // Add pizza, pay by credit card, exit
    let transcript = run_session("2\n1\n3\n2\n4\n").await;

    assert!(transcript.contains("Charged $10.99 to credit card."));
}

#[tokio::test]
async fn unknown_payment_code_defaults_to_cash() {
    // Add pasta, pay with method 7, exit
    let transcript = run_session("2\n2\n3\n7\n4\n").await;

    assert!(transcript.contains("Unknown payment method, defaulting to cash."));
    assert!(transcript.contains("Paid $8.99 in cash."));
}

#[tokio::test]
async fn paying_an_empty_order_asks_for_items_first() {
    let transcript = run_session("3\n4\n").await;

    assert!(transcript.contains("Your order is empty. Add items first."));
    // No strategy was invoked
    assert!(!transcript.contains("Paid"));
    assert!(!transcript.contains("Charged"));
}

#[tokio::test]
async fn cheese_prompt_decorates_the_pizza() {
    let transcript = run_session("1\ny\n4\n").await;

    assert!(transcript.contains("+ Cheese"));
    assert!(transcript.contains("12.49"));
}

#[tokio::test]
async fn cheese_prompt_accepts_uppercase() {
    let transcript = run_session("1\nY\n4\n").await;

    assert!(transcript.contains("+ Cheese"));
}

#[tokio::test]
async fn declining_cheese_leaves_the_pizza_plain() {
    let transcript = run_session("1\nn\n4\n").await;

    assert!(!transcript.contains("+ Cheese"));
    assert!(transcript.contains("Pizza - $10.99"));
    assert!(transcript.contains("Pasta - $8.99"));
}

#[tokio::test]
async fn non_numeric_input_redisplays_the_menu() {
    let transcript = run_session("abc\n4\n").await;

    assert!(transcript.contains("Invalid input."));
    // The main menu was shown again after the bad line
    assert_eq!(transcript.matches("=== The Bistro ===").count(), 2);
}

#[tokio::test]
async fn invalid_item_number_does_not_touch_the_order() {
    // Choice 2 with item number 3, then try to pay: still empty
    let transcript = run_session("2\n3\n3\n4\n").await;

    assert!(transcript.contains("Invalid selection."));
    assert!(transcript.contains("Your order is empty. Add items first."));
}

#[tokio::test]
async fn unrecognized_menu_choice_is_reported() {
    let transcript = run_session("9\n4\n").await;

    assert!(transcript.contains("Invalid selection."));
}

#[tokio::test]
async fn exit_prints_a_farewell() {
    let transcript = run_session("4\n").await;

    assert!(transcript.contains("Thank you for visiting The Bistro. Goodbye!"));
}

#[tokio::test]
async fn end_of_input_ends_the_session_cleanly() {
    let transcript = run_session("2\n1\n").await;

    // One item was added, then input ran out; no panic, no farewell
    assert!(transcript.contains("Added Pizza to your order (1 item(s))."));
    assert!(!transcript.contains("Goodbye"));
}
