//! The interactive ordering loop.
//!
//! A small state machine over one prompt: the main menu is shown, one line is
//! read and parsed as an integer choice 1-4, and the choice is dispatched.
//! All invalid input is handled locally by re-prompting; nothing here aborts
//! the process.
//!
//! The shell is generic over [`BufRead`] input and [`Write`] output so tests
//! can script a whole session with a `Cursor` and capture the transcript in a
//! `Vec<u8>`.

use crate::clients::OrderClient;
use crate::model::{MenuItem, MenuItemKind};
use crate::order_actor::OrderError;
use crate::payment::PaymentMethod;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that end a shell session. User mistakes never surface here; only
/// I/O failures and a lost order actor do.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Order(#[from] OrderError),
}

/// The interactive shell: reads choices, drives the order client, prints results.
pub struct Shell<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Runs the menu loop until the guest exits (choice 4) or input ends.
    pub async fn run(&mut self, client: &OrderClient) -> Result<(), ShellError> {
        let order_id = client.open().await?;
        info!(%order_id, "Shell session started");

        loop {
            self.print_main_menu()?;
            let Some(line) = self.read_line()? else {
                debug!("Input closed, ending session");
                break;
            };
            match line.trim().parse::<i64>() {
                Err(_) => writeln!(self.out, "Invalid input.")?,
                Ok(1) => self.show_menu()?,
                Ok(2) => self.add_item(client, &order_id).await?,
                Ok(3) => self.checkout(client, &order_id).await?,
                Ok(4) => {
                    writeln!(self.out, "Thank you for visiting The Bistro. Goodbye!")?;
                    break;
                }
                Ok(other) => {
                    debug!(choice = other, "Unrecognized menu choice");
                    writeln!(self.out, "Invalid selection.")?;
                }
            }
        }

        info!(%order_id, "Shell session ended");
        Ok(())
    }

    fn print_main_menu(&mut self) -> Result<(), ShellError> {
        writeln!(self.out)?;
        writeln!(self.out, "=== The Bistro ===")?;
        writeln!(self.out, "1. Show menu")?;
        writeln!(self.out, "2. Add item to order")?;
        writeln!(self.out, "3. Pay")?;
        writeln!(self.out, "4. Exit")?;
        write!(self.out, "Choice: ")?;
        self.out.flush()?;
        Ok(())
    }

    /// Choice 1: build fresh catalog items, offer cheese for the pizza, print both.
    fn show_menu(&mut self) -> Result<(), ShellError> {
        let mut pizza = MenuItem::new(MenuItemKind::Pizza);
        let pasta = MenuItem::new(MenuItemKind::Pasta);

        write!(self.out, "Add cheese to the pizza? (y/n): ")?;
        self.out.flush()?;
        if let Some(answer) = self.read_line()? {
            if answer.trim().eq_ignore_ascii_case("y") {
                pizza = pizza.with_cheese();
                writeln!(self.out, "Cheese added - pizza is now ${:.2}.", pizza.price())?;
            }
        }

        writeln!(self.out, "Today's menu:")?;
        writeln!(self.out, "{}", pizza.display())?;
        writeln!(self.out, "{}", pasta.display())?;
        Ok(())
    }

    /// Choice 2: append a freshly created item to the shared order.
    async fn add_item(&mut self, client: &OrderClient, order_id: &str) -> Result<(), ShellError> {
        write!(self.out, "Select item (1 = Pizza, 2 = Pasta): ")?;
        self.out.flush()?;
        let Some(line) = self.read_line()? else {
            return Ok(());
        };
        let kind = match line.trim().parse::<i64>() {
            Err(_) => {
                writeln!(self.out, "Invalid input.")?;
                return Ok(());
            }
            Ok(1) => MenuItemKind::Pizza,
            Ok(2) => MenuItemKind::Pasta,
            Ok(_) => {
                // Well-formed but unknown item number; the order stays untouched.
                writeln!(self.out, "Invalid selection.")?;
                return Ok(());
            }
        };

        let item = MenuItem::new(kind);
        let label = item.label();
        let count = client.add_item(order_id.to_string(), item).await?;
        writeln!(self.out, "Added {} to your order ({} item(s)).", label, count)?;
        Ok(())
    }

    /// Choice 3: settle the order, unless there is nothing to pay.
    async fn checkout(&mut self, client: &OrderClient, order_id: &str) -> Result<(), ShellError> {
        let summary = client.summary(order_id.to_string()).await?;
        if summary.item_count == 0 {
            writeln!(self.out, "Your order is empty. Add items first.")?;
            return Ok(());
        }

        write!(self.out, "Payment method (1 = Cash, 2 = Credit card): ")?;
        self.out.flush()?;
        let Some(line) = self.read_line()? else {
            return Ok(());
        };
        let code = match line.trim().parse::<i64>() {
            Err(_) => {
                writeln!(self.out, "Invalid input.")?;
                return Ok(());
            }
            Ok(code) => code,
        };

        let (method, defaulted) = PaymentMethod::from_code(code);
        if defaulted {
            writeln!(self.out, "Unknown payment method, defaulting to cash.")?;
        }

        writeln!(self.out, "Your total is ${:.2}.", summary.total)?;
        writeln!(self.out, "{}", method.strategy().pay(summary.total))?;
        Ok(())
    }

    /// Reads one line; `None` means the input reached end-of-file.
    fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            writeln!(self.out)?;
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}
