//! Interactive entry point: wire up tracing, start the order system, and run
//! the shell over stdin/stdout until the guest exits.

use bistro::lifecycle::{setup_tracing, OrderSystem};
use bistro::shell::Shell;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting The Bistro");

    let system = OrderSystem::new();

    // Stdout is acquired per write so tracing output can interleave; holding
    // the lock for the whole session would block the actor task's log lines.
    let stdin = std::io::stdin();
    let mut shell = Shell::new(stdin.lock(), std::io::stdout());
    shell
        .run(&system.order_client)
        .await
        .map_err(|e| e.to_string())?;

    system.shutdown().await?;

    info!("Goodbye");
    Ok(())
}
