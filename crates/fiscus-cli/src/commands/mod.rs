pub mod backup;
pub mod restore;

use tokio_util::sync::CancellationToken;

/// Cancellation token wired to Ctrl-C, shared by both commands.
pub fn cancel_on_interrupt() -> CancellationToken {
    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_signal.cancel();
        }
    });
    cancel
}
