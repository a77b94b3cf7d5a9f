use crate::error::{Error, Result};
use crate::{DispatchArgs, HostArgs};

use consolebridge_envelope::LOG_FUNCTION;
use consolebridge_transport::{Boundary, DropReason, Outcome};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tracing::{info, warn};

pub async fn dispatch(host: &HostArgs, args: DispatchArgs) -> Result<()> {
    let context = super::start_host(host)?;
    let boundary = context.boundary();

    let input: Box<dyn AsyncRead + Unpin + Send> = match &args.input {
        Some(path) => Box::new(
            tokio::fs::File::open(path)
                .await
                .map_err(|e| Error::Io("failed to open input", e))?,
        ),
        None => Box::new(tokio::io::stdin()),
    };
    let mut lines = BufReader::new(input).lines();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut sent = 0_usize;
    let result = loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                info!("interrupted");
                break Ok(());
            }
            line = lines.next_line() => match line {
                Ok(Some(line)) if line.trim().is_empty() => {}
                Ok(Some(line)) => {
                    if deliver(&boundary, &line).await {
                        sent += 1;
                    }
                }
                Ok(None) => break Ok(()),
                Err(e) => break Err(Error::Io("failed to read input", e)),
            },
        }
    };

    context.shutdown().await;
    info!(sent, "dispatch finished");

    result
}

/// Hand one envelope to the host, waiting for room while the queue is full.
async fn deliver(boundary: &Boundary, line: &str) -> bool {
    loop {
        match boundary.try_invoke(LOG_FUNCTION, Some(line.to_string())) {
            Outcome::Enqueued => return true,
            Outcome::Dropped(DropReason::QueueFull) => tokio::task::yield_now().await,
            Outcome::Dropped(reason) => {
                warn!(?reason, "envelope dropped");
                return false;
            }
        }
    }
}
