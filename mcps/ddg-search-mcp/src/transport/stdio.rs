//! stdio transport for JSON-RPC 2.0 over NDJSON
//!
//! Each non-blank input line is dispatched on its own task, so a slow
//! search does not hold up later requests. Responses may therefore be
//! written out of order; clients match them by id. A single writer task
//! owns the output stream.

use anyhow::Result;
use tokio::io::{self, AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::server::SearchMcpServer;

/// Serve on the process's stdin and stdout until EOF
pub async fn serve(server: SearchMcpServer) -> Result<()> {
    tracing::info!("Serving MCP over stdio");
    serve_lines(server, io::stdin(), io::stdout()).await
}

/// Serve NDJSON read from `input`, writing responses to `output`
///
/// Returns once the input is exhausted and every in-flight request has
/// been answered.
pub async fn serve_lines<R, W>(server: SearchMcpServer, input: R, output: W) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel::<String>();
    let writer = tokio::spawn(write_lines(rx, output));

    let mut lines = BufReader::new(input).lines();
    let mut in_flight = JoinSet::new();

    while let Some(line) = lines.next_line().await? {
        reap_finished(&mut in_flight);

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let server = server.clone();
        let tx = tx.clone();
        let line = line.to_string();
        in_flight.spawn(async move {
            let Some(response) = server.handle_str(&line).await else {
                return;
            };
            match serde_json::to_string(&response) {
                Ok(json) => {
                    let _ = tx.send(json);
                }
                Err(e) => tracing::error!("Failed to serialize response: {}", e),
            }
        });
    }

    reap_finished(&mut in_flight);
    tracing::info!("stdin closed, draining {} in-flight request(s)", in_flight.len());
    while let Some(joined) = in_flight.join_next().await {
        log_task_failure(joined);
    }

    drop(tx);
    writer.await??;
    Ok(())
}

/// Drop finished request tasks so the set only holds pending ones
fn reap_finished(in_flight: &mut JoinSet<()>) {
    while let Some(joined) = in_flight.try_join_next() {
        log_task_failure(joined);
    }
}

fn log_task_failure(joined: Result<(), tokio::task::JoinError>) {
    if let Err(e) = joined {
        tracing::error!("Request task failed: {}", e);
    }
}

async fn write_lines<W>(mut rx: mpsc::UnboundedReceiver<String>, mut output: W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(line) = rx.recv().await {
        output.write_all(line.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
    }
    Ok(())
}
