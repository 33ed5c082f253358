//! Status Heartbeat
//!
//! Checks `GET /status` on a fixed interval. The first failure to reach the
//! service ends the task with [`ClientError::StatusUnreachable`], which the
//! application treats as fatal.

use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::client::AgentClient;
use crate::error::Result;

/// Run the heartbeat until shutdown or the first unreachable status check
pub async fn run_heartbeat(client: AgentClient, shutdown: CancellationToken) -> Result<()> {
    let period = client.config().status_check_interval;
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => return Ok(()),
            _ = ticker.tick() => {}
        }

        tokio::select! {
            _ = shutdown.cancelled() => return Ok(()),
            status = client.check_status() => {
                status?;
                debug!("status check ok");
            }
        }
    }
}
