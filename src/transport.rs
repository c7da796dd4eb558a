use crate::model::Message;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_SEND_LATENCY: Duration = Duration::from_secs(1);

/// Outbound delivery seam.
///
/// The composer appends optimistically and then hands the message to a
/// transport; a real network transport can be substituted later without
/// touching the store contract.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn deliver(&self, message: &Message) -> anyhow::Result<()>;
}

/// Stand-in for a network round trip: sleeps for a fixed latency and always
/// succeeds. There is no cancellation — a started delivery always completes.
pub struct SimulatedTransport {
    latency: Duration,
}

impl SimulatedTransport {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(DEFAULT_SEND_LATENCY)
    }
}

#[async_trait]
impl Transport for SimulatedTransport {
    async fn deliver(&self, message: &Message) -> anyhow::Result<()> {
        debug!(
            "simulating delivery of {} ({}ms)",
            message.id,
            self.latency.as_millis()
        );
        tokio::time::sleep(self.latency).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Direction;

    #[tokio::test(flavor = "current_thread")]
    async fn test_simulated_delivery_always_succeeds() {
        let transport = SimulatedTransport::new(Duration::ZERO);
        let msg = Message::new("1", Direction::Outbound, Some("hi"), None).unwrap();
        assert!(transport.deliver(&msg).await.is_ok());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_simulated_delivery_waits_out_latency() {
        let transport = SimulatedTransport::new(Duration::from_millis(50));
        let msg = Message::new("1", Direction::Outbound, Some("hi"), None).unwrap();
        let started = std::time::Instant::now();
        transport.deliver(&msg).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(50));
    }
}
