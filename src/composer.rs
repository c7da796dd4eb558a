use crate::errors::ChatError;
use crate::model::{Direction, FileHandle, MediaRef, Message};
use crate::store::ChatStore;
use crate::transport::{SimulatedTransport, Transport};
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// Handle to an in-flight submission: the optimistic message is already in
/// the store (status Sending); awaiting `settled` observes the transition to
/// Sent once the transport completes.
pub struct Submission {
    pub message_id: String,
    settled: oneshot::Receiver<()>,
}

impl Submission {
    pub async fn settled(self) {
        // A dropped sender means the settlement task panicked; the message
        // simply stays in Sending, which the UI renders as a clock icon.
        let _ = self.settled.await;
    }
}

/// Builds and submits outbound messages for the active conversation.
pub struct Composer {
    store: Arc<ChatStore>,
    transport: Arc<dyn Transport>,
}

impl Composer {
    pub fn new(store: Arc<ChatStore>) -> Self {
        Self::with_transport(store, Arc::new(SimulatedTransport::default()))
    }

    pub fn with_transport(store: Arc<ChatStore>, transport: Arc<dyn Transport>) -> Self {
        Self { store, transport }
    }

    /// Submit a message to the active conversation.
    ///
    /// Returns `Ok(None)` (a silent no-op) when there is no active
    /// conversation, the conversation is unknown, or there is nothing to send
    /// (whitespace-only text and no attachment). Otherwise appends exactly one
    /// outbound message — immediately visible through the projection with
    /// status Sending — and spawns its delivery; once the transport completes
    /// the status settles to Sent.
    pub async fn submit(
        &self,
        conversation_id: Option<&str>,
        text: &str,
        attachment: Option<FileHandle>,
    ) -> Result<Option<Submission>, ChatError> {
        let Some(conversation_id) = conversation_id else {
            debug!("submit with no active conversation, ignoring");
            return Ok(None);
        };
        if self.store.conversation(conversation_id).await.is_none() {
            debug!("submit to unknown conversation {}, ignoring", conversation_id);
            return Ok(None);
        }

        let message = match attachment {
            Some(file) => {
                let media = MediaRef::from_file(&file);
                // Text, when present, rides along as the caption.
                let caption = text.trim();
                let caption = (!caption.is_empty()).then_some(caption);
                Message::new(conversation_id, Direction::Outbound, caption, Some(media))?
            }
            None => {
                if text.trim().is_empty() {
                    return Ok(None);
                }
                Message::new(conversation_id, Direction::Outbound, Some(text), None)?
            }
        };

        let message_id = message.id.clone();
        self.store.append(message.clone()).await?;

        let (tx, rx) = oneshot::channel();
        let store = Arc::clone(&self.store);
        let transport = Arc::clone(&self.transport);
        tokio::spawn(async move {
            if let Err(e) = transport.deliver(&message).await {
                // The simulated transport never fails; a real one might. The
                // message still settles — there is no retry or abort path here.
                warn!("delivery failed for {}: {}", message.id, e);
            }
            if !store.mark_sent(&message.id).await {
                debug!("message {} was cleared before settlement", message.id);
            }
            let _ = tx.send(());
        });

        Ok(Some(Submission {
            message_id,
            settled: rx,
        }))
    }
}
