use super::*;
use crate::model::Direction;

async fn session_with_seed() -> (ChatSession, Arc<ChatStore>) {
    let store = Arc::new(ChatStore::with_sample_data());
    (ChatSession::new(Arc::clone(&store)), store)
}

#[tokio::test(flavor = "current_thread")]
async fn test_new_session_has_no_selection() {
    let (session, _store) = session_with_seed().await;
    assert!(session.active_id().is_none());
    assert!(session.active().await.is_none());
    assert!(session.messages().await.is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn test_select_known_conversation() {
    let (mut session, _store) = session_with_seed().await;
    let selected = session.select("1").await.expect("seed chat 1 exists");
    assert_eq!(selected.name, "Alice Wonderland");
    assert_eq!(session.active_id(), Some("1"));
    assert!(!session.messages().await.is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn test_select_unknown_clears_selection() {
    let (mut session, _store) = session_with_seed().await;
    session.select("1").await.expect("seed chat 1 exists");

    assert!(session.select("does-not-exist").await.is_none());
    assert!(session.active_id().is_none());
    assert!(session.messages().await.is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn test_switching_selection_switches_projection() {
    let (mut session, store) = session_with_seed().await;

    session.select("1").await.unwrap();
    let alice_messages = session.messages().await;
    assert!(alice_messages.iter().all(|m| m.conversation_id == "1"));
    assert_eq!(alice_messages.len(), store.messages_for("1").await.len());

    session.select("2").await.unwrap();
    let bob_messages = session.messages().await;
    assert!(bob_messages.iter().all(|m| m.conversation_id == "2"));
    assert_ne!(alice_messages[0].id, bob_messages[0].id);
}

#[tokio::test(flavor = "current_thread")]
async fn test_projection_is_never_stale_after_append() {
    let (mut session, store) = session_with_seed().await;
    session.select("3").await.unwrap();
    let before = session.messages().await.len();

    let msg = crate::model::Message::new("3", Direction::Inbound, Some("new kite!"), None).unwrap();
    store.append(msg).await.unwrap();

    let after = session.messages().await;
    assert_eq!(after.len(), before + 1);
    assert_eq!(after.last().unwrap().content.as_deref(), Some("new kite!"));
}

#[tokio::test(flavor = "current_thread")]
async fn test_active_reflects_store_mutations() {
    let (mut session, store) = session_with_seed().await;
    session.select("2").await.unwrap();

    store.set_muted("2", true).await;
    store.set_status("2", "Online").await;

    let active = session.active().await.unwrap();
    assert!(active.muted);
    assert_eq!(active.status, "Online");
}

#[tokio::test(flavor = "current_thread")]
async fn test_clear_active_only_touches_selection() {
    let (mut session, store) = session_with_seed().await;
    session.select("1").await.unwrap();
    let other_count = store.messages_for("4").await.len();

    let removed = session.clear_active().await;
    assert!(removed > 0);
    assert!(session.messages().await.is_empty());
    assert_eq!(store.messages_for("4").await.len(), other_count);

    // Idempotent: a second clear is a no-op.
    assert_eq!(session.clear_active().await, 0);
}

#[tokio::test(flavor = "current_thread")]
async fn test_clear_without_selection_is_noop() {
    let (session, store) = session_with_seed().await;
    let total = store.message_count().await;
    assert_eq!(session.clear_active().await, 0);
    assert_eq!(store.message_count().await, total);
}

#[tokio::test(flavor = "current_thread")]
async fn test_two_sessions_share_store_but_not_selection() {
    let store = Arc::new(ChatStore::with_sample_data());
    let mut one = ChatSession::new(Arc::clone(&store));
    let mut two = ChatSession::new(Arc::clone(&store));

    one.select("1").await.unwrap();
    two.select("2").await.unwrap();

    assert_eq!(one.active_id(), Some("1"));
    assert_eq!(two.active_id(), Some("2"));
    assert!(one.messages().await.iter().all(|m| m.conversation_id == "1"));
    assert!(two.messages().await.iter().all(|m| m.conversation_id == "2"));
}
