use super::*;

#[test]
fn test_token_shape() {
    let session = PairingSession::new();
    assert_eq!(session.token().len(), TOKEN_LENGTH);
    assert!(session
        .token()
        .bytes()
        .all(|b| TOKEN_ALPHABET.contains(&b)));
}

#[test]
fn test_fresh_session_is_active() {
    let session = PairingSession::new();
    assert_eq!(session.status(), PairingStatus::Active);
    assert!(!session.is_expired());
    assert!(session.seconds_remaining() <= DEFAULT_TTL.as_secs());
}

#[test]
fn test_zero_ttl_expires_immediately() {
    let session = PairingSession::with_ttl(Duration::ZERO);
    assert!(session.is_expired());
    assert_eq!(session.status(), PairingStatus::Expired);
    assert_eq!(session.seconds_remaining(), 0);
}

#[test]
fn test_refresh_issues_new_token_and_restarts_countdown() {
    let mut session = PairingSession::with_ttl(Duration::ZERO);
    let old = session.token().to_string();
    assert!(session.is_expired());

    session.ttl = Duration::from_secs(60);
    session.refresh();

    assert_ne!(session.token(), old);
    assert!(!session.is_expired());
}

#[test]
fn test_qr_payload_embeds_token() {
    let session = PairingSession::new();
    let payload = session.qr_payload();
    assert!(payload.starts_with("chatfront-session:"));
    assert!(payload.ends_with(session.token()));
}

#[test]
fn test_tokens_are_unpredictable_enough() {
    // Two consecutive tokens colliding would be a 1 in 32^16 event.
    let a = PairingSession::new();
    let b = PairingSession::new();
    assert_ne!(a.token(), b.token());
}
