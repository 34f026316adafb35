//! Integration tests for the session and config helpers working together.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use pdfprobe::{session, ConfigStore};

fn make_token(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        serde_json::json!({"exp": exp, "user_id": "suite@example.com", "roles": ["tester"]})
            .to_string(),
    );
    format!("{header}.{payload}.signature")
}

#[test]
fn cached_token_survives_a_reopen() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    let token = make_token(Utc::now().timestamp() + 3_600);

    let mut store = ConfigStore::open(&path).unwrap();
    assert!(session::is_expired(Some(store.jwt())), "fresh config has no session");

    store.update(|s| s.jwt = token.clone()).unwrap();

    let reopened = ConfigStore::open(&path).unwrap();
    assert_eq!(reopened.jwt(), token);
    assert!(!session::is_expired(Some(reopened.jwt())));
}

#[test]
fn stale_cached_token_forces_a_fresh_login() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    let mut store = ConfigStore::open(&path).unwrap();
    store.update(|s| s.jwt = make_token(1_000)).unwrap();

    assert!(session::is_expired(Some(store.jwt())));
}

#[test]
fn decoded_claims_expose_identity() {
    let claims = session::decode_claims(&make_token(1_700_000_000)).unwrap();
    assert_eq!(claims.user_id, "suite@example.com");
    assert_eq!(claims.roles, vec!["tester".to_string()]);
    assert_eq!(claims.expires_at().timestamp(), 1_700_000_000);
}
