use super::*;

fn ada() -> Identity {
    Identity { email: "ada+w@b.com".to_owned(), display_name: "Ada".to_owned() }
}

#[test]
fn api_url_prefixes_forwarder_path() {
    assert_eq!(api_url("/wallet/fund"), "/api/wallet/fund");
    assert_eq!(api_url("/user"), "/api/user");
}

// =============================================================
// Layout paths
// =============================================================

#[test]
fn session_scoped_layout_ignores_identity() {
    let identity = ada();
    assert_eq!(ApiLayout::SessionScoped.balance_path(Some(&identity)), "/user/balance");
    assert_eq!(ApiLayout::SessionScoped.transactions_path(None), "/transactions");
}

#[test]
fn email_scoped_layout_encodes_email_segment() {
    let identity = ada();
    assert_eq!(ApiLayout::EmailScoped.balance_path(Some(&identity)), "/wallet/ada%2Bw@b.com/balance");
    assert_eq!(
        ApiLayout::EmailScoped.transactions_path(Some(&identity)),
        "/wallet/ada%2Bw@b.com/transactions"
    );
}

#[test]
fn email_scoped_layout_without_identity_falls_back() {
    assert_eq!(ApiLayout::EmailScoped.balance_path(None), "/user/balance");
}

// =============================================================
// Error messages
// =============================================================

#[test]
fn error_from_response_reads_server_message() {
    let err = error_from_response(400, r#"{"message":"Insufficient funds"}"#);
    assert_eq!(err, ApiError::Status { status: 400, message: Some("Insufficient funds".to_owned()) });
    assert_eq!(err.user_message("Transfer failed"), "Insufficient funds");
}

#[test]
fn error_from_response_tolerates_non_json_body() {
    let err = error_from_response(502, "<html>bad gateway</html>");
    assert_eq!(err, ApiError::Status { status: 502, message: None });
    assert_eq!(err.user_message("Funding failed"), "Funding failed");
}

#[test]
fn blank_server_message_uses_fallback() {
    let err = ApiError::Status { status: 500, message: Some("  ".to_owned()) };
    assert_eq!(err.user_message("Withdrawal failed"), "Withdrawal failed");
}

#[test]
fn network_error_uses_fallback() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.user_message("Login failed"), "Login failed");
    assert_eq!(err.to_string(), "network error: connection refused");
}

// =============================================================
// Session body interpretation
// =============================================================

#[test]
fn session_body_with_email_is_truthy() {
    let identity = identity_from_session_body(&serde_json::json!({ "email": "a@b.com" })).unwrap();
    assert_eq!(identity, Identity { email: "a@b.com".to_owned(), display_name: String::new() });
}

#[test]
fn session_body_wrapped_in_user_is_truthy() {
    let body = serde_json::json!({ "token": "t", "user": { "email": "a@b.com", "fullName": "Ada" } });
    let identity = identity_from_session_body(&body).unwrap();
    assert_eq!(identity.display_name, "Ada");
}

#[test]
fn falsy_session_bodies_yield_none() {
    for body in [
        serde_json::Value::Null,
        serde_json::json!(false),
        serde_json::json!(""),
        serde_json::json!({}),
        serde_json::json!({ "email": "" }),
        serde_json::json!({ "user": null }),
        serde_json::json!([{ "email": "a@b.com" }]),
    ] {
        assert!(identity_from_session_body(&body).is_none(), "expected falsy for {body}");
    }
}

// =============================================================
// Transaction list interpretation
// =============================================================

#[test]
fn transactions_body_array_is_decoded() {
    let body = serde_json::json!([
        { "id": "t1", "amount": 10, "type": "fund", "timestamp": "2024-01-01T00:00:00Z" },
        { "id": "t2", "amount": 5, "type": "transfer", "timestamp": "2024-01-02T00:00:00Z" }
    ]);
    let txs = transactions_from_body(body);
    assert_eq!(txs.len(), 2);
    assert_eq!(txs[1].id, "t2");
}

#[test]
fn transactions_body_wrapped_object_is_decoded() {
    let body = serde_json::json!({ "transactions": [
        { "id": 1, "amount": 10, "type": "fund", "timestamp": "2024-01-01T00:00:00Z" }
    ] });
    assert_eq!(transactions_from_body(body).len(), 1);
}

#[test]
fn non_list_transactions_body_is_empty() {
    assert!(transactions_from_body(serde_json::json!({ "message": "ok" })).is_empty());
    assert!(transactions_from_body(serde_json::Value::Null).is_empty());
}

#[test]
fn malformed_transaction_entries_are_skipped() {
    let body = serde_json::json!([
        { "id": "ok", "amount": 1, "timestamp": "2024-01-01T00:00:00Z" },
        { "id": "bad" }
    ]);
    let txs = transactions_from_body(body);
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].id, "ok");
}

// =============================================================
// Login / register bodies
// =============================================================

#[test]
fn login_body_carries_identity_and_token() {
    let body = serde_json::json!({ "user": { "email": "a@b.com", "fullName": "Ada" }, "token": "t-1" });
    let session = login_from_body(&body).unwrap();
    assert_eq!(session.user.email, "a@b.com");
    assert_eq!(session.token.as_deref(), Some("t-1"));
}

#[test]
fn login_body_without_token_is_cookie_only() {
    let session = login_from_body(&serde_json::json!({ "email": "a@b.com" })).unwrap();
    assert_eq!(session.token, None);
}

#[test]
fn register_ack_without_identity_is_not_a_session() {
    assert!(login_from_body(&serde_json::json!({ "message": "User registered" })).is_none());
}

#[test]
fn session_body_with_several_name_keys_is_truthy() {
    let body = serde_json::json!({ "id": "1", "email": "a@b.com", "fullName": "Ada Obi", "name": "Ada" });
    let identity = identity_from_session_body(&body).unwrap();
    assert_eq!(identity.email, "a@b.com");
    assert_eq!(identity.display_name, "Ada Obi");
}

#[test]
fn session_body_with_null_name_is_truthy() {
    let body = serde_json::json!({ "email": "a@b.com", "fullName": null });
    let identity = identity_from_session_body(&body).unwrap();
    assert_eq!(identity, Identity { email: "a@b.com".to_owned(), display_name: String::new() });
}

#[test]
fn login_body_with_several_name_keys_signs_in() {
    let body = serde_json::json!({
        "user": { "email": "a@b.com", "displayName": "A", "fullName": "A B" },
        "token": "t",
    });
    let session = login_from_body(&body).unwrap();
    assert_eq!(session.user.display_name, "A");
    assert_eq!(session.token.as_deref(), Some("t"));
}
