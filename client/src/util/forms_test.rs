use super::*;

#[test]
fn email_shape_check() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("first.last+tag@mail.example.org"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("@b.com"));
    assert!(!is_valid_email("a@@b.com"));
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("a@b..com"));
}

// =============================================================
// Fund
// =============================================================

#[test]
fn fund_builds_request() {
    assert_eq!(
        validate_fund(" 100 ", "card"),
        Ok(FundRequest { amount: 100.0, payment_method: "card".to_owned() })
    );
}

#[test]
fn fund_requires_amount_and_method() {
    assert_eq!(validate_fund("", "card"), Err("Amount required"));
    assert_eq!(validate_fund("10", "  "), Err("Choose a method"));
}

#[test]
fn fund_rejects_non_positive_amounts() {
    assert_eq!(validate_fund("0", "card"), Err("Amount must be positive"));
    assert_eq!(validate_fund("-5", "card"), Err("Amount must be positive"));
    assert_eq!(validate_fund("abc", "card"), Err("Amount must be a number"));
    assert_eq!(validate_fund("NaN", "card"), Err("Amount must be positive"));
}

// =============================================================
// Transfer
// =============================================================

#[test]
fn transfer_omits_blank_description() {
    let request = validate_transfer("25", " c@d.com ", "   ").unwrap();
    assert_eq!(request.recipient_email, "c@d.com");
    assert_eq!(request.description, None);
}

#[test]
fn transfer_keeps_description() {
    let request = validate_transfer("25.5", "c@d.com", " rent ").unwrap();
    assert_eq!(request.description.as_deref(), Some("rent"));
}

#[test]
fn transfer_validates_recipient() {
    assert_eq!(validate_transfer("25", "", ""), Err("Recipient email is required"));
    assert_eq!(validate_transfer("25", "nope", ""), Err("Invalid email format"));
    assert_eq!(validate_transfer("", "c@d.com", ""), Err("Amount is required"));
}

// =============================================================
// Withdraw
// =============================================================

#[test]
fn withdraw_requires_method() {
    assert_eq!(validate_withdraw("10", ""), Err("Withdrawal method is required"));
    assert_eq!(
        validate_withdraw("10", "bank"),
        Ok(WithdrawRequest { amount: 10.0, payment_method: "bank".to_owned() })
    );
}

// =============================================================
// Login / Register
// =============================================================

#[test]
fn login_requires_email_and_password() {
    assert_eq!(validate_login("", "pw"), Err("Email is required"));
    assert_eq!(validate_login("bad", "pw"), Err("Invalid email format"));
    assert_eq!(validate_login("a@b.com", ""), Err("Password is required"));
    assert_eq!(
        validate_login(" a@b.com ", "pw"),
        Ok(LoginRequest { email: "a@b.com".to_owned(), password: "pw".to_owned() })
    );
}

#[test]
fn register_checks_each_field_in_order() {
    assert_eq!(validate_register(" ", "a@b.com", "secret1"), Err("Full Name is required"));
    assert_eq!(validate_register("Ada", "", "secret1"), Err("Email is required"));
    assert_eq!(validate_register("Ada", "a@b.com", "12345"), Err("Password must be at least 6 characters"));
    let request = validate_register(" Ada Obi ", "a@b.com", "123456").unwrap();
    assert_eq!(request.full_name, "Ada Obi");
}

// =============================================================
// Wallet form dispatch
// =============================================================

#[test]
fn wallet_form_fund_posts_expected_body() {
    let input = WalletFormInput { amount: "100".to_owned(), payment_method: "card".to_owned(), ..Default::default() };
    let submission = validate_wallet_form(WalletAction::Fund, &input).unwrap();
    assert_eq!(submission.action(), WalletAction::Fund);
    assert!((submission.amount() - 100.0).abs() < f64::EPSILON);
    let WalletSubmission::Fund(body) = submission else { panic!("expected fund submission") };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "amount": 100, "paymentMethod": "card" })
    );
}

#[test]
fn wallet_form_transfer_ignores_payment_method() {
    let input = WalletFormInput {
        amount: "5".to_owned(),
        payment_method: String::new(),
        recipient_email: "c@d.com".to_owned(),
        description: String::new(),
    };
    let submission = validate_wallet_form(WalletAction::Transfer, &input).unwrap();
    assert_eq!(submission.action(), WalletAction::Transfer);
}

#[test]
fn wallet_form_withdraw_reports_missing_method() {
    let input = WalletFormInput { amount: "5".to_owned(), ..Default::default() };
    assert_eq!(validate_wallet_form(WalletAction::Withdraw, &input), Err("Withdrawal method is required"));
}
