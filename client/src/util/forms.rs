//! Client-side validation for the auth and wallet forms.
//!
//! Each validator trims its inputs and returns either a ready-to-post request
//! body or the first failing rule's message.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{FundRequest, LoginRequest, RegisterRequest, TransferRequest, WithdrawRequest};
use crate::state::wallet::WalletAction;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Payment rails offered by the fund and withdraw forms.
pub const PAYMENT_METHODS: [(&str, &str); 2] = [("card", "Debit/Credit Card"), ("bank", "Bank Transfer")];

/// Loose shape check: one `@`, non-empty local part, dotted domain.
pub fn is_valid_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !raw.chars().any(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

fn parse_amount(raw: &str, required: &'static str) -> Result<f64, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(required);
    }
    let amount: f64 = raw.parse().map_err(|_| "Amount must be a number")?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err("Amount must be positive");
    }
    Ok(amount)
}

fn validate_email(raw: &str, required: &'static str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(required);
    }
    if !is_valid_email(email) {
        return Err("Invalid email format");
    }
    Ok(email.to_owned())
}

/// # Errors
///
/// Returns the message for the first failing field.
pub fn validate_fund(amount: &str, payment_method: &str) -> Result<FundRequest, &'static str> {
    let amount = parse_amount(amount, "Amount required")?;
    let payment_method = payment_method.trim();
    if payment_method.is_empty() {
        return Err("Choose a method");
    }
    Ok(FundRequest { amount, payment_method: payment_method.to_owned() })
}

/// # Errors
///
/// Returns the message for the first failing field.
pub fn validate_transfer(
    amount: &str,
    recipient_email: &str,
    description: &str,
) -> Result<TransferRequest, &'static str> {
    let amount = parse_amount(amount, "Amount is required")?;
    let recipient_email = validate_email(recipient_email, "Recipient email is required")?;
    let description = description.trim();
    Ok(TransferRequest {
        amount,
        recipient_email,
        description: (!description.is_empty()).then(|| description.to_owned()),
    })
}

/// # Errors
///
/// Returns the message for the first failing field.
pub fn validate_withdraw(amount: &str, payment_method: &str) -> Result<WithdrawRequest, &'static str> {
    let amount = parse_amount(amount, "Amount is required")?;
    let payment_method = payment_method.trim();
    if payment_method.is_empty() {
        return Err("Withdrawal method is required");
    }
    Ok(WithdrawRequest { amount, payment_method: payment_method.to_owned() })
}

/// # Errors
///
/// Returns the message for the first failing field.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = validate_email(email, "Email is required")?;
    if password.is_empty() {
        return Err("Password is required");
    }
    Ok(LoginRequest { email, password: password.to_owned() })
}

/// # Errors
///
/// Returns the message for the first failing field.
pub fn validate_register(full_name: &str, email: &str, password: &str) -> Result<RegisterRequest, &'static str> {
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return Err("Full Name is required");
    }
    let email = validate_email(email, "Email is required")?;
    if password.is_empty() {
        return Err("Password is required");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    Ok(RegisterRequest { full_name: full_name.to_owned(), email, password: password.to_owned() })
}

/// A validated wallet form, ready to post.
#[derive(Clone, Debug, PartialEq)]
pub enum WalletSubmission {
    Fund(FundRequest),
    Transfer(TransferRequest),
    Withdraw(WithdrawRequest),
}

impl WalletSubmission {
    pub fn action(&self) -> WalletAction {
        match self {
            Self::Fund(_) => WalletAction::Fund,
            Self::Transfer(_) => WalletAction::Transfer,
            Self::Withdraw(_) => WalletAction::Withdraw,
        }
    }

    pub fn amount(&self) -> f64 {
        match self {
            Self::Fund(r) => r.amount,
            Self::Transfer(r) => r.amount,
            Self::Withdraw(r) => r.amount,
        }
    }
}

/// Raw field values of a wallet form; unused fields are ignored per action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletFormInput {
    pub amount: String,
    pub payment_method: String,
    pub recipient_email: String,
    pub description: String,
}

/// # Errors
///
/// Returns the message for the first failing field of `action`'s form.
pub fn validate_wallet_form(action: WalletAction, input: &WalletFormInput) -> Result<WalletSubmission, &'static str> {
    match action {
        WalletAction::Fund => validate_fund(&input.amount, &input.payment_method).map(WalletSubmission::Fund),
        WalletAction::Transfer => validate_transfer(&input.amount, &input.recipient_email, &input.description)
            .map(WalletSubmission::Transfer),
        WalletAction::Withdraw => {
            validate_withdraw(&input.amount, &input.payment_method).map(WalletSubmission::Withdraw)
        }
    }
}
