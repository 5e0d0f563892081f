//! Demo session handling
//!
//! The wallet has exactly one account, checked against a fixed credential
//! pair. Logging in initializes the wallet state on first use; logging out
//! only drops the session keys, so balance and history survive.

use crate::core::clock::Clock;
use crate::core::ledger::{LedgerStore, KEY_IS_LOGGED, KEY_LAST_UPDATE, KEY_USER_EMAIL};
use crate::storage::KeyValueStore;
use crate::types::WalletError;
use rust_decimal::Decimal;
use tracing::info;

/// Email of the demo account
pub const DEMO_EMAIL: &str = "demo@alkewallet.com";
/// Password of the demo account
pub const DEMO_PASSWORD: &str = "1234";

/// Check credentials and open a session
///
/// The email is trimmed before comparison. On success the session keys are
/// written and the balance is initialized to zero if it was never set (or
/// the last-update stamp is filled in if only that is missing).
///
/// # Returns
///
/// `Ok(false)` for wrong credentials, in which case nothing is written.
pub fn login<S: KeyValueStore, C: Clock>(
    ledger: &mut LedgerStore<S, C>,
    email: &str,
    password: &str,
) -> Result<bool, WalletError> {
    let email = email.trim();
    if email != DEMO_EMAIL || password != DEMO_PASSWORD {
        info!(email, "login rejected");
        return Ok(false);
    }

    ledger.store_mut().set(KEY_IS_LOGGED, "true")?;
    ledger.store_mut().set(KEY_USER_EMAIL, email)?;

    if !ledger.has_balance() {
        ledger.set_balance(Decimal::ZERO)?;
    } else if ledger.store().get(KEY_LAST_UPDATE).is_none_or(|stamp| stamp.is_empty()) {
        ledger.touch_last_update()?;
    }

    info!(email, "logged in");
    Ok(true)
}

/// Close the session, keeping balance and history
pub fn logout<S: KeyValueStore, C: Clock>(ledger: &mut LedgerStore<S, C>) -> Result<(), WalletError> {
    ledger.store_mut().remove(KEY_IS_LOGGED)?;
    ledger.store_mut().remove(KEY_USER_EMAIL)?;
    info!("logged out");
    Ok(())
}

/// Whether a session is open
pub fn is_authenticated<S: KeyValueStore, C: Clock>(ledger: &LedgerStore<S, C>) -> bool {
    ledger.store().get(KEY_IS_LOGGED).as_deref() == Some("true")
}

/// Fail with `NotAuthenticated` unless a session is open
pub fn require_auth<S: KeyValueStore, C: Clock>(ledger: &LedgerStore<S, C>) -> Result<(), WalletError> {
    if is_authenticated(ledger) {
        Ok(())
    } else {
        Err(WalletError::NotAuthenticated)
    }
}

/// Email of the logged-in user, if any
pub fn user_email<S: KeyValueStore, C: Clock>(ledger: &LedgerStore<S, C>) -> Option<String> {
    ledger.store().get(KEY_USER_EMAIL)
}
