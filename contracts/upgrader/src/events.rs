#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env, Vec};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub native_super_token: Option<Address>,
    pub upgraders: Vec<Address>,
    pub enforce_whitelist: bool,
    pub timestamp: u64,
}

/// Fired when the owner grants upgrader rights to an account.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpgraderAddedEvent {
    pub account: Address,
    pub timestamp: u64,
}

/// Fired when the owner revokes upgrader rights from an account.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpgraderRemovedEvent {
    pub account: Address,
    pub timestamp: u64,
}

/// Fired when the owner adds a wrapped token to the whitelist.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SupportedTokenAddedEvent {
    pub super_token: Address,
    pub timestamp: u64,
}

/// Fired when the owner removes a wrapped token from the whitelist.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SupportedTokenRemovedEvent {
    pub super_token: Address,
    pub timestamp: u64,
}

/// Fired when underlying balance is wrapped for a holder.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpgradedEvent {
    pub super_token: Address,
    pub caller: Address,
    pub on_behalf_of: Address,
    pub underlying_amount: i128,
    pub wrapped_amount: i128,
    pub timestamp: u64,
}

/// Fired when wrapped balance is unwrapped back to the underlying.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DowngradedEvent {
    pub super_token: Address,
    pub caller: Address,
    pub on_behalf_of: Address,
    pub wrapped_amount: i128,
    pub underlying_amount: i128,
    pub timestamp: u64,
}

/// Fired when native coin is wrapped into the native wrapped token.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NativeUpgradedEvent {
    pub caller: Address,
    pub on_behalf_of: Address,
    pub native_amount: i128,
    pub wrapped_amount: i128,
    pub timestamp: u64,
}

/// Fired when wrapped-native balance is unwrapped back to native coin.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NativeDowngradedEvent {
    pub caller: Address,
    pub on_behalf_of: Address,
    pub wrapped_amount: i128,
    pub native_amount: i128,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    owner: Address,
    native_super_token: Option<Address>,
    upgraders: Vec<Address>,
    enforce_whitelist: bool,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            native_super_token,
            upgraders,
            enforce_whitelist,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_upgrader_added(env: &Env, account: Address) {
    env.events().publish(
        (symbol_short!("UPG_ADD"), account.clone()),
        UpgraderAddedEvent {
            account,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_upgrader_removed(env: &Env, account: Address) {
    env.events().publish(
        (symbol_short!("UPG_REM"), account.clone()),
        UpgraderRemovedEvent {
            account,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_supported_token_added(env: &Env, super_token: Address) {
    env.events().publish(
        (symbol_short!("TOK_ADD"), super_token.clone()),
        SupportedTokenAddedEvent {
            super_token,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_supported_token_removed(env: &Env, super_token: Address) {
    env.events().publish(
        (symbol_short!("TOK_REM"), super_token.clone()),
        SupportedTokenRemovedEvent {
            super_token,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_upgraded(
    env: &Env,
    super_token: Address,
    caller: Address,
    on_behalf_of: Address,
    underlying_amount: i128,
    wrapped_amount: i128,
) {
    env.events().publish(
        (symbol_short!("UPGRADED"), super_token.clone(), on_behalf_of.clone()),
        UpgradedEvent {
            super_token,
            caller,
            on_behalf_of,
            underlying_amount,
            wrapped_amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_downgraded(
    env: &Env,
    super_token: Address,
    caller: Address,
    on_behalf_of: Address,
    wrapped_amount: i128,
    underlying_amount: i128,
) {
    env.events().publish(
        (symbol_short!("DNGRADED"), super_token.clone(), on_behalf_of.clone()),
        DowngradedEvent {
            super_token,
            caller,
            on_behalf_of,
            wrapped_amount,
            underlying_amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_native_upgraded(
    env: &Env,
    caller: Address,
    on_behalf_of: Address,
    native_amount: i128,
    wrapped_amount: i128,
) {
    env.events().publish(
        (symbol_short!("N_UPGRD"), on_behalf_of.clone()),
        NativeUpgradedEvent {
            caller,
            on_behalf_of,
            native_amount,
            wrapped_amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_native_downgraded(
    env: &Env,
    caller: Address,
    on_behalf_of: Address,
    wrapped_amount: i128,
    native_amount: i128,
) {
    env.events().publish(
        (symbol_short!("N_DNGRD"), on_behalf_of.clone()),
        NativeDowngradedEvent {
            caller,
            on_behalf_of,
            wrapped_amount,
            native_amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}
