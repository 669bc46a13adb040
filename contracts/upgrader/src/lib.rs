//! Access-controlled token-wrapping gateway.
//!
//! A fixed owner and a delegated set of "upgrader" accounts convert an
//! underlying asset into its wrapped ("super") representation and back, on
//! behalf of arbitrary holders. An optional whitelist restricts which wrapped
//! tokens the gateway will touch, and a designated native wrapped token
//! handles wrapping the chain-native coin.
//!
//! The gateway never keeps balances of its own: every operation pulls value
//! in, converts it, and credits the result to the holder within the same
//! invocation.

#![no_std]

pub mod events;
pub mod super_token;

#[cfg(test)]
mod test_native;

use common::scaling::scale_amount;
use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, token, Address, Env, Symbol, Vec,
};

use super_token::SuperTokenClient;

// ── Storage keys ────────────────────────────────────────────────────────────────

const CONFIG: Symbol = symbol_short!("CONFIG");

/// Ledgers an engine-side allowance towards a wrapped token stays live.
/// Every grant is consumed in full within the same invocation, so the window
/// only needs to outlast the current ledger.
const APPROVE_TTL_LEDGERS: u32 = 100;

// ── Types ──────────────────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpgraderConfig {
    /// Address that may mutate the upgrader set and the whitelist.
    pub owner: Address,
    /// Wrapped token representing the chain-native coin, if any. Fixed for
    /// the contract's lifetime; all native operations fail while unset.
    pub native_super_token: Option<Address>,
    /// Accounts permitted to convert on behalf of other holders.
    pub upgraders: Vec<Address>,
    /// Whether `supported_tokens` gates upgrade/downgrade.
    pub enforce_whitelist: bool,
    /// Wrapped tokens approved for conversion. Ignored unless
    /// `enforce_whitelist` is set.
    pub supported_tokens: Vec<Address>,
}

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    OperationNotAllowed = 3,
    SuperTokenNotSupported = 4,
    NativeSuperTokenNotSupported = 5,
    InvalidAmount = 6,
    AmountOverflow = 7,
}

// ── Helpers ────────────────────────────────────────────────────────────────────

fn load_config(env: &Env) -> Result<UpgraderConfig, ContractError> {
    env.storage()
        .instance()
        .get(&CONFIG)
        .ok_or(ContractError::NotInitialized)
}

fn save_config(env: &Env, cfg: &UpgraderConfig) {
    env.storage().instance().set(&CONFIG, cfg);
}

fn is_member(set: &Vec<Address>, who: &Address) -> bool {
    set.iter().any(|a| a == *who)
}

fn check_authorized(cfg: &UpgraderConfig, caller: &Address, on_behalf_of: &Address) -> bool {
    caller == on_behalf_of || *caller == cfg.owner || is_member(&cfg.upgraders, caller)
}

fn require_authorized(
    cfg: &UpgraderConfig,
    caller: &Address,
    on_behalf_of: &Address,
) -> Result<(), ContractError> {
    if check_authorized(cfg, caller, on_behalf_of) {
        Ok(())
    } else {
        Err(ContractError::OperationNotAllowed)
    }
}

fn require_owner(cfg: &UpgraderConfig, caller: &Address) -> Result<(), ContractError> {
    if *caller == cfg.owner {
        Ok(())
    } else {
        Err(ContractError::OperationNotAllowed)
    }
}

fn require_supported(cfg: &UpgraderConfig, super_token: &Address) -> Result<(), ContractError> {
    if cfg.enforce_whitelist && !is_member(&cfg.supported_tokens, super_token) {
        Err(ContractError::SuperTokenNotSupported)
    } else {
        Ok(())
    }
}

fn require_positive(amount: i128) -> Result<(), ContractError> {
    if amount > 0 {
        Ok(())
    } else {
        Err(ContractError::InvalidAmount)
    }
}

fn approve_expiration(env: &Env) -> u32 {
    env.ledger().sequence().saturating_add(APPROVE_TTL_LEDGERS)
}

// ── Contract ───────────────────────────────────────────────────────────────────

#[contract]
pub struct UpgraderContract;

#[contractimpl]
impl UpgraderContract {
    // ── Configuration ─────────────────────────────────────────────────────────

    /// Bootstrap the gateway.
    ///
    /// * `owner`              – sole account allowed to mutate the upgrader
    ///                          set and the whitelist; immutable afterwards.
    /// * `native_super_token` – wrapped token standing in for the native
    ///                          coin, or `None` to disable the native paths.
    /// * `upgraders`          – initial delegate set; duplicates collapse.
    /// * `enforce_whitelist`  – whether conversions require the wrapped
    ///                          token to be explicitly supported.
    pub fn initialize(
        env: Env,
        owner: Address,
        native_super_token: Option<Address>,
        upgraders: Vec<Address>,
        enforce_whitelist: bool,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&CONFIG) {
            return Err(ContractError::AlreadyInitialized);
        }

        let mut members = Vec::new(&env);
        for account in upgraders.iter() {
            if !is_member(&members, &account) {
                members.push_back(account);
            }
        }

        let cfg = UpgraderConfig {
            owner: owner.clone(),
            native_super_token: native_super_token.clone(),
            upgraders: members.clone(),
            enforce_whitelist,
            supported_tokens: Vec::new(&env),
        };
        save_config(&env, &cfg);

        events::publish_initialized(&env, owner, native_super_token, members, enforce_whitelist);
        Ok(())
    }

    pub fn get_config(env: Env) -> Result<UpgraderConfig, ContractError> {
        load_config(&env)
    }

    // ── Access control ────────────────────────────────────────────────────────

    /// True if `caller` may convert on behalf of `on_behalf_of`: self-service
    /// is always allowed, the owner may act for anyone, and so may members of
    /// the upgrader set.
    pub fn is_authorized(
        env: Env,
        caller: Address,
        on_behalf_of: Address,
    ) -> Result<bool, ContractError> {
        let cfg = load_config(&env)?;
        Ok(check_authorized(&cfg, &caller, &on_behalf_of))
    }

    pub fn is_upgrader(env: Env, account: Address) -> Result<bool, ContractError> {
        let cfg = load_config(&env)?;
        Ok(is_member(&cfg.upgraders, &account))
    }

    /// Grant upgrader rights. Owner-only; adding a present member is a no-op.
    pub fn add_upgrader(env: Env, caller: Address, account: Address) -> Result<(), ContractError> {
        caller.require_auth();
        let mut cfg = load_config(&env)?;
        require_owner(&cfg, &caller)?;

        if is_member(&cfg.upgraders, &account) {
            return Ok(());
        }
        cfg.upgraders.push_back(account.clone());
        save_config(&env, &cfg);

        events::publish_upgrader_added(&env, account);
        Ok(())
    }

    /// Revoke upgrader rights. Owner-only; removing an absent member is a
    /// no-op.
    pub fn remove_upgrader(
        env: Env,
        caller: Address,
        account: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        let mut cfg = load_config(&env)?;
        require_owner(&cfg, &caller)?;

        let mut remaining = Vec::new(&env);
        for member in cfg.upgraders.iter() {
            if member != account {
                remaining.push_back(member);
            }
        }
        if remaining.len() == cfg.upgraders.len() {
            return Ok(());
        }
        cfg.upgraders = remaining;
        save_config(&env, &cfg);

        events::publish_upgrader_removed(&env, account);
        Ok(())
    }

    // ── Whitelist ─────────────────────────────────────────────────────────────

    pub fn is_token_supported(env: Env, super_token: Address) -> Result<bool, ContractError> {
        let cfg = load_config(&env)?;
        Ok(is_member(&cfg.supported_tokens, &super_token))
    }

    /// Approve a wrapped token for conversion. Owner-only; idempotent.
    pub fn add_supported_token(
        env: Env,
        caller: Address,
        super_token: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        let mut cfg = load_config(&env)?;
        require_owner(&cfg, &caller)?;

        if is_member(&cfg.supported_tokens, &super_token) {
            return Ok(());
        }
        cfg.supported_tokens.push_back(super_token.clone());
        save_config(&env, &cfg);

        events::publish_supported_token_added(&env, super_token);
        Ok(())
    }

    /// Drop a wrapped token from the whitelist. Owner-only; idempotent.
    /// While the whitelist is enforced this re-blocks previously allowed
    /// conversions.
    pub fn remove_supported_token(
        env: Env,
        caller: Address,
        super_token: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        let mut cfg = load_config(&env)?;
        require_owner(&cfg, &caller)?;

        let mut remaining = Vec::new(&env);
        for member in cfg.supported_tokens.iter() {
            if member != super_token {
                remaining.push_back(member);
            }
        }
        if remaining.len() == cfg.supported_tokens.len() {
            return Ok(());
        }
        cfg.supported_tokens = remaining;
        save_config(&env, &cfg);

        events::publish_supported_token_removed(&env, super_token);
        Ok(())
    }

    // ── Conversion ────────────────────────────────────────────────────────────

    /// Wrap `amount` underlying raw units into `super_token` balance for
    /// `on_behalf_of`.
    ///
    /// The holder must have approved this contract for at least `amount` of
    /// the underlying asset; a short allowance fails inside the token
    /// contract and aborts the whole call. The wrapped credit is `amount`
    /// rescaled from the underlying's precision to the wrapped token's
    /// (floor on the way down, exact on the way up).
    pub fn upgrade(
        env: Env,
        caller: Address,
        super_token: Address,
        on_behalf_of: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        let cfg = load_config(&env)?;
        require_authorized(&cfg, &caller, &on_behalf_of)?;
        require_supported(&cfg, &super_token)?;
        require_positive(amount)?;

        let this = env.current_contract_address();
        let st = SuperTokenClient::new(&env, &super_token);
        let underlying = st.underlying_asset();
        let underlying_client = token::Client::new(&env, &underlying);

        let wrapped_amount = scale_amount(amount, underlying_client.decimals(), st.decimals())
            .ok_or(ContractError::AmountOverflow)?;

        // Pull the holder's underlying, then let the wrapped token collect
        // it from us in turn.
        underlying_client.transfer_from(&this, &on_behalf_of, &this, &amount);
        underlying_client.approve(&this, &super_token, &amount, &approve_expiration(&env));
        st.upgrade_to(&this, &on_behalf_of, &wrapped_amount);

        events::publish_upgraded(&env, super_token, caller, on_behalf_of, amount, wrapped_amount);
        Ok(())
    }

    /// Unwrap `amount` wrapped raw units of `super_token` held by
    /// `on_behalf_of` back into the underlying asset, credited to
    /// `on_behalf_of`.
    ///
    /// The holder must have approved this contract on the wrapped token,
    /// since the gateway moves their wrapped balance as a third party.
    pub fn downgrade(
        env: Env,
        caller: Address,
        super_token: Address,
        on_behalf_of: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        let cfg = load_config(&env)?;
        require_authorized(&cfg, &caller, &on_behalf_of)?;
        require_supported(&cfg, &super_token)?;
        require_positive(amount)?;

        let this = env.current_contract_address();
        let st = SuperTokenClient::new(&env, &super_token);
        let underlying = st.underlying_asset();
        let underlying_decimals = token::Client::new(&env, &underlying).decimals();

        let underlying_amount = scale_amount(amount, st.decimals(), underlying_decimals)
            .ok_or(ContractError::AmountOverflow)?;

        st.transfer_from(&this, &on_behalf_of, &this, &amount);
        st.downgrade_to(&this, &on_behalf_of, &amount);

        events::publish_downgraded(
            &env,
            super_token,
            caller,
            on_behalf_of,
            amount,
            underlying_amount,
        );
        Ok(())
    }

    /// Wrap `amount` of the native coin into the designated native wrapped
    /// token, credited to `on_behalf_of`.
    ///
    /// The native coin travels with the call: it comes out of the caller's
    /// own balance under the caller's signature, with no allowance step, even
    /// when crediting someone else.
    pub fn upgrade_native(
        env: Env,
        caller: Address,
        on_behalf_of: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        let cfg = load_config(&env)?;
        let native_super_token = cfg
            .native_super_token
            .clone()
            .ok_or(ContractError::NativeSuperTokenNotSupported)?;
        require_authorized(&cfg, &caller, &on_behalf_of)?;
        require_positive(amount)?;

        let this = env.current_contract_address();
        let st = SuperTokenClient::new(&env, &native_super_token);
        let native = st.underlying_asset();
        let native_client = token::Client::new(&env, &native);

        let wrapped_amount = scale_amount(amount, native_client.decimals(), st.decimals())
            .ok_or(ContractError::AmountOverflow)?;

        native_client.transfer(&caller, &this, &amount);
        native_client.approve(&this, &native_super_token, &amount, &approve_expiration(&env));
        st.upgrade_to(&this, &on_behalf_of, &wrapped_amount);

        events::publish_native_upgraded(&env, caller, on_behalf_of, amount, wrapped_amount);
        Ok(())
    }

    /// Unwrap `amount` wrapped-native raw units held by `on_behalf_of` back
    /// into native coin. The native coin lands with `on_behalf_of`, not the
    /// caller, even when the two differ.
    pub fn downgrade_native(
        env: Env,
        caller: Address,
        on_behalf_of: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        let cfg = load_config(&env)?;
        let native_super_token = cfg
            .native_super_token
            .clone()
            .ok_or(ContractError::NativeSuperTokenNotSupported)?;
        require_authorized(&cfg, &caller, &on_behalf_of)?;
        require_positive(amount)?;

        let this = env.current_contract_address();
        let st = SuperTokenClient::new(&env, &native_super_token);
        let native = st.underlying_asset();
        let native_decimals = token::Client::new(&env, &native).decimals();

        let native_amount = scale_amount(amount, st.decimals(), native_decimals)
            .ok_or(ContractError::AmountOverflow)?;

        st.transfer_from(&this, &on_behalf_of, &this, &amount);
        st.downgrade_to(&this, &on_behalf_of, &amount);

        events::publish_native_downgraded(&env, caller, on_behalf_of, amount, native_amount);
        Ok(())
    }
}
