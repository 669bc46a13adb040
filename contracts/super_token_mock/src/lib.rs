//! Wrapped ("super") token used as a test collaborator.
//!
//! Models the external wrapped-token contract the upgrader calls into: a
//! fixed-precision token holding a 1:1 claim on an underlying asset, with
//! `upgrade_to`/`downgrade_to` conversion primitives on top of the standard
//! token surface. Supply accounting stays inside this contract; the upgrader
//! only ever drives it through the interface in its `super_token` module.
//!
//! Conversion amounts are expressed in wrapped units; the matching underlying
//! amount is derived by inverse rescaling and pulled from (or paid out on
//! behalf of) the counterparty.

#![no_std]


use common::scaling::scale_amount;
use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, token, Address, Env, Symbol,
};

// ── Storage keys ────────────────────────────────────────────────────────────────

const CONFIG: Symbol = symbol_short!("CONFIG");
const BALANCE: Symbol = symbol_short!("BALANCE");
const ALLOWANCE: Symbol = symbol_short!("ALLOW");

// ── Types ──────────────────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SuperTokenConfig {
    /// Token contract this wrapped token is a 1:1 claim on.
    pub underlying: Address,
    /// Fixed precision of the wrapped representation.
    pub decimals: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum SuperTokenError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NegativeAmount = 3,
    InsufficientBalance = 4,
    InsufficientAllowance = 5,
    InvalidExpiration = 6,
    AmountOverflow = 7,
}

// ── Helpers ────────────────────────────────────────────────────────────────────

fn load_config(env: &Env) -> Result<SuperTokenConfig, SuperTokenError> {
    env.storage()
        .instance()
        .get(&CONFIG)
        .ok_or(SuperTokenError::NotInitialized)
}

fn balance_key(id: &Address) -> (Symbol, Address) {
    (BALANCE, id.clone())
}

fn allowance_key(from: &Address, spender: &Address) -> (Symbol, Address, Address) {
    (ALLOWANCE, from.clone(), spender.clone())
}

fn read_balance(env: &Env, id: &Address) -> i128 {
    env.storage().persistent().get(&balance_key(id)).unwrap_or(0)
}

fn write_balance(env: &Env, id: &Address, amount: i128) {
    env.storage().persistent().set(&balance_key(id), &amount);
}

fn read_allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    let value: Option<AllowanceValue> =
        env.storage().temporary().get(&allowance_key(from, spender));
    match value {
        Some(a) if a.expiration_ledger >= env.ledger().sequence() => a.amount,
        _ => 0,
    }
}

fn require_positive(amount: i128) -> Result<(), SuperTokenError> {
    if amount < 0 {
        return Err(SuperTokenError::NegativeAmount);
    }
    Ok(())
}

fn spend_balance(env: &Env, from: &Address, amount: i128) -> Result<(), SuperTokenError> {
    let balance = read_balance(env, from);
    if balance < amount {
        return Err(SuperTokenError::InsufficientBalance);
    }
    write_balance(env, from, balance - amount);
    Ok(())
}

fn receive_balance(env: &Env, to: &Address, amount: i128) {
    let balance = read_balance(env, to);
    write_balance(env, to, balance.saturating_add(amount));
}

fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), SuperTokenError> {
    let key = allowance_key(from, spender);
    let value: Option<AllowanceValue> = env.storage().temporary().get(&key);
    let (current, expiration_ledger) = match value {
        Some(a) if a.expiration_ledger >= env.ledger().sequence() => {
            (a.amount, a.expiration_ledger)
        }
        _ => (0, 0),
    };
    if current < amount {
        return Err(SuperTokenError::InsufficientAllowance);
    }
    env.storage().temporary().set(
        &key,
        &AllowanceValue {
            amount: current - amount,
            expiration_ledger,
        },
    );
    Ok(())
}

/// Wrapped units → underlying units for this deployment's decimal pair.
fn to_underlying_amount(
    env: &Env,
    cfg: &SuperTokenConfig,
    wrapped_amount: i128,
) -> Result<i128, SuperTokenError> {
    let underlying_decimals = token::Client::new(env, &cfg.underlying).decimals();
    scale_amount(wrapped_amount, cfg.decimals, underlying_decimals)
        .ok_or(SuperTokenError::AmountOverflow)
}

// ── Contract ───────────────────────────────────────────────────────────────────

#[contract]
pub struct SuperTokenMock;

#[contractimpl]
impl SuperTokenMock {
    pub fn initialize(env: Env, underlying: Address, decimals: u32) -> Result<(), SuperTokenError> {
        if env.storage().instance().has(&CONFIG) {
            return Err(SuperTokenError::AlreadyInitialized);
        }
        env.storage().instance().set(
            &CONFIG,
            &SuperTokenConfig {
                underlying,
                decimals,
            },
        );
        Ok(())
    }

    // ── Token surface ─────────────────────────────────────────────────────────

    pub fn decimals(env: Env) -> Result<u32, SuperTokenError> {
        Ok(load_config(&env)?.decimals)
    }

    pub fn underlying_asset(env: Env) -> Result<Address, SuperTokenError> {
        Ok(load_config(&env)?.underlying)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&env, &from, &spender)
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), SuperTokenError> {
        from.require_auth();
        require_positive(amount)?;
        if amount > 0 && expiration_ledger < env.ledger().sequence() {
            return Err(SuperTokenError::InvalidExpiration);
        }
        env.storage().temporary().set(
            &allowance_key(&from, &spender),
            &AllowanceValue {
                amount,
                expiration_ledger,
            },
        );
        Ok(())
    }

    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), SuperTokenError> {
        from.require_auth();
        require_positive(amount)?;
        spend_balance(&env, &from, amount)?;
        receive_balance(&env, &to, amount);
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), SuperTokenError> {
        spender.require_auth();
        require_positive(amount)?;
        spend_allowance(&env, &from, &spender, amount)?;
        spend_balance(&env, &from, amount)?;
        receive_balance(&env, &to, amount);
        Ok(())
    }

    // ── Conversion primitives ─────────────────────────────────────────────────

    /// Pull the underlying equivalent of `amount` wrapped units from `from`
    /// (requires `from` to have approved this contract) and mint `amount`
    /// wrapped units to `to`.
    pub fn upgrade_to(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), SuperTokenError> {
        from.require_auth();
        require_positive(amount)?;
        let cfg = load_config(&env)?;

        let underlying_amount = to_underlying_amount(&env, &cfg, amount)?;
        let this = env.current_contract_address();
        token::Client::new(&env, &cfg.underlying)
            .transfer_from(&this, &from, &this, &underlying_amount);

        receive_balance(&env, &to, amount);
        Ok(())
    }

    /// Burn `amount` wrapped units held by `from` and pay the underlying
    /// equivalent out to `to`.
    pub fn downgrade_to(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), SuperTokenError> {
        from.require_auth();
        require_positive(amount)?;
        let cfg = load_config(&env)?;

        spend_balance(&env, &from, amount)?;

        let underlying_amount = to_underlying_amount(&env, &cfg, amount)?;
        let this = env.current_contract_address();
        token::Client::new(&env, &cfg.underlying).transfer(&this, &to, &underlying_amount);
        Ok(())
    }
}
