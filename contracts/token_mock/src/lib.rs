//! Minimal fungible token used as a test collaborator.
//!
//! The built-in Stellar Asset Contract is fixed at 7 decimals, which makes it
//! useless for exercising decimal normalisation. This mock implements the
//! slice of the token interface the upgrader suite touches (`balance`,
//! `allowance`, `approve`, `transfer`, `transfer_from`, `decimals`, `mint`)
//! with a configurable decimal count.

#![no_std]


use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, Address, Env, Symbol};

// ── Storage keys ────────────────────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const DECIMALS: Symbol = symbol_short!("DECIMALS");
const BALANCE: Symbol = symbol_short!("BALANCE");
const ALLOWANCE: Symbol = symbol_short!("ALLOW");

// ── Types ──────────────────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TokenError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NegativeAmount = 3,
    InsufficientBalance = 4,
    InsufficientAllowance = 5,
    InvalidExpiration = 6,
}

// ── Helpers ────────────────────────────────────────────────────────────────────

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

fn require_positive(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::NegativeAmount);
    }
    Ok(())
}

fn spend_balance(env: &Env, from: &Address, amount: i128) -> Result<(), TokenError> {
    let balance = read_balance(env, from);
    if balance < amount {
        return Err(TokenError::InsufficientBalance);
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
) -> Result<(), TokenError> {
    let key = allowance_key(from, spender);
    let value: Option<AllowanceValue> = env.storage().temporary().get(&key);
    let (current, expiration_ledger) = match value {
        Some(a) if a.expiration_ledger >= env.ledger().sequence() => {
            (a.amount, a.expiration_ledger)
        }
        _ => (0, 0),
    };
    if current < amount {
        return Err(TokenError::InsufficientAllowance);
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

// ── Contract ───────────────────────────────────────────────────────────────────

#[contract]
pub struct TokenMock;

#[contractimpl]
impl TokenMock {
    pub fn initialize(env: Env, admin: Address, decimals: u32) -> Result<(), TokenError> {
        if env.storage().instance().has(&ADMIN) {
            return Err(TokenError::AlreadyInitialized);
        }
        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&DECIMALS, &decimals);
        Ok(())
    }

    /// Admin-only supply faucet for tests.
    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), TokenError> {
        require_positive(amount)?;
        let admin: Address = env
            .storage()
            .instance()
            .get(&ADMIN)
            .ok_or(TokenError::NotInitialized)?;
        admin.require_auth();
        receive_balance(&env, &to, amount);
        Ok(())
    }

    pub fn decimals(env: Env) -> Result<u32, TokenError> {
        env.storage()
            .instance()
            .get(&DECIMALS)
            .ok_or(TokenError::NotInitialized)
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
    ) -> Result<(), TokenError> {
        from.require_auth();
        require_positive(amount)?;
        if amount > 0 && expiration_ledger < env.ledger().sequence() {
            return Err(TokenError::InvalidExpiration);
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

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
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
    ) -> Result<(), TokenError> {
        spender.require_auth();
        require_positive(amount)?;
        spend_allowance(&env, &from, &spender, amount)?;
        spend_balance(&env, &from, amount)?;
        receive_balance(&env, &to, amount);
        Ok(())
    }
}
