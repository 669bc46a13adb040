//! Cross-contract interface of the wrapped tokens this gateway drives.
//!
//! A wrapped ("super") token is itself a token, plus two conversion
//! primitives over a referenced underlying asset. Conversion amounts are
//! expressed in wrapped units; the wrapped token settles the matching
//! underlying amount with `from` itself.

use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "SuperTokenClient")]
pub trait SuperTokenInterface {
    /// Fixed precision of the wrapped representation.
    fn decimals(env: Env) -> u32;

    /// Token contract this wrapped token is a 1:1 claim on.
    fn underlying_asset(env: Env) -> Address;

    fn balance(env: Env, id: Address) -> i128;

    fn allowance(env: Env, from: Address, spender: Address) -> i128;

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32);

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128);

    /// Pull the underlying equivalent of `amount` wrapped units from `from`
    /// (under `from`'s prior approval) and mint `amount` wrapped units to
    /// `to`.
    fn upgrade_to(env: Env, from: Address, to: Address, amount: i128);

    /// Burn `amount` wrapped units held by `from` and pay the underlying
    /// equivalent out to `to`.
    fn downgrade_to(env: Env, from: Address, to: Address, amount: i128);
}
