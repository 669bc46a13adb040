#![allow(clippy::unwrap_used, clippy::expect_used)]
extern crate std;

use soroban_sdk::{testutils::Address as _, Address, Env, Vec};
use super_token_mock::{SuperTokenMock, SuperTokenMockClient};
use token_mock::{TokenMock, TokenMockClient};

use crate::{ContractError, UpgraderContract, UpgraderContractClient};

const EXPIRY: u32 = 10_000;
// One whole native coin at the native token's 7 decimals.
const ONE_COIN: i128 = 10_000_000;

struct Setup {
    env: Env,
    owner: Address,
    member: Address,
    native: TokenMockClient<'static>,
    native_super: SuperTokenMockClient<'static>,
    gateway: UpgraderContractClient<'static>,
}

/// Deploys a 7-decimal token standing in for the native coin, a wrapped
/// token over it at the same precision (so wrapping is exactly 1:1), and a
/// gateway with the native reference configured or not.
fn setup(configure_native: bool) -> Setup {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let member = Address::generate(&env);

    let native_id = env.register(TokenMock, ());
    let native = TokenMockClient::new(&env, &native_id);
    native.initialize(&owner, &7);

    let super_id = env.register(SuperTokenMock, ());
    let native_super = SuperTokenMockClient::new(&env, &super_id);
    native_super.initialize(&native_id, &7);

    let gateway_id = env.register(UpgraderContract, ());
    let gateway = UpgraderContractClient::new(&env, &gateway_id);

    let native_ref = if configure_native {
        Some(super_id.clone())
    } else {
        None
    };
    let mut upgraders = Vec::new(&env);
    upgraders.push_back(member.clone());
    gateway.initialize(&owner, &native_ref, &upgraders, &false);

    Setup {
        env,
        owner,
        member,
        native,
        native_super,
        gateway,
    }
}

#[test]
fn test_native_upgrade_fails_when_unconfigured() {
    let s = setup(false);
    let caller = Address::generate(&s.env);
    s.native.mint(&caller, &ONE_COIN);

    let res = s.gateway.try_upgrade_native(&caller, &caller, &ONE_COIN);
    assert_eq!(res, Err(Ok(ContractError::NativeSuperTokenNotSupported)));
    assert_eq!(s.native.balance(&caller), ONE_COIN);
}

#[test]
fn test_native_downgrade_fails_when_unconfigured() {
    let s = setup(false);
    let caller = Address::generate(&s.env);

    let res = s.gateway.try_downgrade_native(&caller, &caller, &ONE_COIN);
    assert_eq!(res, Err(Ok(ContractError::NativeSuperTokenNotSupported)));
}

#[test]
fn test_unconfigured_check_precedes_authorization() {
    let s = setup(false);
    let stranger = Address::generate(&s.env);
    let holder = Address::generate(&s.env);

    // The native-support check fires before the authorization check.
    let res = s.gateway.try_upgrade_native(&stranger, &holder, &ONE_COIN);
    assert_eq!(res, Err(Ok(ContractError::NativeSuperTokenNotSupported)));
}

#[test]
fn test_native_upgrade_credits_exact_value() {
    let s = setup(true);
    let caller = Address::generate(&s.env);
    s.native.mint(&caller, &ONE_COIN);

    s.gateway.upgrade_native(&caller, &caller, &ONE_COIN);

    assert_eq!(s.native_super.balance(&caller), ONE_COIN);
    assert_eq!(s.native.balance(&caller), 0);
    // The wrapped token now custodies the coin.
    assert_eq!(s.native.balance(&s.native_super.address), ONE_COIN);
}

#[test]
fn test_native_upgrade_pays_from_caller_credits_recipient() {
    let s = setup(true);
    let caller = Address::generate(&s.env);
    let recipient = Address::generate(&s.env);
    s.native.mint(&caller, &ONE_COIN);

    s.gateway.upgrade_native(&caller, &recipient, &ONE_COIN);

    // The coin came out of the caller's pocket; the credit went elsewhere.
    assert_eq!(s.native.balance(&caller), 0);
    assert_eq!(s.native_super.balance(&recipient), ONE_COIN);
    assert_eq!(s.native_super.balance(&caller), 0);
}

#[test]
fn test_native_downgrade_to_self() {
    let s = setup(true);
    let caller = Address::generate(&s.env);
    s.native.mint(&caller, &ONE_COIN);
    s.gateway.upgrade_native(&caller, &caller, &ONE_COIN);

    s.native_super
        .approve(&caller, &s.gateway.address, &ONE_COIN, &EXPIRY);
    s.gateway.downgrade_native(&caller, &caller, &ONE_COIN);

    assert_eq!(s.native_super.balance(&caller), 0);
    assert_eq!(s.native.balance(&caller), ONE_COIN);
}

#[test]
fn test_native_downgrade_routes_coin_to_holder_not_caller() {
    let s = setup(true);
    let holder = Address::generate(&s.env);
    s.native.mint(&holder, &ONE_COIN);
    s.gateway.upgrade_native(&holder, &holder, &ONE_COIN);
    s.native_super
        .approve(&holder, &s.gateway.address, &ONE_COIN, &EXPIRY);

    // An upgrader unwinds the position on the holder's behalf.
    s.gateway.downgrade_native(&s.member, &holder, &ONE_COIN);

    assert_eq!(s.native.balance(&holder), ONE_COIN);
    assert_eq!(s.native.balance(&s.member), 0);
    assert_eq!(s.native_super.balance(&holder), 0);
}

#[test]
fn test_native_downgrade_without_approval_fails() {
    let s = setup(true);
    let caller = Address::generate(&s.env);
    s.native.mint(&caller, &ONE_COIN);
    s.gateway.upgrade_native(&caller, &caller, &ONE_COIN);

    let res = s.gateway.try_downgrade_native(&caller, &caller, &ONE_COIN);
    assert!(res.is_err());
    assert_eq!(s.native_super.balance(&caller), ONE_COIN);
}

#[test]
fn test_stranger_cannot_wrap_native_for_others() {
    let s = setup(true);
    let stranger = Address::generate(&s.env);
    let holder = Address::generate(&s.env);
    s.native.mint(&stranger, &ONE_COIN);

    let res = s.gateway.try_upgrade_native(&stranger, &holder, &ONE_COIN);
    assert_eq!(res, Err(Ok(ContractError::OperationNotAllowed)));
    assert_eq!(s.native.balance(&stranger), ONE_COIN);
}

#[test]
fn test_owner_can_wrap_native_for_others() {
    let s = setup(true);
    let holder = Address::generate(&s.env);
    s.native.mint(&s.owner, &ONE_COIN);

    s.gateway.upgrade_native(&s.owner, &holder, &ONE_COIN);
    assert_eq!(s.native_super.balance(&holder), ONE_COIN);
}

#[test]
fn test_native_zero_value_rejected() {
    let s = setup(true);
    let caller = Address::generate(&s.env);

    let res = s.gateway.try_upgrade_native(&caller, &caller, &0);
    assert_eq!(res, Err(Ok(ContractError::InvalidAmount)));
}
