//! Command orchestrators.
//!
//! Each command wires the resolver, the assembler and the collaborators
//! together, then prints a human-readable result. Only
//! `InsufficientBalance` and `NoWalletLoaded` are handled here (short
//! message, command aborted); every other error propagates to the
//! top-level handler. Nothing reaches the relay collaborator unless every
//! earlier stage succeeded.

use anyhow::{anyhow, Result};
use lattice_script::ContractParameter;
use lattice_types::{ContractHash, FixedAmount};
use lattice_wallet_core::{
    build_transfer, build_vote, AssetDescriptor, BuildError, InvocationReader, LedgerQuery,
    SignerRelay, TransferIntent, VoteIntent, Wallet, WalletError,
};

/// Errors the orchestrator reports briefly instead of propagating.
fn aborts_with_message(err: &BuildError) -> bool {
    matches!(
        err,
        BuildError::Wallet(WalletError::InsufficientBalance(_) | WalletError::NoWalletLoaded)
    )
}

pub fn transfer<C, W, R>(chain: &C, wallet: &W, relay: &R, intent: TransferIntent) -> Result<()>
where
    C: LedgerQuery + InvocationReader,
    W: Wallet,
    R: SignerRelay,
{
    let asset = AssetDescriptor::resolve(chain, intent.asset)?;
    let request = match build_transfer(&intent, asset.decimals, wallet) {
        Ok(request) => request,
        Err(err) if aborts_with_message(&err) => {
            println!("Error: {err}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    let receipt = relay.sign_and_relay(request)?;
    println!("Transaction relayed: {}", receipt.tx_hash);
    Ok(())
}

pub fn vote<W, R>(wallet: &W, relay: &R, intent: VoteIntent) -> Result<()>
where
    W: Wallet,
    R: SignerRelay,
{
    let request = match build_vote(&intent, wallet) {
        Ok(request) => request,
        Err(err) if aborts_with_message(&err) => {
            println!("Error: {err}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    let receipt = relay.sign_and_relay(request)?;
    println!("Transaction relayed: {}", receipt.tx_hash);
    Ok(())
}

pub fn balance_of<C>(chain: &C, asset_hash: ContractHash, address: ContractHash) -> Result<()>
where
    C: LedgerQuery + InvocationReader,
{
    let asset = AssetDescriptor::resolve(chain, asset_hash)?;
    let result = chain.invoke_read(
        asset_hash,
        "balanceOf",
        &[ContractParameter::Hash160(address)],
    )?;
    let raw = result
        .as_integer()
        .ok_or_else(|| anyhow!("balanceOf did not return an integer"))?;
    let balance = FixedAmount::from_raw(raw.clone(), asset.decimals);
    println!("{} balance: {balance}", asset.name);
    Ok(())
}

pub fn name<C: LedgerQuery>(chain: &C, asset: ContractHash) -> Result<()> {
    match chain.get_contract(asset)? {
        Some(contract) => println!("Result: {}", contract.name),
        None => println!("Contract hash not deployed: {asset}"),
    }
    Ok(())
}

pub fn decimals<C: InvocationReader>(chain: &C, asset: ContractHash) -> Result<()> {
    let result = chain.invoke_read(asset, "decimals", &[])?;
    let value = result
        .as_integer()
        .ok_or_else(|| anyhow!("decimals did not return an integer"))?;
    println!("Result: {value}");
    Ok(())
}
