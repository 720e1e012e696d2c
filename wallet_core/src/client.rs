//! Blocking JSON-RPC client for a Lattice node with an attached wallet
//! service.
//!
//! Wraps `reqwest::blocking::Client` with the node's base URL and
//! implements every collaborator trait this crate consumes. All calls are
//! synchronous; a transport failure or node-reported error is terminal for
//! the command in flight, never retried here.

use std::str::FromStr;
use std::time::Duration;

use lattice_script::{ContractParameter, StackValue};
use lattice_types::ContractHash;
use num_bigint::BigInt;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::chain::{ContractDescriptor, InvocationReader, LedgerQuery, QueryError};
use crate::relay::{RelayError, RelayReceipt, SignerRelay};
use crate::request::{TransactionRequest, TransferOutput};
use crate::signer::{Signer, TransactionAttribute, WitnessScope};
use crate::wallet::{Wallet, WalletError};

/// HTTP client for a Lattice node's JSON-RPC endpoint.
#[derive(Clone)]
pub struct NodeClient {
    http: reqwest::blocking::Client,
    node_url: String,
}

/// A failed RPC round-trip, before mapping onto a collaborator error.
enum RpcFailure {
    Transport(String),
    Node { code: String, message: String },
}

impl NodeClient {
    /// Create a client targeting the given base URL
    /// (e.g. `http://127.0.0.1:20332`).
    pub fn new(node_url: impl Into<String>) -> Result<Self, QueryError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| QueryError::Transport(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            node_url: node_url.into(),
        })
    }

    /// The configured node URL.
    pub fn node_url(&self) -> &str {
        &self.node_url
    }

    /// Send an action-tagged request and return the `result` field.
    fn rpc_call(
        &self,
        action: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, RpcFailure> {
        let mut body = params;
        body.as_object_mut()
            .ok_or_else(|| RpcFailure::Transport("params must be a JSON object".into()))?
            .insert("action".to_string(), json!(action));

        debug!(action, url = %self.node_url, "rpc call");
        let response = self
            .http
            .post(&self.node_url)
            .json(&body)
            .send()
            .map_err(|e| RpcFailure::Transport(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(RpcFailure::Transport(format!(
                "node returned HTTP {}",
                response.status()
            )));
        }

        let body: serde_json::Value = response
            .json()
            .map_err(|e| RpcFailure::Transport(format!("invalid JSON response: {e}")))?;

        if let Some(err) = body.get("error").filter(|e| !e.is_null()) {
            return Err(RpcFailure::Node {
                code: err
                    .get("code")
                    .and_then(|c| c.as_str())
                    .unwrap_or("unknown")
                    .to_string(),
                message: err
                    .get("message")
                    .and_then(|m| m.as_str())
                    .unwrap_or("")
                    .to_string(),
            });
        }

        Ok(body.get("result").cloned().unwrap_or(body))
    }
}

impl RpcFailure {
    fn into_query(self) -> QueryError {
        match self {
            Self::Transport(message) => QueryError::Transport(message),
            Self::Node { code, message } => QueryError::Transport(format!("{code}: {message}")),
        }
    }

    fn into_wallet(self) -> WalletError {
        match self {
            Self::Transport(message) => WalletError::Other(message),
            Self::Node { code, message } => match code.as_str() {
                "insufficient_funds" => WalletError::InsufficientBalance(message),
                "no_wallet" => WalletError::NoWalletLoaded,
                _ => WalletError::Other(format!("{code}: {message}")),
            },
        }
    }

    fn into_relay(self) -> RelayError {
        match self {
            Self::Transport(message) => RelayError::Relay(message),
            Self::Node { code, message } => match code.as_str() {
                "signing_failed" => RelayError::Signing(message),
                _ => RelayError::Relay(format!("{code}: {message}")),
            },
        }
    }
}

// ── Wire shapes ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ContractStateResult {
    manifest: ManifestResult,
}

#[derive(Debug, Deserialize)]
struct ManifestResult {
    name: String,
}

#[derive(Debug, Deserialize)]
struct InvokeResult {
    state: String,
    #[serde(default)]
    exception: Option<String>,
    #[serde(default)]
    stack: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct TransactionResult {
    script: String,
    sender: String,
    #[serde(default)]
    attributes: Vec<String>,
    #[serde(default)]
    signers: Vec<SignerResult>,
}

#[derive(Debug, Deserialize)]
struct SignerResult {
    account: String,
    scope: String,
}

#[derive(Debug, Deserialize)]
struct RelayResult {
    hash: String,
    relayed: bool,
}

fn param_to_json(param: &ContractParameter) -> serde_json::Value {
    let value = match param {
        ContractParameter::Hash160(hash) => json!(hash.to_string()),
        ContractParameter::Integer(value) => json!(value.to_string()),
        ContractParameter::Boolean(value) => json!(value),
        ContractParameter::ByteArray(bytes) => json!(hex::encode(bytes)),
        ContractParameter::String(s) => json!(s),
        ContractParameter::PublicKey(key) => json!(key.to_string()),
        ContractParameter::Array(elements) => {
            json!(elements.iter().map(param_to_json).collect::<Vec<_>>())
        }
    };
    json!({ "type": param.type_name(), "value": value })
}

fn stack_from_json(item: &serde_json::Value) -> Result<StackValue, QueryError> {
    let malformed = |detail: &str| QueryError::Response(format!("bad stack item: {detail}"));
    let kind = item
        .get("type")
        .and_then(|t| t.as_str())
        .ok_or_else(|| malformed("missing type"))?;
    let value = item.get("value");
    match kind {
        "Null" | "Any" => Ok(StackValue::Null),
        "Boolean" => value
            .and_then(|v| v.as_bool())
            .map(StackValue::Boolean)
            .ok_or_else(|| malformed("boolean without bool value")),
        "Integer" => value
            .and_then(|v| v.as_str())
            .and_then(|s| BigInt::from_str(s).ok())
            .map(StackValue::Integer)
            .ok_or_else(|| malformed("integer without decimal string value")),
        "ByteString" => value
            .and_then(|v| v.as_str())
            .and_then(|s| hex::decode(s).ok())
            .map(StackValue::ByteString)
            .ok_or_else(|| malformed("byte string without hex value")),
        "Array" => value
            .and_then(|v| v.as_array())
            .ok_or_else(|| malformed("array without elements"))?
            .iter()
            .map(stack_from_json)
            .collect::<Result<Vec<_>, _>>()
            .map(StackValue::Array),
        other => Err(malformed(&format!("unknown type {other:?}"))),
    }
}

fn signers_to_json(signers: &[Signer]) -> serde_json::Value {
    json!(signers
        .iter()
        .map(|s| json!({ "account": s.account.to_string(), "scope": s.scope.as_str() }))
        .collect::<Vec<_>>())
}

fn request_from_result(result: serde_json::Value) -> Result<TransactionRequest, String> {
    let tx: TransactionResult =
        serde_json::from_value(result).map_err(|e| format!("invalid transaction response: {e}"))?;
    let script = hex::decode(&tx.script).map_err(|e| format!("invalid script hex: {e}"))?;
    let sender = tx
        .sender
        .parse::<ContractHash>()
        .map_err(|e| format!("invalid sender: {e}"))?;
    let attributes = tx
        .attributes
        .iter()
        .map(|a| TransactionAttribute::from_str(a))
        .collect::<Result<Vec<_>, _>>()?;
    let signers = tx
        .signers
        .iter()
        .map(|s| {
            Ok(Signer {
                account: s
                    .account
                    .parse::<ContractHash>()
                    .map_err(|e| format!("invalid signer account: {e}"))?,
                scope: WitnessScope::from_str(&s.scope)?,
            })
        })
        .collect::<Result<Vec<_>, String>>()?;
    Ok(TransactionRequest {
        script,
        sender,
        attributes,
        signers,
    })
}

// ── Collaborator impls ──────────────────────────────────────────────────

impl LedgerQuery for NodeClient {
    fn get_contract(&self, hash: ContractHash) -> Result<Option<ContractDescriptor>, QueryError> {
        let result = self
            .rpc_call("get_contract", json!({ "hash": hash.to_string() }))
            .map_err(RpcFailure::into_query)?;
        if result.is_null() {
            return Ok(None);
        }
        let state: ContractStateResult = serde_json::from_value(result)
            .map_err(|e| QueryError::Response(format!("invalid contract state: {e}")))?;
        Ok(Some(ContractDescriptor {
            hash,
            name: state.manifest.name,
        }))
    }
}

impl InvocationReader for NodeClient {
    fn invoke_read(
        &self,
        contract: ContractHash,
        method: &str,
        args: &[ContractParameter],
    ) -> Result<StackValue, QueryError> {
        let result = self
            .rpc_call(
                "invoke_read",
                json!({
                    "contract": contract.to_string(),
                    "method": method,
                    "args": args.iter().map(param_to_json).collect::<Vec<_>>(),
                }),
            )
            .map_err(RpcFailure::into_query)?;
        let invoke: InvokeResult = serde_json::from_value(result)
            .map_err(|e| QueryError::Response(format!("invalid invocation response: {e}")))?;
        if invoke.state != "HALT" {
            return Err(QueryError::Fault(
                invoke.exception.unwrap_or_else(|| "execution faulted".into()),
            ));
        }
        let top = invoke
            .stack
            .into_iter()
            .next()
            .ok_or_else(|| QueryError::Response("empty result stack".into()))?;
        stack_from_json(&top)
    }
}

impl Wallet for NodeClient {
    fn build_transfer_tx(
        &self,
        outputs: &[TransferOutput],
        from: Option<ContractHash>,
        signers: &[Signer],
    ) -> Result<TransactionRequest, WalletError> {
        let outputs_json = outputs
            .iter()
            .map(|o| {
                json!({
                    "asset": o.asset.to_string(),
                    "to": o.to.to_string(),
                    "value": o.value.raw().to_string(),
                    "data": o.data,
                })
            })
            .collect::<Vec<_>>();
        let result = self
            .rpc_call(
                "wallet_build_transfer",
                json!({
                    "outputs": outputs_json,
                    "from": from.map(|h| h.to_string()),
                    "signers": signers_to_json(signers),
                }),
            )
            .map_err(RpcFailure::into_wallet)?;
        request_from_result(result).map_err(WalletError::Other)
    }

    fn build_script_tx(
        &self,
        script: Vec<u8>,
        sender: ContractHash,
        attributes: Vec<TransactionAttribute>,
        signers: &[Signer],
    ) -> Result<TransactionRequest, WalletError> {
        let result = self
            .rpc_call(
                "wallet_build_script",
                json!({
                    "script": hex::encode(&script),
                    "sender": sender.to_string(),
                    "attributes": attributes.iter().map(|a| a.as_str()).collect::<Vec<_>>(),
                    "signers": signers_to_json(signers),
                }),
            )
            .map_err(RpcFailure::into_wallet)?;
        request_from_result(result).map_err(WalletError::Other)
    }
}

impl SignerRelay for NodeClient {
    fn sign_and_relay(&self, request: TransactionRequest) -> Result<RelayReceipt, RelayError> {
        let result = self
            .rpc_call(
                "wallet_sign_and_relay",
                json!({
                    "script": hex::encode(&request.script),
                    "sender": request.sender.to_string(),
                    "attributes": request
                        .attributes
                        .iter()
                        .map(|a| a.as_str())
                        .collect::<Vec<_>>(),
                    "signers": signers_to_json(&request.signers),
                }),
            )
            .map_err(RpcFailure::into_relay)?;
        let relay: RelayResult = serde_json::from_value(result)
            .map_err(|e| RelayError::Relay(format!("invalid relay response: {e}")))?;
        Ok(RelayReceipt {
            tx_hash: relay.hash,
            relayed: relay.relayed,
        })
    }
}
