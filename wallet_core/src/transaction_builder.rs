//! Transfer and vote assembly.
//!
//! Both flows are strictly linear: validate and convert the intent, encode,
//! assemble, delegate to the wallet collaborator. A failure at any stage
//! discards all work done so far.

use lattice_script::{encode_invocation, ContractParameter};
use lattice_types::{ContractHash, FixedAmount, PublicKey};
use tracing::debug;

use crate::error::BuildError;
use crate::request::{TransactionRequest, TransferOutput};
use crate::signer::Signer;
use crate::wallet::Wallet;

/// Script hash of the native governance contract.
pub const GOVERNANCE_CONTRACT: ContractHash = ContractHash::new([
    0x4a, 0x8f, 0x95, 0xc2, 0xe6, 0xd1, 0x07, 0x3a, 0xb5, 0xf3, 0xc8, 0xa9, 0x2d, 0x40, 0xbe,
    0x11, 0xc6, 0x0d, 0xdf, 0x27,
]);

/// A user's intent to move tokens.
#[derive(Clone, Debug)]
pub struct TransferIntent {
    pub asset: ContractHash,
    pub to: ContractHash,
    /// Human decimal amount; parsed against the asset's declared decimals
    /// during assembly.
    pub amount: String,
    /// Optional payload for the receiving contract's transfer hook.
    pub data: Option<String>,
    /// Source account override; the wallet picks one when absent.
    pub from: Option<ContractHash>,
    /// Cosigning accounts, each added at entry-only scope.
    pub signers: Vec<ContractHash>,
}

/// A user's intent to vote for consensus candidates.
#[derive(Clone, Debug)]
pub struct VoteIntent {
    pub account: ContractHash,
    /// Candidate public keys, compressed hex, in ballot order.
    pub candidates: Vec<String>,
}

/// Assemble a transfer request and delegate balance selection and fee
/// computation to the wallet collaborator.
pub fn build_transfer<W: Wallet>(
    intent: &TransferIntent,
    asset_decimals: u32,
    wallet: &W,
) -> Result<TransactionRequest, BuildError> {
    let value = FixedAmount::parse(&intent.amount, asset_decimals)?;
    let output = TransferOutput {
        asset: intent.asset,
        to: intent.to,
        value,
        data: intent.data.clone(),
    };
    // Explicit cosigners are restricted to the entry invocation; an empty
    // list leaves signer inference to the wallet.
    let signers: Vec<Signer> = intent
        .signers
        .iter()
        .copied()
        .map(Signer::called_by_entry)
        .collect();

    debug!(asset = %intent.asset, to = %intent.to, "assembling transfer");
    Ok(wallet.build_transfer_tx(&[output], intent.from, &signers)?)
}

/// Assemble a governance vote request.
///
/// Every candidate key must parse; one malformed key rejects the whole
/// ballot before anything is encoded.
pub fn build_vote<W: Wallet>(
    intent: &VoteIntent,
    wallet: &W,
) -> Result<TransactionRequest, BuildError> {
    let candidates = intent
        .candidates
        .iter()
        .map(|raw| raw.parse::<PublicKey>())
        .collect::<Result<Vec<_>, _>>()?;

    let args = [
        ContractParameter::Hash160(intent.account),
        ContractParameter::Array(
            candidates
                .into_iter()
                .map(ContractParameter::PublicKey)
                .collect(),
        ),
    ];
    let script = encode_invocation(GOVERNANCE_CONTRACT, "vote", &args);

    debug!(account = %intent.account, "assembling vote");
    // The zero sender asks the wallet to resolve the paying account from
    // the sole signer.
    Ok(wallet.build_script_tx(
        script,
        ContractHash::ZERO,
        Vec::new(),
        &[Signer::called_by_entry(intent.account)],
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signer::{TransactionAttribute, WitnessScope};
    use crate::wallet::WalletError;
    use lattice_types::AmountError;
    use num_bigint::BigInt;
    use std::cell::RefCell;

    const ASSET: ContractHash = ContractHash::new([0x11; 20]);
    const ALICE: ContractHash = ContractHash::new([0x22; 20]);
    const BOB: ContractHash = ContractHash::new([0x33; 20]);

    const KEY_1: &str = "036b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";
    const KEY_2: &str = "037cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978";

    /// Wallet double that records every call and either echoes a request
    /// or reports an insufficient balance.
    #[derive(Default)]
    struct RecordingWallet {
        insolvent: bool,
        transfer_calls: RefCell<Vec<(Vec<TransferOutput>, Option<ContractHash>, Vec<Signer>)>>,
        script_calls: RefCell<Vec<TransactionRequest>>,
    }

    impl Wallet for RecordingWallet {
        fn build_transfer_tx(
            &self,
            outputs: &[TransferOutput],
            from: Option<ContractHash>,
            signers: &[Signer],
        ) -> Result<TransactionRequest, WalletError> {
            self.transfer_calls
                .borrow_mut()
                .push((outputs.to_vec(), from, signers.to_vec()));
            if self.insolvent {
                return Err(WalletError::InsufficientBalance("need 10.5, have 2".into()));
            }
            Ok(TransactionRequest {
                script: vec![0x01],
                sender: from.unwrap_or(ALICE),
                attributes: Vec::new(),
                signers: signers.to_vec(),
            })
        }

        fn build_script_tx(
            &self,
            script: Vec<u8>,
            sender: ContractHash,
            attributes: Vec<TransactionAttribute>,
            signers: &[Signer],
        ) -> Result<TransactionRequest, WalletError> {
            let request = TransactionRequest {
                script,
                sender,
                attributes,
                signers: signers.to_vec(),
            };
            self.script_calls.borrow_mut().push(request.clone());
            if self.insolvent {
                return Err(WalletError::InsufficientBalance("fees exceed balance".into()));
            }
            Ok(request)
        }
    }

    fn transfer_intent(amount: &str) -> TransferIntent {
        TransferIntent {
            asset: ASSET,
            to: BOB,
            amount: amount.into(),
            data: None,
            from: None,
            signers: Vec::new(),
        }
    }

    #[test]
    fn transfer_scales_amount_into_output() {
        let wallet = RecordingWallet::default();
        build_transfer(&transfer_intent("10.5"), 8, &wallet).unwrap();

        let calls = wallet.transfer_calls.borrow();
        let (outputs, from, signers) = &calls[0];
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].value.raw(), &BigInt::from(1_050_000_000u64));
        assert_eq!(outputs[0].asset, ASSET);
        assert_eq!(outputs[0].to, BOB);
        assert_eq!(*from, None);
        assert!(signers.is_empty());
    }

    #[test]
    fn transfer_cosigners_get_entry_scope() {
        let wallet = RecordingWallet::default();
        let mut intent = transfer_intent("1");
        intent.signers = vec![ALICE, BOB];
        intent.from = Some(ALICE);
        build_transfer(&intent, 0, &wallet).unwrap();

        let calls = wallet.transfer_calls.borrow();
        let (_, from, signers) = &calls[0];
        assert_eq!(*from, Some(ALICE));
        assert_eq!(
            signers.as_slice(),
            &[Signer::called_by_entry(ALICE), Signer::called_by_entry(BOB)]
        );
        assert!(signers.iter().all(|s| s.scope == WitnessScope::CalledByEntry));
    }

    #[test]
    fn transfer_precision_error_never_reaches_wallet() {
        let wallet = RecordingWallet::default();
        let err = build_transfer(&transfer_intent("1.2345"), 2, &wallet).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Amount(AmountError::PrecisionExceeded { digits: 4, decimals: 2 })
        ));
        assert!(wallet.transfer_calls.borrow().is_empty());
    }

    #[test]
    fn transfer_insufficient_balance_surfaces() {
        let wallet = RecordingWallet {
            insolvent: true,
            ..Default::default()
        };
        let err = build_transfer(&transfer_intent("10.5"), 8, &wallet).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Wallet(WalletError::InsufficientBalance(_))
        ));
    }

    #[test]
    fn vote_builds_sole_entry_signer_with_zero_sender() {
        let wallet = RecordingWallet::default();
        let intent = VoteIntent {
            account: ALICE,
            candidates: vec![KEY_1.into(), KEY_2.into()],
        };
        let request = build_vote(&intent, &wallet).unwrap();

        assert_eq!(request.sender, ContractHash::ZERO);
        assert!(request.attributes.is_empty());
        assert_eq!(request.signers, vec![Signer::called_by_entry(ALICE)]);
        assert!(!request.script.is_empty());
    }

    #[test]
    fn vote_script_is_deterministic() {
        let wallet = RecordingWallet::default();
        let intent = VoteIntent {
            account: ALICE,
            candidates: vec![KEY_1.into(), KEY_2.into()],
        };
        let first = build_vote(&intent, &wallet).unwrap();
        let second = build_vote(&intent, &wallet).unwrap();
        assert_eq!(first.script, second.script);
    }

    #[test]
    fn vote_candidate_order_changes_script() {
        let wallet = RecordingWallet::default();
        let forward = build_vote(
            &VoteIntent {
                account: ALICE,
                candidates: vec![KEY_1.into(), KEY_2.into()],
            },
            &wallet,
        )
        .unwrap();
        let reversed = build_vote(
            &VoteIntent {
                account: ALICE,
                candidates: vec![KEY_2.into(), KEY_1.into()],
            },
            &wallet,
        )
        .unwrap();
        assert_ne!(forward.script, reversed.script);
    }

    #[test]
    fn vote_rejects_whole_ballot_on_one_bad_key() {
        let wallet = RecordingWallet::default();
        let intent = VoteIntent {
            account: ALICE,
            candidates: vec![KEY_1.into(), "02deadbeef".into()],
        };
        let err = build_vote(&intent, &wallet).unwrap_err();
        assert!(matches!(err, BuildError::Key(_)));
        // Nothing was encoded or delegated: no partial vote.
        assert!(wallet.script_calls.borrow().is_empty());
    }

    #[test]
    fn vote_insufficient_balance_surfaces() {
        let wallet = RecordingWallet {
            insolvent: true,
            ..Default::default()
        };
        let intent = VoteIntent {
            account: ALICE,
            candidates: vec![KEY_1.into()],
        };
        assert!(matches!(
            build_vote(&intent, &wallet).unwrap_err(),
            BuildError::Wallet(WalletError::InsufficientBalance(_))
        ));
    }
}
