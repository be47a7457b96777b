#![allow(dead_code)]

use async_trait::async_trait;
use crowdfund_client::{ClientError, ClientResult, LedgerRpc, SignatureStatus};
use crowdfund_sdk::{CrowdfundInstruction, PROGRAM_ID};
use solana_sdk::{
    account::Account, commitment_config::CommitmentConfig, hash::Hash, pubkey::Pubkey,
    signature::Signature, transaction::Transaction, transaction::TransactionError,
};
use std::{collections::HashMap, sync::Mutex};

/// Lamports per byte-year times the two-year exemption threshold
const RENT_LAMPORTS_PER_BYTE: u64 = 6_960;
const ACCOUNT_STORAGE_OVERHEAD: u64 = 128;

/// What happens to transactions after the node accepts them
#[derive(Debug, Clone)]
pub enum Execution {
    Succeed,
    Fail(TransactionError),
    /// Never reaches any commitment
    Stall,
}

struct LedgerState {
    blockhash_fetches: usize,
    status_polls: usize,
    unreachable: bool,
    reject_sends: Option<String>,
    execution: Execution,
    sent: Vec<Transaction>,
    statuses: HashMap<Signature, SignatureStatus>,
    accounts: Vec<(Pubkey, Account)>,
}

/// In-memory stand-in for an RPC node
pub struct MockLedger {
    state: Mutex<LedgerState>,
}

impl MockLedger {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(LedgerState {
                blockhash_fetches: 0,
                status_polls: 0,
                unreachable: false,
                reject_sends: None,
                execution: Execution::Succeed,
                sent: Vec::new(),
                statuses: HashMap::new(),
                accounts: Vec::new(),
            }),
        }
    }

    pub fn unreachable() -> Self {
        let ledger = Self::new();
        ledger.state.lock().unwrap().unreachable = true;
        ledger
    }

    pub fn rejecting_sends(reason: &str) -> Self {
        let ledger = Self::new();
        ledger.state.lock().unwrap().reject_sends = Some(reason.to_string());
        ledger
    }

    pub fn with_execution(execution: Execution) -> Self {
        let ledger = Self::new();
        ledger.state.lock().unwrap().execution = execution;
        ledger
    }

    pub fn rent_exempt_minimum(data_len: usize) -> u64 {
        (data_len as u64 + ACCOUNT_STORAGE_OVERHEAD) * RENT_LAMPORTS_PER_BYTE
    }

    pub fn insert_account(&self, address: Pubkey, owner: Pubkey, data: Vec<u8>) {
        let account = Account {
            lamports: Self::rent_exempt_minimum(data.len()),
            data,
            owner,
            executable: false,
            rent_epoch: 0,
        };
        self.state.lock().unwrap().accounts.push((address, account));
    }

    pub fn sent_transactions(&self) -> Vec<Transaction> {
        self.state.lock().unwrap().sent.clone()
    }

    pub fn blockhash_fetches(&self) -> usize {
        self.state.lock().unwrap().blockhash_fetches
    }

    pub fn status_polls(&self) -> usize {
        self.state.lock().unwrap().status_polls
    }

    fn check_reachable(state: &LedgerState) -> ClientResult<()> {
        if state.unreachable {
            Err(ClientError::Connection("connection refused".to_string()))
        } else {
            Ok(())
        }
    }

    /// Stores the record carried by every create-campaign instruction
    fn apply(state: &mut LedgerState, transaction: &Transaction) {
        let message = &transaction.message;
        for ix in &message.instructions {
            let program_id = message.account_keys[ix.program_id_index as usize];
            if program_id != PROGRAM_ID
                || ix.data.first() != Some(&CrowdfundInstruction::CreateCampaign.tag())
            {
                continue;
            }
            let campaign = message.account_keys[ix.accounts[0] as usize];
            let data = ix.data[1..].to_vec();
            state.accounts.push((
                campaign,
                Account {
                    lamports: Self::rent_exempt_minimum(data.len()),
                    data,
                    owner: PROGRAM_ID,
                    executable: false,
                    rent_epoch: 0,
                },
            ));
        }
    }
}

#[async_trait]
impl LedgerRpc for MockLedger {
    async fn latest_blockhash(&self) -> ClientResult<Hash> {
        let mut state = self.state.lock().unwrap();
        Self::check_reachable(&state)?;
        state.blockhash_fetches += 1;
        Ok(Hash::new_unique())
    }

    async fn minimum_balance_for_rent_exemption(&self, data_len: usize) -> ClientResult<u64> {
        let state = self.state.lock().unwrap();
        Self::check_reachable(&state)?;
        Ok(Self::rent_exempt_minimum(data_len))
    }

    async fn send_transaction(&self, transaction: &Transaction) -> ClientResult<Signature> {
        let mut state = self.state.lock().unwrap();
        Self::check_reachable(&state)?;
        if let Some(reason) = &state.reject_sends {
            return Err(ClientError::Submission(reason.clone()));
        }
        if transaction.verify().is_err() {
            return Err(ClientError::Submission(
                "Transaction signature verification failure".to_string(),
            ));
        }

        let signature = transaction.signatures[0];
        state.sent.push(transaction.clone());
        match state.execution.clone() {
            Execution::Succeed => {
                Self::apply(&mut state, transaction);
                state.statuses.insert(signature, SignatureStatus::Succeeded);
            }
            Execution::Fail(err) => {
                state
                    .statuses
                    .insert(signature, SignatureStatus::Failed(err));
            }
            Execution::Stall => {}
        }
        Ok(signature)
    }

    async fn signature_status(
        &self,
        signature: &Signature,
        _commitment: CommitmentConfig,
    ) -> ClientResult<SignatureStatus> {
        let mut state = self.state.lock().unwrap();
        Self::check_reachable(&state)?;
        state.status_polls += 1;
        Ok(state
            .statuses
            .get(signature)
            .cloned()
            .unwrap_or(SignatureStatus::Pending))
    }

    async fn program_accounts(&self, program_id: &Pubkey) -> ClientResult<Vec<(Pubkey, Account)>> {
        let state = self.state.lock().unwrap();
        Self::check_reachable(&state)?;
        Ok(state
            .accounts
            .iter()
            .filter(|(_, account)| account.owner == *program_id)
            .cloned()
            .collect())
    }
}
