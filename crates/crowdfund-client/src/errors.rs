use crowdfund_sdk::{AddressError, DecodeError, EncodeError, TransactionBuilderError};
use solana_client::{
    client_error::{ClientError as RpcClientError, ClientErrorKind},
    rpc_request::RpcError,
};
use solana_sdk::{signature::Signature, transaction::TransactionError};
use std::time::Duration;
use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("RPC connection error: {0}")]
    Connection(String),

    #[error("Signing rejected: {0}")]
    SigningRejected(String),

    #[error("Transaction rejected by node: {0}")]
    Submission(String),

    #[error("Transaction {signature} not confirmed within {timeout:?}")]
    ConfirmationTimeout {
        signature: Signature,
        timeout: Duration,
    },

    #[error("Transaction {signature} failed: {error}")]
    TransactionFailed {
        signature: Signature,
        error: TransactionError,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Any failure of a read-only RPC call.
    pub fn connection(err: RpcClientError) -> Self {
        ClientError::Connection(err.to_string())
    }

    /// Failure of a transaction submission: transport problems stay
    /// connection errors, everything the node answered with is a rejection.
    pub fn submission(err: RpcClientError) -> Self {
        if is_transport_error(&err) {
            ClientError::Connection(err.to_string())
        } else {
            ClientError::Submission(err.to_string())
        }
    }
}

fn is_transport_error(err: &RpcClientError) -> bool {
    match err.kind() {
        ClientErrorKind::Io(_) | ClientErrorKind::Reqwest(_) => true,
        ClientErrorKind::RpcError(RpcError::RpcRequestError(_)) => true,
        _ => false,
    }
}

impl From<TransactionBuilderError> for ClientError {
    fn from(err: TransactionBuilderError) -> Self {
        match err {
            TransactionBuilderError::InvalidInput(msg) => ClientError::InvalidInput(msg),
        }
    }
}
