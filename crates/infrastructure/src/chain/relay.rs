use alloy::network::{EthereumWallet, ReceiptResponse, TransactionBuilder};
use alloy::providers::{DynProvider, Provider};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use alloy::sol_types::SolCall;
use alloy::transports::TransportError;
use async_trait::async_trait;
use namegate_application::ports::RelayChain;
use namegate_domain::abi::{IForwarder, IERC20};
use namegate_domain::config::RpcConfig;
use namegate_domain::{
    Address, ConfirmationStatus, ContractCall, DomainError, FeeEstimate, MetaTxAuthorization,
    PreparedTransaction, B256, U256,
};
use tracing::{debug, error, info, instrument, warn};

use super::eth_call;
use super::rpc::{self, categorize_call_error, is_transport_failure, revert_reason};

/// The relayer account on chain 2. Every transaction it sends is fully
/// parameterized by the caller; the provider only signs and broadcasts.
pub struct AlloyRelayChain {
    provider: DynProvider,
    relayer: Address,
    chain_id: u64,
}

impl AlloyRelayChain {
    pub fn connect(
        rpc_url: &str,
        chain_id: u64,
        signer: PrivateKeySigner,
        cfg: &RpcConfig,
    ) -> Result<Self, DomainError> {
        let relayer = signer.address();
        let provider = rpc::connect_with_wallet(rpc_url, cfg, EthereumWallet::from(signer))?;
        info!(relayer = %relayer, chain_id, rpc = rpc_url, "Relayer provider initialized");
        Ok(Self {
            provider,
            relayer,
            chain_id,
        })
    }

    async fn view<C: SolCall>(
        &self,
        context: &str,
        to: Address,
        call: C,
    ) -> Result<C::Return, DomainError> {
        let output = eth_call(&self.provider, to, call.abi_encode())
            .await
            .map_err(|e| categorize_call_error(context, &e))?;

        C::abi_decode_returns(&output).map_err(|e| {
            error!(context, error = %e, "Contract returned undecodable output");
            DomainError::Unknown(format!("{}: {}", context, e))
        })
    }

    fn request(&self, call: &ContractCall) -> TransactionRequest {
        TransactionRequest::default()
            .with_from(self.relayer)
            .with_to(call.to)
            .with_input(call.input.clone())
    }
}

/// Maps a node's rejection of a broadcast.
fn categorize_send_error(err: &TransportError) -> DomainError {
    let error_str = format!("{:?}", err);
    if error_str.contains("nonce too low")
        || error_str.contains("nonce too high")
        || error_str.contains("already known")
        || error_str.contains("replacement transaction underpriced")
    {
        error!(error = %error_str, "Relayer nonce collision detected");
        DomainError::NonceConflict(err.to_string())
    } else if error_str.contains("insufficient funds") {
        error!(error = %error_str, "Relayer cannot pay for gas");
        DomainError::InsufficientRelayerGas(err.to_string())
    } else if is_transport_failure(err) {
        error!(error = %error_str, "RPC connection error while broadcasting");
        DomainError::ChainUnavailable(err.to_string())
    } else {
        error!(error = %error_str, "Transaction rejected by node");
        DomainError::Unknown(err.to_string())
    }
}

#[async_trait]
impl RelayChain for AlloyRelayChain {
    fn relayer_address(&self) -> Address {
        self.relayer
    }

    #[instrument(skip(self))]
    async fn native_balance(&self, account: Address) -> Result<U256, DomainError> {
        self.provider
            .get_balance(account)
            .await
            .map_err(|e| categorize_call_error("eth_getBalance", &e))
    }

    #[instrument(skip(self))]
    async fn token_balance(&self, token: Address, owner: Address) -> Result<U256, DomainError> {
        self.view("token.balanceOf", token, IERC20::balanceOfCall { owner })
            .await
    }

    #[instrument(skip(self))]
    async fn token_allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, DomainError> {
        self.view(
            "token.allowance",
            token,
            IERC20::allowanceCall { owner, spender },
        )
        .await
    }

    #[instrument(skip(self))]
    async fn forwarder_nonce(
        &self,
        forwarder: Address,
        sender: Address,
    ) -> Result<U256, DomainError> {
        self.view(
            "forwarder.nonces",
            forwarder,
            IForwarder::noncesCall { owner: sender },
        )
        .await
    }

    #[instrument(skip(self, authorization), fields(sender = %authorization.sender))]
    async fn forwarder_message_hash(
        &self,
        forwarder: Address,
        authorization: &MetaTxAuthorization,
        target: Address,
        nonce: U256,
    ) -> Result<B256, DomainError> {
        self.view(
            "forwarder.getMessageHash",
            forwarder,
            IForwarder::getMessageHashCall {
                sender: authorization.sender,
                receiver: authorization.receiver,
                amount: authorization.amount,
                targetContract: target,
                nonce,
            },
        )
        .await
    }

    #[instrument(skip(self, call), fields(to = %call.to))]
    async fn estimate_gas(&self, call: &ContractCall) -> Result<u64, DomainError> {
        self.provider
            .estimate_gas(self.request(call))
            .await
            .map_err(|e| {
                if is_transport_failure(&e) {
                    error!(error = %e, "RPC connection error during gas estimation");
                    DomainError::ChainUnavailable(e.to_string())
                } else {
                    let reason = revert_reason(&e);
                    warn!(reason = %reason, "Gas estimation reverted");
                    DomainError::from_revert_reason(&reason)
                }
            })
    }

    #[instrument(skip(self))]
    async fn pending_nonce(&self) -> Result<u64, DomainError> {
        self.provider
            .get_transaction_count(self.relayer)
            .pending()
            .await
            .map_err(|e| categorize_call_error("eth_getTransactionCount", &e))
    }

    #[instrument(skip(self))]
    async fn fee_estimate(&self) -> Result<FeeEstimate, DomainError> {
        let estimate = self
            .provider
            .estimate_eip1559_fees()
            .await
            .map_err(|e| categorize_call_error("eth_feeHistory", &e))?;

        Ok(FeeEstimate {
            max_fee_per_gas: estimate.max_fee_per_gas,
            max_priority_fee_per_gas: estimate.max_priority_fee_per_gas,
        })
    }

    #[instrument(skip(self, tx), fields(to = %tx.call.to, nonce = tx.nonce, gas_limit = tx.gas_limit))]
    async fn send_transaction(&self, tx: &PreparedTransaction) -> Result<B256, DomainError> {
        let request = self
            .request(&tx.call)
            .with_chain_id(self.chain_id)
            .with_nonce(tx.nonce)
            .with_gas_limit(tx.gas_limit)
            .with_max_fee_per_gas(tx.fees.max_fee_per_gas)
            .with_max_priority_fee_per_gas(tx.fees.max_priority_fee_per_gas);

        let pending = self
            .provider
            .send_transaction(request)
            .await
            .map_err(|e| categorize_send_error(&e))?;

        let tx_hash = *pending.tx_hash();
        info!(tx_hash = %tx_hash, "Transaction broadcast");
        Ok(tx_hash)
    }

    #[instrument(skip(self))]
    async fn confirmation_status(&self, tx_hash: B256) -> Result<ConfirmationStatus, DomainError> {
        let receipt = self
            .provider
            .get_transaction_receipt(tx_hash)
            .await
            .map_err(|e| categorize_call_error("eth_getTransactionReceipt", &e))?;

        Ok(match receipt {
            None => ConfirmationStatus::Pending,
            Some(receipt) if receipt.status() => {
                debug!(block = ?receipt.block_number(), "Transaction mined");
                ConfirmationStatus::Confirmed
            }
            Some(_) => ConfirmationStatus::Reverted,
        })
    }
}
