use super::{Chains, Repositories};
use namegate_api::AppState;
use namegate_application::services::{RelayerNonce, SubmitterSettings, TransactionSubmitter};
use namegate_application::use_cases::{
    CheckRelayerBalanceUseCase, HandleOffchainLookupUseCase, RegisterNameUseCase,
    RelayMetaTransactionUseCase, RelaySettings, ReverseLookupUseCase, SyncRecordUseCase,
};
use namegate_domain::config::ConfigError;
use namegate_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub handle_lookup: Arc<HandleOffchainLookupUseCase>,
    pub reverse_lookup: Arc<ReverseLookupUseCase>,
    pub register_name: Arc<RegisterNameUseCase>,
    pub sync_record: Arc<SyncRecordUseCase>,
    pub relay: Arc<RelayMetaTransactionUseCase>,
    pub check_relayer_balance: Arc<CheckRelayerBalanceUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, repos: &Repositories, chains: &Chains) -> anyhow::Result<Self> {
        let forwarder = config
            .relayer
            .forwarder_address
            .ok_or(ConfigError::Missing("relayer.forwarder_address"))?;
        let retry = config.rpc.retry;

        // Registration and relay spend from the same account and must share
        // one nonce tracker.
        let submitter = Arc::new(TransactionSubmitter::new(
            chains.relay.clone(),
            RelayerNonce::new(),
            SubmitterSettings {
                retry,
                gas_limit_margin_percent: config.relayer.gas_limit_margin_percent,
                confirmation_timeout: config.relayer.confirmation_timeout(),
                poll_interval: config.relayer.receipt_poll_interval(),
            },
        ));

        Ok(Self {
            handle_lookup: Arc::new(HandleOffchainLookupUseCase::new(
                chains.registry.clone(),
                repos.records.clone(),
                chains.gateway_signer.clone(),
                retry,
                config.gateway.signature_ttl(),
            )),
            reverse_lookup: Arc::new(ReverseLookupUseCase::new(repos.records.clone())),
            register_name: Arc::new(RegisterNameUseCase::new(
                chains.registry.clone(),
                submitter.clone(),
                repos.records.clone(),
            )),
            sync_record: Arc::new(SyncRecordUseCase::new(
                chains.registry.clone(),
                repos.records.clone(),
                retry,
            )),
            relay: Arc::new(RelayMetaTransactionUseCase::new(
                chains.relay.clone(),
                submitter,
                RelaySettings {
                    forwarder,
                    payment: config.relayer.payment_address,
                    token: config.relayer.token_address,
                },
            )),
            check_relayer_balance: Arc::new(CheckRelayerBalanceUseCase::new(
                chains.relay.clone(),
                config.relayer.min_gas_balance_wei(),
            )),
        })
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            handle_lookup: self.handle_lookup.clone(),
            reverse_lookup: self.reverse_lookup.clone(),
            register_name: self.register_name.clone(),
            sync_record: self.sync_record.clone(),
            relay: self.relay.clone(),
        }
    }
}
