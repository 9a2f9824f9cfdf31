use alloy_primitives::{Address, Bytes, FixedBytes};

use crate::abi::IExtendedResolver::OffchainLookup as OffchainLookupError;

/// Decoded `OffchainLookup` revert. Lives only for the duration of one
/// client-side resolution and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffchainLookup {
    pub sender: Address,
    pub urls: Vec<String>,
    pub call_data: Bytes,
    pub callback_function: FixedBytes<4>,
    pub extra_data: Bytes,
}

impl From<OffchainLookupError> for OffchainLookup {
    fn from(err: OffchainLookupError) -> Self {
        Self {
            sender: err.sender,
            urls: err.urls,
            call_data: err.callData,
            callback_function: err.callbackFunction,
            extra_data: err.extraData,
        }
    }
}

/// Expands an EIP-3668 URL template. Returns the URL and whether the request
/// must be a GET (the template carries `{data}`) or a JSON POST.
pub fn expand_gateway_url(template: &str, sender: Address, call_data: &Bytes) -> (String, bool) {
    let sender_hex = format!("{:#x}", sender);
    let data_hex = call_data.to_string();
    let is_get = template.contains("{data}");
    let url = template
        .replace("{sender}", &sender_hex)
        .replace("{data}", &data_hex);
    (url, is_get)
}
