//! Contract interfaces consumed by the gateway, the relayer and the client
//! resolver. Only the fragments actually called are declared.

use alloy_sol_types::sol;

/// Coin type for Ethereum addresses (SLIP-44), used by multichain `addr`.
pub const COIN_TYPE_ETH: u64 = 60;

sol! {
    /// ENSIP-10 resolver on the origin chain, answering through CCIP-Read.
    #[derive(Debug)]
    interface IExtendedResolver {
        function resolve(bytes name, bytes data) external view returns (bytes);
        function resolveWithProof(bytes response, bytes extraData) external view returns (bytes);

        error OffchainLookup(address sender, string[] urls, bytes callData, bytes4 callbackFunction, bytes extraData);
    }

    #[derive(Debug)]
    interface IAddrResolver {
        function addr(bytes32 node) external view returns (address);
    }

    #[derive(Debug)]
    interface IAddressResolver {
        function addr(bytes32 node, uint256 coinType) external view returns (bytes);
    }

    /// Registry and registrar living on chain 2.
    #[derive(Debug)]
    interface IL2Registry {
        function resolve(bytes name, bytes data) external view returns (bytes);
        function available(string label) external view returns (bool);
        function nonces(address owner) external view returns (uint256);
        function registrationHash(string label, address owner, uint256 nonce) external view returns (bytes32);
        function register(string label, address owner, bytes signature) external;
    }

    #[derive(Debug)]
    interface IForwarder {
        function nonces(address owner) external view returns (uint256);
        function getMessageHash(address sender, address receiver, uint256 amount, address targetContract, uint256 nonce) external view returns (bytes32);
        function executeMetaTransaction(address sender, address receiver, uint256 amount, address targetContract, bytes signature) external returns (bool);
    }

    #[derive(Debug)]
    interface IERC20 {
        function balanceOf(address owner) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
        function decimals() external view returns (uint8);
    }
}
