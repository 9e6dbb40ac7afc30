//! Minting contract interface.

use alloy::primitives::{Address, Bytes};
use alloy::sol;
use alloy::sol_types::SolCall;

sol! {
    /// ERC-721 collection with an open mint.
    #[derive(Debug)]
    interface INftCollection {
        /// Mint a token to `to` with metadata at `uri`. Open to any caller.
        function publicMint(address to, string uri) external;

        /// Owner-only mint.
        function safeMint(address to, string uri) external;

        /// Metadata URI of a minted token.
        function tokenURI(uint256 tokenId) external view returns (string);
    }
}

/// ABI-encoded `publicMint(to, uri)` calldata.
pub fn public_mint_calldata(to: Address, uri: &str) -> Bytes {
    INftCollection::publicMintCall {
        to,
        uri: uri.to_string(),
    }
    .abi_encode()
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_mint_selector() {
        let data = public_mint_calldata(Address::ZERO, "ipfs://Qm222");
        assert_eq!(&data[..4], INftCollection::publicMintCall::SELECTOR.as_slice());
        assert_ne!(
            INftCollection::publicMintCall::SELECTOR,
            INftCollection::safeMintCall::SELECTOR
        );
    }

    #[test]
    fn test_public_mint_decodes_back() {
        let to: Address = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8".parse().unwrap();
        let data = public_mint_calldata(to, "ipfs://Qm222");

        let call = INftCollection::publicMintCall::abi_decode(&data).unwrap();
        assert_eq!(call.to, to);
        assert_eq!(call.uri, "ipfs://Qm222");
    }
}
