//! Static registry of networks reachable through the Etherscan v2 API.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

macro_rules! chains {
    ($( $variant:ident = $id:literal => $display:literal; )*) => {
        /// A supported network, keyed by its numeric chain id.
        ///
        /// The registry is a closed, immutable table; use
        /// [`Chain::from_id`] to look up a network by id.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum Chain {
            $( $variant, )*
        }

        impl Chain {
            /// Numeric id sent as the `chainid` query parameter.
            pub fn id(self) -> u64 {
                match self {
                    $( Chain::$variant => $id, )*
                }
            }

            /// Human-readable network name.
            pub fn name(self) -> &'static str {
                match self {
                    $( Chain::$variant => $display, )*
                }
            }
        }

        static BY_ID: LazyLock<HashMap<u64, Chain>> = LazyLock::new(|| {
            HashMap::from([
                $( ($id, Chain::$variant), )*
            ])
        });
    };
}

// Chain ids supported as of 2025/01/02.
chains! {
    EthereumMainnet = 1 => "Ethereum Mainnet";
    OpMainnet = 10 => "OP Mainnet";
    CronosMainnet = 25 => "Cronos Mainnet";
    XdcMainnet = 50 => "XDC Mainnet";
    XdcApothemTestnet = 51 => "XDC Apothem Testnet";
    BnbSmartChainMainnet = 56 => "BNB Smart Chain Mainnet";
    BnbSmartChainTestnet = 97 => "BNB Smart Chain Testnet";
    Gnosis = 100 => "Gnosis";
    PolygonMainnet = 137 => "Polygon Mainnet";
    SonicMainnet = 146 => "Sonic Mainnet";
    BitTorrentChainMainnet = 199 => "BitTorrent Chain Mainnet";
    FantomOperaMainnet = 250 => "Fantom Opera Mainnet";
    FraxtalMainnet = 252 => "Fraxtal Mainnet";
    KromaMainnet = 255 => "Kroma Mainnet";
    ZkSyncSepoliaTestnet = 300 => "zkSync Sepolia Testnet";
    ZkSyncMainnet = 324 => "zkSync Mainnet";
    WorldMainnet = 480 => "World Mainnet";
    BitTorrentChainTestnet = 1028 => "BitTorrent Chain Testnet";
    PolygonZkEvmMainnet = 1101 => "Polygon zkEVM Mainnet";
    Wemix30Mainnet = 1111 => "WEMIX3.0 Mainnet";
    Wemix30Testnet = 1112 => "WEMIX3.0 Testnet";
    MoonbeamMainnet = 1284 => "Moonbeam Mainnet";
    MoonriverMainnet = 1285 => "Moonriver Mainnet";
    MoonbaseAlphaTestnet = 1287 => "Moonbase Alpha Testnet";
    KromaSepoliaTestnet = 2358 => "Kroma Sepolia Testnet";
    PolygonZkEvmCardonaTestnet = 2442 => "Polygon zkEVM Cardona Testnet";
    FraxtalTestnet = 2522 => "Fraxtal Testnet";
    FantomTestnet = 4002 => "Fantom Testnet";
    WorldSepoliaTestnet = 4801 => "World Sepolia Testnet";
    MantleMainnet = 5000 => "Mantle Mainnet";
    MantleSepoliaTestnet = 5003 => "Mantle Sepolia Testnet";
    BaseMainnet = 8453 => "Base Mainnet";
    HoleskyTestnet = 17000 => "Holesky Testnet";
    ApeChainCurtisTestnet = 33111 => "ApeChain Curtis Testnet";
    ApeChainMainnet = 33139 => "ApeChain Mainnet";
    ArbitrumOneMainnet = 42161 => "Arbitrum One Mainnet";
    ArbitrumNovaMainnet = 42170 => "Arbitrum Nova Mainnet";
    CeloMainnet = 42220 => "Celo Mainnet";
    AvalancheFujiTestnet = 43113 => "Avalanche Fuji Testnet";
    AvalancheCChain = 43114 => "Avalanche C-Chain";
    CeloAlfajoresTestnet = 44787 => "Celo Alfajores Testnet";
    SophonMainnet = 50104 => "Sophon Mainnet";
    SonicBlazeTestnet = 57054 => "Sonic Blaze Testnet";
    LineaSepoliaTestnet = 59141 => "Linea Sepolia Testnet";
    LineaMainnet = 59144 => "Linea Mainnet";
    PolygonAmoyTestnet = 80002 => "Polygon Amoy Testnet";
    BlastMainnet = 81457 => "Blast Mainnet";
    BaseSepoliaTestnet = 84532 => "Base Sepolia Testnet";
    TaikoMainnet = 167000 => "Taiko Mainnet";
    TaikoHeklaTestnet = 167009 => "Taiko Hekla L2 Testnet";
    XaiMainnet = 660279 => "Xai Mainnet";
    ScrollSepoliaTestnet = 534351 => "Scroll Sepolia Testnet";
    ScrollMainnet = 534352 => "Scroll Mainnet";
    SepoliaTestnet = 11155111 => "Sepolia Testnet";
    OpSepoliaTestnet = 11155420 => "OP Sepolia Testnet";
    ArbitrumSepoliaTestnet = 421614 => "Arbitrum Sepolia Testnet";
    BlastSepoliaTestnet = 168587773 => "Blast Sepolia Testnet";
    SophonSepoliaTestnet = 531050104 => "Sophon Sepolia Testnet";
    XaiSepoliaTestnet = 37714555429 => "Xai Sepolia Testnet";
}

impl Chain {
    /// Look up a network by chain id. Returns `None` for ids the API
    /// does not serve.
    pub fn from_id(id: u64) -> Option<Chain> {
        BY_ID.get(&id).copied()
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_and_name() {
        assert_eq!(Chain::EthereumMainnet.id(), 1);
        assert_eq!(Chain::EthereumMainnet.name(), "Ethereum Mainnet");
        assert_eq!(Chain::BnbSmartChainMainnet.id(), 56);
        assert_eq!(Chain::XaiSepoliaTestnet.id(), 37714555429);
    }

    #[test]
    fn from_id_round_trips() {
        assert_eq!(Chain::from_id(1), Some(Chain::EthereumMainnet));
        assert_eq!(Chain::from_id(8453), Some(Chain::BaseMainnet));
        assert_eq!(Chain::from_id(2), None);
    }

    #[test]
    fn display_is_network_name() {
        assert_eq!(Chain::PolygonMainnet.to_string(), "Polygon Mainnet");
    }
}
