use crate::domain::{Gas, TokenAmount, TGAS};
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    json_types::U128,
    serde::{Deserialize, Serialize},
};

#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct Config {
    storage_cost_per_byte: U128,
    gas_config: GasConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // 1 NEAR per 100 kB
            storage_cost_per_byte: U128(10_000_000_000_000_000_000),
            gas_config: GasConfig::default(),
        }
    }
}

impl Config {
    pub fn storage_cost_per_byte(&self) -> TokenAmount {
        self.storage_cost_per_byte.0.into()
    }

    pub fn gas_config(&self) -> &GasConfig {
        &self.gas_config
    }

    pub fn apply_updates(&mut self, config: &updates::Config) {
        if let Some(storage_cost_per_byte) = config.storage_cost_per_byte {
            self.storage_cost_per_byte = storage_cost_per_byte;
        }

        if let Some(gas_config) = config.gas_config.as_ref() {
            self.gas_config.update(gas_config);
        }
    }
}

const BASE_GAS: Gas = Gas(5 * TGAS.0);

#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(crate = "near_sdk::serde")]
pub struct GasConfig {
    claim_token: ClaimTokenGasConfig,
    fungible_token: FungibleTokenGasConfig,
    yield_source: YieldSourceGasConfig,
    callbacks: CallBacksGasConfig,
}

impl GasConfig {
    pub fn claim_token(&self) -> &ClaimTokenGasConfig {
        &self.claim_token
    }

    pub fn fungible_token(&self) -> &FungibleTokenGasConfig {
        &self.fungible_token
    }

    pub fn yield_source(&self) -> &YieldSourceGasConfig {
        &self.yield_source
    }

    pub fn callbacks(&self) -> &CallBacksGasConfig {
        &self.callbacks
    }

    pub fn update(&mut self, config: &updates::GasConfig) {
        if let Some(claim_token) = config.claim_token.as_ref() {
            self.claim_token.update(claim_token);
        }

        if let Some(fungible_token) = config.fungible_token.as_ref() {
            self.fungible_token.update(fungible_token);
        }

        if let Some(yield_source) = config.yield_source.as_ref() {
            self.yield_source.update(yield_source);
        }

        if let Some(callbacks) = config.callbacks.as_ref() {
            self.callbacks.update(callbacks);
        }
    }
}

#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct ClaimTokenGasConfig {
    mint: Gas,
    burn: Gas,
    ft_transfer: Gas,
}

impl Default for ClaimTokenGasConfig {
    fn default() -> Self {
        Self {
            mint: BASE_GAS * 2,
            burn: BASE_GAS * 2,
            ft_transfer: BASE_GAS * 2,
        }
    }
}

impl ClaimTokenGasConfig {
    pub fn mint(&self) -> Gas {
        self.mint
    }

    pub fn burn(&self) -> Gas {
        self.burn
    }

    pub fn ft_transfer(&self) -> Gas {
        self.ft_transfer
    }

    pub fn update(&mut self, config: &updates::ClaimTokenGasConfig) {
        if let Some(mint) = config.mint {
            self.mint = mint;
        }

        if let Some(burn) = config.burn {
            self.burn = burn;
        }

        if let Some(ft_transfer) = config.ft_transfer {
            self.ft_transfer = ft_transfer;
        }
    }
}

/// gas for calls on the underlying asset's token contract
#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct FungibleTokenGasConfig {
    ft_transfer: Gas,
}

impl Default for FungibleTokenGasConfig {
    fn default() -> Self {
        Self {
            ft_transfer: BASE_GAS * 2,
        }
    }
}

impl FungibleTokenGasConfig {
    pub fn ft_transfer(&self) -> Gas {
        self.ft_transfer
    }

    pub fn update(&mut self, config: &updates::FungibleTokenGasConfig) {
        if let Some(ft_transfer) = config.ft_transfer {
            self.ft_transfer = ft_transfer;
        }
    }
}

#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct YieldSourceGasConfig {
    claimable_yield: Gas,
    claim_yield: Gas,
}

impl Default for YieldSourceGasConfig {
    fn default() -> Self {
        Self {
            claimable_yield: BASE_GAS,
            claim_yield: BASE_GAS * 4,
        }
    }
}

impl YieldSourceGasConfig {
    pub fn claimable_yield(&self) -> Gas {
        self.claimable_yield
    }

    pub fn claim_yield(&self) -> Gas {
        self.claim_yield
    }

    pub fn update(&mut self, config: &updates::YieldSourceGasConfig) {
        if let Some(claimable_yield) = config.claimable_yield {
            self.claimable_yield = claimable_yield;
        }

        if let Some(claim_yield) = config.claim_yield {
            self.claim_yield = claim_yield;
        }
    }
}

#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct CallBacksGasConfig {
    on_harvest: Gas,
    on_asset_transferred: Gas,
}

impl Default for CallBacksGasConfig {
    fn default() -> Self {
        Self {
            on_harvest: BASE_GAS * 2,
            on_asset_transferred: BASE_GAS,
        }
    }
}

impl CallBacksGasConfig {
    pub fn on_harvest(&self) -> Gas {
        self.on_harvest
    }

    pub fn on_asset_transferred(&self) -> Gas {
        self.on_asset_transferred
    }

    pub fn update(&mut self, config: &updates::CallBacksGasConfig) {
        if let Some(on_harvest) = config.on_harvest {
            self.on_harvest = on_harvest;
        }

        if let Some(on_asset_transferred) = config.on_asset_transferred {
            self.on_asset_transferred = on_asset_transferred;
        }
    }
}

/// provides support for config updates
/// - config updates are uploaded in JSON format
/// - all config properties are optional - thus only config properties that change need to be specified
///   when updating the config
pub mod updates {
    use crate::domain::Gas;
    use near_sdk::{
        json_types::U128,
        serde::{Deserialize, Serialize},
    };

    #[derive(Debug, Serialize, Deserialize, Clone, Default)]
    #[serde(crate = "near_sdk::serde")]
    pub struct Config {
        pub storage_cost_per_byte: Option<U128>,
        pub gas_config: Option<GasConfig>,
    }

    #[derive(Debug, Serialize, Deserialize, Clone, Default)]
    #[serde(crate = "near_sdk::serde")]
    pub struct GasConfig {
        pub claim_token: Option<ClaimTokenGasConfig>,
        pub fungible_token: Option<FungibleTokenGasConfig>,
        pub yield_source: Option<YieldSourceGasConfig>,
        pub callbacks: Option<CallBacksGasConfig>,
    }

    #[derive(Debug, Serialize, Deserialize, Clone, Default)]
    #[serde(crate = "near_sdk::serde")]
    pub struct ClaimTokenGasConfig {
        pub mint: Option<Gas>,
        pub burn: Option<Gas>,
        pub ft_transfer: Option<Gas>,
    }

    #[derive(Debug, Serialize, Deserialize, Clone, Default)]
    #[serde(crate = "near_sdk::serde")]
    pub struct FungibleTokenGasConfig {
        pub ft_transfer: Option<Gas>,
    }

    #[derive(Debug, Serialize, Deserialize, Clone, Default)]
    #[serde(crate = "near_sdk::serde")]
    pub struct YieldSourceGasConfig {
        pub claimable_yield: Option<Gas>,
        pub claim_yield: Option<Gas>,
    }

    #[derive(Debug, Serialize, Deserialize, Clone, Default)]
    #[serde(crate = "near_sdk::serde")]
    pub struct CallBacksGasConfig {
        pub on_harvest: Option<Gas>,
        pub on_asset_transferred: Option<Gas>,
    }
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn config_from_json() {
        let json_config: updates::Config = near_sdk::serde_json::from_str(
            r#"
        {
            "storage_cost_per_byte": "20000000000000000000",
            "gas_config": {
                "claim_token": {
                    "mint":500,
                    "ft_transfer":200
                },
                "callbacks": {
                    "on_harvest":100
                }
            }
        }
        "#,
        )
        .unwrap();

        let mut config = Config::default();
        config.apply_updates(&json_config);
        assert_eq!(
            config.storage_cost_per_byte(),
            TokenAmount(20_000_000_000_000_000_000)
        );
        let gas_config = config.gas_config();
        assert_eq!(gas_config.claim_token().mint(), Gas(500));
        assert_eq!(gas_config.claim_token().ft_transfer(), Gas(200));
        assert_eq!(gas_config.callbacks().on_harvest(), Gas(100));
        // properties that are not specified are not changed
        assert_eq!(
            gas_config.claim_token().burn(),
            ClaimTokenGasConfig::default().burn()
        );
        assert_eq!(
            gas_config.callbacks().on_asset_transferred(),
            CallBacksGasConfig::default().on_asset_transferred()
        );
        assert_eq!(gas_config.yield_source(), &YieldSourceGasConfig::default());
    }
}
