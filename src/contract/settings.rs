use crate::config;
use near_sdk::{
    env,
    json_types::ValidAccountId,
    serde::{Deserialize, Serialize},
};
use std::fmt::{self, Display, Formatter};

/// optional settings that are applied when the contract is initialized
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(crate = "near_sdk::serde")]
pub struct ContractSettings {
    pub treasury_id: Option<ValidAccountId>,
    pub yield_source_id: Option<ValidAccountId>,
    pub config: Option<config::updates::Config>,
}

impl ContractSettings {
    /// depends on NEAR runtime env
    pub fn validate(&self) -> Result<(), InvalidContractSettings> {
        let contract_id = env::current_account_id();
        if let Some(treasury_id) = self.treasury_id.as_ref() {
            if treasury_id.as_ref() == &contract_id {
                return Err(InvalidContractSettings::TreasuryMustNotBeContract);
            }
        }
        if let Some(yield_source_id) = self.yield_source_id.as_ref() {
            if yield_source_id.as_ref() == &contract_id {
                return Err(InvalidContractSettings::YieldSourceMustNotBeContract);
            }
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
pub enum InvalidContractSettings {
    TreasuryMustNotBeContract,
    YieldSourceMustNotBeContract,
}

impl Display for InvalidContractSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InvalidContractSettings::TreasuryMustNotBeContract => {
                write!(f, "treasury account ID must not be the contract account ID")
            }
            InvalidContractSettings::YieldSourceMustNotBeContract => {
                write!(f, "yield source account ID must not be the contract account ID")
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::near::{contract_account_id, new_context};
    use near_sdk::{serde_json, testing_env, MockedBlockchain};
    use std::convert::TryFrom;

    #[test]
    fn settings_from_json() {
        testing_env!(new_context("owner.near"));
        let settings: ContractSettings = serde_json::from_str(
            r#"
        {
            "treasury_id": "treasury.near",
            "yield_source_id": "yield.near",
            "config": {
                "gas_config": {
                    "yield_source": { "claim_yield": 100 }
                }
            }
        }
        "#,
        )
        .unwrap();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.treasury_id.unwrap().as_ref(), "treasury.near");
    }

    #[test]
    fn treasury_must_not_be_contract() {
        testing_env!(new_context("owner.near"));
        let settings = ContractSettings {
            treasury_id: Some(ValidAccountId::try_from(contract_account_id()).unwrap()),
            ..ContractSettings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(InvalidContractSettings::TreasuryMustNotBeContract)
        );
    }
}
