use crate::{domain, domain::AssetId, interface::TokenAmount};
use near_sdk::{
    serde::{Deserialize, Serialize},
    AccountId,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct AssetGroup {
    pub asset: AssetId,
    pub claim_token_id: AccountId,
    pub total_principal: TokenAmount,
    /// decimal encoded 256-bit fixed point value scaled by 10^24
    pub acc_reward_per_unit: String,
    pub total_harvested: TokenAmount,
    pub total_credited: TokenAmount,
    pub escrowed: TokenAmount,
    pub reserve: TokenAmount,
}

impl AssetGroup {
    pub fn from(asset: AssetId, group: domain::AssetGroup) -> Self {
        Self {
            asset,
            claim_token_id: group.claim_token_id().clone(),
            total_principal: group.total_principal().into(),
            acc_reward_per_unit: group.acc_reward_per_unit().to_string(),
            total_harvested: group.total_harvested().into(),
            total_credited: group.total_credited().into(),
            escrowed: group.escrowed().into(),
            reserve: group.reserve().into(),
        }
    }
}
