use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    AccountId,
};
use std::fmt::{self, Display, Formatter};

/// Identifies the underlying asset that an asset group is staked in.
///
/// JSON encoding:
/// - `"Native"`
/// - `{"Token":"usdb.near"}`
#[derive(
    BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash,
)]
#[serde(crate = "near_sdk::serde")]
pub enum AssetId {
    /// NEAR
    Native,
    /// NEP-141 fungible token contract
    Token(AccountId),
}

impl AssetId {
    pub fn is_native(&self) -> bool {
        match self {
            AssetId::Native => true,
            AssetId::Token(_) => false,
        }
    }

    pub fn token_id(&self) -> Option<&AccountId> {
        match self {
            AssetId::Native => None,
            AssetId::Token(token_id) => Some(token_id),
        }
    }
}

impl Display for AssetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AssetId::Native => write!(f, "NEAR"),
            AssetId::Token(token_id) => write!(f, "{}", token_id),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use near_sdk::serde_json;

    #[test]
    fn asset_id_json() {
        let native: AssetId = serde_json::from_str(r#""Native""#).unwrap();
        assert!(native.is_native());

        let token: AssetId = serde_json::from_str(r#"{"Token":"usdb.near"}"#).unwrap();
        assert_eq!(token.token_id().unwrap(), "usdb.near");
        assert_eq!(token.to_string(), "usdb.near");
    }
}
