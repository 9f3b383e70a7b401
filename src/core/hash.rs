use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    env,
};

/// SHA-256 digest - used to key account scoped records with a fixed size key
#[derive(
    BorshDeserialize,
    BorshSerialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Ord,
    PartialOrd,
    Default,
)]
pub struct Hash([u8; 32]);

impl Hash {
    const LENGTH: usize = 32;
}

impl From<&[u8]> for Hash {
    fn from(value: &[u8]) -> Self {
        assert!(!value.is_empty(), "value cannot be empty");
        let mut buf = [0u8; Hash::LENGTH];
        let hash = env::sha256(value);
        buf.copy_from_slice(&hash.as_slice()[..Hash::LENGTH]);
        Self(buf)
    }
}

impl From<&str> for Hash {
    fn from(value: &str) -> Self {
        value.as_bytes().into()
    }
}

impl From<&String> for Hash {
    fn from(value: &String) -> Self {
        value.as_str().into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::near::new_context;
    use near_sdk::{testing_env, MockedBlockchain};

    #[test]
    fn hash_from_account_id() {
        testing_env!(new_context("alice.near"));
        let hash = Hash::from("bob.near");
        let hash2 = Hash::from(&"bob.near".to_string());
        assert_eq!(hash, hash2);
        assert_ne!(hash, Hash::from("carol.near"));
    }

    #[test]
    #[should_panic(expected = "value cannot be empty")]
    fn hash_from_empty_string() {
        testing_env!(new_context("alice.near"));
        Hash::from("");
    }

    #[test]
    #[should_panic(expected = "value cannot be empty")]
    fn hash_from_empty_bytes() {
        testing_env!(new_context("alice.near"));
        Hash::from("".as_bytes());
    }
}
