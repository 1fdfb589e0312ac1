use alloy_primitives::{Address, B256, U256};

/// Trait for converting types into U256 values.
pub trait IntoU256 {
    /// Converts the implementing type into a U256 value.
    fn into_u256(self) -> U256;
}

impl IntoU256 for B256 {
    fn into_u256(self) -> U256 {
        U256::from_be_bytes(self.0)
    }
}

impl IntoU256 for Address {
    fn into_u256(self) -> U256 {
        self.into_word().into_u256()
    }
}
