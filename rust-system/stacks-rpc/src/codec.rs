//! Typed argument codec
//!
//! The node's read-only call endpoint takes each argument as base64 over the
//! compact JSON form `{"type": ..., "value": ...}`. Values are carried as
//! strings and are never checked against their kind here; the node rejects
//! malformed combinations itself.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::{Result, RpcError};

/// A contract call argument tagged with its Clarity kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum TypedArgument {
    StringAscii(String),
    StringUtf8(String),
    Principal(String),
    Uint(String),
    Int(String),
    Bool(String),
    Buffer(String),
}

impl TypedArgument {
    /// Wire name of the argument kind
    pub fn kind(&self) -> &'static str {
        match self {
            TypedArgument::StringAscii(_) => "string-ascii",
            TypedArgument::StringUtf8(_) => "string-utf8",
            TypedArgument::Principal(_) => "principal",
            TypedArgument::Uint(_) => "uint",
            TypedArgument::Int(_) => "int",
            TypedArgument::Bool(_) => "bool",
            TypedArgument::Buffer(_) => "buffer",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            TypedArgument::StringAscii(v)
            | TypedArgument::StringUtf8(v)
            | TypedArgument::Principal(v)
            | TypedArgument::Uint(v)
            | TypedArgument::Int(v)
            | TypedArgument::Bool(v)
            | TypedArgument::Buffer(v) => v,
        }
    }

    /// Encode as base64 over the compact JSON form
    pub fn encode(&self) -> Result<String> {
        let json = serde_json::to_vec(self).map_err(|e| RpcError::Codec(e.to_string()))?;
        Ok(STANDARD.encode(json))
    }

    /// Inverse of [`TypedArgument::encode`]
    pub fn decode(encoded: &str) -> Result<Self> {
        let json = STANDARD
            .decode(encoded)
            .map_err(|e| RpcError::Codec(format!("invalid base64: {}", e)))?;
        serde_json::from_slice(&json).map_err(|e| RpcError::Codec(format!("invalid argument JSON: {}", e)))
    }
}

/// Encode an argument list, preserving order
pub fn encode_all(args: &[TypedArgument]) -> Result<Vec<String>> {
    args.iter().map(TypedArgument::encode).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_matches_node_wire_form() {
        let arg = TypedArgument::StringAscii("PROP1".to_string());
        let encoded = arg.encode().unwrap();

        let json = STANDARD.decode(&encoded).unwrap();
        assert_eq!(
            String::from_utf8(json).unwrap(),
            r#"{"type":"string-ascii","value":"PROP1"}"#
        );
    }

    #[test]
    fn test_kind_names() {
        let principal = TypedArgument::Principal("ST1SJ3DTE5DN7X54YDH5D64R3BCB6A2AG2ZQ8YPD5".to_string());
        assert_eq!(principal.kind(), "principal");
        assert_eq!(principal.value(), "ST1SJ3DTE5DN7X54YDH5D64R3BCB6A2AG2ZQ8YPD5");

        // serde tag must agree with kind()
        let json = serde_json::to_value(&principal).unwrap();
        assert_eq!(json["type"], "principal");
    }

    #[test]
    fn test_value_not_validated() {
        let arg = TypedArgument::Uint("not-a-number".to_string());
        let decoded = TypedArgument::decode(&arg.encode().unwrap()).unwrap();
        assert_eq!(decoded, arg);
    }

    #[test]
    fn test_encode_all_preserves_order() {
        let args = vec![
            TypedArgument::Principal("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM".to_string()),
            TypedArgument::StringAscii("PROP1".to_string()),
            TypedArgument::Uint("42".to_string()),
        ];
        let encoded = encode_all(&args).unwrap();
        let decoded: Vec<_> = encoded.iter().map(|e| TypedArgument::decode(e).unwrap()).collect();
        assert_eq!(decoded, args);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(TypedArgument::decode("%%%"), Err(RpcError::Codec(_))));

        let unknown_kind = STANDARD.encode(r#"{"type":"tuple","value":"x"}"#);
        assert!(matches!(TypedArgument::decode(&unknown_kind), Err(RpcError::Codec(_))));
    }

    fn any_argument() -> impl Strategy<Value = TypedArgument> {
        prop_oneof![
            any::<String>().prop_map(TypedArgument::StringAscii),
            any::<String>().prop_map(TypedArgument::StringUtf8),
            any::<String>().prop_map(TypedArgument::Principal),
            any::<String>().prop_map(TypedArgument::Uint),
            any::<String>().prop_map(TypedArgument::Int),
            any::<String>().prop_map(TypedArgument::Bool),
            any::<String>().prop_map(TypedArgument::Buffer),
        ]
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(arg in any_argument()) {
            let encoded = arg.encode().unwrap();
            prop_assert_eq!(TypedArgument::decode(&encoded).unwrap(), arg);
        }
    }
}
