//! Program domain entity and its AST value object.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::constants::MAX_AST_BYTES;
use crate::error::{DomainError, DomainResult};

/// A user-submitted abstract syntax tree, kept as a JSON document.
///
/// Only objects and arrays are accepted: a compilation unit is never a bare
/// scalar or `null`. Strings and keys may not contain NUL, which Postgres
/// cannot store in JSON columns.
///
/// The stored text is normalized, not byte-preserved: whitespace is dropped
/// and object keys come back in sorted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgramAst(Value);

impl ProgramAst {
    /// Parse an AST from its JSON text encoding.
    pub fn parse(text: &str) -> DomainResult<Self> {
        if text.len() > MAX_AST_BYTES {
            return Err(DomainError::validation(format!(
                "Program AST exceeds {} bytes",
                MAX_AST_BYTES
            )));
        }
        let value: Value = serde_json::from_str(text)
            .map_err(|e| DomainError::validation(format!("Program AST is not valid JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Wrap an already decoded JSON value.
    pub fn from_value(value: Value) -> DomainResult<Self> {
        if !matches!(value, Value::Object(_) | Value::Array(_)) {
            return Err(DomainError::validation(
                "Program AST must be a JSON object or array",
            ));
        }
        if contains_nul(&value) {
            return Err(DomainError::validation(
                "Program AST strings must not contain NUL characters",
            ));
        }
        Ok(Self(value))
    }

    /// Borrow the underlying JSON document.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume into the underlying JSON document.
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Encode back to JSON text.
    pub fn to_json_string(&self) -> String {
        self.0.to_string()
    }
}

fn contains_nul(value: &Value) -> bool {
    match value {
        Value::String(s) => s.contains('\0'),
        Value::Array(items) => items.iter().any(contains_nul),
        Value::Object(map) => map
            .iter()
            .any(|(key, item)| key.contains('\0') || contains_nul(item)),
        _ => false,
    }
}

/// Program domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: Uuid,
    /// Owning user; always references an existing user row
    pub user_id: Uuid,
    pub ast: ProgramAst,
}

impl Program {
    /// Check whether the program belongs to the given user
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

/// Program creation data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProgram {
    pub user_id: Uuid,
    pub ast: ProgramAst,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_object_ast() {
        let ast = ProgramAst::parse(r#"{"nodes":[{"instruction":"Pass"}]}"#).unwrap();
        assert_eq!(ast.as_value()["nodes"][0]["instruction"], "Pass");
    }

    #[test]
    fn parses_array_ast() {
        assert!(ProgramAst::parse("[]").is_ok());
    }

    #[test]
    fn rejects_invalid_json() {
        let err = ProgramAst::parse("{nodes:").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_scalar_documents() {
        for text in ["null", "42", "\"program\"", "true"] {
            assert!(ProgramAst::parse(text).is_err(), "accepted {}", text);
        }
    }

    #[test]
    fn rejects_nul_in_strings_and_keys() {
        for text in [
            r#"{"name":"a\u0000b"}"#,
            r#"[{"nodes":["ok", "\u0000"]}]"#,
            r#"{"ke\u0000y":1}"#,
        ] {
            let err = ProgramAst::parse(text).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "accepted {}", text);
        }
    }

    #[test]
    fn object_keys_are_normalized() {
        let ast = ProgramAst::parse(r#"{ "z": 1, "a": 2 }"#).unwrap();
        assert_eq!(ast.to_json_string(), r#"{"a":2,"z":1}"#);
    }

    #[test]
    fn rejects_oversized_ast() {
        let text = format!("[\"{}\"]", "a".repeat(MAX_AST_BYTES));
        assert!(ProgramAst::parse(&text).is_err());
    }

    #[test]
    fn json_text_is_stable() {
        let ast = ProgramAst::from_value(json!({"a": [1, 2]})).unwrap();
        let again = ProgramAst::parse(&ast.to_json_string()).unwrap();
        assert_eq!(ast, again);
    }

    #[test]
    fn ownership_check() {
        let owner = Uuid::new_v4();
        let program = Program {
            id: Uuid::new_v4(),
            user_id: owner,
            ast: ProgramAst::from_value(json!({})).unwrap(),
        };
        assert!(program.is_owned_by(owner));
        assert!(!program.is_owned_by(Uuid::new_v4()));
    }
}
