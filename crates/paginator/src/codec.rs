use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use model::{core::value::Value, records::row::RowData, schema::table::TableSchema};
use thiserror::Error;

// Decode bound for untrusted cursor token input.
const MAX_CURSOR_TOKEN_LEN: usize = 8 * 1024;

///
/// Cursor codec.
///
/// A cursor is the JSON array of one row's key values (in rule order),
/// base64url-encoded without padding. The externally tagged `Value`
/// serialization keeps each field's type, so decoding restores the exact
/// typed tuple that was encoded.
///

#[derive(Debug, Error)]
pub enum CursorError {
    #[error("cursor token is empty")]
    Empty,

    #[error("cursor token exceeds max length: {len} chars (max {max})")]
    TooLong { len: usize, max: usize },

    #[error("cursor is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("cursor payload is not a value tuple: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("cursor has {actual} fields, expected {expected}")]
    FieldCount { expected: usize, actual: usize },

    #[error("cursor field `{key}` has type {actual}, expected {expected}")]
    FieldType {
        key: String,
        expected: String,
        actual: String,
    },

    #[error("row has no field `{0}`")]
    MissingField(String),
}

pub struct CursorEncoder<'a> {
    keys: &'a [String],
}

impl<'a> CursorEncoder<'a> {
    pub fn new(keys: &'a [String]) -> Self {
        CursorEncoder { keys }
    }

    /// Encodes one row's key tuple into an opaque token. Deterministic:
    /// the same tuple always yields the same string.
    pub fn encode(&self, row: &RowData) -> Result<String, CursorError> {
        let mut values = Vec::with_capacity(self.keys.len());
        for key in self.keys {
            let field = row
                .get(key)
                .ok_or_else(|| CursorError::MissingField(key.clone()))?;
            values.push(field.value.clone().unwrap_or(Value::Null));
        }
        let payload = serde_json::to_vec(&values)?;
        Ok(URL_SAFE_NO_PAD.encode(payload))
    }
}

pub struct CursorDecoder<'a> {
    keys: &'a [String],
}

impl<'a> CursorDecoder<'a> {
    pub fn new(keys: &'a [String]) -> Self {
        CursorDecoder { keys }
    }

    /// Decodes a token back into the ordered key tuple, checking field count
    /// and each value's type against the schema's declared column types.
    /// Decoded values feed straight into SQL comparison arguments, so any
    /// mismatch is a hard error rather than a silent coercion.
    pub fn decode(&self, token: &str, schema: &TableSchema) -> Result<Vec<Value>, CursorError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(CursorError::Empty);
        }
        if token.len() > MAX_CURSOR_TOKEN_LEN {
            return Err(CursorError::TooLong {
                len: token.len(),
                max: MAX_CURSOR_TOKEN_LEN,
            });
        }

        let payload = URL_SAFE_NO_PAD.decode(token)?;
        let values: Vec<Value> = serde_json::from_slice(&payload)?;

        if values.len() != self.keys.len() {
            return Err(CursorError::FieldCount {
                expected: self.keys.len(),
                actual: values.len(),
            });
        }
        for (key, value) in self.keys.iter().zip(&values) {
            if let Some(field) = schema.get(key)
                && !field.data_type.matches(value)
            {
                return Err(CursorError::FieldType {
                    key: key.clone(),
                    expected: field.data_type.to_string(),
                    actual: value.data_type().to_string(),
                });
            }
        }

        Ok(values)
    }
}
