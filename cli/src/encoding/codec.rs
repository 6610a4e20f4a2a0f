use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Result, ToolError};

/// UTF-8 text to standard padded Base64.
pub fn encode_base64(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Standard Base64 back to UTF-8 text. Surrounding whitespace is ignored.
pub fn decode_base64(encoded: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| ToolError::malformed(format!("invalid Base64 string: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| ToolError::malformed(format!("decoded bytes are not UTF-8: {}", e)))
}
