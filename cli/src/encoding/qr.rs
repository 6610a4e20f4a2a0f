use crate::config::QrConfig;
use crate::error::{Result, ToolError};

/// URL of a `size`x`size` PNG for `text` on the configured QR endpoint.
/// Only the URL is built; the image is fetched by whoever displays it.
pub fn qr_url(text: &str, size: u32, config: &QrConfig) -> Result<String> {
    if text.trim().is_empty() {
        return Err(ToolError::malformed("QR text is empty"));
    }
    if !config.sizes.contains(&size) {
        return Err(ToolError::out_of_range(format!(
            "size {} is not one of {:?}",
            size, config.sizes
        )));
    }

    Ok(format!(
        "{}?size={}x{}&data={}",
        config.endpoint,
        size,
        size,
        urlencoding::encode(text)
    ))
}
