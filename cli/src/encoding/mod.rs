pub mod codec;
pub mod qr;

pub use codec::{decode_base64, encode_base64};
pub use qr::qr_url;
