//! Hash related utils.

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use md5::Md5;
use sha1::Digest;
use sha1::Sha1;

/// Base64 encode
pub fn base64_encode(content: &[u8]) -> String {
    BASE64_STANDARD.encode(content)
}

/// Base64 encoded SHA1 hash.
///
/// Use this function instead of `base64_encode(&sha1(content))` can reduce
/// extra copy.
pub fn base64_sha1(content: &[u8]) -> String {
    base64_encode(Sha1::digest(content).as_slice())
}

/// Hex encoded MD5 hash.
pub fn hex_md5(content: &[u8]) -> String {
    hex::encode(Md5::digest(content).as_slice())
}
