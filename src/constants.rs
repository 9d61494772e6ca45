use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Env values used by the Omniture client.

/// Env value for the API username (`user:Company`).
pub const OMNITURE_USERNAME: &str = "OMNITURE_USERNAME";
/// Env value for the shared secret.
pub const OMNITURE_SECRET: &str = "OMNITURE_SECRET";
/// Env value for the data-center base URL.
pub const OMNITURE_ENDPOINT: &str = "OMNITURE_ENDPOINT";

/// AsciiSet for the `method` query parameter.
///
/// Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z',
/// '0'-'9', '-', '.', '_' and '~'. Omniture method names ("Report.Queue",
/// "Company.GetReportSuites") pass through unchanged.
pub static METHOD_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
