use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;
use std::time::Duration;

// Query parameters used in SigV4 query signing.
pub const X_AMZ_ALGORITHM: &str = "X-Amz-Algorithm";
pub const X_AMZ_CREDENTIAL: &str = "X-Amz-Credential";
pub const X_AMZ_DATE: &str = "X-Amz-Date";
pub const X_AMZ_EXPIRES: &str = "X-Amz-Expires";
pub const X_AMZ_SIGNED_HEADERS: &str = "X-Amz-SignedHeaders";
pub const X_AMZ_SECURITY_TOKEN: &str = "X-Amz-Security-Token";
pub const X_AMZ_SIGNATURE: &str = "X-Amz-Signature";

/// Query parameters reserved for the signing process. Callers cannot supply
/// their own: a collision would duplicate the parameter after the merge and
/// the storage service would reject the URL.
pub const RESERVED_QUERY_PARAMS: [&str; 7] = [
    X_AMZ_ALGORITHM,
    X_AMZ_CREDENTIAL,
    X_AMZ_DATE,
    X_AMZ_EXPIRES,
    X_AMZ_SIGNED_HEADERS,
    X_AMZ_SECURITY_TOKEN,
    X_AMZ_SIGNATURE,
];

/// Fixed algorithm identifier for SigV4.
pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";
/// Terminator of the credential scope.
pub const AWS4_REQUEST: &str = "aws4_request";
/// Service identifier in the credential scope.
pub const SERVICE: &str = "s3";
/// Payload sentinel for presigned requests whose body is not part of the
/// signature.
pub const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

/// Presigned URLs are valid for at most seven days.
pub const MAX_EXPIRES_IN: Duration = Duration::from_secs(604_800);
/// Validity used when neither the configuration nor the request overrides it.
pub const DEFAULT_EXPIRES_IN: Duration = Duration::from_secs(3600);

/// AsciiSet for [AWS UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
///
/// - URI encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
/// - `/` is kept so that path segments are encoded in place.
pub static URI_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// AsciiSet for [AWS UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
///
/// But used in query.
pub static QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
