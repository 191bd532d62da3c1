/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

/// Origin of the Veem sandbox environment
pub const SANDBOX_URL: &str = "https://sandbox-api.veem.com";
/// Origin of the Veem live environment
pub const LIVE_URL: &str = "https://api.veem.com";
/// Path of the OAuth token endpoint, relative to the origin
pub const TOKEN_PATH: &str = "oauth/token";
/// Prefix of every authenticated resource endpoint
pub const API_PREFIX: &str = "veem/v1.1";
/// Prefix of the public metadata endpoints
pub const PUBLIC_API_PREFIX: &str = "veem/public/v1.1";
/// Scope requested by the client-credentials grant
pub const TOKEN_SCOPE: &str = "all";
/// A token is refreshed once fewer than this many seconds of validity remain
pub const TOKEN_SAFETY_MARGIN_SECS: i64 = 60;
/// Default number of items requested per page
pub const DEFAULT_PAGE_SIZE: i32 = 25;
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string used in HTTP requests to identify this client to the Veem API
pub const USER_AGENT: &str = concat!("veem-client/", env!("CARGO_PKG_VERSION"));
/// Accept type used for JSON endpoints
pub const JSON_CONTENT_TYPE: &str = "application/json";
/// Accept type used for binary attachment downloads
pub const BINARY_CONTENT_TYPE: &str = "application/octet-stream";
/// Header carrying the caller-generated id of an attachment upload
pub const REQUEST_ID_HEADER: &str = "X-REQUEST-ID";
