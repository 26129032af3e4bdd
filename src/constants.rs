/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Base URL used when `API_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default location of the persisted key/value storage file
pub const DEFAULT_TOKEN_STORE_PATH: &str = ".project-client/storage.json";
/// Storage key under which the access token is persisted
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// User agent string used in HTTP requests
pub const USER_AGENT: &str = concat!("project-client/", env!("CARGO_PKG_VERSION"));
/// Length of the request id attached to each request's log span
pub const REQUEST_ID_LENGTH: usize = 12;
