pub const DEFAULT_ADDR: &str = "http://localhost:8080";

/// Storage key holding the access token issued on login.
pub const ACCESS_TOKEN_KEY: &str = "[KEY] TOKEN";
/// Storage key holding the refresh token issued on login.
pub const REFRESH_TOKEN_KEY: &str = "[KEY] REFRESH_TOKEN";

/// Route the login flow lands on after a successful sign-in.
pub const HOME_ROUTE: &str = "/";
