mod actions;
pub(crate) mod args;
mod http;

pub(crate) use actions::{
    handle_profile, handle_register, handle_renew_password, handle_reset_password,
    handle_verify_account, handle_verify_password,
};
pub(crate) use http::UserService;
