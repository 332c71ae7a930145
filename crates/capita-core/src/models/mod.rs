pub mod enums;
pub mod state;

pub use enums::DataState;
pub use state::LoginState;

#[cfg(test)]
mod tests;
