pub mod envelope;
pub mod timestamp;
pub mod user;

pub use envelope::CustomHttpResponse;
pub use user::{LoginRequest, NewUser, Profile, Role, User, UserEvent, UserProfile};
