mod fetched_value;
mod recipient_email;
mod user_name;

pub use fetched_value::FetchedValue;
pub use recipient_email::RecipientEmail;
pub use user_name::{NameError, UserName};
