use serde::Deserialize;
use serde_valid::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct TokenRequest {
    #[validate(pattern = r"^[^@\s]+@[^@\s]+$")]
    pub email: String,
}
