pub mod password;

pub use password::{Credential, PasswordHasher, Pbkdf2Hasher};
