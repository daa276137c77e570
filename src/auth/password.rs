use base64::{engine::general_purpose::STANDARD, Engine as _};
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;

const SALT_LEN: usize = 16;
const HASH_LEN: usize = 32;

/// Base64 salt and derived key as stored in the `Users` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub salt: String,
    pub hash: String,
}

pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Credential;
    fn verify(&self, password: &str, credential: &Credential) -> bool;
}

#[derive(Debug, Clone)]
pub struct Pbkdf2Hasher {
    rounds: u32,
}

impl Pbkdf2Hasher {
    pub fn new(rounds: u32) -> Self {
        Self { rounds }
    }

    fn derive(&self, password: &str, salt: &[u8]) -> [u8; HASH_LEN] {
        let mut key = [0u8; HASH_LEN];
        pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, self.rounds, &mut key);
        key
    }
}

impl PasswordHasher for Pbkdf2Hasher {
    fn hash(&self, password: &str) -> Credential {
        let mut salt = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);
        let key = self.derive(password, &salt);

        Credential {
            salt: STANDARD.encode(salt),
            hash: STANDARD.encode(key),
        }
    }

    fn verify(&self, password: &str, credential: &Credential) -> bool {
        let (Ok(salt), Ok(expected)) = (
            STANDARD.decode(&credential.salt),
            STANDARD.decode(&credential.hash),
        ) else {
            return false;
        };

        let key = self.derive(password, &salt);
        constant_time_eq(&key, &expected)
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> Pbkdf2Hasher {
        Pbkdf2Hasher::new(1_000)
    }

    #[test]
    fn test_verify_accepts_correct_password() {
        let credential = hasher().hash("hunter2");
        assert!(hasher().verify("hunter2", &credential));
        assert!(!hasher().verify("hunter3", &credential));
    }

    #[test]
    fn test_salt_differs_per_hash() {
        let first = hasher().hash("same");
        let second = hasher().hash("same");
        assert_ne!(first.salt, second.salt);
        assert_ne!(first.hash, second.hash);
    }

    #[test]
    fn test_corrupt_credential_is_rejected() {
        let credential = Credential {
            salt: "not base64!".to_string(),
            hash: "AAAA".to_string(),
        };
        assert!(!hasher().verify("anything", &credential));
    }
}
