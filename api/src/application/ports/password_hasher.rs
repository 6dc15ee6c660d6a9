/// One-way salted password hashing.
pub trait PasswordHasherPort: Send + Sync {
    fn hash(&self, plaintext: &str) -> anyhow::Result<String>;

    /// `false` on mismatch and on a digest that cannot be parsed.
    fn verify(&self, plaintext: &str, digest: &str) -> bool;
}
