/// A well-formed argon2id hash (default parameters) that no password matches.
///
/// Login verifies against it when the account does not exist, so that branch
/// costs the same argon2 work as a wrong password.
pub const DUMMY_PASSWORD_HASH: &str = concat!(
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$",
    "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"
);
