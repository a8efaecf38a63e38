//! Authentication utilities

mod jwt;
mod password;

pub use jwt::{Claims, IssuedToken, JwtService};
pub use password::{
    ensure_passwords_match, hash_password, verify_password, PasswordPolicy, PasswordService,
};
