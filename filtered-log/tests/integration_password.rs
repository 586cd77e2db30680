//! Integration tests for password hashing.

#![cfg(feature = "password")]

use filtered_log::password::{hash_password, is_valid};

#[test]
fn test_hash_verifies_only_the_hashed_password() {
    let hash = hash_password("MyAmazingPassw0rd").unwrap();

    assert!(is_valid(&hash, "MyAmazingPassw0rd"));
    assert!(!is_valid(&hash, "myamazingpassw0rd"));
    assert!(!is_valid(&hash, ""));
}

#[test]
fn test_same_password_hashes_differently() {
    let first = hash_password("correct horse battery staple").unwrap();
    let second = hash_password("correct horse battery staple").unwrap();

    // Random salt per call
    assert_ne!(first, second);
    assert!(is_valid(&first, "correct horse battery staple"));
    assert!(is_valid(&second, "correct horse battery staple"));
}

#[test]
fn test_hash_never_contains_the_password() {
    let hash = hash_password("plaintext-secret").unwrap();
    assert!(!hash.contains("plaintext-secret"));
}

#[test]
fn test_empty_password_round_trips() {
    let hash = hash_password("").unwrap();
    assert!(is_valid(&hash, ""));
    assert!(!is_valid(&hash, " "));
}
