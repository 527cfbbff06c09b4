//! BLAKE3 hashing utilities for backup integrity

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use blake3::Hasher;

use crate::error::{Result, fs};

/// Hash prefix for BLAKE3 hashes
pub const HASH_PREFIX: &str = "blake3:";

/// Calculate BLAKE3 hash of a file
pub fn hash_file(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| fs::read_failed(path, e))?;

    let mut reader = BufReader::new(file);
    let mut hasher = Hasher::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .map_err(|e| fs::read_failed(path, e))?;

        if bytes_read == 0 {
            break;
        }

        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex()))
}

/// Calculate BLAKE3 hash of an in-memory buffer
pub fn hash_bytes(bytes: &[u8]) -> String {
    format!("{}{}", HASH_PREFIX, blake3::hash(bytes).to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_file_matches_hash_bytes() {
        let temp = crate::temp::tempdir();
        let path = temp.path().join(".npmrc");
        std::fs::write(&path, "save-exact = true\n").unwrap();

        assert_eq!(
            hash_file(&path).unwrap(),
            hash_bytes(b"save-exact = true\n")
        );
    }

    #[test]
    fn test_hash_prefix() {
        assert!(hash_bytes(b"").starts_with(HASH_PREFIX));
    }

    #[test]
    fn test_different_content_different_hash() {
        assert_ne!(hash_bytes(b"a = 1\n"), hash_bytes(b"a = 2\n"));
    }

    #[test]
    fn test_hash_missing_file() {
        let temp = crate::temp::tempdir();
        assert!(hash_file(&temp.path().join("missing")).is_err());
    }
}
