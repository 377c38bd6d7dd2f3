//! Encrypt a block under a secret key, then recover the key by exhaustive
//! search and prove the recovery by decrypting with every candidate.

use sdes::ops;

fn main() {
    let plaintext = "10010111";
    let secret_key = "1010000010";

    let ciphertext = ops::encrypt_block(plaintext, secret_key).expect("encryption failed");
    println!("known pair: {} -> {}", plaintext, ciphertext);

    let report = ops::bruteforce(plaintext, &ciphertext, 8).expect("search failed");
    println!(
        "searched 1024 keys in {:.4} s, {} candidate(s):",
        report.elapsed_seconds, report.count
    );
    for (key, binary) in report.keys.iter().zip(&report.binary_keys) {
        let recovered = ops::decrypt_block(&ciphertext, binary).expect("decryption failed");
        println!("  key {:4} ({}) decrypts to {}", key, binary, recovered);
        assert_eq!(recovered, plaintext);
    }
}
