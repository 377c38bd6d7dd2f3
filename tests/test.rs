use sdes::{decrypt_block, decrypt_text, encrypt_block, encrypt_text, ops, search, BitVector};

fn bits(s: &str) -> BitVector {
    s.parse().unwrap()
}

#[test]
fn all_zero_scenario_end_to_end() {
    assert_eq!(ops::encrypt_block("00000000", "0000000000").unwrap(), "11110000");
    assert_eq!(ops::decrypt_block("11110000", "0000000000").unwrap(), "00000000");

    let report = ops::bruteforce("00000000", "11110000", 4).unwrap();
    let pos = report
        .keys
        .iter()
        .position(|&k| k == 0)
        .expect("key 0 must be among the matches");
    assert_eq!(report.binary_keys[pos], "0000000000");
}

#[test]
fn round_trip_over_the_full_key_space() {
    // every key, a sample of plaintexts per key
    for key_value in 0..1024u16 {
        let key = BitVector::from_uint(key_value, 10).unwrap();
        for _ in 0..4 {
            let plaintext = BitVector::from_uint(rand::random::<u8>() as u16, 8).unwrap();
            let ciphertext = encrypt_block(plaintext, key).unwrap();
            assert_eq!(
                decrypt_block(ciphertext, key).unwrap(),
                plaintext,
                "round trip failed for p={} k={:010b}",
                plaintext,
                key_value
            );
        }
    }
}

#[test]
fn text_codec_round_trips_random_strings() {
    for _ in 0..50 {
        let key = BitVector::from_uint(data_gen::random_key(), 10).unwrap();
        let text = data_gen::random_latin1_text(1 + data_gen::random::<usize>() % 40);
        let ciphertext = encrypt_text(&text, key).unwrap();
        assert_eq!(ciphertext.chars().count(), text.chars().count());
        assert_eq!(decrypt_text(&ciphertext, key).unwrap(), text);
    }
}

#[test]
fn bruteforce_always_recovers_the_key_used() {
    for _ in 0..20 {
        let key_value = data_gen::random_key();
        let key = BitVector::from_uint(key_value, 10).unwrap();
        let plaintext = BitVector::from_uint(data_gen::random_block() as u16, 8).unwrap();
        let ciphertext = encrypt_block(plaintext, key).unwrap();
        let outcome = search(plaintext, ciphertext, 8).unwrap();
        assert!(
            outcome.keys.contains(&key_value),
            "search missed key {:010b}",
            key_value
        );
        assert!(outcome.keys.len() <= 1024);
        assert!(outcome.keys.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn worker_count_never_changes_the_answer() {
    let plaintext = bits("10010111");
    let ciphertext = encrypt_block(plaintext, bits("1010000010")).unwrap();
    let baseline = search(plaintext, ciphertext, 1).unwrap().keys;
    for workers in [0usize, 7, 1024, 5000] {
        let outcome = search(plaintext, ciphertext, workers).unwrap();
        assert_eq!(outcome.keys, baseline, "workers={}", workers);
    }
}

#[test]
fn boundary_validation_matches_the_contract() {
    // invalid lengths
    assert!(ops::encrypt_block("0000000", "0000000000").is_err());
    assert!(ops::encrypt_block("00000000", "000000000").is_err());
    // invalid alphabet
    assert!(ops::decrypt_block("0000000a", "0000000000").is_err());
    assert!(ops::bruteforce("00000000", "1111000b", 4).is_err());
    // empty and out-of-range text
    assert!(ops::encrypt_text_direct("", "0000000000").is_err());
    assert!(ops::encrypt_text_direct("snowman \u{2603}", "0000000000").is_err());
}
