use rand::{Rng, rng};

/// Generates a random string of length `n` drawn from `runes`.
pub fn generate_crypto_random_string(n: usize, runes: &[u8]) -> String {
    let mut rng = rng();

    let rand_string: String = (0..n)
        .map(|_| {
            let idx = rng.random_range(0..runes.len());
            runes[idx] as char
        })
        .collect();

    rand_string
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_generate_crypto_random_string() {
        let tests: Vec<(usize, &[u8])> = vec![
            (0, b"ab"),
            (16, b"abcdefghijklmnopqrstuvwxyz"),
            (32, b"0123456789+/"),
        ];

        for (n, runes) in tests {
            let s = generate_crypto_random_string(n, runes);
            assert_eq!(s.len(), n);
            assert!(s.bytes().all(|b| runes.contains(&b)), "{s} has foreign runes");
        }
    }
}
