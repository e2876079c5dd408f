use super::*;
use shared::error::Result;

#[test]
fn test_random_generator_collision() -> Result<()> {
    let test_cases: Vec<(&str, fn() -> String)> = vec![
        ("CandidateID", generate_cand_id),
        ("PWD", generate_pwd),
        ("Ufrag", generate_ufrag),
    ];

    const N: usize = 10;
    const ITERATION: usize = 10;

    for (name, generate) in test_cases {
        for _ in 0..ITERATION {
            let rs: Vec<String> = (0..N).map(|_| generate()).collect();

            assert_eq!(rs.len(), N, "{name} Failed to generate randoms");

            for i in 0..N {
                for j in i + 1..N {
                    assert_ne!(
                        rs[i], rs[j],
                        "{}: generateRandString caused collision: {} == {}",
                        name, rs[i], rs[j],
                    );
                }
            }
        }
    }

    Ok(())
}

#[test]
fn test_random_generator_lengths() {
    assert_eq!(generate_ufrag().len(), LEN_UFRAG);
    assert_eq!(generate_pwd().len(), LEN_PWD);

    let id = generate_cand_id();
    assert!(id.starts_with("candidate:"));
    assert_eq!(id.len(), "candidate:".len() + 32);
}
