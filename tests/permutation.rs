use percolation::utils::permutation::{draw, enqueue_tokens, random_sample, sample_tokens};
use percolation::{PermutationError, RandomizedQueue};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::io::Cursor;

#[test]
fn draws_k_distinct_tokens_from_the_input() {
    let input = Cursor::new("A B C D");
    let sample = sample_tokens(input, 2, StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(sample.len(), 2);

    let universe: HashSet<&str> = ["A", "B", "C", "D"].into_iter().collect();
    let unique: HashSet<&str> = sample.iter().map(String::as_str).collect();
    assert_eq!(unique.len(), 2);
    assert!(unique.is_subset(&universe));
}

#[test]
fn tokens_may_span_lines_and_repeat() {
    let mut queue = RandomizedQueue::with_seed(2);
    let read = enqueue_tokens(Cursor::new("AA BB\n  BB\tCC\n\nDD\n"), &mut queue).unwrap();
    assert_eq!(read, 5);
    assert_eq!(queue.len(), 5);

    let mut all = draw(&mut queue, 5).unwrap();
    all.sort();
    assert_eq!(all, vec!["AA", "BB", "BB", "CC", "DD"]);
}

#[test]
fn zero_draws_reads_everything_and_prints_nothing() {
    let sample = sample_tokens(Cursor::new("x y z"), 0, StdRng::seed_from_u64(3)).unwrap();
    assert!(sample.is_empty());
}

#[test]
fn asking_for_too_many_tokens_fails() {
    let err = sample_tokens(Cursor::new("only two"), 3, StdRng::seed_from_u64(4)).unwrap_err();
    assert!(
        matches!(err, PermutationError::NotEnoughTokens { requested: 3, .. }),
        "{err}"
    );
}

#[test]
fn unseeded_sample_draws_from_the_input() {
    let sample = random_sample(Cursor::new("red green\nblue"), 3).unwrap();
    let mut sorted = sample.clone();
    sorted.sort();
    assert_eq!(sorted, vec!["blue", "green", "red"]);
}
