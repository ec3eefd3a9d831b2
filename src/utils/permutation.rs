use crate::collections::RandomizedQueue;
use crate::error::PermutationError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::BufRead;

/// Pushes every whitespace-delimited token of `reader` into `queue`.
///
/// Returns the number of tokens read.
pub fn enqueue_tokens<R: BufRead>(
    reader: R,
    queue: &mut RandomizedQueue<String>,
) -> Result<usize, PermutationError> {
    let mut count = 0;
    for line in reader.lines() {
        for token in line?.split_whitespace() {
            queue.enqueue(token.to_owned());
            count += 1;
        }
    }
    Ok(count)
}

/// Draws `k` tokens from `queue` without replacement, in draw order.
pub fn draw(
    queue: &mut RandomizedQueue<String>,
    k: usize,
) -> Result<Vec<String>, PermutationError> {
    (0..k)
        .map(|_| {
            queue
                .dequeue()
                .map_err(|source| PermutationError::NotEnoughTokens {
                    requested: k,
                    source,
                })
        })
        .collect()
}

/// Reads every token from `reader` and returns `k` of them drawn uniformly
/// without replacement.
pub fn sample_tokens<R: BufRead>(
    reader: R,
    k: usize,
    rng: StdRng,
) -> Result<Vec<String>, PermutationError> {
    let mut queue = RandomizedQueue::with_rng(rng);
    let read = enqueue_tokens(reader, &mut queue)?;
    log::debug!("read {read} tokens, drawing {k}");
    draw(&mut queue, k)
}

pub fn random_sample<R: BufRead>(reader: R, k: usize) -> Result<Vec<String>, PermutationError> {
    sample_tokens(reader, k, StdRng::from_rng(&mut rand::rng()))
}
