//! Content Provider Implementations
//!
//! | Provider | Source | Fallback |
//! |----------|--------|----------|
//! | `quotes` | quotable.io, zenquotes.io | curated Hinglish quotes |
//! | `facts` | uselessfacts.jsph.pl | curated Indian facts |
//! | `reddit` | public subreddit listings | none (fails when nothing qualifies) |

pub mod facts;
pub mod quotes;
pub mod reddit;

pub use facts::FactsProvider;
pub use quotes::QuotesProvider;
pub use reddit::RedditProvider;

use rand::seq::IndexedRandom;

/// Up to `count` distinct entries of `pool`, chosen at random
fn sample_curated(pool: &'static [&'static str], count: usize) -> Vec<&'static str> {
    pool.choose_multiple(&mut rand::rng(), count)
        .copied()
        .collect()
}
