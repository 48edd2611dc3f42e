//! Content selection.
//!
//! The provider is handed an immutable pool table at construction and picks
//! one entry per category from a caller-supplied random source. Callers pass
//! a seeded [`StdRng`](rand::rngs::StdRng) when they need a reproducible pick.

use lantern_types::{ContentPoolError, ContentPools, ContentSelection};
use rand::Rng;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ContentProvider {
    pools: ContentPools,
}

impl ContentProvider {
    #[must_use]
    pub fn new(pools: ContentPools) -> Self {
        Self { pools }
    }

    /// Pick one entry per category, uniformly.
    pub fn select<R: Rng>(&self, rng: &mut R) -> ContentSelection {
        ContentSelection::from_fn(|category| {
            let pool = self.pools.pool(category);
            let choice = rng.random_range(0..pool.len());
            debug!(category = category.as_str(), choice, "Content selected");
            pool[choice].clone()
        })
    }

    #[must_use]
    pub fn pools(&self) -> &ContentPools {
        &self.pools
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

/// The built-in pools.
pub fn default_pools() -> Result<ContentPools, ContentPoolError> {
    ContentPools::new(
        owned(&[
            "「嗨，别来无恙啊。」",
            "「山有木兮木有枝，心悦君兮君不知。」",
            "「花径不曾缘客扫，蓬门今始为君开。」",
        ]),
        owned(&[
            "「寄蜉蝣于天地，渺沧海之一粟。」",
            "「路漫漫其修远兮，吾将上下而求索。」",
            "「长风破浪会有时，直挂云帆济沧海。」",
        ]),
        owned(&[
            "「学而时习之，不亦说乎？」",
            "「博学之，审问之，慎思之，明辨之，笃行之。」",
            "「学而不思则罔，思而不学则殆。」",
            "「不积跬步，无以至千里；不积小流，无以成江海。」",
        ]),
        owned(&[
            "「工欲善其事，必先利其器。」",
            "「得其法者事半功倍，不得其法者事倍功半。」",
        ]),
    )
}
