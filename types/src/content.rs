//! Content pools and the per-session selection drawn from them.

use thiserror::Error;

/// A category of interchangeable text. One string per category is picked
/// for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContentCategory {
    Greeting,
    Farewell,
    Study,
    Tool,
}

impl ContentCategory {
    pub const ALL: [ContentCategory; 4] = [
        ContentCategory::Greeting,
        ContentCategory::Farewell,
        ContentCategory::Study,
        ContentCategory::Tool,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ContentCategory::Greeting => "greeting",
            ContentCategory::Farewell => "farewell",
            ContentCategory::Study => "study",
            ContentCategory::Tool => "tool",
        }
    }

    const fn slot(self) -> usize {
        match self {
            ContentCategory::Greeting => 0,
            ContentCategory::Farewell => 1,
            ContentCategory::Study => 2,
            ContentCategory::Tool => 3,
        }
    }
}

impl std::fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentPoolError {
    #[error("content pool `{0}` must contain at least one entry")]
    EmptyPool(ContentCategory),
    #[error("content pool `{category}` has a blank entry at position {position}")]
    BlankEntry {
        category: ContentCategory,
        position: usize,
    },
}

/// Immutable table of candidate strings, one non-empty list per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPools {
    pools: [Vec<String>; 4],
}

impl ContentPools {
    pub fn new(
        greetings: Vec<String>,
        farewells: Vec<String>,
        studies: Vec<String>,
        tools: Vec<String>,
    ) -> Result<Self, ContentPoolError> {
        let pools = Self {
            pools: [greetings, farewells, studies, tools],
        };
        for category in ContentCategory::ALL {
            validate(category, pools.pool(category))?;
        }
        Ok(pools)
    }

    /// Replace one category's pool, keeping the others.
    pub fn with_pool(
        mut self,
        category: ContentCategory,
        entries: Vec<String>,
    ) -> Result<Self, ContentPoolError> {
        validate(category, &entries)?;
        self.pools[category.slot()] = entries;
        Ok(self)
    }

    #[must_use]
    pub fn pool(&self, category: ContentCategory) -> &[String] {
        &self.pools[category.slot()]
    }
}

fn validate(category: ContentCategory, entries: &[String]) -> Result<(), ContentPoolError> {
    if entries.is_empty() {
        return Err(ContentPoolError::EmptyPool(category));
    }
    if let Some(position) = entries.iter().position(|entry| entry.trim().is_empty()) {
        return Err(ContentPoolError::BlankEntry { category, position });
    }
    Ok(())
}

/// One resolved string per category, fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSelection {
    values: [String; 4],
}

impl ContentSelection {
    /// Build a selection by resolving each category in [`ContentCategory::ALL`] order.
    pub fn from_fn(mut pick: impl FnMut(ContentCategory) -> String) -> Self {
        Self {
            values: ContentCategory::ALL.map(&mut pick),
        }
    }

    #[must_use]
    pub fn get(&self, category: ContentCategory) -> &str {
        &self.values[category.slot()]
    }
}
