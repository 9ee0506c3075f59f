use crate::approach::Target;

use tokenbots_support::{Category, Token};

/// Codes of the tokens already dealt with, kept separately for each category.
/// Codes are only ever added during a run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Exclusions {
    silver: Vec<u32>,
    gold: Vec<u32>,
}

impl Exclusions {
    pub fn new() -> Self {
        Exclusions::default()
    }

    /// The handled codes of one category, in the order they were added.
    pub fn codes(&self, category: Category) -> &[u32] {
        match category {
            Category::Silver => &self.silver,
            Category::Gold => &self.gold,
        }
    }

    pub fn contains(&self, category: Category, code: u32) -> bool {
        self.codes(category).contains(&code)
    }

    pub fn push(&mut self, category: Category, code: u32) {
        let codes = match category {
            Category::Silver => &mut self.silver,
            Category::Gold => &mut self.gold,
        };

        codes.push(code);
    }

    fn excludes(&self, token: &Token) -> bool {
        self.contains(token.category, token.code)
    }
}

/// The closest token of `category` (of any category if `None`) that has not
/// been dealt with yet, or `None` if no such token is in view.
pub fn find_free_token(tokens: &[Token],
                       category: Option<Category>,
                       exclusions: &Exclusions)
                       -> Option<Target> {
    tokens.iter()
        .filter(|token| category.map_or(true, |c| token.category == c))
        .filter(|token| !exclusions.excludes(token))
        .min_by(|a, b| a.dist.total_cmp(&b.dist))
        .map(Target::of)
}
