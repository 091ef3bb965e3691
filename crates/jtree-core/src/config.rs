//! Parser configuration.

/// How the parser treats a key that appears twice in one object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    /// Keep the value inserted last; the key keeps its first position.
    #[default]
    LastWins,
    /// Fail with [`ParseError::DuplicateKey`](crate::ParseError::DuplicateKey).
    Reject,
}

/// Default nesting limit. The root object counts as one level.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options for [`parse_with_config`](crate::parse_with_config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Policy for repeated keys within one object.
    pub duplicate_keys: DuplicateKeys,
    /// Maximum nesting of objects and arrays, root object included.
    pub max_depth: usize,
    /// Fail when anything but whitespace follows the root object. Off by
    /// default: the parse ends at the root's closing brace.
    pub reject_trailing: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            duplicate_keys: DuplicateKeys::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            reject_trailing: false,
        }
    }
}

impl ParserConfig {
    pub fn with_duplicate_keys(mut self, policy: DuplicateKeys) -> Self {
        self.duplicate_keys = policy;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_reject_trailing(mut self, reject: bool) -> Self {
        self.reject_trailing = reject;
        self
    }
}
