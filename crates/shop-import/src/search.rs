//! Search criteria handed to an `EntitySearcher`.
//!
//! Conditions are ANDed. A condition with several values matches when the
//! field equals any of them (`Eq`) or none of them (`Ne`).

/// Default page size of a new search.
pub const DEFAULT_SLICE_SIZE: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
}

impl Operator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub operator: Operator,
    pub field: String,
    pub values: Vec<String>,
}

impl Condition {
    pub fn compare<I, V>(operator: Operator, field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            operator,
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Evaluate the condition against one field value.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        let hit = self.values.iter().any(|v| v == value);
        match self.operator {
            Operator::Eq => hit,
            Operator::Ne => !hit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    pub conditions: Vec<Condition>,
    pub start: usize,
    pub size: usize,
}

impl Default for Search {
    fn default() -> Self {
        Self {
            conditions: Vec::new(),
            start: 0,
            size: DEFAULT_SLICE_SIZE,
        }
    }
}

impl Search {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the result to `size` rows starting at `start`.
    #[must_use]
    pub const fn slice(mut self, start: usize, size: usize) -> Self {
        self.start = start;
        self.size = size;
        self
    }

    #[must_use]
    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }
}
