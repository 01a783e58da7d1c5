use serde::{Deserialize, Serialize};

/// Token accounting reported with each response.
///
/// Missing or `null` counters deserialize as zero.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Number of tokens in the prompt.
    #[serde(default, deserialize_with = "crate::internal::null_as_default")]
    pub prompt_token_count: u32,
    /// Total number of tokens across all the generated response candidates.
    #[serde(default, deserialize_with = "crate::internal::null_as_default")]
    pub candidates_token_count: u32,
    /// Total token count for the generation request (prompt + response candidates).
    #[serde(default, deserialize_with = "crate::internal::null_as_default")]
    pub total_token_count: u32,
}

impl std::ops::Add for UsageMetadata {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl std::ops::AddAssign for UsageMetadata {
    fn add_assign(&mut self, other: Self) {
        self.prompt_token_count = self.prompt_token_count.saturating_add(other.prompt_token_count);
        self.candidates_token_count = self
            .candidates_token_count
            .saturating_add(other.candidates_token_count);
        self.total_token_count = self.total_token_count.saturating_add(other.total_token_count);
    }
}

impl std::iter::Sum for UsageMetadata {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, x| acc + x)
    }
}
