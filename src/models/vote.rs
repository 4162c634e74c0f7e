use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    Like,
    Dislike,
}

/// Helpful/unhelpful counters for one card. Lives only as long as the page view.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VoteState {
    pub like: u32,
    pub dislike: u32,
    pub my_vote: Option<VoteChoice>,
}

impl VoteState {
    /// Choosing the current vote again clears it; choosing the other one moves it.
    pub fn toggle(&mut self, choice: VoteChoice) {
        if self.my_vote == Some(choice) {
            self.my_vote = None;
            self.decrement(choice);
            return;
        }

        if let Some(previous) = self.my_vote {
            self.decrement(previous);
        }

        self.my_vote = Some(choice);
        *self.counter(choice) += 1;
    }

    fn decrement(&mut self, choice: VoteChoice) {
        let count = self.counter(choice);
        *count = count.saturating_sub(1);
    }

    fn counter(&mut self, choice: VoteChoice) -> &mut u32 {
        match choice {
            VoteChoice::Like => &mut self.like,
            VoteChoice::Dislike => &mut self.dislike,
        }
    }
}
