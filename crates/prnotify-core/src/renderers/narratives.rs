use prnotify_chat_interface::types::{Block, TextObject};
use prnotify_ghapi_interface::types::{
    GhPullRequestRecord, GhReview, GhReviewRequest, GhReviewState,
};

use super::{
    links::{escape, user_link},
    status::preformatted,
};
use crate::accounts::ChatAccounts;

/// Change-log replies appended to a status thread.
pub struct NarrativeRenderer<'a> {
    accounts: &'a ChatAccounts,
}

impl<'a> NarrativeRenderer<'a> {
    pub fn new(accounts: &'a ChatAccounts) -> Self {
        Self { accounts }
    }

    /// Only merged pull requests get a closing note.
    pub fn closed(&self, pull_request: &GhPullRequestRecord) -> Option<Vec<Block>> {
        pull_request.merged.then(|| {
            vec![Block::context(
                "*This pull request has been closed and the merge is complete*",
            )]
        })
    }

    pub fn review_requested(
        &self,
        action: &str,
        review_request: Option<&GhReviewRequest>,
    ) -> Option<Vec<Block>> {
        let reviewer = &review_request?.requested_reviewer;
        let verb = if action == "review_requested" {
            "Awaiting"
        } else {
            "Removed"
        };

        Some(vec![Block::context(format!(
            "*{} requested review from {}*",
            verb,
            user_link(self.accounts, &reviewer.login)
        ))])
    }

    pub fn submitted(
        &self,
        pull_request: &GhPullRequestRecord,
        review: Option<&GhReview>,
    ) -> Option<Vec<Block>> {
        let review = review?;
        let reviewer = user_link(self.accounts, &review.author.login);
        let body = review.body.as_deref().map(str::trim).unwrap_or_default();

        let headline = if review.state == GhReviewState::Approved {
            format!(
                "*{} approved {}'s changes.*",
                reviewer,
                user_link(self.accounts, &pull_request.author.login)
            )
        } else if !body.is_empty() {
            format!("*{reviewer} commented.*")
        } else {
            return None;
        };

        let mut blocks = vec![Block::context(headline)];
        if !body.is_empty() {
            blocks.push(preformatted(body));
        }

        Some(blocks)
    }

    pub fn deploy_complete(&self, sender: &str, sha: &str, push_message: &str) -> Vec<Block> {
        let mut blocks = vec![Block::Context {
            elements: vec![
                TextObject::mrkdwn(format!(
                    "*The workflow launched by {}'s merge commit is complete.*",
                    user_link(self.accounts, sender)
                )),
                TextObject::mrkdwn(format!("> sha: {sha}")),
            ],
        }];

        let message = push_message.trim();
        if !message.is_empty() {
            blocks.push(Block::section(format!("*{}*", escape(message))));
        }

        blocks
    }
}
