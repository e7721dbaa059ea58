use prnotify_chat_interface::types::{Block, TextObject};
use prnotify_ghapi_interface::types::GhPullRequestRecord;
use serde::Serialize;

use super::links::{escape, escape_truncated, link, truncate, user_link};
use crate::{
    accounts::ChatAccounts,
    use_cases::pulls::utils::{
        reconciliation::{reconcile, ReconciledReviewers},
        summary::{plural, summarize, MergeLabel, StatusSummary},
    },
};

const GITHUB_URL: &str = "https://github.com";
const GREEN_CIRCLE: &str = ":large_green_circle:";
const RED_CIRCLE: &str = ":red_circle:";
/// Slack rejects longer header texts.
const HEADER_MAX_CHARS: usize = 150;
/// Slack rejects longer section texts.
const SECTION_MAX_CHARS: usize = 3000;
const CODE_FENCE: &str = "```";

/// Rendered status message, with the intermediate results it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub reconciled: ReconciledReviewers,
    pub summary: StatusSummary,
    /// Notification fallback text, ending with the breadcrumb.
    pub text: String,
    pub blocks: Vec<Block>,
}

pub struct StatusRenderer<'a> {
    accounts: &'a ChatAccounts,
    empty_body_warning: &'a str,
}

impl<'a> StatusRenderer<'a> {
    pub fn new(accounts: &'a ChatAccounts, empty_body_warning: &'a str) -> Self {
        Self {
            accounts,
            empty_body_warning,
        }
    }

    #[tracing::instrument(skip_all, fields(pr_number = pull_request.number))]
    pub fn render(&self, pull_request: &GhPullRequestRecord) -> StatusMessage {
        let reconciled = reconcile(&pull_request.review_requests, &pull_request.reviews);
        let summary = summarize(pull_request, &reconciled);
        let breadcrumb = Self::breadcrumb(pull_request);

        let mut blocks = vec![self.commits(pull_request)];
        blocks.extend(self.contents(pull_request));
        if let Some(label) = summary.review_label {
            blocks.push(Self::status_section(
                reconciled.everybody_approved(),
                label.text(),
            ));
            blocks.extend(self.reviewers(&reconciled));
        }
        blocks.push(Self::merge_status(summary.merge_label));
        blocks.push(Block::context(breadcrumb.clone()));
        blocks.push(Block::divider());

        StatusMessage {
            text: format!("{}\n{}", escape(&pull_request.title), breadcrumb),
            reconciled,
            summary,
            blocks,
        }
    }

    fn commits(&self, pr: &GhPullRequestRecord) -> Block {
        let repository_url = &pr.repository.url;
        let verb = if pr.merged { "merged" } else { "wants to merge" };
        let commit_unit = if pr.commits_count < 2 { "commit" } else { "commits" };
        let change_unit = if pr.changed_files < 2 { "change" } else { "changes" };
        let base = link(
            &format!("{repository_url}/tree/{}", pr.base_ref_name),
            &pr.base_ref_name,
        );
        let head = if pr.merged {
            format!("_{}_", escape(&pr.head_ref_name))
        } else {
            link(
                &format!("{repository_url}/tree/{}", pr.head_ref_name),
                &pr.head_ref_name,
            )
        };

        Block::context(format!(
            "[*{}*] {} {} {} {} ({} file {}) into {} from {}",
            pr.state,
            user_link(self.accounts, &pr.author.login),
            verb,
            pr.commits_count,
            commit_unit,
            pr.changed_files,
            change_unit,
            base,
            head
        ))
    }

    fn contents(&self, pr: &GhPullRequestRecord) -> Vec<Block> {
        let body = pr.body.as_deref().map(str::trim).unwrap_or_default();
        let description = if body.is_empty() {
            Block::section(format!("`{}`", escape(self.empty_body_warning)))
        } else {
            preformatted(body)
        };

        vec![
            Block::header(truncate(&pr.title, HEADER_MAX_CHARS)),
            Block::section(format!("*{}*", link(&pr.url, &format!("#{}", pr.number)))),
            description,
        ]
    }

    fn reviewers(&self, reconciled: &ReconciledReviewers) -> Vec<Block> {
        [
            (
                &reconciled.approvals,
                format!("approval{}", plural(&reconciled.approvals)),
            ),
            (
                &reconciled.change_requesteds,
                format!(
                    "reviewer{} requested changes",
                    plural(&reconciled.change_requesteds)
                ),
            ),
            (
                &reconciled.pendings,
                format!("pending reviewer{}", plural(&reconciled.pendings)),
            ),
        ]
        .into_iter()
        .filter(|(logins, _)| !logins.is_empty())
        .map(|(logins, text)| Block::Context {
            elements: vec![
                TextObject::mrkdwn(format!("> {} {}", logins.len(), text)),
                TextObject::mrkdwn(
                    logins
                        .iter()
                        .map(|login| user_link(self.accounts, login))
                        .collect::<Vec<_>>()
                        .join(" "),
                ),
            ],
        })
        .collect()
    }

    fn merge_status(label: MergeLabel) -> Block {
        match label {
            MergeLabel::NoConflicts | MergeLabel::MustResolve => {
                Self::status_section(label == MergeLabel::NoConflicts, label.text())
            }
            MergeLabel::MergeComplete | MergeLabel::ClosedWithoutMerge => {
                Block::section(format!("*{}*", label.text()))
            }
        }
    }

    fn status_section(positive: bool, text: &str) -> Block {
        let emoji = if positive { GREEN_CIRCLE } else { RED_CIRCLE };
        Block::section(format!("{emoji} *{text}*"))
    }

    fn breadcrumb(pr: &GhPullRequestRecord) -> String {
        let repository = &pr.repository;

        [
            link(&format!("{GITHUB_URL}/"), GITHUB_URL),
            link(&repository.owner.url, &repository.owner.login),
            link(&repository.url, &repository.name),
            link(&format!("{}/pulls", repository.url), "pull"),
            link(&pr.url, &pr.number.to_string()),
        ]
        .join(" / ")
    }
}

/// Preformatted section.
pub(crate) fn preformatted(text: &str) -> Block {
    let content = escape_truncated(text, SECTION_MAX_CHARS - 2 * CODE_FENCE.len());
    Block::section(format!("{CODE_FENCE}{content}{CODE_FENCE}"))
}
