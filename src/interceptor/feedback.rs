//! What the page shows once a submission settles

use crate::client::RequestFailure;
use crate::state::{Banner, BannerKind, Document};
use serde::{Deserialize, Serialize};

/// Feedback style, as written in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackMode {
    /// Inline banners for both outcomes
    #[default]
    Banner,
    /// Console line on success, popup on failure
    Popup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessFeedback {
    Banner,
    Log,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureFeedback {
    Banner,
    Popup,
}

/// The single feedback action taken for an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackAction {
    Banner(BannerKind),
    Popup,
    Log,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackPolicy {
    pub on_success: SuccessFeedback,
    pub on_failure: FailureFeedback,
}

impl FeedbackPolicy {
    pub fn inline_banner() -> Self {
        Self {
            on_success: SuccessFeedback::Banner,
            on_failure: FailureFeedback::Banner,
        }
    }

    pub fn popup() -> Self {
        Self {
            on_success: SuccessFeedback::Log,
            on_failure: FailureFeedback::Popup,
        }
    }

    /// Apply exactly one feedback action to `document`
    pub fn render(
        &self,
        document: &mut Document,
        outcome: &Result<String, RequestFailure>,
    ) -> FeedbackAction {
        match outcome {
            Ok(_) => match self.on_success {
                SuccessFeedback::Banner => {
                    document.set_container_html(Banner::success().to_html());
                    FeedbackAction::Banner(BannerKind::Success)
                }
                SuccessFeedback::Log => {
                    document.log(Banner::SUCCESS_MESSAGE);
                    FeedbackAction::Log
                }
            },
            Err(failure) => match self.on_failure {
                FailureFeedback::Banner => {
                    document.set_container_html(Banner::failure(failure.response_text()).to_html());
                    FeedbackAction::Banner(BannerKind::Danger)
                }
                FailureFeedback::Popup => {
                    document.alert(failure.reason());
                    FeedbackAction::Popup
                }
            },
        }
    }
}

impl Default for FeedbackPolicy {
    fn default() -> Self {
        Self::inline_banner()
    }
}

impl From<FeedbackMode> for FeedbackPolicy {
    fn from(mode: FeedbackMode) -> Self {
        match mode {
            FeedbackMode::Banner => Self::inline_banner(),
            FeedbackMode::Popup => Self::popup(),
        }
    }
}
