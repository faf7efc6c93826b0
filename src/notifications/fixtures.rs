// Copyright (c) 2026 - Stratus Labs
//! Notification Binding Test Fixtures
//!
//! Static-data implementors of the notification rule capabilities, used to
//! drive assertions in tests of the binding layer. All identifier strings are
//! fixed at construction; `Default` carries the canonical deterministic ARNs
//! so tests are reproducible.

use super::{
    NotificationRuleSource, NotificationRuleSourceConfig, NotificationRuleTarget,
    NotificationRuleTargetConfig, TargetType,
};

/// Canonical build-project ARN used by [`FakeCodeBuild::default`]
pub const CODEBUILD_PROJECT_ARN: &str = "arn:aws:codebuild::1234567890:project/MyCodebuildProject";

/// Canonical pipeline ARN used by [`FakeCodePipeline::default`]
pub const CODEPIPELINE_ARN: &str = "arn:aws:codepipeline::1234567890:MyCodepipelineProject";

/// Canonical repository ARN used by [`FakeCodeCommit::default`]
pub const CODECOMMIT_REPOSITORY_ARN: &str = "arn:aws:codecommit::1234567890:MyCodecommitRepository";

/// Canonical topic ARN used by [`FakeSnsTopicTarget::default`]
pub const SNS_TOPIC_ARN: &str = "arn:aws:sns::1234567890:MyTopic";

/// Canonical chat-configuration ARN used by [`FakeSlackTarget::default`]
pub const SLACK_CHANNEL_ARN: &str =
    "arn:aws:chatbot::1234567890:chat-configuration/slack-channel/MySlackChannel";

/// Build project standing in as a notification source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeCodeBuild {
    /// ARN of the build project
    pub project_arn: String,
}

impl FakeCodeBuild {
    /// Fixture with a custom project ARN
    pub fn new(project_arn: impl Into<String>) -> Self {
        Self {
            project_arn: project_arn.into(),
        }
    }
}

impl Default for FakeCodeBuild {
    fn default() -> Self {
        Self::new(CODEBUILD_PROJECT_ARN)
    }
}

impl NotificationRuleSource for FakeCodeBuild {
    fn bind_as_notification_rule_source(&self) -> NotificationRuleSourceConfig {
        NotificationRuleSourceConfig {
            source_arn: self.project_arn.clone(),
        }
    }
}

/// Pipeline standing in as a notification source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeCodePipeline {
    /// ARN of the pipeline
    pub pipeline_arn: String,
}

impl FakeCodePipeline {
    /// Fixture with a custom pipeline ARN
    pub fn new(pipeline_arn: impl Into<String>) -> Self {
        Self {
            pipeline_arn: pipeline_arn.into(),
        }
    }
}

impl Default for FakeCodePipeline {
    fn default() -> Self {
        Self::new(CODEPIPELINE_ARN)
    }
}

impl NotificationRuleSource for FakeCodePipeline {
    fn bind_as_notification_rule_source(&self) -> NotificationRuleSourceConfig {
        NotificationRuleSourceConfig {
            source_arn: self.pipeline_arn.clone(),
        }
    }
}

/// Code repository standing in as a notification source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeCodeCommit {
    /// ARN of the repository
    pub repository_arn: String,
}

impl FakeCodeCommit {
    /// Fixture with a custom repository ARN
    pub fn new(repository_arn: impl Into<String>) -> Self {
        Self {
            repository_arn: repository_arn.into(),
        }
    }
}

impl Default for FakeCodeCommit {
    fn default() -> Self {
        Self::new(CODECOMMIT_REPOSITORY_ARN)
    }
}

impl NotificationRuleSource for FakeCodeCommit {
    fn bind_as_notification_rule_source(&self) -> NotificationRuleSourceConfig {
        NotificationRuleSourceConfig {
            source_arn: self.repository_arn.clone(),
        }
    }
}

/// Topic standing in as a notification target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeSnsTopicTarget {
    /// ARN of the topic
    pub topic_arn: String,
}

impl FakeSnsTopicTarget {
    /// Fixture with a custom topic ARN
    pub fn new(topic_arn: impl Into<String>) -> Self {
        Self {
            topic_arn: topic_arn.into(),
        }
    }
}

impl Default for FakeSnsTopicTarget {
    fn default() -> Self {
        Self::new(SNS_TOPIC_ARN)
    }
}

impl NotificationRuleTarget for FakeSnsTopicTarget {
    fn bind_as_notification_rule_target(&self) -> NotificationRuleTargetConfig {
        NotificationRuleTargetConfig {
            target_type: TargetType::Sns,
            target_address: self.topic_arn.clone(),
        }
    }
}

/// Slack channel configuration standing in as a notification target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeSlackTarget {
    /// ARN of the chat configuration
    pub channel_arn: String,
}

impl FakeSlackTarget {
    /// Fixture with a custom chat-configuration ARN
    pub fn new(channel_arn: impl Into<String>) -> Self {
        Self {
            channel_arn: channel_arn.into(),
        }
    }
}

impl Default for FakeSlackTarget {
    fn default() -> Self {
        Self::new(SLACK_CHANNEL_ARN)
    }
}

impl NotificationRuleTarget for FakeSlackTarget {
    fn bind_as_notification_rule_target(&self) -> NotificationRuleTargetConfig {
        NotificationRuleTargetConfig {
            target_type: TargetType::AwsChatbotSlack,
            target_address: self.channel_arn.clone(),
        }
    }
}
