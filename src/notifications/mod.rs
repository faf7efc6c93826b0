// Copyright (c) 2026 - Stratus Labs
//! Notification Rule Binding Capabilities
//!
//! Defines the two capability traits an external notification-rule construct
//! binds against, and the configuration values those bindings produce. A
//! source is the resource emitting events; a target is the destination
//! receiving them.
//!
//! The [`fixtures`] module ships static-data implementors used to drive
//! assertions in tests of the binding layer.

pub mod fixtures;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use fixtures::{
    FakeCodeBuild, FakeCodeCommit, FakeCodePipeline, FakeSlackTarget, FakeSnsTopicTarget,
};

/// Kind of destination a notification rule delivers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetType {
    /// SNS topic target
    #[serde(rename = "SNS")]
    Sns,
    /// Slack channel configured through the chat integration
    #[serde(rename = "AWSChatbotSlack")]
    AwsChatbotSlack,
}

impl TargetType {
    /// Get the wire-level target type tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sns => "SNS",
            Self::AwsChatbotSlack => "AWSChatbotSlack",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Configuration produced when a resource binds as a notification source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRuleSourceConfig {
    /// ARN of the resource emitting events
    pub source_arn: String,
}

/// Configuration produced when a resource binds as a notification target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRuleTargetConfig {
    /// Kind of destination
    pub target_type: TargetType,
    /// Address (ARN) of the destination
    pub target_address: String,
}

/// Capability of acting as the source of a notification rule
pub trait NotificationRuleSource {
    /// Produce the source configuration for a notification rule binding
    ///
    /// Binding is infallible: implementors return static configuration and
    /// perform no computation.
    fn bind_as_notification_rule_source(&self) -> NotificationRuleSourceConfig;
}

/// Capability of acting as the target of a notification rule
pub trait NotificationRuleTarget {
    /// Produce the target configuration for a notification rule binding
    fn bind_as_notification_rule_target(&self) -> NotificationRuleTargetConfig;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_type_tags() {
        assert_eq!(TargetType::Sns.as_str(), "SNS");
        assert_eq!(TargetType::AwsChatbotSlack.as_str(), "AWSChatbotSlack");
        assert_eq!(format!("{}", TargetType::Sns), "SNS");
    }

    #[test]
    fn test_target_config_serialization() {
        let config = NotificationRuleTargetConfig {
            target_type: TargetType::Sns,
            target_address: "arn:aws:sns::1234567890:MyTopic".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"targetType":"SNS","targetAddress":"arn:aws:sns::1234567890:MyTopic"}"#
        );
    }

    #[test]
    fn test_source_config_serialization() {
        let config = NotificationRuleSourceConfig {
            source_arn: "arn:aws:codepipeline::1234567890:MyPipeline".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"sourceArn":"arn:aws:codepipeline::1234567890:MyPipeline"}"#
        );
    }
}
