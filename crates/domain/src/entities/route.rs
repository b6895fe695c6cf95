//! 路由路径
//!
//! 路由状态由外部路由器持有，这里只定义合法路径和客户端用到的固定路由。

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;
use crate::value_objects::GroupId;

/// 以 `/` 开头的路由路径
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoutePath(String);

impl RoutePath {
    /// 入口/登录页
    pub const ROOT: &'static str = "/";
    pub const GLIP: &'static str = "/glip";
    pub const SETTINGS: &'static str = "/settings";
    pub const MY_PROFILE: &'static str = "/glip/persons/me";

    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if !value.starts_with('/') {
            return Err(DomainError::invalid_route(value));
        }
        Ok(Self(value))
    }

    pub fn root() -> Self {
        Self(Self::ROOT.to_owned())
    }

    pub fn my_profile() -> Self {
        Self(Self::MY_PROFILE.to_owned())
    }

    /// 指定群组的会话页
    pub fn group(group_id: &GroupId) -> Self {
        Self(format!("/glip/groups/{group_id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RoutePath {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<RoutePath> for String {
    fn from(value: RoutePath) -> Self {
        value.0
    }
}

impl PartialEq<str> for RoutePath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RoutePath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
