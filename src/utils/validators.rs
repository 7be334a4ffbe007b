// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use thiserror::Error;
use url::Url;

/// GitHub 仓库地址格式：`http(s)://[www.]github.com/<owner>/<repo>[/]`
static GITHUB_REPOSITORY_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(www\.)?github\.com/[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+/?$")
        .expect("github url pattern is valid")
});

/// 验证错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// URL无效
    #[error("Enter a valid URL.")]
    InvalidUrl,
    /// 不是 GitHub 仓库地址
    #[error("Enter a valid GitHub repository URL.")]
    InvalidGithubUrl,
    /// 页面地址不属于站点
    #[error("The page URL must start with \"{base_url}\".")]
    PageOutsideSite { base_url: String },
}

/// 验证 GitHub 仓库地址
///
/// 主机必须是 github.com，路径必须形如 `/owner/repo`
///
/// # 参数
///
/// * `value` - 待验证的地址
///
/// # 返回值
///
/// * `Ok(())` - 地址有效
/// * `Err(ValidationError::InvalidGithubUrl)` - 地址不符合格式
pub fn validate_github_url(value: &str) -> Result<(), ValidationError> {
    if GITHUB_REPOSITORY_URL.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidGithubUrl)
    }
}

/// 验证 HTTP(S) URL
///
/// # 参数
///
/// * `value` - URL字符串
///
/// # 返回值
///
/// * `Ok(())` - URL可解析、协议为 http/https 且包含主机
/// * `Err(ValidationError::InvalidUrl)` - URL无效
pub fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    let parsed = Url::parse(value).map_err(|_| ValidationError::InvalidUrl)?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ValidationError::InvalidUrl);
    }

    if parsed.host_str().is_none() {
        return Err(ValidationError::InvalidUrl);
    }

    Ok(())
}

/// 验证页面地址是否以站点基础地址开头
pub fn validate_page_prefix(page_url: &str, base_url: &str) -> Result<(), ValidationError> {
    if page_url.starts_with(base_url) {
        Ok(())
    } else {
        Err(ValidationError::PageOutsideSite {
            base_url: base_url.to_string(),
        })
    }
}

/// `validator` 派生宏使用的 GitHub 地址规则
pub(crate) fn github_url_rule(value: &str) -> Result<(), validator::ValidationError> {
    validate_github_url(value).map_err(into_field_error("github_url"))
}

/// `validator` 派生宏使用的 HTTP(S) 地址规则
pub(crate) fn http_url_rule(value: &str) -> Result<(), validator::ValidationError> {
    validate_http_url(value).map_err(into_field_error("url"))
}

fn into_field_error(
    code: &'static str,
) -> impl Fn(ValidationError) -> validator::ValidationError {
    move |err| {
        validator::ValidationError::new(code).with_message(Cow::Owned(err.to_string()))
    }
}
