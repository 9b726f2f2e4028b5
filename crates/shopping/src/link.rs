//! Retailer search links.
//!
//! # Business Rules
//! - Items are de-duplicated (first occurrence wins), joined with `", "`, and
//!   sent as a single `q` parameter.
//! - Android browsers get an `intent://` URL naming the retailer app, with
//!   the plain web search as the browser fallback. Everyone else gets the
//!   web search URL directly.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static RE_ANDROID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)android").unwrap());

pub fn is_android(user_agent: &str) -> bool {
    RE_ANDROID.is_match(user_agent)
}

fn default_host() -> String {
    "blinkit.com".to_string()
}

fn default_search_path() -> String {
    "/s/".to_string()
}

fn default_android_package() -> String {
    "com.grofers.customerapp".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Retailer {
    #[serde(default = "default_host")]
    pub host: String,
    /// Must start and end with `/`
    #[serde(default = "default_search_path")]
    pub search_path: String,
    #[serde(default = "default_android_package")]
    pub android_package: String,
}

impl Default for Retailer {
    fn default() -> Self {
        Self {
            host: default_host(),
            search_path: default_search_path(),
            android_package: default_android_package(),
        }
    }
}

impl Retailer {
    fn encoded_query<'i, I>(items: I) -> String
    where
        I: IntoIterator<Item = &'i str>,
    {
        let mut seen = HashSet::new();
        let unique: Vec<&str> = items.into_iter().filter(|item| seen.insert(*item)).collect();
        urlencoding::encode(&unique.join(", ")).into_owned()
    }

    /// Plain `https://` search URL for the given items.
    pub fn search_url<'i, I>(&self, items: I) -> String
    where
        I: IntoIterator<Item = &'i str>,
    {
        format!(
            "https://{}{}?q={}",
            self.host,
            self.search_path,
            Self::encoded_query(items)
        )
    }

    /// Platform-aware link: an Android intent URL with a web fallback, or the
    /// web search URL for every other user agent.
    pub fn deep_link<'i, I>(&self, user_agent: &str, items: I) -> String
    where
        I: IntoIterator<Item = &'i str>,
    {
        let items: Vec<&str> = items.into_iter().collect();
        let web = self.search_url(items.iter().copied());

        if !is_android(user_agent) {
            return web;
        }

        tracing::debug!(package = %self.android_package, "building android intent link");
        format!(
            "intent:/{}?q={}#Intent;scheme=https;package={};S.browser_fallback_url={};end",
            self.search_path,
            Self::encoded_query(items),
            self.android_package,
            urlencoding::encode(&web)
        )
    }
}
