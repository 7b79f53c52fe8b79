//! Netscape `cookies.txt` support.
//!
//! Browser cookie export extensions write one cookie per line with seven
//! tab separated fields: domain, include-subdomains flag, path, secure flag,
//! expiry, name and value. Lines starting with `#HttpOnly_` are cookies too.
//! The jar is validated here; the transcript client reads the file itself.

use anyhow::Context;
use std::path::{Path, PathBuf};

use crate::{Result, TranscriptError};

const HTTP_ONLY_PREFIX: &str = "#HttpOnly_";

/// Return `path` unchanged if it exists, `None` otherwise
pub fn resolve_cookie_path(path: &Path) -> Option<PathBuf> {
    if path.exists() {
        Some(path.to_path_buf())
    } else {
        None
    }
}

/// One cookie of the jar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub domain: String,
    pub name: String,
    pub value: String,
}

/// Cookies in file order, names unique
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    cookies: Vec<Cookie>,
}

impl CookieJar {
    /// Load a jar from disk; an absent file or a file with no cookies is an error
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TranscriptError::CookiePathInvalid(path.to_path_buf()).into());
        }

        let content = fs_err::read_to_string(path).context("Failed to read cookie file")?;
        let jar = Self::parse(&content);

        if jar.is_empty() {
            return Err(TranscriptError::CookiesInvalid(path.to_path_buf()).into());
        }

        tracing::debug!("Loaded {} cookies from {}", jar.len(), path.display());
        Ok(jar)
    }

    /// Parse the Netscape format, skipping comments and malformed lines
    pub fn parse(content: &str) -> Self {
        let mut jar = Self::default();

        for line in content.lines() {
            let line = line.trim_end_matches('\r');
            let line = match line.strip_prefix(HTTP_ONLY_PREFIX) {
                Some(entry) => entry,
                None if line.trim().is_empty() || line.starts_with('#') => continue,
                None => line,
            };

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 7 {
                tracing::debug!("Skipping malformed cookie line with {} fields", fields.len());
                continue;
            }

            let name = fields[5].trim();
            if name.is_empty() {
                continue;
            }

            jar.push(Cookie {
                domain: fields[0].trim().to_string(),
                name: name.to_string(),
                value: fields[6].trim().to_string(),
            });
        }

        jar
    }

    fn push(&mut self, cookie: Cookie) {
        match self.cookies.iter_mut().find(|c| c.name == cookie.name) {
            Some(existing) => *existing = cookie,
            None => self.cookies.push(cookie),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Cookie names in file order
    pub fn names(&self) -> Vec<&str> {
        self.cookies.iter().map(|c| c.name.as_str()).collect()
    }
}
