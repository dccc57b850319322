// src/core/net.rs
// Blocking HTTPS GET for chapter pages.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{ CHAPTER_PLACEHOLDER, USER_AGENT };
use crate::data::Chapter;
use crate::error::{ Error, Result };

/// Somewhere chapter pages come from. Shared by all scrape workers.
pub trait ChapterSource: Sync {
    /// Raw HTML of one chapter page.
    fn fetch(&self, chapter: Chapter) -> Result<String>;
}

pub fn client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(Error::Client)
}

/// GET `url` and return the body. Any non-2xx status is an error.
pub fn http_get(client: &Client, url: &str) -> Result<String> {
    let request_err = |source| Error::Request { url: s!(url), source };

    let resp = client.get(url).send().map_err(request_err)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Http { status, url: s!(url) });
    }
    resp.text().map_err(request_err)
}

pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        if !base_url.contains(CHAPTER_PLACEHOLDER) {
            return Err(Error::InvalidBaseUrl(s!(base_url)));
        }
        Ok(Self { client: client(timeout)?, base_url: s!(base_url) })
    }

    pub fn chapter_url(&self, chapter: Chapter) -> String {
        chapter_url(&self.base_url, chapter)
    }
}

impl ChapterSource for HttpSource {
    fn fetch(&self, chapter: Chapter) -> Result<String> {
        let url = self.chapter_url(chapter);
        logd!("GET {url}");
        http_get(&self.client, &url)
    }
}

pub fn chapter_url(template: &str, chapter: Chapter) -> String {
    template.replace(CHAPTER_PLACEHOLDER, &chapter.to_string())
}
