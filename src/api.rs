// API client module: a small blocking HTTP client for the NLA control API.
// Every operation is a single request/response round trip; the server owns
// all archive state and the client re-fetches what it needs on each call.

use anyhow::{bail, Context, Result};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Blocking client bound to one server and one user. All calls are accounted
/// against `user`; there is no login step and no token handling.
pub struct NlaClient {
    http: Client,
    base_url: String,
    user: String,
}

/// A file known to the archive. `stage` is a single-letter lifecycle code
/// (U, D, T, A, R); the client passes it through uninterpreted, so letters
/// the server adds later still display.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchivedFile {
    pub path: String,
    pub stage: String,
    pub verified: Option<String>,
    pub size: Option<u64>,
}

/// Response of the file listing endpoint.
#[derive(Debug, Deserialize)]
pub struct FileList {
    #[serde(default)]
    pub count: u64,
    pub files: Vec<ArchivedFile>,
}

/// One row of a quota listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestSummary {
    pub id: u64,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub retention: String,
}

/// Per-user byte allowance and the requests counted against it.
#[derive(Debug, Deserialize)]
pub struct Quota {
    pub user: String,
    pub size: i64,
    pub used: i64,
    #[serde(default)]
    pub requests: Vec<RequestSummary>,
}

/// Full detail of a single request. The server only sends keys that have
/// values, so every field past the id is optional; display code shows a line
/// only when the field is present.
#[derive(Debug, Deserialize)]
pub struct RequestDetail {
    pub id: u64,
    pub label: Option<String>,
    pub request_date: Option<String>,
    pub retention: Option<String>,
    pub notify_on_first_file: Option<String>,
    pub notify_on_last_file: Option<String>,
    pub storaged_request_start: Option<String>,
    pub storaged_request_end: Option<String>,
    pub first_files_on_disk: Option<String>,
    pub last_files_on_disk: Option<String>,
    pub files: Option<Vec<String>>,
}

/// Fields of a request-creation call. At most one of `patterns` or `files`
/// may be set; `make_request` rejects the combination before any network
/// traffic. A `None` retention lets the server apply its default.
#[derive(Debug, Default, Serialize)]
pub struct MakeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Fields of a request update. `None` fields are left out of the body so the
/// server keeps their current values. The notify fields accept an explicit
/// empty string, which the server treats as "reset to the account default" -
/// distinct from omitting the field.
#[derive(Debug, Default, Serialize)]
pub struct UpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "notify_on_first_file", skip_serializing_if = "Option::is_none")]
    pub notify_first: Option<String>,
    #[serde(rename = "notify_on_last_file", skip_serializing_if = "Option::is_none")]
    pub notify_last: Option<String>,
}

#[derive(Serialize)]
struct MakeRequestBody<'a> {
    quota: &'a str,
    #[serde(flatten)]
    request: &'a MakeRequest,
}

#[derive(Serialize)]
struct UpdateRequestBody<'a> {
    quota: &'a str,
    #[serde(flatten)]
    update: &'a UpdateRequest,
}

/// Outcome of a mutating call. Both arms carry the literal HTTP status and
/// body text so callers can show the user exactly what the server said; a
/// 403 on creation means quota exhaustion or an unknown user, a 404 on
/// update means an unknown request id.
#[derive(Debug)]
pub enum ApiReply {
    Accepted { status: StatusCode, body: String },
    Refused { status: StatusCode, body: String },
}

impl ApiReply {
    fn from_response(res: Response) -> Self {
        let status = res.status();
        let body = res.text().unwrap_or_else(|_| "".into());
        if status.is_success() {
            ApiReply::Accepted { status, body }
        } else {
            ApiReply::Refused { status, body }
        }
    }

    /// The id the server assigned, when an accepted body carries one.
    pub fn req_id(&self) -> Option<u64> {
        match self {
            ApiReply::Accepted { body, .. } => serde_json::from_str::<serde_json::Value>(body)
                .ok()?
                .get("req_id")?
                .as_u64(),
            ApiReply::Refused { .. } => None,
        }
    }
}

impl NlaClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder().build().context("Failed to build HTTP client")?;
        Ok(NlaClient {
            http,
            base_url: config.base_url.clone(),
            user: config.user.clone(),
        })
    }

    /// The user name this client accounts requests against.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// List archive files whose path contains `match_filter`, restricted to
    /// the given stage letters. Both parameters are forwarded verbatim; the
    /// server decides the matching semantics.
    pub fn list_files(&self, match_filter: &str, stages: &str) -> Result<FileList> {
        let url = format!("{}/api/v1/files", self.base_url);
        let res = self
            .http
            .get(&url)
            .query(&[("match", match_filter), ("stages", stages)])
            .send()
            .context("Failed to send file listing request")?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            bail!("File listing failed: {} - {}", status, txt);
        }
        res.json().context("Parsing file listing json")
    }

    /// Submit a retrieval request, by pattern or by explicit file list.
    pub fn make_request(&self, request: &MakeRequest) -> Result<ApiReply> {
        if request.patterns.is_some() && request.files.is_some() {
            bail!("Can't define request files from list and pattern.");
        }
        let url = format!("{}/api/v1/requests", self.base_url);
        let body = MakeRequestBody {
            quota: &self.user,
            request,
        };
        let res = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .context("Failed to send retrieval request")?;
        Ok(ApiReply::from_response(res))
    }

    /// Change the retention date, label or notification addresses of an
    /// existing request.
    pub fn update_request(&self, id: u64, update: &UpdateRequest) -> Result<ApiReply> {
        let url = format!("{}/api/v1/requests/{}", self.base_url, id);
        let body = UpdateRequestBody {
            quota: &self.user,
            update,
        };
        let res = self
            .http
            .put(&url)
            .json(&body)
            .send()
            .context("Failed to send request update")?;
        Ok(ApiReply::from_response(res))
    }

    /// Fetch the user's quota together with their current requests. Any
    /// non-200 status reads as `None`; absence is the error signal here.
    pub fn list_requests(&self) -> Result<Option<Quota>> {
        let url = format!("{}/api/v1/quota/{}", self.base_url, self.user);
        let res = self
            .http
            .get(&url)
            .send()
            .context("Failed to send quota request")?;
        if res.status() != StatusCode::OK {
            return Ok(None);
        }
        Ok(Some(res.json().context("Parsing quota json")?))
    }

    /// Fetch one request's full detail, including its file listing.
    /// `None` on any non-200 status.
    pub fn show_request(&self, id: u64) -> Result<Option<RequestDetail>> {
        let url = format!("{}/api/v1/requests/{}", self.base_url, id);
        let res = self
            .http
            .get(&url)
            .send()
            .context("Failed to send request detail request")?;
        if res.status() != StatusCode::OK {
            return Ok(None);
        }
        Ok(Some(res.json().context("Parsing request detail json")?))
    }
}
