// Shell layer: a line-oriented command loop in front of the API client.
// Each command receives the remainder of its input line as free-form text,
// validates what it can locally, and issues at most two HTTP calls: one to
// check a request id against the live request list, one for the action.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::{Context, Result};
use chrono::{Duration, Local};

use crate::api::{ApiReply, MakeRequest, NlaClient, Quota, RequestDetail, RequestSummary, UpdateRequest};

/// Stage filter applied when `ls` is given no `-stages=` option.
pub const DEFAULT_STAGES: &str = "UDTAR";

/// Retrieval requests made from the shell keep their restored files for
/// 30 days.
const RETENTION_DAYS: i64 = 30;

/// Every shell command. Dispatch is an exhaustive match over this enum, so a
/// variant without a handler does not compile; `COMMANDS` is the single
/// source of the names, aliases and help text the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ls,
    PatternRequest,
    ListingRequest,
    Requests,
    Quota,
    Retain,
    Expire,
    NotifyFirst,
    NotifyLast,
    Notify,
    Label,
    RequestedFiles,
    ShowRequest,
    Help,
    Quit,
}

/// One entry of the command table.
pub struct CommandSpec {
    pub name: &'static str,
    pub alias: Option<&'static str>,
    pub command: Command,
    pub summary: &'static str,
    pub help: &'static str,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "ls",
        alias: None,
        command: Command::Ls,
        summary: "List files in the NLA system.",
        help: "\
ls [-stages=XYZ] [substring]

List files in the NLA system. Files go through various stages:
  (U) Unverified: earmarked for tape-only archive, tape copy not yet checked.
  (D) On Disk: verified tape copy, original disk copy not yet deleted.
  (T) On Tape: removed from disk, only the tape copy exists.
  (A) Restoring: in the process of being actively restored to disk.
  (R) Restored: restored to disk; when the restore request expires the disk
      copy is removed and the file is marked On Tape again.

Use -stages to list only files at certain stages, e.g. unverified, on disk
and on tape files:
    ls -stages=UDT

The rest of the arguments are a simple contains filter, e.g. all files with
2015/12/04 in the path:
    ls 2015/12/04",
    },
    CommandSpec {
        name: "pattern_request",
        alias: None,
        command: Command::PatternRequest,
        summary: "Request files matching a substring pattern.",
        help: "\
pattern_request <pattern>

Request files by matching the pattern string to a substring in the filename.
The request retains the restored files for 30 days.",
    },
    CommandSpec {
        name: "listing_request",
        alias: None,
        command: Command::ListingRequest,
        summary: "Make a tape request from a file listing.",
        help: "\
listing_request <filepath>

Make a tape request from a local file listing. The file paths should be one
per line and absolute. The request retains the restored files for 30 days.",
    },
    CommandSpec {
        name: "requests",
        alias: None,
        command: Command::Requests,
        summary: "List requests for the current user.",
        help: "\
requests

List the current user's requests with their ids, labels and retention dates.",
    },
    CommandSpec {
        name: "quota",
        alias: None,
        command: Command::Quota,
        summary: "Check the amount of quota remaining.",
        help: "\
quota

Show the quota size, the amount used by current requests, and the remainder.",
    },
    CommandSpec {
        name: "retain",
        alias: None,
        command: Command::Retain,
        summary: "Set a retention date for a request.",
        help: "\
retain <id> <date>

Set the retention date of a request. After this date the restored disk
copies are eligible for removal.",
    },
    CommandSpec {
        name: "expire",
        alias: None,
        command: Command::Expire,
        summary: "Expire a request by setting its retention date to now.",
        help: "\
expire <id>

Mark a request as expired by setting its retention date to today.",
    },
    CommandSpec {
        name: "notify_first",
        alias: None,
        command: Command::NotifyFirst,
        summary: "Set the email notified when the first file arrives.",
        help: "\
notify_first <id> <email>

Set the email address notified on the arrival of the first file from tape.
An empty address resets to the account default.",
    },
    CommandSpec {
        name: "notify_last",
        alias: None,
        command: Command::NotifyLast,
        summary: "Set the email notified when the last file arrives.",
        help: "\
notify_last <id> <email>

Set the email address notified on the arrival of the last file from tape.
An empty address resets to the account default.",
    },
    CommandSpec {
        name: "notify",
        alias: None,
        command: Command::Notify,
        summary: "Set both notification emails at once.",
        help: "\
notify <id> <email>

Set the email address notified for the arrivals of both the first and the
last file from tape, i.e. notify_first and notify_last combined.",
    },
    CommandSpec {
        name: "label",
        alias: None,
        command: Command::Label,
        summary: "Add a label to a request.",
        help: "\
label <id> <text>

Label a request with free text, e.g.
    NLA>>> label 23 John's list of files
labels request number 23 \"John's list of files\".",
    },
    CommandSpec {
        name: "requested_files",
        alias: None,
        command: Command::RequestedFiles,
        summary: "List the files in a request.",
        help: "\
requested_files <id>

Print every file path in a request, one per line.",
    },
    CommandSpec {
        name: "req",
        alias: Some("show_request"),
        command: Command::ShowRequest,
        summary: "Show details of a request.",
        help: "\
req <id>

Show a request's label, dates, notification addresses and progress, plus the
first few files it covers.",
    },
    CommandSpec {
        name: "help",
        alias: None,
        command: Command::Help,
        summary: "List commands, or show help for one command.",
        help: "\
help [command]

Without an argument, list all commands. With a command name, show its help.",
    },
    CommandSpec {
        name: "quit",
        alias: None,
        command: Command::Quit,
        summary: "Quit.",
        help: "\
quit

Leave the shell. End-of-input (Ctrl-D) does the same.",
    },
];

/// Look a command up by its primary name or alias.
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS
        .iter()
        .find(|spec| spec.name == name || spec.alias == Some(name))
}

enum Flow {
    Continue,
    Quit,
}

/// The interactive shell. Holds nothing but the client; all archive state
/// lives server-side and is re-fetched per command.
pub struct Shell {
    client: NlaClient,
}

impl Shell {
    pub fn new(client: NlaClient) -> Self {
        Shell { client }
    }

    /// Run the prompt loop until `quit` or end of input. Command failures
    /// (including transport errors) are printed and the loop keeps going;
    /// only terminal I/O errors are fatal.
    pub fn run_interactive(&self) -> Result<()> {
        println!("===========================");
        println!("Near-line archive (NLA) tape utility.");
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            print!("NLA>>> ");
            io::stdout().flush().context("Failed to flush prompt")?;
            let line = match lines.next() {
                Some(line) => line.context("Failed to read input")?,
                None => break,
            };
            match self.dispatch(&line) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(err) => println!("Error: {:#}", err),
            }
        }
        Ok(())
    }

    /// Execute one command line and exit, propagating any failure.
    pub fn run_single(&self, line: &str) -> Result<()> {
        self.dispatch(line).map(|_| ())
    }

    fn dispatch(&self, line: &str) -> Result<Flow> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(Flow::Continue);
        }
        let (name, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim_start()),
            None => (trimmed, ""),
        };
        let Some(spec) = lookup(name) else {
            println!("Unknown command: {}. Type `help` for the command list.", name);
            return Ok(Flow::Continue);
        };
        match spec.command {
            Command::Ls => self.cmd_ls(rest)?,
            Command::PatternRequest => self.cmd_pattern_request(rest)?,
            Command::ListingRequest => self.cmd_listing_request(rest)?,
            Command::Requests => self.cmd_requests()?,
            Command::Quota => self.cmd_quota()?,
            Command::Retain => self.cmd_retain(rest)?,
            Command::Expire => self.cmd_expire(rest)?,
            Command::NotifyFirst => self.cmd_notify(rest, true, false)?,
            Command::NotifyLast => self.cmd_notify(rest, false, true)?,
            Command::Notify => self.cmd_notify(rest, true, true)?,
            Command::Label => self.cmd_label(rest)?,
            Command::RequestedFiles => self.cmd_requested_files(rest)?,
            Command::ShowRequest => self.cmd_show_request(rest)?,
            Command::Help => self.cmd_help(rest),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn cmd_ls(&self, line: &str) -> Result<()> {
        let (match_filter, stages) = parse_ls_args(line);
        let listing = self.client.list_files(&match_filter, &stages)?;
        for file in &listing.files {
            println!("{}", file.path);
        }
        Ok(())
    }

    fn cmd_pattern_request(&self, line: &str) -> Result<()> {
        let request = MakeRequest {
            patterns: Some(line.to_string()),
            retention: Some(shell_retention_date()),
            ..Default::default()
        };
        let reply = self.client.make_request(&request)?;
        print_reply(&reply);
        Ok(())
    }

    fn cmd_listing_request(&self, line: &str) -> Result<()> {
        let path = line.trim();
        let file =
            File::open(path).with_context(|| format!("Failed to open listing file {}", path))?;
        let files = paths_from_listing(BufReader::new(file))
            .with_context(|| format!("Failed to read listing file {}", path))?;
        let request = MakeRequest {
            files: Some(files),
            retention: Some(shell_retention_date()),
            ..Default::default()
        };
        let reply = self.client.make_request(&request)?;
        print_reply(&reply);
        Ok(())
    }

    fn cmd_requests(&self) -> Result<()> {
        let Some(quota) = self.client.list_requests()? else {
            println!("No quota found for user {}.", self.client.user());
            return Ok(());
        };
        println!("=== Requests info for {} ===", quota.user);
        println!("Number of requests: {}", quota.requests.len());
        println!("Quota size:         {}", quota.size);
        println!("Total request size: {}", quota.used);
        println!("Requests:  ");
        for request in &quota.requests {
            println!("{}", format_request_row(request));
        }
        Ok(())
    }

    fn cmd_quota(&self) -> Result<()> {
        let Some(quota) = self.client.list_requests()? else {
            println!("No quota found for user {}.", self.client.user());
            return Ok(());
        };
        println!("=== Quota for {} ===", quota.user);
        println!("Quota size:         {}", quota.size);
        println!("Total used:         {}", quota.used);
        println!("Quota remaining:    {}", quota.size - quota.used);
        Ok(())
    }

    fn cmd_retain(&self, line: &str) -> Result<()> {
        let Some((id, date)) = self.check_request_id(line)? else {
            return Ok(());
        };
        let update = UpdateRequest {
            retention: Some(date),
            ..Default::default()
        };
        print_reply(&self.client.update_request(id, &update)?);
        Ok(())
    }

    fn cmd_expire(&self, line: &str) -> Result<()> {
        let Some((id, _)) = self.check_request_id(line)? else {
            return Ok(());
        };
        let update = UpdateRequest {
            retention: Some(Local::now().format("%Y-%m-%d").to_string()),
            ..Default::default()
        };
        print_reply(&self.client.update_request(id, &update)?);
        Ok(())
    }

    fn cmd_notify(&self, line: &str, first: bool, last: bool) -> Result<()> {
        let Some((id, email)) = self.check_request_id(line)? else {
            return Ok(());
        };
        let update = UpdateRequest {
            notify_first: first.then(|| email.clone()),
            notify_last: last.then(|| email.clone()),
            ..Default::default()
        };
        print_reply(&self.client.update_request(id, &update)?);
        Ok(())
    }

    fn cmd_label(&self, line: &str) -> Result<()> {
        let Some((id, label)) = self.check_request_id(line)? else {
            return Ok(());
        };
        let update = UpdateRequest {
            label: Some(label),
            ..Default::default()
        };
        print_reply(&self.client.update_request(id, &update)?);
        Ok(())
    }

    fn cmd_requested_files(&self, line: &str) -> Result<()> {
        let Some((id, _)) = self.check_request_id(line)? else {
            return Ok(());
        };
        let Some(detail) = self.client.show_request(id)? else {
            println!("Request {} not found.", id);
            return Ok(());
        };
        for path in detail.files.unwrap_or_default() {
            println!("{}", path);
        }
        Ok(())
    }

    fn cmd_show_request(&self, line: &str) -> Result<()> {
        let Some((id, _)) = self.check_request_id(line)? else {
            return Ok(());
        };
        let Some(detail) = self.client.show_request(id)? else {
            println!("Request {} not found.", id);
            return Ok(());
        };
        print!("{}", format_request_detail(&detail));
        Ok(())
    }

    fn cmd_help(&self, line: &str) {
        let topic = line.trim();
        if topic.is_empty() {
            println!("Commands (type `help <command>` for details):");
            for spec in COMMANDS {
                match spec.alias {
                    Some(alias) => {
                        println!("  {:<18} {}", format!("{} ({})", spec.name, alias), spec.summary)
                    }
                    None => println!("  {:<18} {}", spec.name, spec.summary),
                }
            }
        } else if let Some(spec) = lookup(topic) {
            println!("{}", spec.help);
        } else {
            println!("Unknown command: {}. Type `help` for the command list.", topic);
        }
    }

    /// Validate the request id at the front of a mutating command's line.
    /// The id must parse as an integer and be present in the user's current
    /// request list, which is fetched fresh on every call. On success the id
    /// is returned together with the rest of the line, rejoined with single
    /// spaces; on failure the reason is printed and `None` is returned.
    fn check_request_id(&self, line: &str) -> Result<Option<(u64, String)>> {
        let (id, rest) = match parse_request_id(line) {
            Ok(parsed) => parsed,
            Err(message) => {
                println!("{}", message);
                return Ok(None);
            }
        };
        let valids = valid_request_ids(self.client.list_requests()?.as_ref());
        if !valids.contains(&id) {
            println!(
                "{} is not a current request number. Valid ids are {:?}",
                id, valids
            );
            return Ok(None);
        }
        Ok(Some((id, rest)))
    }
}

/// Pull an optional `-stages=` token out of the argument list; the remaining
/// tokens, rejoined with single spaces, form the substring filter. Stage
/// letters are not validated here; the server decides what they mean.
fn parse_ls_args(line: &str) -> (String, String) {
    let mut stages = DEFAULT_STAGES.to_string();
    let mut match_parts: Vec<&str> = Vec::new();
    for token in line.split_whitespace() {
        if let Some(letters) = token.strip_prefix("-stages=") {
            stages = letters.to_string();
        } else {
            match_parts.push(token);
        }
    }
    (match_parts.join(" "), stages)
}

/// Split a command line into a leading request id and the rest of the line.
/// The error carries the exact message shown to the user.
fn parse_request_id(line: &str) -> Result<(u64, String), String> {
    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else {
        return Err("First argument needs to be a request id.".to_string());
    };
    let id = first
        .parse::<u64>()
        .map_err(|_| format!("{} not a valid request id - they should be integers.", first))?;
    Ok((id, tokens.collect::<Vec<_>>().join(" ")))
}

/// Ids of the requests in a quota listing; empty when the quota lookup
/// returned nothing.
fn valid_request_ids(quota: Option<&Quota>) -> Vec<u64> {
    quota
        .map(|quota| quota.requests.iter().map(|request| request.id).collect())
        .unwrap_or_default()
}

fn shell_retention_date() -> String {
    (Local::now() + Duration::days(RETENTION_DAYS))
        .format("%Y-%m-%d")
        .to_string()
}

/// One row of the `requests` listing: id right-aligned to 6 columns, label
/// padded to 60, retention in brackets.
fn format_request_row(request: &RequestSummary) -> String {
    format!(
        " {:>6} {:<60}   [{}]",
        request.id, request.label, request.retention
    )
}

/// Show the server's verdict on a mutating call: the status line, then the
/// body when there is one.
fn print_reply(reply: &ApiReply) {
    let (status, body) = match reply {
        ApiReply::Accepted { status, body } | ApiReply::Refused { status, body } => (status, body),
    };
    println!("<Response [{}]>", status.as_u16());
    if !body.is_empty() {
        println!("{}", body);
    }
}

/// Multi-line rendering of a single request. A line appears only when the
/// server sent the field; the file listing is capped at the first 5 paths.
fn format_request_detail(detail: &RequestDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== [{}] ===", detail.id);
    if let Some(label) = &detail.label {
        let _ = writeln!(out, "Label:                 {}", label);
    }
    if let Some(date) = &detail.request_date {
        let _ = writeln!(out, "Request date:          {}", date);
    }
    if let Some(retention) = &detail.retention {
        let _ = writeln!(out, "Retention:             {}", retention);
    }
    if let Some(email) = &detail.notify_on_first_file {
        let _ = writeln!(out, "notify_on_first_file:  {}", email);
    }
    if let Some(email) = &detail.notify_on_last_file {
        let _ = writeln!(out, "notify_on_last_file:   {}", email);
    }
    let _ = writeln!(out, "{}", request_status(detail));
    if let Some(files) = &detail.files {
        let _ = writeln!(out, "{} files in request", files.len());
        for path in files.iter().take(5) {
            let _ = writeln!(out, "{}", path);
        }
    }
    out
}

/// Derived progress line: the server reports StorageD start and end
/// timestamps only once the corresponding step has happened.
fn request_status(detail: &RequestDetail) -> String {
    match (&detail.storaged_request_start, &detail.storaged_request_end) {
        (None, _) => "Status: Not queued yet".to_string(),
        (Some(start), None) => format!("Status: Active (StorageD request started {})", start),
        (Some(start), Some(end)) => format!(
            "Status: On disk (StorageD request ran from {} to {})",
            start, end
        ),
    }
}

/// Read one absolute path per line, trimming surrounding whitespace and
/// skipping blank lines.
fn paths_from_listing(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(trimmed.to_string());
        }
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn detail(start: Option<&str>, end: Option<&str>) -> RequestDetail {
        RequestDetail {
            id: 7,
            label: None,
            request_date: None,
            retention: None,
            notify_on_first_file: None,
            notify_on_last_file: None,
            storaged_request_start: start.map(str::to_string),
            storaged_request_end: end.map(str::to_string),
            first_files_on_disk: None,
            last_files_on_disk: None,
            files: None,
        }
    }

    fn quota_with_ids(ids: &[u64]) -> Quota {
        Quota {
            user: "fred".into(),
            size: 1000,
            used: 250,
            requests: ids
                .iter()
                .map(|&id| RequestSummary {
                    id,
                    label: format!("request {}", id),
                    retention: "2026-09-23".into(),
                })
                .collect(),
        }
    }

    #[test]
    fn ls_defaults_to_all_stages() {
        assert_eq!(parse_ls_args(""), (String::new(), "UDTAR".to_string()));
        assert_eq!(
            parse_ls_args("2015/12/04"),
            ("2015/12/04".to_string(), "UDTAR".to_string())
        );
    }

    #[test]
    fn ls_stage_option_is_extracted_wherever_it_appears() {
        assert_eq!(
            parse_ls_args("-stages=UDT foo bar"),
            ("foo bar".to_string(), "UDT".to_string())
        );
        assert_eq!(
            parse_ls_args("foo -stages=T bar"),
            ("foo bar".to_string(), "T".to_string())
        );
    }

    #[test]
    fn ls_unknown_stage_letters_pass_through() {
        assert_eq!(parse_ls_args("-stages=XQ"), (String::new(), "XQ".to_string()));
    }

    #[test]
    fn request_id_missing() {
        assert_eq!(
            parse_request_id(""),
            Err("First argument needs to be a request id.".to_string())
        );
        assert_eq!(
            parse_request_id("   "),
            Err("First argument needs to be a request id.".to_string())
        );
    }

    #[test]
    fn request_id_not_numeric() {
        assert_eq!(
            parse_request_id("abc extra text"),
            Err("abc not a valid request id - they should be integers.".to_string())
        );
    }

    #[test]
    fn request_id_with_remainder() {
        assert_eq!(
            parse_request_id("42 new label"),
            Ok((42, "new label".to_string()))
        );
        assert_eq!(parse_request_id("42"), Ok((42, String::new())));
        // extra runs of whitespace collapse to single spaces
        assert_eq!(
            parse_request_id("42   new    label"),
            Ok((42, "new label".to_string()))
        );
    }

    #[test]
    fn valid_ids_come_from_the_quota_listing() {
        let quota = quota_with_ids(&[3, 17, 42]);
        let valids = valid_request_ids(Some(&quota));
        assert_eq!(valids, vec![3, 17, 42]);
        assert!(valids.contains(&42));
        assert!(!valids.contains(&99));
        assert!(valid_request_ids(None).is_empty());
    }

    #[test]
    fn status_not_queued() {
        assert_eq!(request_status(&detail(None, None)), "Status: Not queued yet");
        // end without start still reads as not queued
        assert_eq!(
            request_status(&detail(None, Some("2026-08-01 10:00"))),
            "Status: Not queued yet"
        );
    }

    #[test]
    fn status_active_echoes_start() {
        assert_eq!(
            request_status(&detail(Some("2026-08-01 10:00"), None)),
            "Status: Active (StorageD request started 2026-08-01 10:00)"
        );
    }

    #[test]
    fn status_on_disk_echoes_start_and_end() {
        assert_eq!(
            request_status(&detail(Some("2026-08-01 10:00"), Some("2026-08-01 11:30"))),
            "Status: On disk (StorageD request ran from 2026-08-01 10:00 to 2026-08-01 11:30)"
        );
    }

    #[test]
    fn request_row_alignment() {
        let row = format_request_row(&RequestSummary {
            id: 42,
            label: "short label".into(),
            retention: "2026-09-23".into(),
        });
        assert_eq!(
            row,
            format!(" {:>6} {:<60}   [2026-09-23]", 42, "short label")
        );
        assert!(row.starts_with("     42 short label"));
        // 1 + 6 + 1 + 60 + 3 columns before the bracket
        assert_eq!(row.find('[').unwrap(), 71);
    }

    #[test]
    fn detail_rendering_skips_absent_fields() {
        let mut info = detail(None, None);
        let text = format_request_detail(&info);
        assert_eq!(text, "=== [7] ===\nStatus: Not queued yet\n");

        info.label = Some("John's list of files".into());
        info.retention = Some("2026-09-23".into());
        info.notify_on_first_file = Some("".into());
        let text = format_request_detail(&info);
        assert_eq!(
            text,
            "=== [7] ===\n\
             Label:                 John's list of files\n\
             Retention:             2026-09-23\n\
             notify_on_first_file:  \n\
             Status: Not queued yet\n"
        );
    }

    #[test]
    fn detail_rendering_caps_files_at_five() {
        let mut info = detail(None, None);
        info.files = Some((0..8).map(|i| format!("/badc/file{}.nc", i)).collect());
        let text = format_request_detail(&info);
        assert!(text.contains("8 files in request\n"));
        assert!(text.contains("/badc/file4.nc\n"));
        assert!(!text.contains("/badc/file5.nc"));
    }

    #[test]
    fn listing_paths_are_trimmed() {
        let listing = Cursor::new("  /badc/a.nc  \n/badc/b.nc\n\n   \n\t/badc/c.nc\n");
        assert_eq!(
            paths_from_listing(listing).unwrap(),
            vec!["/badc/a.nc", "/badc/b.nc", "/badc/c.nc"]
        );
    }

    #[test]
    fn retention_date_is_iso_formatted() {
        let date = shell_retention_date();
        assert!(NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn command_table_resolves_names_and_aliases() {
        for spec in COMMANDS {
            assert_eq!(lookup(spec.name).unwrap().command, spec.command);
            if let Some(alias) = spec.alias {
                assert_eq!(lookup(alias).unwrap().command, spec.command);
            }
            assert!(!spec.summary.is_empty());
            assert!(!spec.help.is_empty());
        }
        assert_eq!(lookup("req").unwrap().command, Command::ShowRequest);
        assert_eq!(lookup("show_request").unwrap().command, Command::ShowRequest);
        assert!(lookup("frobnicate").is_none());
    }
}
