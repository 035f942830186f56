// Library root
// -----------
// This crate exposes a small library surface for the `nla` binary.
//
// Module responsibilities:
// - `config`: resolves the server base URL (test vs production) and the
//   user identity every API call is accounted against.
// - `api`: encapsulates the HTTP interactions with the NLA control API
//   (file listing, request creation, updates, quota and detail lookups).
// - `shell`: the interactive command loop; parses and validates command
//   lines and delegates to `api`.
pub mod api;
pub mod config;
pub mod shell;
