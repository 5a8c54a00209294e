//! Classification of 1C information base connection strings.
//!
//! Four forms are recognised, checked in this order:
//!
//! * `ws="https://host/base";` - web service publication
//! * `File="C:\bases\demo";` - file information base
//! * `Srvr="host";Ref="base";` - server information base, full form
//! * `host;base` - server information base, short form
use crate::{launch::LaunchMode, lib::errors::ConnectionError};

mod fields;

use fields::FieldPatterns;

const WEB_PATTERN: &str = r#"ws="<url>";"#;
const FILE_PATTERN: &str = r#"File="<path>";"#;
const SERVER_PATTERN: &str = r#"Srvr="<host>";Ref="<base>";"#;
const SIMPLE_PATTERN: &str = "<host>;<base>";
const ANY_PATTERN: &str =
    r#"one of <host>;<base> | Srvr="<host>";Ref="<base>"; | File="<path>"; | ws="<url>";"#;

/// A classified connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionTarget {
    SimpleServer { host: String, base: String },
    FullServer { host: String, base: String },
    File { path: String },
    Web { url: String },
}

impl ConnectionTarget {
    /// Classify `raw` into one of the supported connection forms.
    pub fn parse(raw: &str) -> Result<Self, ConnectionError> {
        let input = raw.trim();
        let patterns = FieldPatterns::instance();

        if patterns.web.is_present(input) {
            let url = patterns
                .web
                .quoted_value(input)
                .ok_or_else(|| unrecognized(input, WEB_PATTERN))?;
            return Ok(Self::Web { url });
        }

        if patterns.file.is_present(input) {
            let path = patterns
                .file
                .quoted_value(input)
                .ok_or_else(|| unrecognized(input, FILE_PATTERN))?;
            return Ok(Self::File { path });
        }

        if patterns.server.is_present(input) && patterns.reference.is_present(input) {
            let host = patterns.server.quoted_value(input);
            let base = patterns.reference.quoted_value(input);
            return match (host, base) {
                (Some(host), Some(base)) => Ok(Self::FullServer { host, base }),
                _ => Err(unrecognized(input, SERVER_PATTERN)),
            };
        }

        if input.matches(';').count() == 1 && !input.contains('=') {
            return parse_simple(input);
        }

        Err(unrecognized(input, ANY_PATTERN))
    }

    /// Stable snake_case name of the form, used in logs and JSON output.
    pub const fn kind(&self) -> &'static str {
        match self {
            ConnectionTarget::SimpleServer { .. } => "simple_server",
            ConnectionTarget::FullServer { .. } => "full_server",
            ConnectionTarget::File { .. } => "file",
            ConnectionTarget::Web { .. } => "web",
        }
    }
}

/// Connection string as typed by the user together with the launch mode flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRequest {
    pub raw: String,
    pub designer: bool,
}

impl ConnectionRequest {
    pub fn new(raw: impl Into<String>, designer: bool) -> Self {
        Self {
            raw: raw.into(),
            designer,
        }
    }

    pub fn classify(&self) -> Result<ConnectionTarget, ConnectionError> {
        ConnectionTarget::parse(&self.raw)
    }

    pub fn mode(&self) -> LaunchMode {
        LaunchMode::from_designer_flag(self.designer)
    }
}

fn parse_simple(input: &str) -> Result<ConnectionTarget, ConnectionError> {
    let (host, base) = input
        .split_once(';')
        .ok_or_else(|| unrecognized(input, SIMPLE_PATTERN))?;
    let (host, base) = (host.trim(), base.trim());
    if host.is_empty() || base.is_empty() {
        return Err(unrecognized(input, SIMPLE_PATTERN));
    }
    Ok(ConnectionTarget::SimpleServer {
        host: host.to_string(),
        base: base.to_string(),
    })
}

fn unrecognized(input: &str, expected: &'static str) -> ConnectionError {
    ConnectionError::UnrecognizedFormat {
        input: input.to_string(),
        expected,
    }
}
