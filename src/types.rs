// src/types.rs

use std::fmt;
use std::str::FromStr;

/// Job kinds this launcher knows how to start.
///
/// The token returned by [`JobKind::execute_type`] namespaces per-launch
/// artifacts such as GC log file names (`gc-crawler.log`), so it must stay
/// short, stable and filesystem-safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobKind {
    Crawler,
    Thumbnail,
}

impl JobKind {
    pub fn execute_type(self) -> &'static str {
        match self {
            JobKind::Crawler => "crawler",
            JobKind::Thumbnail => "thumbnail",
        }
    }
}

impl FromStr for JobKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "crawler" => Ok(JobKind::Crawler),
            "thumbnail" => Ok(JobKind::Thumbnail),
            other => Err(format!(
                "invalid job kind: {other} (expected \"crawler\" or \"thumbnail\")"
            )),
        }
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.execute_type())
    }
}
