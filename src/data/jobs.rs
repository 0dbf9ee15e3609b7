use std::fmt;
use std::str::FromStr;

/// Closed set of job keys. Parsing from text happens at the input boundary,
/// so a catalog lookup by `JobId` cannot miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobId {
    Scrapper,
    Courier,
    Hacker,
}

impl JobId {
    pub const ALL: [JobId; 3] = [JobId::Scrapper, JobId::Courier, JobId::Hacker];

    pub fn as_str(self) -> &'static str {
        match self {
            JobId::Scrapper => "scrapper",
            JobId::Courier => "courier",
            JobId::Hacker => "hacker",
        }
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown job id {0}")]
pub struct UnknownJobId(pub String);

impl FromStr for JobId {
    type Err = UnknownJobId;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        JobId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownJobId(value.to_string()))
    }
}

/// A repeatable paid job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobDefinition {
    pub id: JobId,
    pub name: &'static str,
    pub pay: i64,
    pub health_cost: i32,
    pub happiness_cost: i32,
    /// Declared money threshold. Nothing gates on it yet.
    pub req: i64,
}

const JOBS: [JobDefinition; 3] = [
    JobDefinition {
        id: JobId::Scrapper,
        name: "Alley Scrapper",
        pay: 50,
        health_cost: 10,
        happiness_cost: 5,
        req: 0,
    },
    JobDefinition {
        id: JobId::Courier,
        name: "Neon Courier",
        pay: 120,
        health_cost: 5,
        happiness_cost: 10,
        req: 500,
    },
    JobDefinition {
        id: JobId::Hacker,
        name: "Data Miner",
        pay: 300,
        health_cost: 2,
        happiness_cost: 20,
        req: 2000,
    },
];

/// The job catalog in display order.
pub fn jobs() -> &'static [JobDefinition] {
    &JOBS
}

pub fn job(id: JobId) -> &'static JobDefinition {
    match id {
        JobId::Scrapper => &JOBS[0],
        JobId::Courier => &JOBS[1],
        JobId::Hacker => &JOBS[2],
    }
}
