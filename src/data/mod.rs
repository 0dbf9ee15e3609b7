pub mod jobs;
pub mod npcs;

pub use jobs::{job, jobs, JobDefinition, JobId, UnknownJobId};
pub use npcs::{materialize_roster, npc_template, npc_templates, NpcTemplate};
