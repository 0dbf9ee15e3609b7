pub mod render;
pub mod view;

pub use render::{format_credits, gauge_reading, render, render_gender_selector, GENDER_OPTIONS};
pub use view::{Frame, Gauge, GaugeReading, GenderOption, HeadlessView, JobRow, Screen, SocialRow, View};
