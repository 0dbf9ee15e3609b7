use crate::data::jobs::JobId;

/// Which page of the interface is in front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Setup,
    Game,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gauge {
    Health,
    Happiness,
}

/// Display-only reading of a resource, clamped to 0..=100.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaugeReading {
    pub label: String,
    pub width_percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRow {
    pub id: JobId,
    pub name: String,
    pub detail: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialRow {
    pub id: String,
    pub name: String,
    pub archetype: String,
    pub detail: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderOption {
    pub label: &'static str,
    pub selected: bool,
}

/// Display surface driven by the renderer and the session.
///
/// Every region is optional: the default implementations drop the write, so a
/// surface only overrides the regions it actually has.
pub trait View {
    fn set_name(&mut self, _name: &str) {}
    fn set_gender(&mut self, _gender: &str) {}
    fn set_money(&mut self, _money: &str) {}
    fn set_day(&mut self, _day: u32) {}
    fn set_gauge(&mut self, _gauge: Gauge, _reading: &GaugeReading) {}
    fn set_jobs(&mut self, _rows: Vec<JobRow>) {}
    fn set_social(&mut self, _rows: Vec<SocialRow>) {}
    fn set_gender_options(&mut self, _options: Vec<GenderOption>) {}
    fn show_message(&mut self, _text: &str) {}
    fn append_log(&mut self, _entry: &str) {}
    fn show_screen(&mut self, _screen: Screen) {}
}

/// A surface with no regions at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessView;

impl View for HeadlessView {}

/// A surface that keeps the last value written to every region.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Frame {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub money: Option<String>,
    pub day: Option<u32>,
    pub health: Option<GaugeReading>,
    pub happiness: Option<GaugeReading>,
    pub jobs: Vec<JobRow>,
    pub social: Vec<SocialRow>,
    pub gender_options: Vec<GenderOption>,
    pub message: Option<String>,
    pub log: Vec<String>,
    pub screen: Screen,
}

impl Frame {
    /// Drop the transient parts (message, pending log lines) once shown.
    pub fn take_transient(&mut self) -> (Option<String>, Vec<String>) {
        (self.message.take(), std::mem::take(&mut self.log))
    }
}

impl View for Frame {
    fn set_name(&mut self, name: &str) {
        self.name = Some(name.to_string());
    }

    fn set_gender(&mut self, gender: &str) {
        self.gender = Some(gender.to_string());
    }

    fn set_money(&mut self, money: &str) {
        self.money = Some(money.to_string());
    }

    fn set_day(&mut self, day: u32) {
        self.day = Some(day);
    }

    fn set_gauge(&mut self, gauge: Gauge, reading: &GaugeReading) {
        let slot = match gauge {
            Gauge::Health => &mut self.health,
            Gauge::Happiness => &mut self.happiness,
        };
        *slot = Some(reading.clone());
    }

    fn set_jobs(&mut self, rows: Vec<JobRow>) {
        self.jobs = rows;
    }

    fn set_social(&mut self, rows: Vec<SocialRow>) {
        self.social = rows;
    }

    fn set_gender_options(&mut self, options: Vec<GenderOption>) {
        self.gender_options = options;
    }

    fn show_message(&mut self, text: &str) {
        self.message = Some(text.to_string());
    }

    fn append_log(&mut self, entry: &str) {
        self.log.push(format!("> {}", entry));
    }

    fn show_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }
}
