use crate::data::jobs::jobs;
use crate::simulation::state::GameState;
use crate::systems::actions::INTERACT_COST;
use crate::ui::view::{Gauge, GaugeReading, GenderOption, JobRow, SocialRow, View};

pub const GENDER_OPTIONS: [&str; 3] = ["Male", "Female", "Non-Binary"];

/// Repaint every region from the current state. Safe to call any number of
/// times; nothing is diffed.
pub fn render(state: &GameState, view: &mut dyn View) {
    let name = if state.name.is_empty() {
        "---"
    } else {
        state.name.as_str()
    };
    view.set_name(name);
    view.set_gender(&state.gender);
    view.set_money(&format_credits(state.money));
    view.set_day(state.day);

    view.set_gauge(Gauge::Health, &gauge_reading(state.health));
    view.set_gauge(Gauge::Happiness, &gauge_reading(state.happiness));

    view.set_jobs(
        jobs()
            .iter()
            .map(|job| JobRow {
                id: job.id,
                name: job.name.to_string(),
                detail: format!("Pay: {} | Health: -{}", job.pay, job.health_cost),
                action: "WORK".to_string(),
            })
            .collect(),
    );

    view.set_social(
        state
            .social_links
            .iter()
            .map(|npc| SocialRow {
                id: npc.id.clone(),
                name: npc.name.clone(),
                archetype: npc.archetype.clone(),
                detail: format!("Bond: {}% | Status: {}", npc.affinity(), npc.status()),
                action: format!("INTERACT ({}₵)", INTERACT_COST),
            })
            .collect(),
    );

    render_gender_selector(&state.gender, view);
}

/// Highlight every option whose label contains the first three letters of
/// the chosen gender. "Male" therefore also lights "Female".
pub fn render_gender_selector(gender: &str, view: &mut dyn View) {
    let target: String = gender.to_uppercase().chars().take(3).collect();
    let options = GENDER_OPTIONS
        .into_iter()
        .map(|label| GenderOption {
            label,
            selected: !target.is_empty() && label.to_uppercase().contains(&target),
        })
        .collect();
    view.set_gender_options(options);
}

pub fn gauge_reading(value: i32) -> GaugeReading {
    let shown = value.clamp(0, 100);
    GaugeReading {
        label: format!("{}%", shown),
        width_percent: shown as u8,
    }
}

/// Whole credits with thousands separators, e.g. `-12,500`.
pub fn format_credits(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let mut remaining = value.unsigned_abs();
    if remaining == 0 {
        return "0".to_string();
    }
    let mut parts = Vec::new();
    while remaining > 0 {
        parts.push(format!("{:03}", remaining % 1000));
        remaining /= 1000;
    }
    if let Some(last) = parts.last_mut() {
        *last = last.trim_start_matches('0').to_string();
    }
    parts.reverse();
    format!("{}{}", sign, parts.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::actions::{interact, set_gender, start_game};
    use crate::ui::view::{Frame, HeadlessView};

    #[test]
    fn credits_are_grouped() {
        assert_eq!(format_credits(0), "0");
        assert_eq!(format_credits(950), "950");
        assert_eq!(format_credits(1_000), "1,000");
        assert_eq!(format_credits(1_234_567), "1,234,567");
        assert_eq!(format_credits(-2_050), "-2,050");
        assert_eq!(format_credits(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn gauges_clamp_for_display_only() {
        assert_eq!(gauge_reading(-30).label, "0%");
        assert_eq!(gauge_reading(-30).width_percent, 0);
        assert_eq!(gauge_reading(64).label, "64%");
        assert_eq!(gauge_reading(140).width_percent, 100);

        let mut state = GameState::default();
        state.health = -20;
        let mut frame = Frame::default();
        render(&state, &mut frame);
        assert_eq!(frame.health.map(|g| g.label), Some("0%".to_string()));
        assert_eq!(state.health, -20);
    }

    #[test]
    fn renders_every_region() {
        let mut state = GameState::default();
        set_gender(&mut state, "Female");
        start_game(&mut state, "Kira").unwrap();
        interact(&mut state, "nova").unwrap();
        interact(&mut state, "nova").unwrap();

        let mut frame = Frame::default();
        render(&state, &mut frame);

        assert_eq!(frame.name.as_deref(), Some("Kira"));
        assert_eq!(frame.gender.as_deref(), Some("Female"));
        assert_eq!(frame.money.as_deref(), Some("900"));
        assert_eq!(frame.day, Some(1));
        assert_eq!(frame.jobs.len(), 3);
        assert_eq!(frame.jobs[0].detail, "Pay: 50 | Health: -10");
        assert_eq!(frame.social[0].detail, "Bond: 20% | Status: Acquaintance");
        assert_eq!(frame.social[0].action, "INTERACT (50₵)");
    }

    #[test]
    fn blank_name_renders_placeholder() {
        let mut frame = Frame::default();
        render(&GameState::default(), &mut frame);
        assert_eq!(frame.name.as_deref(), Some("---"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let state = GameState::default();
        let mut first = Frame::default();
        render(&state, &mut first);
        let mut second = first.clone();
        render(&state, &mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn headless_surface_is_tolerated() {
        render(&GameState::default(), &mut HeadlessView);
    }

    #[test]
    fn gender_selector_matches_on_prefix() {
        let mut frame = Frame::default();
        render_gender_selector("male", &mut frame);
        let selected: Vec<&str> = frame
            .gender_options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.label)
            .collect();
        assert_eq!(selected, vec!["Male", "Female"]);

        render_gender_selector("Non-Binary", &mut frame);
        assert!(frame.gender_options[2].selected);
        assert!(!frame.gender_options[0].selected);

        render_gender_selector("", &mut frame);
        assert!(frame.gender_options.iter().all(|o| !o.selected));
    }
}
