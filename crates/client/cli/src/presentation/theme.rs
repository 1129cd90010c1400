//! Colors and styles shared by the battle widgets.

use battle_core::Affinity;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

const ROCK_BROWN: Color = Color::Rgb(0x9B, 0x76, 0x53);

pub fn affinity_color(affinity: Affinity) -> Color {
    match affinity {
        Affinity::None => Color::White,
        Affinity::Water => Color::Blue,
        Affinity::Ghost => Color::Magenta,
        Affinity::Fire => Color::Red,
        Affinity::Electric => Color::Yellow,
        Affinity::Plant => Color::Green,
        Affinity::Rock => ROCK_BROWN,
    }
}

pub fn affinity_span(affinity: Affinity) -> Span<'static> {
    Span::styled(
        affinity.to_string(),
        Style::default()
            .fg(affinity_color(affinity))
            .add_modifier(Modifier::BOLD),
    )
}

pub fn style_health(current: u32, maximum: u32) -> Style {
    if maximum == 0 {
        return Style::default().fg(Color::Gray);
    }

    let percent = (u64::from(current) * 100) / u64::from(maximum);
    let color = match percent {
        75..=100 => Color::Green,
        50..=74 => Color::Yellow,
        25..=49 => Color::LightRed,
        _ => Color::Red,
    };

    Style::default().fg(color)
}

pub fn style_energy(current: u32, maximum: u32) -> Style {
    if maximum == 0 {
        return Style::default().fg(Color::Gray);
    }

    let percent = (u64::from(current) * 100) / u64::from(maximum);
    let color = match percent {
        75..=100 => Color::Cyan,
        50..=74 => Color::Blue,
        25..=49 => Color::LightBlue,
        _ => Color::DarkGray,
    };

    Style::default().fg(color)
}

pub fn style_shield() -> Style {
    Style::default().fg(Color::Gray)
}

/// Emphasis for the side currently acting.
pub fn emphasize_current(base: Style) -> Style {
    base.add_modifier(Modifier::BOLD)
}

/// Ratio for gauges, clamped to `0.0..=1.0`.
pub fn ratio(current: u32, maximum: u32) -> f64 {
    if maximum == 0 {
        0.0
    } else {
        (f64::from(current) / f64::from(maximum)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_affinity_has_its_color() {
        assert_eq!(affinity_color(Affinity::None), Color::White);
        assert_eq!(affinity_color(Affinity::Water), Color::Blue);
        assert_eq!(affinity_color(Affinity::Ghost), Color::Magenta);
        assert_eq!(affinity_color(Affinity::Fire), Color::Red);
        assert_eq!(affinity_color(Affinity::Electric), Color::Yellow);
        assert_eq!(affinity_color(Affinity::Plant), Color::Green);
        assert_eq!(affinity_color(Affinity::Rock), Color::Rgb(155, 118, 83));
    }

    #[test]
    fn health_color_tracks_remaining_fraction() {
        assert_eq!(style_health(750, 750).fg, Some(Color::Green));
        assert_eq!(style_health(400, 750).fg, Some(Color::Yellow));
        assert_eq!(style_health(200, 750).fg, Some(Color::LightRed));
        assert_eq!(style_health(0, 750).fg, Some(Color::Red));
        assert_eq!(style_health(0, 0).fg, Some(Color::Gray));
    }

    #[test]
    fn ratio_is_clamped() {
        assert_eq!(ratio(0, 0), 0.0);
        assert_eq!(ratio(50, 100), 0.5);
        assert_eq!(ratio(200, 100), 1.0);
    }
}
