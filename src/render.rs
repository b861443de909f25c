use crate::models::{Card, Dataset};
use tracing::warn;

pub const LOADING_MARKUP: &str = r#"<p class="loading-text">Loading activity data...</p>"#;

/// Card class suffix derived from the title. Only the first space becomes a
/// hyphen, so "Self Care" maps to `self-care` but three-word titles keep
/// their second space.
pub fn style_key(title: &str) -> String {
    title.to_lowercase().replacen(' ', "-", 1)
}

pub fn hours_label(hours: f64) -> String {
    if hours == 1.0 {
        format!("{hours}hr")
    } else {
        format!("{hours}hrs")
    }
}

pub fn comparison_label(timeframe: &str) -> &'static str {
    if timeframe == "daily" {
        "Yesterday"
    } else {
        "Last Week"
    }
}

/// Builds one card per activity that has stats for `timeframe`, in dataset
/// order. Activities without that timeframe are skipped.
pub fn build_cards(dataset: &Dataset, timeframe: &str) -> Vec<Card> {
    let label = comparison_label(timeframe);
    dataset
        .iter()
        .filter_map(|activity| {
            let Some(stats) = activity.stats(timeframe) else {
                warn!("No data for {} in {timeframe} view.", activity.title);
                return None;
            };
            Some(Card {
                title: activity.title.clone(),
                style_key: style_key(&activity.title),
                hours: hours_label(stats.current),
                previous: format!("{label} - {}", hours_label(stats.previous)),
            })
        })
        .collect()
}

pub fn card_markup(card: &Card) -> String {
    let title = escape_text(&card.title);
    format!(
        r##"<div class="activity-card bg-card-{style}">
  <div class="activity-card-content">
    <div class="activity-card-header">
      <h2>{title}</h2>
      <a href="#" aria-label="More options for {title}">&bull;&bull;&bull;</a>
    </div>
    <div class="activity-card-body">
      <p class="hours">{hours}</p>
      <p class="previous">{previous}</p>
    </div>
  </div>
</div>
"##,
        style = escape_text(&card.style_key),
        hours = escape_text(&card.hours),
        previous = escape_text(&card.previous),
    )
}

pub fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// The card container. Every operation replaces the whole content.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    content: String,
    cards: Vec<Card>,
}

impl Grid {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn render(&mut self, dataset: &Dataset, timeframe: &str) {
        let cards = build_cards(dataset, timeframe);
        self.content = cards.iter().map(card_markup).collect();
        self.cards = cards;
    }

    pub fn show_loading(&mut self) {
        self.cards.clear();
        self.content = LOADING_MARKUP.to_string();
    }

    pub fn show_error(&mut self, message: &str) {
        self.cards.clear();
        self.content = format!(r#"<p class="error-text">{}</p>"#, escape_text(message));
    }
}
