//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults
//! are overridden by a user `config.toml` in the content directory; the
//! result is read once and handed to the generator as a plain value.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [hero]
//! title_line1 = "We're getting"
//! title_line2 = "married"
//! date_text = ""             # e.g. "2026. 6. 6"
//! time_text = ""             # e.g. "Saturday, 12:30 PM"
//! background_image = ""      # Optional cover photo behind the title
//! background_opacity = 0.3
//!
//! [couple.groom]
//! name = "Groom"
//! father = ""
//! mother = ""
//! relation = "son"
//!
//! [couple.bride]
//! name = "Bride"
//! father = ""
//! mother = ""
//! relation = "daughter"
//!
//! [greeting]
//! title = "Invitation"
//! message = [...]            # Lines of the invitation message
//! sub_message = []
//!
//! [gallery]
//! title = "Gallery"          # Section heading
//! hint = "Tap to enlarge"    # Overlay hint on the carousel
//! images = []                # Image paths/URLs, in display order
//!
//! [venue]
//! title = "Location"
//! name = ""                  # Section is skipped while blank
//! hall = ""
//! address = ""
//! address_detail = ""
//! map_image = ""
//! map_links = []             # [{ label = "...", url = "..." }]
//! transportation = []        # One line per mode of transport
//! bus_info = ""
//!
//! [accounts]
//! title = "Sending Your Heart"
//! groom_label = "Groom's side"
//! bride_label = "Bride's side"
//! groom_side = []            # [{ role, name, bank, number, holder }]
//! bride_side = []
//!
//! [gesture]
//! drag_threshold_px = 20.0   # Past this, a press is no longer a tap
//! commit_threshold_px = 40.0 # Past this, the slide changes immediately
//! tap_max_ms = 200           # A tap must be released within this window
//!
//! [theme]
//! text_primary = "#333333"
//! text_secondary = "#4b5563"
//! text_tertiary = "#6b7280"
//! page_bg = "#fafaf9"
//! card_bg = "#ffffff"
//! card_border = "#eeeeee"
//! accent = "#333333"
//! indicator_active = "#333333"
//! indicator_inactive = "#d1d5db"
//! gallery_error_bg = "#f3f4f6"
//! ```
//!
//! Blank entries in `gallery.images` are dropped before the carousel sees
//! them, so commenting out a photo by emptying its string is harmless. The
//! same goes for account entries without a bank: they are not rendered.
//!
//! Unknown keys are rejected to catch typos early.

use crate::gesture::GestureConfig;
use crate::types::ImageRef;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Cover section at the top of the page.
    pub hero: HeroConfig,
    /// Names shown in the hero, greeting, and document title.
    pub couple: CoupleConfig,
    /// Invitation message.
    pub greeting: GreetingConfig,
    /// Gallery section content.
    pub gallery: GalleryConfig,
    /// Location and directions.
    pub venue: VenueConfig,
    /// Bank accounts for gifts.
    pub accounts: AccountsConfig,
    /// Carousel gesture thresholds.
    pub gesture: GestureSettings,
    /// Page palette.
    pub theme: ThemeConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    ///
    /// Comparisons are negated so that NaN values fail validation.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.gesture;
        if !(g.drag_threshold_px > 0.0) {
            return Err(ConfigError::Validation(
                "gesture.drag_threshold_px must be positive".into(),
            ));
        }
        if !(g.commit_threshold_px > g.drag_threshold_px) {
            return Err(ConfigError::Validation(
                "gesture.commit_threshold_px must be greater than gesture.drag_threshold_px"
                    .into(),
            ));
        }
        if g.tap_max_ms == 0 {
            return Err(ConfigError::Validation(
                "gesture.tap_max_ms must be non-zero".into(),
            ));
        }
        let opacity = self.hero.background_opacity;
        if !(0.0..=1.0).contains(&opacity) {
            return Err(ConfigError::Validation(
                "hero.background_opacity must be between 0.0 and 1.0".into(),
            ));
        }
        for (side, entries) in [
            ("groom_side", &self.accounts.groom_side),
            ("bride_side", &self.accounts.bride_side),
        ] {
            for (i, entry) in entries.iter().enumerate() {
                if entry.is_listed() && entry.number.trim().is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "accounts.{side}[{i}].number must be set when bank is set"
                    )));
                }
            }
        }
        Ok(())
    }

    /// `"Groom & Bride"`, used as the document title.
    pub fn page_title(&self) -> String {
        format!("{} & {}", self.couple.groom.name, self.couple.bride.name)
    }

    /// Names of the sections `generate` will emit, in page order.
    pub fn sections(&self) -> Vec<&'static str> {
        let mut sections = vec!["hero"];
        if self.greeting.has_content() {
            sections.push("greeting");
        }
        sections.push("gallery");
        if self.venue.has_content() {
            sections.push("venue");
        }
        if self.accounts.has_content() {
            sections.push("accounts");
        }
        sections
    }
}

/// Cover section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    pub title_line1: String,
    /// Second title line; omitted when blank.
    pub title_line2: String,
    /// Date as displayed, free-form.
    pub date_text: String,
    /// Weekday and time as displayed, free-form.
    pub time_text: String,
    /// Cover photo behind the title; none when blank.
    pub background_image: String,
    /// Cover photo opacity, 0.0 to 1.0.
    pub background_opacity: f32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            title_line1: "We're getting".to_string(),
            title_line2: "married".to_string(),
            date_text: String::new(),
            time_text: String::new(),
            background_image: String::new(),
            background_opacity: 0.3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoupleConfig {
    pub groom: PersonConfig,
    pub bride: PersonConfig,
}

impl Default for CoupleConfig {
    fn default() -> Self {
        Self {
            groom: PersonConfig::named("Groom", "son"),
            bride: PersonConfig::named("Bride", "daughter"),
        }
    }
}

/// One half of the couple and their parents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PersonConfig {
    pub name: String,
    pub father: String,
    pub mother: String,
    /// How the person relates to the parents ("son", "eldest daughter").
    pub relation: String,
}

impl PersonConfig {
    fn named(name: &str, relation: &str) -> Self {
        Self {
            name: name.to_string(),
            father: String::new(),
            mother: String::new(),
            relation: relation.to_string(),
        }
    }

    /// `"Groom, son of Father and Mother"`, or `None` without parents.
    pub fn family_line(&self) -> Option<String> {
        let parents: Vec<&str> = [self.father.trim(), self.mother.trim()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        if parents.is_empty() {
            return None;
        }
        let relation = match self.relation.trim() {
            "" => "child",
            relation => relation,
        };
        Some(format!("{}, {} of {}", self.name, relation, parents.join(" and ")))
    }
}

/// Invitation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GreetingConfig {
    pub title: String,
    /// Message lines, rendered with line breaks.
    pub message: Vec<String>,
    /// Smaller closing lines under the message.
    pub sub_message: Vec<String>,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            title: "Invitation".to_string(),
            message: vec![
                "Two lives, one path.".to_string(),
                "We would love for you to be there as it begins.".to_string(),
            ],
            sub_message: Vec::new(),
        }
    }
}

impl GreetingConfig {
    pub fn has_content(&self) -> bool {
        self.message.iter().any(|line| !line.trim().is_empty())
    }
}

/// Gallery section settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Section heading.
    pub title: String,
    /// Hint shown over the carousel.
    pub hint: String,
    /// Image references in display order. May contain blanks.
    pub images: Vec<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: "Gallery".to_string(),
            hint: "Tap to enlarge".to_string(),
            images: Vec::new(),
        }
    }
}

impl GalleryConfig {
    /// Image references with blank entries removed.
    pub fn image_refs(&self) -> Vec<ImageRef> {
        self.images
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(ImageRef::from)
            .collect()
    }
}

/// Location section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VenueConfig {
    pub title: String,
    /// Venue name. The section is skipped while this is blank.
    pub name: String,
    pub hall: String,
    pub address: String,
    pub address_detail: String,
    /// Static map picture; none when blank.
    pub map_image: String,
    /// External map services, rendered as links.
    pub map_links: Vec<MapLink>,
    /// One line per mode of transport.
    pub transportation: Vec<String>,
    pub bus_info: String,
}

impl Default for VenueConfig {
    fn default() -> Self {
        Self {
            title: "Location".to_string(),
            name: String::new(),
            hall: String::new(),
            address: String::new(),
            address_detail: String::new(),
            map_image: String::new(),
            map_links: Vec::new(),
            transportation: Vec::new(),
            bus_info: String::new(),
        }
    }
}

impl VenueConfig {
    pub fn has_content(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapLink {
    pub label: String,
    pub url: String,
}

/// Gift account section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccountsConfig {
    pub title: String,
    pub groom_label: String,
    pub bride_label: String,
    pub groom_side: Vec<AccountEntry>,
    pub bride_side: Vec<AccountEntry>,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            title: "Sending Your Heart".to_string(),
            groom_label: "Groom's side".to_string(),
            bride_label: "Bride's side".to_string(),
            groom_side: Vec::new(),
            bride_side: Vec::new(),
        }
    }
}

impl AccountsConfig {
    pub fn has_content(&self) -> bool {
        self.groom_side
            .iter()
            .chain(&self.bride_side)
            .any(AccountEntry::is_listed)
    }
}

/// One bank account. Entries without a bank are skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccountEntry {
    /// "Groom", "Father", ...
    pub role: String,
    pub name: String,
    pub bank: String,
    pub number: String,
    pub holder: String,
}

impl AccountEntry {
    pub fn is_listed(&self) -> bool {
        !self.bank.trim().is_empty()
    }
}

/// Gesture thresholds as written in `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GestureSettings {
    pub drag_threshold_px: f32,
    pub commit_threshold_px: f32,
    pub tap_max_ms: u64,
}

impl Default for GestureSettings {
    fn default() -> Self {
        let defaults = GestureConfig::default();
        Self {
            drag_threshold_px: defaults.drag_threshold,
            commit_threshold_px: defaults.commit_threshold,
            tap_max_ms: defaults.tap_window.as_millis() as u64,
        }
    }
}

impl GestureSettings {
    pub fn to_gesture_config(&self) -> GestureConfig {
        GestureConfig {
            drag_threshold: self.drag_threshold_px,
            commit_threshold: self.commit_threshold_px,
            tap_window: Duration::from_millis(self.tap_max_ms),
        }
    }
}

/// Page palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Headings, names, and arrow glyphs.
    pub text_primary: String,
    /// Body copy.
    pub text_secondary: String,
    /// Captions and secondary details.
    pub text_tertiary: String,
    pub page_bg: String,
    /// Card background behind the carousel and content blocks.
    pub card_bg: String,
    /// Card and arrow button border.
    pub card_border: String,
    /// Links and account headings.
    pub accent: String,
    /// Active indicator dot.
    pub indicator_active: String,
    /// Inactive indicator dots.
    pub indicator_inactive: String,
    /// Placeholder background for images that fail to load.
    pub gallery_error_bg: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            text_primary: "#333333".to_string(),
            text_secondary: "#4b5563".to_string(),
            text_tertiary: "#6b7280".to_string(),
            page_bg: "#fafaf9".to_string(),
            card_bg: "#ffffff".to_string(),
            card_border: "#eeeeee".to_string(),
            accent: "#333333".to_string(),
            indicator_active: "#333333".to_string(),
            indicator_inactive: "#d1d5db".to_string(),
            gallery_error_bg: "#f3f4f6".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, so arrays
///   such as `gallery.images` are replaced, never appended to.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`. Used by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Invite Configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Cover
# ---------------------------------------------------------------------------
[hero]
title_line1 = "We're getting"
# Second title line. Leave blank for a single line.
title_line2 = "married"

# Date and time as displayed, free-form.
date_text = ""
time_text = ""

# Optional cover photo behind the title, and its opacity (0.0 - 1.0).
background_image = ""
background_opacity = 0.3

# ---------------------------------------------------------------------------
# The couple
# ---------------------------------------------------------------------------
# Parents are optional. With at least one parent set, the greeting ends
# with a "Name, relation of Father and Mother" line.
[couple.groom]
name = "Groom"
father = ""
mother = ""
relation = "son"

[couple.bride]
name = "Bride"
father = ""
mother = ""
relation = "daughter"

# ---------------------------------------------------------------------------
# Greeting
# ---------------------------------------------------------------------------
[greeting]
title = "Invitation"
# One string per line. The section is skipped when all lines are blank.
message = [
    "Two lives, one path.",
    "We would love for you to be there as it begins.",
]
sub_message = []

# ---------------------------------------------------------------------------
# Gallery section
# ---------------------------------------------------------------------------
[gallery]
# Section heading.
title = "Gallery"

# Hint shown over the carousel.
hint = "Tap to enlarge"

# Image paths or URLs, in display order. Blank entries are skipped.
images = []

# ---------------------------------------------------------------------------
# Location
# ---------------------------------------------------------------------------
[venue]
title = "Location"
# The section is skipped while name is blank.
name = ""
hall = ""
address = ""
address_detail = ""

# Static map picture shown above the links.
map_image = ""

# External map services, e.g.
# map_links = [{ label = "Google Maps", url = "https://maps.google.com/?q=..." }]
map_links = []

# One line per mode of transport.
transportation = []
bus_info = ""

# ---------------------------------------------------------------------------
# Gift accounts
# ---------------------------------------------------------------------------
[accounts]
title = "Sending Your Heart"
groom_label = "Groom's side"
bride_label = "Bride's side"

# Entries without a bank are skipped, e.g.
# groom_side = [
#     { role = "Groom", name = "Groom", bank = "Bank", number = "000-000", holder = "Groom" },
# ]
groom_side = []
bride_side = []

# ---------------------------------------------------------------------------
# Carousel gestures (shared by touch and mouse)
# ---------------------------------------------------------------------------
[gesture]
# Horizontal movement (px) after which a press is a drag, not a tap.
drag_threshold_px = 20.0

# Horizontal movement (px) after which the slide changes, without waiting
# for release. Must be greater than drag_threshold_px.
commit_threshold_px = 40.0

# A press released within this many milliseconds, without dragging,
# opens the full-screen viewer.
tap_max_ms = 200

# ---------------------------------------------------------------------------
# Palette
# ---------------------------------------------------------------------------
[theme]
text_primary = "#333333"
text_secondary = "#4b5563"
text_tertiary = "#6b7280"
page_bg = "#fafaf9"
card_bg = "#ffffff"
card_border = "#eeeeee"
accent = "#333333"
indicator_active = "#333333"
indicator_inactive = "#d1d5db"
gallery_error_bg = "#f3f4f6"
"##
}

/// Generate CSS custom properties from the theme.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --color-text-primary: {text_primary};
    --color-text-secondary: {text_secondary};
    --color-text-tertiary: {text_tertiary};
    --color-page-bg: {page_bg};
    --color-card-bg: {card_bg};
    --color-card-border: {card_border};
    --color-accent: {accent};
    --color-indicator-active: {indicator_active};
    --color-indicator-inactive: {indicator_inactive};
    --color-gallery-error-bg: {gallery_error_bg};
}}"#,
        text_primary = theme.text_primary,
        text_secondary = theme.text_secondary,
        text_tertiary = theme.text_tertiary,
        page_bg = theme.page_bg,
        card_bg = theme.card_bg,
        card_border = theme.card_border,
        accent = theme.accent,
        indicator_active = theme.indicator_active,
        indicator_inactive = theme.indicator_inactive,
        gallery_error_bg = theme.gallery_error_bg,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_matches_gesture_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.gesture.drag_threshold_px, 20.0);
        assert_eq!(config.gesture.commit_threshold_px, 40.0);
        assert_eq!(config.gesture.tap_max_ms, 200);
        assert_eq!(config.gesture.to_gesture_config(), GestureConfig::default());
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[gallery]
images = ["a.jpg", "b.jpg"]
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.gallery.images.len(), 2);
        // Defaults preserved
        assert_eq!(config.gallery.title, "Gallery");
        assert_eq!(config.theme.card_bg, "#ffffff");
    }

    #[test]
    fn image_refs_drop_blanks() {
        let gallery = GalleryConfig {
            images: vec![
                "01.jpg".to_string(),
                "".to_string(),
                "   ".to_string(),
                " 02.jpg ".to_string(),
            ],
            ..GalleryConfig::default()
        };
        let refs = gallery.image_refs();
        assert_eq!(refs, vec![ImageRef::from("01.jpg"), ImageRef::from("02.jpg")]);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let toml = r##"
[gesture]
swipe_velocity = 3.0
"##;
        assert!(toml::from_str::<SiteConfig>(toml).is_err());
    }

    #[test]
    fn validate_rejects_commit_below_drag() {
        let mut config = SiteConfig::default();
        config.gesture.commit_threshold_px = 10.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("commit_threshold_px"));
    }

    #[test]
    fn validate_rejects_zero_tap_window() {
        let mut config = SiteConfig::default();
        config.gesture.tap_max_ms = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_nan_threshold() {
        let mut config = SiteConfig::default();
        config.gesture.drag_threshold_px = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn merge_toml_overrides_nested_keys() {
        let base: toml::Value = toml::from_str("[a]\nx = 1\ny = 2\n").unwrap();
        let overlay: toml::Value = toml::from_str("[a]\ny = 3\n").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"]["x"].as_integer(), Some(1));
        assert_eq!(merged["a"]["y"].as_integer(), Some(3));
    }

    #[test]
    fn generate_css_uses_theme_colors() {
        let mut theme = ThemeConfig::default();
        theme.indicator_active = "#d4a373".to_string();
        let css = generate_theme_css(&theme);
        assert!(css.contains("--color-indicator-active: #d4a373"));
        assert!(css.contains("--color-card-bg: #ffffff"));
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        config.validate().unwrap();
        assert_eq!(config.gallery.title, SiteConfig::default().gallery.title);
        assert_eq!(config.gesture.tap_max_ms, 200);
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert!(config.gallery.images.is_empty());
        assert_eq!(config.gesture.commit_threshold_px, 40.0);
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[gallery]
title = "Our Moments"
images = ["images/01.jpg", "", "images/02.jpg"]

[gesture]
tap_max_ms = 250
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.gallery.title, "Our Moments");
        assert_eq!(config.gallery.image_refs().len(), 2);
        assert_eq!(config.gesture.tap_max_ms, 250);
        // Unspecified values should be defaults
        assert_eq!(config.gesture.drag_threshold_px, 20.0);
    }

    #[test]
    fn load_config_rejects_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[gallery\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn load_config_validates_merged_result() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[gesture]\ndrag_threshold_px = 50.0\n",
        )
        .unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    // =========================================================================
    // Page sections
    // =========================================================================

    #[test]
    fn parse_page_sections() {
        let toml = r##"
[hero]
date_text = "2026. 6. 6"

[couple.groom]
name = "Minho"
father = "Jaesung"
mother = "Eunji"

[venue]
name = "Riverside Hall"
address = "12 River Rd"
map_links = [{ label = "Google Maps", url = "https://maps.example/?q=riverside" }]
transportation = ["Subway: Line 2, exit 4", "Parking: 2 hours free"]

[accounts]
groom_side = [
    { role = "Groom", name = "Minho", bank = "Hana", number = "123-456", holder = "Minho" },
    { role = "Father", name = "Jaesung" },
]
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        config.validate().unwrap();
        assert_eq!(config.hero.date_text, "2026. 6. 6");
        assert_eq!(config.hero.title_line1, "We're getting");
        assert_eq!(config.couple.groom.name, "Minho");
        assert_eq!(config.venue.map_links[0].label, "Google Maps");
        assert_eq!(config.venue.transportation.len(), 2);
        assert_eq!(config.accounts.groom_side.len(), 2);
        assert!(!config.accounts.groom_side[1].is_listed());
        assert_eq!(config.accounts.title, "Sending Your Heart");
    }

    #[test]
    fn default_couple_names_and_title() {
        let config = SiteConfig::default();
        assert_eq!(config.couple.bride.relation, "daughter");
        assert_eq!(config.page_title(), "Groom & Bride");
    }

    #[test]
    fn family_line_needs_a_parent() {
        let mut person = PersonConfig {
            name: "Minho".to_string(),
            relation: "eldest son".to_string(),
            ..PersonConfig::default()
        };
        assert_eq!(person.family_line(), None);

        person.mother = "Eunji".to_string();
        assert_eq!(
            person.family_line().as_deref(),
            Some("Minho, eldest son of Eunji")
        );

        person.father = "Jaesung".to_string();
        person.relation = String::new();
        assert_eq!(
            person.family_line().as_deref(),
            Some("Minho, child of Jaesung and Eunji")
        );
    }

    #[test]
    fn sections_follow_content() {
        let mut config = SiteConfig::default();
        assert_eq!(config.sections(), vec!["hero", "greeting", "gallery"]);

        config.greeting.message = vec!["  ".to_string()];
        config.venue.name = "Riverside Hall".to_string();
        config.accounts.bride_side.push(AccountEntry {
            bank: "Hana".to_string(),
            number: "1".to_string(),
            ..AccountEntry::default()
        });
        assert_eq!(
            config.sections(),
            vec!["hero", "gallery", "venue", "accounts"]
        );
    }

    #[test]
    fn validate_rejects_account_without_number() {
        let mut config = SiteConfig::default();
        config.accounts.bride_side.push(AccountEntry {
            bank: "Hana".to_string(),
            ..AccountEntry::default()
        });
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("accounts.bride_side[0].number"));
    }

    #[test]
    fn validate_rejects_out_of_range_opacity() {
        let mut config = SiteConfig::default();
        config.hero.background_opacity = 1.5;
        assert!(config.validate().is_err());
        config.hero.background_opacity = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_section_keys_are_rejected() {
        assert!(toml::from_str::<SiteConfig>("[venue]\nparking = \"yes\"\n").is_err());
        assert!(toml::from_str::<SiteConfig>("[couple.groom]\nage = 30\n").is_err());
    }

    #[test]
    fn stock_config_matches_default_sections() {
        let stock: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(stock.hero.title_line2, defaults.hero.title_line2);
        assert_eq!(stock.couple.bride.relation, defaults.couple.bride.relation);
        assert_eq!(stock.greeting.message, defaults.greeting.message);
        assert_eq!(stock.accounts.groom_label, defaults.accounts.groom_label);
        assert_eq!(stock.theme.page_bg, defaults.theme.page_bg);
    }

    #[test]
    fn load_config_replaces_arrays_from_stock() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[greeting]\nmessage = [\"Just one line\"]\n",
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.greeting.message, vec!["Just one line".to_string()]);
        assert_eq!(config.greeting.title, "Invitation");
    }
}
