//! HTML generation for the invitation page.
//!
//! Renders the page sections in order (hero, greeting, gallery, venue,
//! accounts) and writes the result to the output directory. Sections whose
//! config is blank are skipped; see [`SiteConfig::sections`].
//!
//! The output is a server-rendered snapshot of one [`RenderState`]: no
//! script is emitted. The strip offset, arrow visibility, and viewer modal
//! all come straight from the controller snapshot, and every carousel
//! control names the slide it leads to in `data-jump`. A front-end binding
//! wires those attributes to [`Gallery::jump_to`] and pointer input to
//! [`Gallery::handle`], then re-renders from the new state.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! └── index.html     # Invitation page (theme CSS inlined)
//! ```
//!
//! ## Markup contract
//!
//! - `.carousel-strip` carries `transform: translateX(-N%)` for slide `N`.
//! - Arrow controls appear only when a step in their direction is possible;
//!   each carries `data-jump` with its target index.
//! - Indicator dots are rendered only for more than one image.
//! - `.viewer` is present only while the viewer is open.
//! - An empty gallery renders its heading and no interactive controls.
//! - Accounts use `<details>`, so expanding one needs no script.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.

use crate::carousel::RenderState;
use crate::config::{
    self, AccountEntry, AccountsConfig, CoupleConfig, GalleryConfig, GreetingConfig, HeroConfig,
    PersonConfig, SiteConfig, VenueConfig,
};
use crate::gallery::Gallery;
use crate::types::ImageRef;
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Render the invitation page for `config` into `output_dir/index.html`.
///
/// Returns the path of the written file.
pub fn generate(config: &SiteConfig, output_dir: &Path) -> Result<PathBuf, GenerateError> {
    config.validate()?;
    let gallery = Gallery::from_config(config);
    let css = format!("{}\n\n{}", config::generate_theme_css(&config.theme), CSS_STATIC);

    fs::create_dir_all(output_dir)?;
    let page = render_page(
        config,
        &gallery.render_state(),
        gallery.carousel().images(),
        &css,
    );
    let index_path = output_dir.join("index.html");
    fs::write(&index_path, page.into_string())?;
    tracing::info!(
        path = %index_path.display(),
        images = gallery.carousel().len(),
        sections = ?config.sections(),
        "page written"
    );
    Ok(index_path)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (css) }
            }
            body {
                main.page {
                    (content)
                }
            }
        }
    }
}

/// Renders the full page. The gallery reflects `state`.
pub fn render_page(
    config: &SiteConfig,
    state: &RenderState,
    images: &[ImageRef],
    css: &str,
) -> Markup {
    let content = html! {
        (render_hero(&config.hero, &config.couple))
        @if config.greeting.has_content() {
            (render_greeting(&config.greeting, &config.couple))
        }
        (render_gallery(state, images, &config.gallery))
        @if config.venue.has_content() {
            (render_venue(&config.venue, &config.hero))
        }
        @if config.accounts.has_content() {
            (render_accounts(&config.accounts))
        }
    };
    base_document(&config.page_title(), css, content)
}

/// Cover: title lines, the couple, date and time.
fn render_hero(hero: &HeroConfig, couple: &CoupleConfig) -> Markup {
    let background = (!hero.background_image.trim().is_empty()).then(|| {
        format!(
            "background-image: url('{}'); opacity: {};",
            hero.background_image.trim(),
            hero.background_opacity
        )
    });
    html! {
        section.page-cover id="hero" {
            @if let Some(style) = background {
                div.cover-background style=(style) {}
            }
            h1.cover-title {
                (hero.title_line1)
                @if !hero.title_line2.trim().is_empty() {
                    span.cover-title-line { (hero.title_line2) }
                }
            }
            p.cover-names {
                span.name { (couple.groom.name) }
                span.amp { "&" }
                span.name { (couple.bride.name) }
            }
            @if !hero.date_text.trim().is_empty() || !hero.time_text.trim().is_empty() {
                p.cover-date {
                    (hero.date_text)
                    @if !hero.time_text.trim().is_empty() {
                        " " (hero.time_text)
                    }
                }
            }
        }
    }
}

fn render_lines(lines: &[String]) -> Markup {
    html! {
        @for (i, line) in lines.iter().enumerate() {
            @if i > 0 { br; }
            (line)
        }
    }
}

/// Invitation message and the couple's family lines.
fn render_greeting(greeting: &GreetingConfig, couple: &CoupleConfig) -> Markup {
    let families: Vec<String> = [&couple.groom, &couple.bride]
        .into_iter()
        .filter_map(PersonConfig::family_line)
        .collect();
    html! {
        section.content-section.greeting-section id="greeting" {
            h2 { (greeting.title) }
            div.content-card {
                p.greeting-message { (render_lines(&greeting.message)) }
                @if !greeting.sub_message.is_empty() {
                    p.greeting-sub { (render_lines(&greeting.sub_message)) }
                }
                @if !families.is_empty() {
                    div.families {
                        @for line in &families {
                            p { (line) }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the gallery section: carousel, arrows, dots, and viewer.
pub fn render_gallery(state: &RenderState, images: &[ImageRef], gallery: &GalleryConfig) -> Markup {
    html! {
        section.gallery-section id="gallery" {
            h2 { (gallery.title) }
            @if !images.is_empty() {
                div.gallery-card {
                    (render_carousel(state, images, &gallery.hint))
                    (render_indicators(state.current_index, images.len(), true))
                }
            }
        }
        @if state.viewer_open {
            (render_viewer(state, images))
        }
    }
}

fn render_carousel(state: &RenderState, images: &[ImageRef], hint: &str) -> Markup {
    let strip_style = format!("transform: translateX({}%);", state.strip_offset_percent());
    html! {
        div.carousel data-index=(state.current_index) data-len=(state.len) {
            div.carousel-frame {
                div.carousel-strip style=(strip_style) {
                    @for (index, image) in images.iter().enumerate() {
                        div.slide {
                            img src=(image.as_str()) alt={ "Gallery " (index + 1) } draggable="false";
                            div.slide-fallback { "Photo " (index + 1) }
                        }
                    }
                }
            }
            div.carousel-hint { (hint) }
            @if state.has_prev {
                button.arrow.prev type="button" data-jump=(state.current_index - 1) aria-label="Previous photo" { "‹" }
            }
            @if state.has_next {
                button.arrow.next type="button" data-jump=(state.current_index + 1) aria-label="Next photo" { "›" }
            }
        }
    }
}

/// Indicator dots. Interactive dots are buttons that jump to their slide;
/// the viewer's dots are passive.
fn render_indicators(active: usize, len: usize, interactive: bool) -> Markup {
    html! {
        @if len > 1 {
            div.indicators {
                @for index in 0..len {
                    @let class = if index == active { "dot active" } else { "dot" };
                    @if interactive {
                        button class=(class) type="button" data-jump=(index)
                            aria-label={ "Go to photo " (index + 1) } {}
                    } @else {
                        div class=(class) {}
                    }
                }
            }
        }
    }
}

fn render_viewer(state: &RenderState, images: &[ImageRef]) -> Markup {
    html! {
        @if let Some(image) = images.get(state.viewer_index) {
            div.viewer role="dialog" data-index=(state.viewer_index) {
                img src=(image.as_str()) alt="Enlarged photo";
                button.viewer-close type="button" aria-label="Close" { "×" }
                (render_indicators(state.viewer_index, images.len(), false))
            }
        }
    }
}

/// Venue name, address, map, and directions.
fn render_venue(venue: &VenueConfig, hero: &HeroConfig) -> Markup {
    html! {
        section.content-section.venue-section id="location" {
            h2 { (venue.title) }
            div.content-card {
                p.venue-name { (venue.name) }
                @if !venue.hall.trim().is_empty() {
                    p.venue-hall { (venue.hall) }
                }
                @if !hero.date_text.trim().is_empty() {
                    p.venue-date { (hero.date_text) " " (hero.time_text) }
                }
                @if !venue.address.trim().is_empty() {
                    p.venue-address {
                        (venue.address)
                        @if !venue.address_detail.trim().is_empty() {
                            br;
                            span.venue-address-detail { (venue.address_detail) }
                        }
                    }
                }
                @if !venue.map_image.trim().is_empty() {
                    img.venue-map src=(venue.map_image.trim()) alt={ (venue.name) " map" };
                }
                @if !venue.map_links.is_empty() {
                    div.map-links {
                        @for link in &venue.map_links {
                            a href=(link.url) target="_blank" rel="noopener noreferrer" { (link.label) }
                        }
                    }
                }
                @if !venue.transportation.is_empty() || !venue.bus_info.trim().is_empty() {
                    div.transportation {
                        p.transportation-title { "Getting there" }
                        @for item in &venue.transportation {
                            p { (item) }
                        }
                        @if !venue.bus_info.trim().is_empty() {
                            p.bus-info { (venue.bus_info) }
                        }
                    }
                }
            }
        }
    }
}

/// Gift accounts grouped by side. Unlisted entries are skipped.
fn render_accounts(accounts: &AccountsConfig) -> Markup {
    html! {
        section.content-section.accounts-section id="account" {
            h2 { (accounts.title) }
            div.content-card {
                (render_account_side(&accounts.groom_label, &accounts.groom_side))
                (render_account_side(&accounts.bride_label, &accounts.bride_side))
            }
        }
    }
}

fn render_account_side(label: &str, entries: &[AccountEntry]) -> Markup {
    let listed: Vec<&AccountEntry> = entries.iter().filter(|e| e.is_listed()).collect();
    html! {
        @if !listed.is_empty() {
            div.account-side {
                p.account-side-label { (label) }
                div.account-grid {
                    @for entry in listed {
                        details.account {
                            summary {
                                span.account-role { (entry.role) }
                                " "
                                span.account-name { (entry.name) }
                            }
                            p.account-bank { (entry.bank) }
                            p.account-number { (entry.number) }
                            @if !entry.holder.trim().is_empty() {
                                p.account-holder { "Holder: " (entry.holder) }
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
