//! Response formatter - Turns API payloads into replies
//!
//! Everything here is pure: no I/O, no errors. Discord's embed limits are
//! enforced here so adapters can send cards without further checks.

use crate::domain::entities::space_weather::{reading, NOT_AVAILABLE};
use crate::domain::entities::{
    AuroraReport, CommandKind, EmbedCard, EmbedImage, ImageBlob, ImageCatalog, ImageCategory,
    ImageEntry, ImageFile, Reply,
};

pub const MAX_TITLE_LEN: usize = 256;
pub const MAX_DESCRIPTION_LEN: usize = 4096;
pub const MAX_FIELD_NAME_LEN: usize = 256;
pub const MAX_FIELD_VALUE_LEN: usize = 1024;
pub const MAX_FIELDS: usize = 25;
pub const MAX_FOOTER_LEN: usize = 2048;
/// Combined characters of title, description, field names and values, footer
pub const MAX_EMBED_TOTAL: usize = 6000;

/// Truncate to at most `max` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Clamp every part of a card to Discord's embed limits.
///
/// Fields are kept in order until the next one would push the card past
/// [`MAX_EMBED_TOTAL`]; the rest are dropped.
pub fn fit_limits(mut card: EmbedCard) -> EmbedCard {
    card.title = truncate(&card.title, MAX_TITLE_LEN);
    card.description = card.description.map(|d| truncate(&d, MAX_DESCRIPTION_LEN));

    let mut used = char_len(&card.title) + card.description.as_deref().map_or(0, char_len);
    let footer_room = MAX_FOOTER_LEN.min(MAX_EMBED_TOTAL.saturating_sub(used));
    card.footer = card.footer.map(|f| truncate(&f, footer_room));
    used += card.footer.as_deref().map_or(0, char_len);

    let fields = std::mem::take(&mut card.fields);
    for mut field in fields.into_iter().take(MAX_FIELDS) {
        field.name = truncate(&field.name, MAX_FIELD_NAME_LEN);
        field.value = truncate(&field.value, MAX_FIELD_VALUE_LEN);

        let size = char_len(&field.name) + char_len(&field.value);
        if used + size > MAX_EMBED_TOTAL {
            break;
        }
        used += size;
        card.fields.push(field);
    }
    card
}

fn percent(value: &Option<serde_json::Value>) -> String {
    match reading(value) {
        v if v == NOT_AVAILABLE => v,
        v => format!("{}%", v),
    }
}

fn with_colour(value: &Option<serde_json::Value>, colour: &Option<serde_json::Value>) -> String {
    format!("{} ({})", reading(value), reading(colour))
}

/// Embed for `aurora <lat> <lon>`
pub fn aurora_report(lat: f64, lon: f64, report: &AuroraReport) -> Reply {
    let mut card = EmbedCard::new("Aurora Information").with_field(
        "Location",
        format!("Latitude: {}°\nLongitude: {}°", lat, lon),
    );

    let probability = report.probability.clone().unwrap_or_default();
    let highest = probability.highest.clone().unwrap_or_default();
    let best_location = match (reading(&highest.lat), reading(&highest.long)) {
        (lat, lon) if lat != NOT_AVAILABLE && lon != NOT_AVAILABLE => format!("{}, {}", lat, lon),
        _ => NOT_AVAILABLE.to_string(),
    };
    card = card.with_field(
        "Aurora Probability",
        format!(
            "Overhead: {}\nWithin 1000km: {}\nBest Location: {}",
            percent(&probability.value),
            percent(&highest.value),
            best_location
        ),
    );

    let ace = report.ace.clone().unwrap_or_default();
    let colour = ace.colour.clone().unwrap_or_default();
    card = card
        .with_field(
            "Solar Activity (Kp Index)",
            format!(
                "Current: {}\n1hr Forecast: {}\n4hr Forecast: {}",
                with_colour(&ace.kp, &colour.kp),
                with_colour(&ace.kp1hour, &colour.kp1hour),
                with_colour(&ace.kp4hour, &colour.kp4hour),
            ),
        )
        .with_field(
            "Solar Wind",
            format!(
                "Speed: {} km/s\nDensity: {} p/cm³\nBz: {} nT",
                reading(&ace.speed),
                reading(&ace.density),
                reading(&ace.bz)
            ),
        );

    if let Some(updated) = report.updated_at() {
        card = card.with_footer(format!("Last updated: {}", updated));
    }

    Reply::Embed(fit_limits(card))
}

/// Titles and wording for one listing command
struct Listing {
    title: &'static str,
    noun: &'static str,
    id_hint: &'static str,
}

fn listing_for(category: &ImageCategory) -> Listing {
    match category {
        ImageCategory::Camera => Listing {
            title: "Available Aurora Cameras",
            noun: "cameras",
            id_hint: "camera_id",
        },
        ImageCategory::Chart => Listing {
            title: "Available Charts and Graphs",
            noun: "charts",
            id_hint: "chart_id",
        },
        ImageCategory::Satellite | ImageCategory::Other(_) => Listing {
            title: "Available Satellite Images",
            noun: "satellite images",
            id_hint: "image_id",
        },
    }
}

/// Human label used in listing error messages
pub fn category_label(category: &ImageCategory) -> &'static str {
    match category {
        ImageCategory::Camera => "camera",
        ImageCategory::Chart => "chart",
        ImageCategory::Satellite | ImageCategory::Other(_) => "satellite image",
    }
}

/// Embed for `cameras`, `charts` and `satellites`
pub fn image_listing(category: &ImageCategory, catalog: &ImageCatalog, prefix: &str) -> Reply {
    let listing = listing_for(category);
    let entries: Vec<(&String, &ImageEntry)> = catalog.in_category(category).collect();

    if entries.is_empty() {
        return Reply::text(format!("No {} are currently available.", listing.noun));
    }

    let mut card = EmbedCard::new(listing.title).with_description(format!(
        "Use `{}view <{}>` to view a specific {}",
        prefix,
        listing.id_hint,
        category_label(category)
    ));
    for (id, entry) in entries.iter().take(MAX_FIELDS) {
        card = card.with_field(
            entry.name.as_str(),
            format!("ID: `{}`\n{}", id, entry.description),
        );
    }

    // Fit against the longest footer this listing could carry, then write
    // the real one from the fields that survived.
    let total = entries.len();
    let showing = |shown: usize| format!("Showing {} of {}", shown, total);
    let mut card = fit_limits(card.with_footer(showing(MAX_FIELDS.min(total))));
    let shown = card.fields.len();
    card.footer = (shown < total).then(|| showing(shown));

    Reply::Embed(card)
}

/// Embed plus attachment for `view <image_id>`
pub fn image_view(id: &str, entry: &ImageEntry, blob: ImageBlob) -> Reply {
    let filename = format!("{}.{}", attachment_stem(id), blob.extension());

    let mut card = EmbedCard::new(entry.name.as_str())
        .with_image(EmbedImage::Attachment(filename.clone()))
        .with_footer(format!("Cache time: {} seconds", reading(&entry.cache)));
    if !entry.description.is_empty() {
        card = card.with_description(entry.description.as_str());
    }

    Reply::Image {
        card: fit_limits(card),
        file: ImageFile {
            filename,
            bytes: blob.bytes,
        },
    }
}

/// Discord only resolves `attachment://` names made of safe characters
fn attachment_stem(id: &str) -> String {
    let stem: String = id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if stem.is_empty() {
        "image".to_string()
    } else {
        stem
    }
}

/// Embed for `help`
pub fn help(prefix: &str) -> Reply {
    let line = |kind: CommandKind| format!("`{}{}` - {}", prefix, kind.usage(), kind.description());

    let card = EmbedCard::new("Celestia Bot Commands")
        .with_description("Here are all the available commands:")
        .with_field(
            "Aurora Commands",
            format!(
                "{}\nExample: `{}aurora 64.5 -147.5` (Fairbanks, Alaska)",
                line(CommandKind::Aurora),
                prefix
            ),
        )
        .with_field(
            "Image Commands",
            [CommandKind::Cameras, CommandKind::Charts, CommandKind::Satellites, CommandKind::View]
                .into_iter()
                .map(line)
                .collect::<Vec<_>>()
                .join("\n"),
        )
        .with_field("Help", line(CommandKind::Help))
        .with_footer("Data provided by Auroras.live");

    Reply::Embed(fit_limits(card))
}
