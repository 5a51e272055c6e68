//! Plain-text rendering of the forecast view

use std::fmt::Write;

use application::{CityHeader, DayCard, ForecastView, TITLE};

/// Shown on stderr while a fetch is in flight
pub const LOADING_MESSAGE: &str = "در حال دریافت اطلاعات...";

fn render_header(out: &mut String, city: &CityHeader) {
    let _ = writeln!(out, "شهر: {}", city.name);
    let _ = writeln!(out, "جمعیت: {}", city.population);
}

fn render_card(out: &mut String, card: &DayCard) {
    let _ = writeln!(out, "{} | {}", card.day_name, card.persian_date);
    let _ = writeln!(out, "  {}", card.description);
    let _ = writeln!(out, "  {}", card.temperature_label());
    let _ = writeln!(out, "  رطوبت: {}", card.humidity);
    let _ = writeln!(out, "  {}", card.icon_url);
}

/// Render the whole view: title, optional city header, then cards or the
/// no-results message
pub fn render_view(view: &ForecastView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");

    if let Some(city) = &view.city {
        render_header(&mut out, city);
    }

    if let Some(message) = view.empty_message() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{message}");
        return out;
    }

    for card in &view.cards {
        let _ = writeln!(out);
        render_card(&mut out, card);
    }
    out
}
