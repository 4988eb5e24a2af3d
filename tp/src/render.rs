//! Terminal rendering for compiled plans

use colored::Colorize;

use crate::domain::{CompiledResult, DomainOptions, ItineraryDay};

/// How many options to show per domain
const SHOWN: usize = 3;

fn heading(title: &str) -> String {
    format!("\n{}\n", title.bright_cyan().bold())
}

/// Sentinel note or "none found"; None when there are options to list
fn degraded<T>(options: &DomainOptions<T>) -> Option<String> {
    if let Some(sentinel) = options.sentinel() {
        let mut line = format!("  {} {}", sentinel.name.as_str().yellow(), sentinel.note);
        if let Some(nearest) = &sentinel.nearest {
            line.push_str(&format!(" (nearest: {})", nearest));
        }
        return Some(line);
    }
    if options.items().is_empty() {
        return Some(format!("  {}", "No options found".dimmed()));
    }
    None
}

fn more<T>(options: &DomainOptions<T>) -> Option<String> {
    let extra = options.items().len().saturating_sub(SHOWN);
    (extra > 0).then(|| format!("  {}", format!("... and {} more", extra).dimmed()))
}

fn day_lines(day: &ItineraryDay) -> Vec<String> {
    let mut lines = vec![format!(
        "  {} {} - {}",
        format!("Day {}", day.day).bold(),
        day.date,
        day.theme.green()
    )];
    for (label, slot) in ["Morning", "Afternoon", "Evening"].iter().zip(day.slots()) {
        let mut line = format!("    {:<10} {} ({})", label, slot.activity, slot.time);
        if let Some(tip) = &slot.tip {
            line.push_str(&format!(" - {}", tip.dimmed()));
        }
        lines.push(line);
    }
    lines.push(format!("    {:<10} lunch at {}, dinner at {}", "Dining", day.dining.lunch, day.dining.dinner));
    lines
}

/// Multi-line text view of a compiled plan
pub fn plan_text(result: &CompiledResult) -> String {
    let request = &result.request;
    let mut lines = vec![format!(
        "{} {} → {}",
        "Trip".bright_cyan().bold(),
        request.origin.bold(),
        request.destination.bold()
    )];
    lines.push(format!(
        "{} to {} | {} | {} traveler(s) | plan {}",
        request.departure_date,
        request.return_date,
        request.budget_tier.label(),
        request.traveler_count,
        result.plan_id.dimmed()
    ));

    lines.push(heading("Flights"));
    match degraded(&result.flights) {
        Some(line) => lines.push(line),
        None => {
            for f in result.flights.items().iter().take(SHOWN) {
                lines.push(format!(
                    "  {} {} {}→{} {}-{} {} {} - {}",
                    f.airline,
                    f.flight_number,
                    f.origin_code,
                    f.destination_code,
                    f.departure_time,
                    f.arrival_time,
                    f.duration,
                    f.stop_type,
                    f.price.to_string().green()
                ));
            }
            lines.extend(more(&result.flights));
        }
    }

    lines.push(heading("Hotels"));
    match degraded(&result.hotels) {
        Some(line) => lines.push(line),
        None => {
            for h in result.hotels.items().iter().take(SHOWN) {
                lines.push(format!(
                    "  {} ({}★, {:.1}) {} - {}/night, {} total",
                    h.name,
                    h.stars,
                    h.rating,
                    h.location,
                    h.price_per_night.to_string().green(),
                    h.total_price
                ));
            }
            lines.extend(more(&result.hotels));
        }
    }

    lines.push(heading("Trains"));
    match degraded(&result.trains) {
        Some(line) => lines.push(line),
        None => {
            for t in result.trains.items().iter().take(SHOWN) {
                lines.push(format!(
                    "  {} ({}) {} {}→{} {}-{} {} {} - {} [{}]",
                    t.train_name,
                    t.train_number,
                    t.train_type,
                    t.origin_code,
                    t.destination_code,
                    t.departure_time,
                    t.arrival_time,
                    t.duration,
                    t.class_code,
                    t.fare.to_string().green(),
                    t.availability
                ));
                if let Some(note) = &t.note {
                    lines.push(format!("    {}", note.dimmed()));
                }
            }
            lines.extend(more(&result.trains));
        }
    }

    lines.push(heading("Road"));
    match degraded(&result.road_options) {
        Some(line) => lines.push(line),
        None => {
            for r in result.road_options.items().iter().take(SHOWN) {
                lines.push(format!(
                    "  {} {} {} {} - {} total",
                    r.operator,
                    r.vehicle_type,
                    r.departure_time,
                    r.duration,
                    r.total_fare.to_string().green()
                ));
            }
            lines.extend(more(&result.road_options));
        }
    }

    lines.push(heading("Itinerary"));
    for day in &result.itinerary {
        lines.extend(day_lines(day));
    }

    lines.join("\n")
}
