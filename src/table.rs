use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use crate::model::{Plan, Recommendation, WindowBasis};

fn amount(p: f64) -> String {
    if p.fract() == 0.0 {
        format!("{p:.0}")
    } else {
        format!("{p:.2}")
    }
}

pub fn format_price(price: Option<f64>, currency: &str) -> String {
    let p = match price {
        Some(p) => amount(p),
        None => return "—".to_string(),
    };
    match currency {
        "USD" => format!("${p}"),
        "EUR" => format!("€{p}"),
        "GBP" => format!("£{p}"),
        "JPY" | "CNY" => format!("¥{p}"),
        "KRW" => format!("₩{p}"),
        "INR" => format!("₹{p}"),
        "THB" => format!("฿{p}"),
        _ => format!("{p} {currency}"),
    }
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn stops(plan: &Plan) -> String {
    match plan.flight.layovers() {
        0 => "Nonstop".to_string(),
        n => n.to_string(),
    }
}

fn hotel_label(plan: &Plan) -> String {
    let name = plan.hotel.hotel_name.as_deref().unwrap_or("—");
    format!(
        "{name} ({}★, {})",
        plan.hotel.star_rating, plan.hotel.review_score
    )
}

fn plans_table(rec: &Recommendation, currency: &str) -> Table {
    let mut table = new_table(vec![
        "Plan", "Flight", "Stops", "Depart", "Hotel", "Hotel total", "Total", "Δ vs lowest",
    ]);

    let rows = [("Lowest", &rec.lowest_plan), ("Comfort", &rec.comfort_plan)];
    for (label, plan) in rows {
        let Some(plan) = plan else {
            table.add_row(vec![label, "—", "—", "—", "—", "—", "—", "—"]);
            continue;
        };
        let delta = plan
            .delta_vs_lowest
            .map(|d| format_price(Some(d), currency))
            .unwrap_or_else(|| "—".to_string());
        table.add_row(vec![
            label.to_string(),
            format_price(Some(plan.flight.price), currency),
            stops(plan),
            plan.flight.depart_time.clone().unwrap_or_else(|| "—".to_string()),
            hotel_label(plan),
            format_price(Some(plan.hotel.total_price), currency),
            format_price(Some(plan.total_price), currency),
            delta,
        ]);
    }
    table
}

fn insights_table(rec: &Recommendation, currency: &str) -> Table {
    let mut table = new_table(vec!["Signal", "Value"]);

    table.add_row(vec!["Trip length".to_string(), format!("{} days", rec.trip_length_days)]);

    let window = match &rec.travel_window {
        Some(w) => {
            let basis = match rec.travel_window_basis {
                WindowBasis::FlightPlusHotel => "flight+hotel",
                WindowBasis::FlightOnly => "flight only",
            };
            format!(
                "{} → {} ({}, {basis})",
                w.start_date,
                w.end_date,
                format_price(Some(w.estimated_flight_cost), currency)
            )
        }
        None => "—".to_string(),
    };
    table.add_row(vec!["Travel window".to_string(), window]);

    let booking = match &rec.booking_window {
        Some(b) => format!(
            "P10 {} · P50 {} · min {}",
            format_price(Some(b.window.p10), currency),
            format_price(Some(b.window.p50), currency),
            format_price(Some(b.window.min), currency)
        ),
        None => "—".to_string(),
    };
    table.add_row(vec!["Booking band".to_string(), booking]);

    let trend = match &rec.price_trend {
        Some(t) => format!(
            "{} ({:+}/day, volatility {})",
            t.trend.trend, t.trend.slope_per_day, t.trend.volatility
        ),
        None => "—".to_string(),
    };
    table.add_row(vec!["Price trend".to_string(), trend]);

    let best_date = match &rec.trip_cost_summary {
        Some(c) => format!(
            "{} ({}, median {})",
            c.best_date,
            format_price(Some(c.min_total_price), currency),
            format_price(Some(c.median_total_price), currency)
        ),
        None => "—".to_string(),
    };
    table.add_row(vec!["Best combined date".to_string(), best_date]);

    table
}

pub fn render(rec: &Recommendation, currency: &str) -> String {
    let mut out = String::new();
    out.push_str(&plans_table(rec, currency).to_string());
    out.push('\n');
    out.push_str(&insights_table(rec, currency).to_string());

    if !rec.explanations.is_empty() {
        out.push('\n');
        for line in &rec.explanations {
            out.push_str("• ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

/// One line per signal, for scripts and agents.
pub fn render_compact(rec: &Recommendation, currency: &str) -> String {
    let plan_line = |label: &str, plan: &Option<Plan>| match plan {
        Some(p) => format!(
            "{label} | {} | flight {} ({} stops) | hotel {}",
            format_price(Some(p.total_price), currency),
            format_price(Some(p.flight.price), currency),
            p.flight.layovers(),
            format_price(Some(p.hotel.total_price), currency)
        ),
        None => format!("{label} | —"),
    };

    let mut lines = vec![
        plan_line("lowest", &rec.lowest_plan),
        plan_line("comfort", &rec.comfort_plan),
    ];
    if let Some(w) = &rec.travel_window {
        lines.push(format!(
            "window | {}>{} | {} | {} days",
            w.start_date,
            w.end_date,
            format_price(Some(w.estimated_flight_cost), currency),
            rec.trip_length_days
        ));
    }
    if let Some(t) = &rec.price_trend {
        lines.push(format!("trend | {} | volatility {}", t.trend.trend, t.trend.volatility));
    }
    lines.join("\n")
}
