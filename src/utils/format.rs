/// Format a 24h change the way the dashboard labels it: `+25.00%`, `-3.10%`, `0.00%`
pub fn format_percent_change(percent_change_24h: f64) -> String {
    if percent_change_24h > 0.0 {
        format!("+{:.2}%", percent_change_24h)
    } else if percent_change_24h < 0.0 {
        format!("{:.2}%", percent_change_24h)
    } else {
        "0.00%".to_string()
    }
}

/// Format a price with precision adapted to its magnitude
pub fn format_price(price: f64) -> String {
    let magnitude = price.abs();
    if magnitude >= 1000.0 {
        format!("{:.2}", price)
    } else if magnitude >= 1.0 {
        format!("{:.4}", price)
    } else {
        format!("{:.8}", price)
    }
}
