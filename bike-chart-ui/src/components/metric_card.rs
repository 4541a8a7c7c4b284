//! Headline metric displays.

use bike_data::Totals;
use dioxus::prelude::*;

/// Group digits in threes: 1234567 -> "1,234,567".
pub(crate) fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Props, Clone, PartialEq)]
pub struct MetricCardProps {
    pub label: String,
    pub value: u64,
}

/// A single labelled number.
#[component]
pub fn MetricCard(props: MetricCardProps) -> Element {
    let value = format_count(props.value);
    rsx! {
        div {
            style: "flex: 1; padding: 12px 16px; border: 1px solid #e0e0e0; border-radius: 6px; background: #fafafa;",
            div {
                style: "font-size: 12px; color: #666; margin-bottom: 4px;",
                "{props.label}"
            }
            div {
                style: "font-size: 24px; font-weight: 600;",
                "{value}"
            }
        }
    }
}

/// The three headline metrics side by side.
#[component]
pub fn MetricRow(totals: Totals) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 12px; margin: 12px 0;",
            MetricCard { label: "Total Rides".to_string(), value: totals.total_rides }
            MetricCard { label: "Casual Rides".to_string(), value: totals.total_casual }
            MetricCard { label: "Registered Rides".to_string(), value: totals.total_registered }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::format_count;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(3292679), "3,292,679");
    }
}
