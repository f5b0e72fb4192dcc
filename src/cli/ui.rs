use crate::core::currency::CurrencyCatalog;
use crate::core::state::{Selection, UiState, View};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    ResultValue,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::ResultValue => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Renders the catalog as a table, marking the selected currencies.
pub fn catalog_table(catalog: &CurrencyCatalog, selection: &Selection) -> Table {
    let mut table = new_styled_table();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Name"),
        header_cell("Symbol"),
        header_cell("Selected"),
    ]);

    for currency in catalog.iter() {
        let marker = match (
            selection.from.as_deref() == Some(currency.code.as_str()),
            selection.to.as_deref() == Some(currency.code.as_str()),
        ) {
            (true, true) => "from, to",
            (true, false) => "from",
            (false, true) => "to",
            (false, false) => "",
        };
        table.add_row(vec![
            Cell::new(&currency.code).add_attribute(Attribute::Bold),
            Cell::new(&currency.name),
            Cell::new(&currency.symbol).set_alignment(CellAlignment::Center),
            Cell::new(marker).fg(Color::Green),
        ]);
    }
    table
}

/// Describes the selected pair, e.g. `USD → EUR`. Empty sides show as `?`.
pub fn format_selection(selection: &Selection) -> String {
    format!(
        "{} → {}",
        selection.from.as_deref().unwrap_or("?"),
        selection.to.as_deref().unwrap_or("?")
    )
}

/// Confirms a selection, e.g. `From: USD - US Dollar`.
pub fn format_choice(side: &str, catalog: &CurrencyCatalog, code: &str) -> String {
    match catalog.find(code) {
        Some(currency) => format!("{side}: {}", currency.label()),
        None => format!("{side}: {code}"),
    }
}

/// Formats everything a view shows. The loading indicator is drawn by the
/// spinner, so a loading view formats to nothing.
pub fn format_view(view: &View) -> String {
    if let Some(message) = &view.error {
        return style_text(message, StyleType::Error);
    }

    let Some(result) = &view.result else {
        return String::new();
    };

    let mut output = String::new();
    if let Some(source) = &result.source_line {
        output.push_str(&format!("{}\n", style_text(source, StyleType::Subtle)));
    }
    output.push_str(&format!(
        "{}\n{}\n{}",
        style_text(&result.amount_line, StyleType::ResultValue),
        result.rate_line,
        style_text(&result.timestamp_line, StyleType::Subtle)
    ));
    output
}

pub fn print_view(view: &View) {
    let output = format_view(view);
    if !output.is_empty() {
        println!("{output}");
    }
}

/// Creates a spinner used as the loading indicator.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb
}

/// Returns a state observer that shows `pb` exactly while a conversion is in
/// flight.
pub fn spinner_observer(pb: ProgressBar) -> impl FnMut(&UiState) + Send + 'static {
    move |state: &UiState| {
        if state.is_loading() {
            pb.reset();
            pb.enable_steady_tick(Duration::from_millis(80));
        } else if !pb.is_finished() {
            pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::currency::Currency;
    use crate::core::state::ResultView;

    fn plain(text: &str) -> String {
        console::strip_ansi_codes(text).to_string()
    }

    #[test]
    fn test_format_error_view() {
        let view = View {
            submit_enabled: true,
            loading: false,
            result: None,
            error: Some("Please select a currency to convert to".to_string()),
        };
        assert_eq!(
            plain(&format_view(&view)),
            "Please select a currency to convert to"
        );
    }

    #[test]
    fn test_format_result_view() {
        let view = View {
            submit_enabled: true,
            loading: false,
            result: Some(ResultView {
                converted_amount: "92.50".to_string(),
                exchange_rate: "0.925000".to_string(),
                amount_line: "€ 92.50 EUR".to_string(),
                source_line: Some("$ 100.00 USD".to_string()),
                rate_line: "1 USD = 0.925000 EUR".to_string(),
                timestamp_line: "Last updated: 1/1/2024, 12:00:00 AM".to_string(),
            }),
            error: None,
        };
        assert_eq!(
            plain(&format_view(&view)),
            "$ 100.00 USD\n€ 92.50 EUR\n1 USD = 0.925000 EUR\nLast updated: 1/1/2024, 12:00:00 AM"
        );
    }

    #[test]
    fn test_loading_and_idle_views_are_empty() {
        let view = View {
            submit_enabled: false,
            loading: true,
            result: None,
            error: None,
        };
        assert!(format_view(&view).is_empty());
    }

    #[test]
    fn test_format_selection() {
        let mut selection = Selection {
            from: Some("USD".to_string()),
            to: None,
        };
        assert_eq!(format_selection(&selection), "USD → ?");
        selection.swap();
        assert_eq!(format_selection(&selection), "? → USD");
    }

    #[test]
    fn test_format_choice_uses_label() {
        let catalog = CurrencyCatalog::new(vec![Currency {
            code: "GBP".to_string(),
            name: "British Pound".to_string(),
            symbol: "£".to_string(),
        }]);
        assert_eq!(
            format_choice("From", &catalog, "gbp"),
            "From: GBP - British Pound"
        );
        assert_eq!(format_choice("To", &catalog, "XYZ"), "To: XYZ");
    }

    #[test]
    fn test_catalog_table_marks_selection() {
        let catalog = CurrencyCatalog::new(vec![
            Currency {
                code: "EUR".to_string(),
                name: "Euro".to_string(),
                symbol: "€".to_string(),
            },
            Currency {
                code: "USD".to_string(),
                name: "US Dollar".to_string(),
                symbol: "$".to_string(),
            },
        ]);
        let selection = Selection {
            from: Some("USD".to_string()),
            to: Some("EUR".to_string()),
        };
        let rendered = plain(&catalog_table(&catalog, &selection).to_string());
        assert!(rendered.contains("US Dollar"));
        assert!(rendered.contains("from"));
        assert!(!rendered.contains("from, to"));
    }
}
