use std::fmt;
use liquid_core::{Runtime, ValueView, Value, Result as LiquidResult};
use liquid_core::parser::{FilterArguments, ParseFilter, ParameterReflection};
use liquid_core::FilterReflection;
use chrono::{NaiveDate, NaiveDateTime};

/// DateToString filter implementation: formats `pubDate` values for display
#[derive(Debug, Clone)]
pub struct DateToStringFilter;

impl fmt::Display for DateToStringFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "date_to_string")
    }
}

impl liquid_core::Filter for DateToStringFilter {
    fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> LiquidResult<Value> {
        let date_str = input.to_kstr().to_string();

        // Try ISO date (YYYY-MM-DD), then a full timestamp
        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S")
                    .ok()
                    .map(|dt| dt.date())
            });

        if let Some(date) = date {
            Ok(Value::scalar(date.format("%d %b %Y").to_string()))
        } else {
            // If can't parse, return the original string
            Ok(Value::scalar(date_str))
        }
    }
}

/// Parse filter factory for date_to_string
#[derive(Debug, Clone)]
pub struct DateToStringFilterParser;

impl FilterReflection for DateToStringFilterParser {
    fn name(&self) -> &str {
        "date_to_string"
    }

    fn description(&self) -> &str {
        "Formats an ISO date as a human-readable string (%d %b %Y)"
    }

    fn positional_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }

    fn keyword_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }
}

impl ParseFilter for DateToStringFilterParser {
    fn parse(&self, _args: FilterArguments) -> LiquidResult<Box<dyn liquid_core::Filter>> {
        Ok(Box::new(DateToStringFilter))
    }

    fn reflection(&self) -> &dyn FilterReflection {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(template: &str, date: &str) -> String {
        let parser = crate::render::filters::register_filters(
            liquid::ParserBuilder::with_stdlib()
        ).build().unwrap();
        let globals = liquid::object!({ "pubDate": date });
        parser.parse(template).unwrap().render(&globals).unwrap()
    }

    #[test]
    fn test_formats_iso_date() {
        let out = render("{{ pubDate | date_to_string }}", "2021-01-01");
        assert_eq!(out, "01 Jan 2021");
    }

    #[test]
    fn test_formats_timestamp() {
        let out = render("{{ pubDate | date_to_string }}", "2021-06-15 12:30:00");
        assert_eq!(out, "15 Jun 2021");
    }

    #[test]
    fn test_unparsable_value_passes_through() {
        let out = render("{{ pubDate | date_to_string }}", "soonish");
        assert_eq!(out, "soonish");
    }
}
