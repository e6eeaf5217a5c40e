//! Length, weight, volume and time conversion by base-unit factors.

use serde::Deserialize;
use toolbox_core::{ExecutionResult, Tool};

use crate::core::{ToolConfig, format_trimmed, invalid_input, round_to};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Length,
    Weight,
    Volume,
    Time,
}

impl Quantity {
    pub fn as_str(self) -> &'static str {
        match self {
            Quantity::Length => "length",
            Quantity::Weight => "weight",
            Quantity::Volume => "volume",
            Quantity::Time => "time",
        }
    }
}

/// A unit and its size in the base unit of its quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDef {
    pub key: &'static str,
    pub symbol: &'static str,
    pub label: &'static str,
    pub quantity: Quantity,
    pub factor: f64,
}

const fn unit(
    key: &'static str,
    symbol: &'static str,
    label: &'static str,
    quantity: Quantity,
    factor: f64,
) -> UnitDef {
    UnitDef {
        key,
        symbol,
        label,
        quantity,
        factor,
    }
}

/// Units accepted by the unit converter (base: m, kg, L).
pub const MEASURE_UNITS: &[UnitDef] = &[
    unit("meters", "m", "Meters (m)", Quantity::Length, 1.0),
    unit("kilometers", "km", "Kilometers (km)", Quantity::Length, 1000.0),
    unit("centimeters", "cm", "Centimeters (cm)", Quantity::Length, 0.01),
    unit("millimeters", "mm", "Millimeters (mm)", Quantity::Length, 0.001),
    unit("miles", "mi", "Miles (mi)", Quantity::Length, 1609.34),
    unit("yards", "yd", "Yards (yd)", Quantity::Length, 0.9144),
    unit("feet", "ft", "Feet (ft)", Quantity::Length, 0.3048),
    unit("inches", "in", "Inches (in)", Quantity::Length, 0.0254),
    unit("kilograms", "kg", "Kilograms (kg)", Quantity::Weight, 1.0),
    unit("grams", "g", "Grams (g)", Quantity::Weight, 0.001),
    unit("milligrams", "mg", "Milligrams (mg)", Quantity::Weight, 0.000001),
    unit("pounds", "lb", "Pounds (lb)", Quantity::Weight, 0.453592),
    unit("ounces", "oz", "Ounces (oz)", Quantity::Weight, 0.0283495),
    unit("metric_tons", "t", "Metric Tons (t)", Quantity::Weight, 1000.0),
    unit("liters", "l", "Liters (L)", Quantity::Volume, 1.0),
    unit("milliliters", "ml", "Milliliters (mL)", Quantity::Volume, 0.001),
    unit("cubic_meters", "m3", "Cubic Meters (m³)", Quantity::Volume, 1000.0),
    unit("gallons_us", "gal", "US Gallons (gal)", Quantity::Volume, 3.78541),
    unit("quarts_us", "qt", "US Quarts (qt)", Quantity::Volume, 0.946353),
    unit("pints_us", "pt", "US Pints (pt)", Quantity::Volume, 0.473176),
    unit("fluid_ounces_us", "fl_oz", "US Fluid Ounces (fl oz)", Quantity::Volume, 0.0295735),
];

/// Units accepted by the time converter (base: seconds).
pub const TIME_UNITS: &[UnitDef] = &[
    unit("seconds", "s", "Seconds", Quantity::Time, 1.0),
    unit("minutes", "min", "Minutes", Quantity::Time, 60.0),
    unit("hours", "h", "Hours", Quantity::Time, 3600.0),
    unit("days", "d", "Days", Quantity::Time, 86400.0),
    unit("weeks", "wk", "Weeks", Quantity::Time, 604800.0),
    // 365.25 / 12 days
    unit("months", "mo", "Months", Quantity::Time, 2629800.0),
    // 365.25 days
    unit("years", "yr", "Years", Quantity::Time, 31557600.0),
];

/// Find a unit by key or symbol, case-insensitively.
pub fn find_unit(table: &'static [UnitDef], name: &str) -> Option<&'static UnitDef> {
    let name = name.trim().to_lowercase().replace([' ', '-'], "_");
    table.iter().find(|u| u.key == name || u.symbol == name)
}

/// Convert `value` between two units of the same quantity, rounded to 6
/// decimals.
pub fn convert_units(
    table: &'static [UnitDef],
    value: f64,
    from: &str,
    to: &str,
) -> Result<(f64, &'static UnitDef, &'static UnitDef), String> {
    if !value.is_finite() {
        return Err("Please enter a valid number".to_string());
    }
    let from_unit = find_unit(table, from).ok_or_else(|| format!("Unknown unit: {}", from))?;
    let to_unit = find_unit(table, to).ok_or_else(|| format!("Unknown unit: {}", to))?;
    if from_unit.quantity != to_unit.quantity {
        return Err(format!(
            "Cannot convert {} to {}",
            from_unit.quantity.as_str(),
            to_unit.quantity.as_str()
        ));
    }
    let converted = value * from_unit.factor / to_unit.factor;
    Ok((round_to(converted, 6), from_unit, to_unit))
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnitConversionConfig {
    pub value: f64,
    pub from: String,
    pub to: String,
}

impl ToolConfig for UnitConversionConfig {
    fn from_simple(_: String) -> Option<Self> {
        None
    }
}

fn run_conversion(table: &'static [UnitDef], input: String) -> ExecutionResult {
    UnitConversionConfig::parse(input)
        .and_then(|config| {
            convert_units(table, config.value, &config.from, &config.to)
                .map(|(result, from, to)| {
                    serde_json::json!({
                        "quantity": from.quantity.as_str(),
                        "from": from.key,
                        "to": to.key,
                        "value": config.value,
                        "result": result,
                        "summary": format!(
                            "{} {} = {} {}",
                            format_trimmed(config.value, 6),
                            from.label,
                            format_trimmed(result, 6),
                            to.label
                        ),
                    })
                })
                .map_err(invalid_input)
        })
        .into()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UnitConverterTool;

impl Tool for UnitConverterTool {
    fn name(&self) -> &str {
        "unit-converter"
    }

    fn input_schema(&self) -> Option<serde_json::Value> {
        let units: Vec<&str> = MEASURE_UNITS.iter().map(|u| u.key).collect();
        Some(serde_json::json!({
            "type": "object",
            "required": ["value", "from", "to"],
            "properties": {
                "value": { "type": "number" },
                "from": { "type": "string", "enum": units },
                "to": { "type": "string", "enum": units }
            }
        }))
    }

    fn call(&self, input: String) -> ExecutionResult {
        run_conversion(MEASURE_UNITS, input)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TimeConverterTool;

impl Tool for TimeConverterTool {
    fn name(&self) -> &str {
        "time-converter"
    }

    fn call(&self, input: String) -> ExecutionResult {
        run_conversion(TIME_UNITS, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1.0, "km", "m", 1000.0)]
    #[case(1.0, "miles", "kilometers", 1.60934)]
    #[case(12.0, "in", "ft", 1.0)]
    #[case(1.0, "lb", "g", 453.592)]
    #[case(2.0, "Metric Tons", "kg", 2000.0)]
    #[case(1.0, "gal", "l", 3.78541)]
    #[case(1.0, "m3", "ml", 1_000_000.0)]
    fn measure_conversions(
        #[case] value: f64,
        #[case] from: &str,
        #[case] to: &str,
        #[case] expected: f64,
    ) {
        let (result, _, _) = convert_units(MEASURE_UNITS, value, from, to).unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn mixed_quantities_are_rejected() {
        let err = convert_units(MEASURE_UNITS, 1.0, "kg", "m").unwrap_err();
        assert_eq!(err, "Cannot convert weight to length");
        assert!(convert_units(MEASURE_UNITS, 1.0, "parsec", "m").is_err());
    }

    #[test]
    fn time_conversions() {
        let (minutes, _, _) = convert_units(TIME_UNITS, 1.0, "hours", "minutes").unwrap();
        assert_eq!(minutes, 60.0);
        let (days, _, _) = convert_units(TIME_UNITS, 1.0, "yr", "d").unwrap();
        assert_eq!(days, 365.25);
        let (hours, _, _) = convert_units(TIME_UNITS, 1.0, "s", "h").unwrap();
        assert_eq!(hours, 0.000278);
    }

    #[test]
    fn tool_summary() {
        let out = UnitConverterTool
            .call(r#"{"value": 5, "from": "kilometers", "to": "meters"}"#.into())
            .output_json()
            .unwrap();
        assert_eq!(out["summary"], "5 Kilometers (km) = 5000 Meters (m)");
        assert!(TimeConverterTool.call("5".into()).is_failure());
    }
}
