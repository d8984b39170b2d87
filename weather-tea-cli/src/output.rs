//! Human-friendly rendering of a weather record.

use std::fmt;

use weather_tea_core::WeatherRecord;

/// Console summary of one record; `full` adds humidity, wind speed and pressure.
pub struct Summary<'a> {
    pub record: &'a WeatherRecord,
    pub full: bool,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record;
        let units = &record.units;

        writeln!(f, "\nWeather in {}:", record.city)?;
        writeln!(f, "  Temperature: {}{units}", record.temp)?;
        writeln!(f, "  Feels like: {}{units}", record.feels_like)?;
        writeln!(f, "  Conditions: {}", record.description)?;

        if self.full {
            writeln!(f, "\nAdditional details:")?;
            writeln!(f, "  Humidity: {}%", record.humidity)?;
            writeln!(f, "  Wind Speed: {} m/s", record.wind_speed)?;
            writeln!(f, "  Pressure: {} hPa", record.pressure)?;
        }

        writeln!(f)
    }
}

pub fn render(record: &WeatherRecord, full: bool) -> String {
    Summary { record, full }.to_string()
}
