//! Tabular and structured exports of a [`Figure`].

use oscillator::{InitialConditions, Mode, PhysicalParameters};
use serde::Serialize;

use crate::Error;
use crate::figure::Figure;

/// Writes the figure as CSV: a `t` column followed by one column per panel,
/// named after its mode.
///
/// # Errors
///
/// Returns [`Error::Csv`] or [`Error::Io`] if the writer fails.
pub fn csv(figure: &Figure) -> Result<String, Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["t"];
    header.extend(figure.panels().iter().map(|panel| panel.mode().as_str()));
    writer.write_record(&header)?;

    for (index, t) in figure.times().iter().enumerate() {
        let mut record = Vec::with_capacity(figure.panels().len() + 1);
        record.push(t.to_string());
        record.extend(
            figure
                .panels()
                .iter()
                .map(|panel| panel.positions()[index].to_string()),
        );
        writer.write_record(&record)?;
    }

    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[derive(Serialize)]
struct JsonFigure<'a> {
    parameters: &'a PhysicalParameters,
    initial: &'a InitialConditions,
    time: &'a [f64],
    series: Vec<JsonSeries<'a>>,
}

#[derive(Serialize)]
struct JsonSeries<'a> {
    mode: Mode,
    title: &'static str,
    positions: &'a [f64],
}

/// Writes the figure as pretty-printed JSON with its parameters, the time
/// axis and every series.
///
/// # Errors
///
/// Returns [`Error::Json`] if serialization fails.
pub fn json(figure: &Figure) -> Result<String, Error> {
    let document = JsonFigure {
        parameters: figure.parameters(),
        initial: figure.initial(),
        time: figure.times(),
        series: figure
            .panels()
            .iter()
            .map(|panel| JsonSeries {
                mode: panel.mode(),
                title: panel.title(),
                positions: panel.positions(),
            })
            .collect(),
    };
    let mut text = serde_json::to_string_pretty(&document)?;
    text.push('\n');
    Ok(text)
}
