//! Data path delays from timing reports, e.g.
//!
//! ```text
//! Data Path Delay:        3.005ns  (logic 1.059ns (35.241%)  route 1.946ns (64.759%))
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// Delay figures of one timing path, in nanoseconds, as written in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPathDelay {
    pub total_ns: String,
    pub logic_ns: String,
    pub route_ns: String,
}

fn data_path_delay_pattern() -> Result<Regex> {
    let num = r"\d+\.?\d*";
    let pattern = Regex::new(&format!(
        r"Data Path Delay:\s*(?P<total>{num})ns.*logic (?P<logic>{num})ns.*route (?P<route>{num})ns"
    ))?;
    Ok(pattern)
}

/// Every data path delay in the report, in document order.
pub fn parse_data_path_delays(report_text: &str) -> Result<Vec<DataPathDelay>> {
    let pattern = data_path_delay_pattern()?;

    let delays = pattern
        .captures_iter(report_text)
        .map(|captures| {
            let field = |name: &str| {
                captures
                    .name(name)
                    .map(|value| value.as_str().to_string())
                    .unwrap_or_default()
            };
            DataPathDelay {
                total_ns: field("total"),
                logic_ns: field("logic"),
                route_ns: field("route"),
            }
        })
        .collect();

    Ok(delays)
}

/// The first data path delay in the report.
pub fn parse_data_path_delay(report_text: &str) -> Result<DataPathDelay> {
    parse_data_path_delays(report_text)?
        .into_iter()
        .next()
        .ok_or(ReportError::DataPathDelayNotFound)
}
