//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{CriticalType, DecodeStats, InfoType, WarningType};

use super::DecodeSummary;

/// Prints a simple one-line summary of the run.
pub fn print_simple_summary(summary: &DecodeSummary) {
    info!(
        "✅ Decoded {} input{} ({} succeeded, {} aborted, {} field fallback{})",
        summary.inputs,
        if summary.inputs == 1 { "" } else { "s" },
        summary.decoded,
        summary.critical,
        summary.soft_errors,
        if summary.soft_errors == 1 { "" } else { "s" },
    );
}

/// Prints critical, warning, and info statistics to the log.
pub fn print_decode_statistics(stats: &DecodeStats) {
    let total_critical = stats.total_critical();
    let total_warnings = stats.total_warnings();
    let total_info = stats.total_info();

    if total_critical > 0 {
        info!("Critical Counts ({} total):", total_critical);
        for critical_type in CriticalType::iter() {
            let count = stats.get_critical_count(critical_type);
            if count > 0 {
                info!("   {}: {}", critical_type.as_str(), count);
            }
        }
    }

    if total_warnings > 0 {
        info!("Warning Counts ({} total):", total_warnings);
        for warning_type in WarningType::iter() {
            let count = stats.get_warning_count(warning_type);
            if count > 0 {
                info!("   {}: {}", warning_type.as_str(), count);
            }
        }
    }

    if total_info > 0 {
        info!("Info Counts ({} total):", total_info);
        for info_type in InfoType::iter() {
            let count = stats.get_info_count(info_type);
            if count > 0 {
                info!("   {}: {}", info_type.as_str(), count);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_decode_statistics_empty() {
        let stats = DecodeStats::new();
        // Should not panic when nothing was recorded
        print_decode_statistics(&stats);
    }

    #[test]
    fn test_print_decode_statistics_all_types() {
        let stats = DecodeStats::new();
        stats.increment_critical(CriticalType::MalformedDocument);
        stats.increment_warning(WarningType::AbsentField);
        stats.increment_info(InfoType::AdvertDecoded);
        print_decode_statistics(&stats);
    }

    #[test]
    fn test_print_simple_summary() {
        print_simple_summary(&DecodeSummary::default());
        print_simple_summary(&DecodeSummary {
            inputs: 1,
            decoded: 1,
            critical: 0,
            soft_errors: 1,
        });
    }
}
