//! CSV format handling for operation records and summary output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to operation records
//! - Summary output serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{Bitcoin, OperationRecord, OperationType, ReplayError, ReplaySummary, BITCOIN_SCALE};
use serde::Deserialize;
use std::io::Write;

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: type, amount.
/// The amount column is optional because balance reads carry none.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    #[serde(rename = "type")]
    pub op_type: String,
    pub amount: Option<String>,
}

/// Convert a CsvRecord to an OperationRecord
///
/// - Operation names are case-insensitive; `withdrawal` is an alias of `withdraw`
/// - Amounts are parsed as decimals (plain or scientific notation) with at
///   most `BITCOIN_SCALE` fractional digits, the precision of the summary
/// - Deposits and withdrawals must carry an amount
/// - Any amount given with a balance read is ignored
///
/// Amount sign is not checked here: zero and negative amounts reach the
/// wallet, which rejects them.
///
/// # Errors
///
/// `ReplayError::InvalidRecord` (without line information) describing the
/// problem.
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<OperationRecord, ReplayError> {
    let op = match csv_record.op_type.trim().to_lowercase().as_str() {
        "deposit" => OperationType::Deposit,
        "withdraw" | "withdrawal" => OperationType::Withdraw,
        "balance" => OperationType::Balance,
        _ => {
            return Err(ReplayError::invalid_record(format!(
                "unknown operation '{}'",
                csv_record.op_type
            )))
        }
    };

    if !op.requires_amount() {
        return Ok(OperationRecord::balance());
    }

    let amount = match csv_record.amount {
        Some(amount_str) if !amount_str.trim().is_empty() => {
            let amount = amount_str.trim().parse::<Bitcoin>().map_err(|_| {
                ReplayError::invalid_record(format!("invalid amount '{}'", amount_str))
            })?;
            if !amount.fits_scale() {
                return Err(ReplayError::invalid_record(format!(
                    "amount '{}' has more than {} decimal places",
                    amount_str.trim(),
                    BITCOIN_SCALE
                )));
            }
            amount
        }
        _ => {
            return Err(ReplayError::invalid_record(format!(
                "{} requires an amount",
                csv_record.op_type.trim().to_lowercase()
            )))
        }
    };

    Ok(OperationRecord {
        op,
        amount: Some(amount),
    })
}

/// Write a replay summary in CSV format
///
/// Columns: balance, deposits, withdrawals, reads, rejected. The balance is
/// rendered with eight fractional digits.
///
/// # Errors
///
/// `ReplayError::Output` if writing or flushing fails.
pub fn write_summary_csv(summary: &ReplaySummary, output: &mut dyn Write) -> Result<(), ReplayError> {
    use csv::Writer;

    let output_error = |e: csv::Error| ReplayError::Output {
        message: e.to_string(),
    };

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["balance", "deposits", "withdrawals", "reads", "rejected"])
        .map_err(output_error)?;

    writer
        .write_record(&[
            format!("{:.prec$}", summary.balance, prec = BITCOIN_SCALE),
            summary.deposits.to_string(),
            summary.withdrawals.to_string(),
            summary.reads.to_string(),
            summary.rejected.to_string(),
        ])
        .map_err(output_error)?;

    writer.flush().map_err(|e| ReplayError::Output {
        message: e.to_string(),
    })?;

    Ok(())
}
