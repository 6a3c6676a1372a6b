// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb_core::{
	interface::{ScalarFunction, ScalarFunctionContext},
	value::{column::ColumnData, container::Utf8Container},
};
use reifydb_type::value::constraint::bytes::MaxBytes;

const IEC_UNITS: [&str; 6] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB"];
const SI_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

fn format_bytes_internal(bytes: i64, base: f64, units: &[&str]) -> String {
	if bytes == 0 {
		return "0 B".to_string();
	}

	let bytes_abs = bytes.unsigned_abs() as f64;
	let sign = if bytes < 0 {
		"-"
	} else {
		""
	};

	let mut unit_index = 0;
	let mut value = bytes_abs;

	while value >= base && unit_index < units.len() - 1 {
		value /= base;
		unit_index += 1;
	}

	if unit_index == 0 {
		format!("{}{} {}", sign, bytes_abs as i64, units[0])
	} else if value == value.floor() {
		format!("{}{} {}", sign, value as i64, units[unit_index])
	} else {
		let formatted = format!("{:.2}", value);
		let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
		format!("{}{} {}", sign, trimmed, units[unit_index])
	}
}

macro_rules! process_int_column {
	($container:expr, $row_count:expr, $base:expr, $units:expr) => {{
		let mut result_data = Vec::with_capacity($row_count);
		let mut result_bitvec = Vec::with_capacity($row_count);

		for i in 0..$row_count {
			if let Some(&value) = $container.get(i) {
				result_data.push(format_bytes_internal(value as i64, $base, $units));
				result_bitvec.push(true);
			} else {
				result_data.push(String::new());
				result_bitvec.push(false);
			}
		}

		Ok(ColumnData::Utf8 {
			container: Utf8Container::new(result_data, result_bitvec.into()),
			max_bytes: MaxBytes::MAX,
		})
	}};
}

macro_rules! process_float_column {
	($container:expr, $row_count:expr, $base:expr, $units:expr) => {{
		let mut result_data = Vec::with_capacity($row_count);
		let mut result_bitvec = Vec::with_capacity($row_count);

		for i in 0..$row_count {
			if let Some(&value) = $container.get(i) {
				result_data.push(format_bytes_internal(value as i64, $base, $units));
				result_bitvec.push(true);
			} else {
				result_data.push(String::new());
				result_bitvec.push(false);
			}
		}

		Ok(ColumnData::Utf8 {
			container: Utf8Container::new(result_data, result_bitvec.into()),
			max_bytes: MaxBytes::MAX,
		})
	}};
}

macro_rules! process_decimal_column {
	($container:expr, $row_count:expr, $base:expr, $units:expr) => {{
		let mut result_data = Vec::with_capacity($row_count);
		let mut result_bitvec = Vec::with_capacity($row_count);

		for i in 0..$row_count {
			if let Some(value) = $container.get(i) {
				// Truncate decimal to integer by parsing the integer part
				let s = value.to_string();
				let int_part = s.split('.').next().unwrap_or("0");
				let bytes = int_part.parse::<i64>().unwrap_or(0);
				result_data.push(format_bytes_internal(bytes, $base, $units));
				result_bitvec.push(true);
			} else {
				result_data.push(String::new());
				result_bitvec.push(false);
			}
		}

		Ok(ColumnData::Utf8 {
			container: Utf8Container::new(result_data, result_bitvec.into()),
			max_bytes: MaxBytes::MAX,
		})
	}};
}

/// Formats bytes using binary units (1024-based: B, KiB, MiB, GiB, TiB, PiB)
pub struct FormatBytes;

impl FormatBytes {
	pub fn new() -> Self {
		Self
	}
}

impl ScalarFunction for FormatBytes {
	fn scalar(&self, ctx: ScalarFunctionContext) -> crate::Result<ColumnData> {
		let columns = ctx.columns;
		let row_count = ctx.row_count;

		if columns.is_empty() {
			return Ok(ColumnData::utf8(Vec::<String>::new()));
		}

		let column = columns.get(0).unwrap();

		match &column.data() {
			ColumnData::Int1(container) => process_int_column!(container, row_count, 1024.0, &IEC_UNITS),
			ColumnData::Int2(container) => process_int_column!(container, row_count, 1024.0, &IEC_UNITS),
			ColumnData::Int4(container) => process_int_column!(container, row_count, 1024.0, &IEC_UNITS),
			ColumnData::Int8(container) => process_int_column!(container, row_count, 1024.0, &IEC_UNITS),
			ColumnData::Uint1(container) => process_int_column!(container, row_count, 1024.0, &IEC_UNITS),
			ColumnData::Uint2(container) => process_int_column!(container, row_count, 1024.0, &IEC_UNITS),
			ColumnData::Uint4(container) => process_int_column!(container, row_count, 1024.0, &IEC_UNITS),
			ColumnData::Uint8(container) => process_int_column!(container, row_count, 1024.0, &IEC_UNITS),
			ColumnData::Float4(container) => {
				process_float_column!(container, row_count, 1024.0, &IEC_UNITS)
			}
			ColumnData::Float8(container) => {
				process_float_column!(container, row_count, 1024.0, &IEC_UNITS)
			}
			ColumnData::Decimal {
				container,
				..
			} => {
				process_decimal_column!(container, row_count, 1024.0, &IEC_UNITS)
			}
			_ => unimplemented!("FormatBytes only supports numeric input"),
		}
	}
}

/// Formats bytes using SI/decimal units (1000-based: B, KB, MB, GB, TB, PB)
pub struct FormatBytesSi;

impl FormatBytesSi {
	pub fn new() -> Self {
		Self
	}
}

impl ScalarFunction for FormatBytesSi {
	fn scalar(&self, ctx: ScalarFunctionContext) -> crate::Result<ColumnData> {
		let columns = ctx.columns;
		let row_count = ctx.row_count;

		if columns.is_empty() {
			return Ok(ColumnData::utf8(Vec::<String>::new()));
		}

		let column = columns.get(0).unwrap();

		match &column.data() {
			ColumnData::Int1(container) => process_int_column!(container, row_count, 1000.0, &SI_UNITS),
			ColumnData::Int2(container) => process_int_column!(container, row_count, 1000.0, &SI_UNITS),
			ColumnData::Int4(container) => process_int_column!(container, row_count, 1000.0, &SI_UNITS),
			ColumnData::Int8(container) => process_int_column!(container, row_count, 1000.0, &SI_UNITS),
			ColumnData::Uint1(container) => process_int_column!(container, row_count, 1000.0, &SI_UNITS),
			ColumnData::Uint2(container) => process_int_column!(container, row_count, 1000.0, &SI_UNITS),
			ColumnData::Uint4(container) => process_int_column!(container, row_count, 1000.0, &SI_UNITS),
			ColumnData::Uint8(container) => process_int_column!(container, row_count, 1000.0, &SI_UNITS),
			ColumnData::Float4(container) => process_float_column!(container, row_count, 1000.0, &SI_UNITS),
			ColumnData::Float8(container) => process_float_column!(container, row_count, 1000.0, &SI_UNITS),
			ColumnData::Decimal {
				container,
				..
			} => {
				process_decimal_column!(container, row_count, 1000.0, &SI_UNITS)
			}
			_ => unimplemented!("FormatBytesSi only supports numeric input"),
		}
	}
}
