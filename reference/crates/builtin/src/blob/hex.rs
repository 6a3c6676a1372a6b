// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb_core::{
	interface::{ScalarFunction, ScalarFunctionContext},
	value::column::ColumnData,
};
use reifydb_type::{Fragment, value::Blob};

pub struct BlobHex;

impl BlobHex {
	pub fn new() -> Self {
		Self
	}
}

impl ScalarFunction for BlobHex {
	fn scalar(&self, ctx: ScalarFunctionContext) -> crate::Result<ColumnData> {
		let columns = ctx.columns;
		let row_count = ctx.row_count;
		let column = columns.get(0).unwrap();

		match &column.data() {
			ColumnData::Utf8 {
				container,
				..
			} => {
				let mut result_data = Vec::with_capacity(container.data().len());

				for i in 0..row_count {
					if container.is_defined(i) {
						let hex_str = &container[i];
						let blob = Blob::from_hex(Fragment::internal(hex_str))?;
						result_data.push(blob);
					} else {
						result_data.push(Blob::empty())
					}
				}

				Ok(ColumnData::blob_with_bitvec(result_data, container.bitvec().clone()))
			}
			_ => unimplemented!("BlobHex only supports text input"),
		}
	}
}
