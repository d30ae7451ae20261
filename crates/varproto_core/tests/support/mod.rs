//! Hand-written `Structured` types shaped like generated struct code.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use varproto::proto::{
	FieldIdentifier, InputProtocol, ListIdentifier, MapIdentifier, OutputProtocol, Result, SetIdentifier, StructIdentifier, Structured, TType,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Point {
	pub x: i32,
	pub y: i32,
}

impl Structured for Point {
	fn write<O: OutputProtocol + ?Sized>(&self, out: &mut O) -> Result<()> {
		out.write_struct_begin(&StructIdentifier::new("Point"))?;
		out.write_field_begin(&FieldIdentifier::new("x", TType::I32, 1))?;
		out.write_i32(self.x)?;
		out.write_field_end()?;
		out.write_field_begin(&FieldIdentifier::new("y", TType::I32, 2))?;
		out.write_i32(self.y)?;
		out.write_field_end()?;
		out.write_field_stop()?;
		out.write_struct_end()
	}

	fn read<I: InputProtocol + ?Sized>(input: &mut I) -> Result<Self> {
		let mut out = Self::default();
		input.read_struct_begin()?;
		loop {
			let field = input.read_field_begin()?;
			if field.is_stop() {
				break;
			}
			match field.name.as_deref() {
				Some("x") => out.x = input.read_i32()?,
				Some("y") => out.y = input.read_i32()?,
				_ => input.skip(field.field_type)?,
			}
			input.read_field_end()?;
		}
		input.read_struct_end()?;
		Ok(out)
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample {
	pub flag: bool,
	pub tiny: i8,
	pub small: i16,
	pub id: i32,
	pub big: i64,
	pub ratio: f64,
	pub name: String,
	pub blob: Vec<u8>,
	pub origin: Point,
	pub tags: Vec<String>,
	pub ids: BTreeSet<i32>,
	pub scores: BTreeMap<String, f64>,
	pub path: Vec<Point>,
	pub regions: BTreeMap<String, Point>,
	pub groups: BTreeMap<String, Vec<i32>>,
}

impl Structured for Sample {
	fn write<O: OutputProtocol + ?Sized>(&self, out: &mut O) -> Result<()> {
		out.write_struct_begin(&StructIdentifier::new("Sample"))?;

		out.write_field_begin(&FieldIdentifier::new("flag", TType::Bool, 1))?;
		out.write_bool(self.flag)?;
		out.write_field_end()?;

		out.write_field_begin(&FieldIdentifier::new("tiny", TType::I08, 2))?;
		out.write_i8(self.tiny)?;
		out.write_field_end()?;

		out.write_field_begin(&FieldIdentifier::new("small", TType::I16, 3))?;
		out.write_i16(self.small)?;
		out.write_field_end()?;

		out.write_field_begin(&FieldIdentifier::new("id", TType::I32, 4))?;
		out.write_i32(self.id)?;
		out.write_field_end()?;

		out.write_field_begin(&FieldIdentifier::new("big", TType::I64, 5))?;
		out.write_i64(self.big)?;
		out.write_field_end()?;

		out.write_field_begin(&FieldIdentifier::new("ratio", TType::Double, 6))?;
		out.write_double(self.ratio)?;
		out.write_field_end()?;

		out.write_field_begin(&FieldIdentifier::new("name", TType::String, 7))?;
		out.write_string(&self.name)?;
		out.write_field_end()?;

		out.write_field_begin(&FieldIdentifier::new("blob", TType::String, 8))?;
		out.write_binary(&self.blob)?;
		out.write_field_end()?;

		out.write_field_begin(&FieldIdentifier::new("origin", TType::Struct, 9))?;
		self.origin.write(out)?;
		out.write_field_end()?;

		out.write_field_begin(&FieldIdentifier::new("tags", TType::List, 10))?;
		out.write_list_begin(&ListIdentifier::new(TType::String, self.tags.len() as u32))?;
		for tag in &self.tags {
			out.write_string(tag)?;
		}
		out.write_list_end()?;
		out.write_field_end()?;

		out.write_field_begin(&FieldIdentifier::new("ids", TType::Set, 11))?;
		out.write_set_begin(&SetIdentifier::new(TType::I32, self.ids.len() as u32))?;
		for id in &self.ids {
			out.write_i32(*id)?;
		}
		out.write_set_end()?;
		out.write_field_end()?;

		out.write_field_begin(&FieldIdentifier::new("scores", TType::Map, 12))?;
		out.write_map_begin(&MapIdentifier::new(TType::String, TType::Double, self.scores.len() as u32))?;
		for (key, value) in &self.scores {
			out.write_string(key)?;
			out.write_double(*value)?;
		}
		out.write_map_end()?;
		out.write_field_end()?;

		out.write_field_begin(&FieldIdentifier::new("path", TType::List, 13))?;
		out.write_list_begin(&ListIdentifier::new(TType::Struct, self.path.len() as u32))?;
		for point in &self.path {
			point.write(out)?;
		}
		out.write_list_end()?;
		out.write_field_end()?;

		out.write_field_begin(&FieldIdentifier::new("regions", TType::Map, 14))?;
		out.write_map_begin(&MapIdentifier::new(TType::String, TType::Struct, self.regions.len() as u32))?;
		for (key, point) in &self.regions {
			out.write_string(key)?;
			point.write(out)?;
		}
		out.write_map_end()?;
		out.write_field_end()?;

		out.write_field_begin(&FieldIdentifier::new("groups", TType::Map, 15))?;
		out.write_map_begin(&MapIdentifier::new(TType::String, TType::List, self.groups.len() as u32))?;
		for (key, members) in &self.groups {
			out.write_string(key)?;
			out.write_list_begin(&ListIdentifier::new(TType::I32, members.len() as u32))?;
			for member in members {
				out.write_i32(*member)?;
			}
			out.write_list_end()?;
		}
		out.write_map_end()?;
		out.write_field_end()?;

		out.write_field_stop()?;
		out.write_struct_end()
	}

	fn read<I: InputProtocol + ?Sized>(input: &mut I) -> Result<Self> {
		let mut out = Self::default();
		input.read_struct_begin()?;
		loop {
			let field = input.read_field_begin()?;
			if field.is_stop() {
				break;
			}
			match field.name.as_deref() {
				Some("flag") => out.flag = input.read_bool()?,
				Some("tiny") => out.tiny = input.read_i8()?,
				Some("small") => out.small = input.read_i16()?,
				Some("id") => out.id = input.read_i32()?,
				Some("big") => out.big = input.read_i64()?,
				Some("ratio") => out.ratio = input.read_double()?,
				Some("name") => out.name = input.read_string()?,
				Some("blob") => out.blob = input.read_binary()?,
				Some("origin") => out.origin = Point::read(input)?,
				Some("tags") => {
					let list = input.read_list_begin()?;
					out.tags = (0..list.size).map(|_| input.read_string()).collect::<Result<_>>()?;
					input.read_list_end()?;
				}
				Some("ids") => {
					let set = input.read_set_begin()?;
					out.ids = (0..set.size).map(|_| input.read_i32()).collect::<Result<_>>()?;
					input.read_set_end()?;
				}
				Some("scores") => {
					let map = input.read_map_begin()?;
					for _ in 0..map.size {
						let key = input.read_string()?;
						let value = input.read_double()?;
						out.scores.insert(key, value);
					}
					input.read_map_end()?;
				}
				Some("path") => {
					let list = input.read_list_begin()?;
					out.path = (0..list.size).map(|_| Point::read(&mut *input)).collect::<Result<_>>()?;
					input.read_list_end()?;
				}
				Some("regions") => {
					let map = input.read_map_begin()?;
					for _ in 0..map.size {
						let key = input.read_string()?;
						let point = Point::read(input)?;
						out.regions.insert(key, point);
					}
					input.read_map_end()?;
				}
				Some("groups") => {
					let map = input.read_map_begin()?;
					for _ in 0..map.size {
						let key = input.read_string()?;
						let list = input.read_list_begin()?;
						let members: Vec<i32> = (0..list.size).map(|_| input.read_i32()).collect::<Result<_>>()?;
						input.read_list_end()?;
						out.groups.insert(key, members);
					}
					input.read_map_end()?;
				}
				_ => input.skip(field.field_type)?,
			}
			input.read_field_end()?;
		}
		input.read_struct_end()?;
		Ok(out)
	}
}

pub fn sample() -> Sample {
	Sample {
		flag: true,
		tiny: -7,
		small: 1200,
		id: 42,
		big: 9_007_199_254_740_992,
		ratio: 0.125,
		name: "sample".to_owned(),
		blob: vec![0xde, 0xad, 0xbe, 0xef],
		origin: Point { x: 1, y: -1 },
		tags: vec!["alpha".to_owned(), "beta".to_owned()],
		ids: [3, 5, 8].into_iter().collect(),
		scores: [("art".to_owned(), 78.0), ("math".to_owned(), 91.5)].into_iter().collect(),
		path: vec![Point { x: 0, y: 0 }, Point { x: 2, y: 3 }],
		regions: [("east".to_owned(), Point { x: 5, y: 0 }), ("north".to_owned(), Point { x: 0, y: 7 })]
			.into_iter()
			.collect(),
		groups: [("empty".to_owned(), vec![]), ("primes".to_owned(), vec![2, 3, 5])].into_iter().collect(),
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HelloRequest {
	pub name: Option<String>,
}

impl Structured for HelloRequest {
	fn write<O: OutputProtocol + ?Sized>(&self, out: &mut O) -> Result<()> {
		out.write_struct_begin(&StructIdentifier::new("HelloRequest"))?;
		if let Some(name) = &self.name {
			out.write_field_begin(&FieldIdentifier::new("name", TType::String, 1))?;
			out.write_string(name)?;
			out.write_field_end()?;
		}
		out.write_field_stop()?;
		out.write_struct_end()
	}

	fn read<I: InputProtocol + ?Sized>(input: &mut I) -> Result<Self> {
		let mut out = Self::default();
		input.read_struct_begin()?;
		loop {
			let field = input.read_field_begin()?;
			if field.is_stop() {
				break;
			}
			match field.name.as_deref() {
				Some("name") => out.name = Some(input.read_string()?),
				_ => input.skip(field.field_type)?,
			}
			input.read_field_end()?;
		}
		input.read_struct_end()?;
		Ok(out)
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HelloResponse {
	pub result: String,
}

impl Structured for HelloResponse {
	fn write<O: OutputProtocol + ?Sized>(&self, out: &mut O) -> Result<()> {
		out.write_struct_begin(&StructIdentifier::new("HelloResponse"))?;
		out.write_field_begin(&FieldIdentifier::new("result", TType::String, 1))?;
		out.write_string(&self.result)?;
		out.write_field_end()?;
		out.write_field_stop()?;
		out.write_struct_end()
	}

	fn read<I: InputProtocol + ?Sized>(input: &mut I) -> Result<Self> {
		let mut out = Self::default();
		input.read_struct_begin()?;
		loop {
			let field = input.read_field_begin()?;
			if field.is_stop() {
				break;
			}
			match field.name.as_deref() {
				Some("result") => out.result = input.read_string()?,
				_ => input.skip(field.field_type)?,
			}
			input.read_field_end()?;
		}
		input.read_struct_end()?;
		Ok(out)
	}
}
